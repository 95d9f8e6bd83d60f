// src/application/commands/taxonomy/mod.rs
mod service;

pub use service::{CreateCategoryCommand, CreateTagCommand, TaxonomyCommandService};
