// src/application/queries/taxonomy/mod.rs
mod service;

pub use service::TaxonomyQueryService;
