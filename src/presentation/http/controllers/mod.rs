// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod auth;
pub mod pages;
pub mod taxonomy;
