// src/config/mod.rs
pub mod catalog;

pub use catalog::{Catalog, Product};
