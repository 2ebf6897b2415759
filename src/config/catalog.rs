// src/config/catalog.rs
//! Product catalog: the fixed set of products feedback can be left for.
//!
//! Lookup order:
//! 1) $FEEDBACK_CATALOG_PATH (must exist)
//! 2) config/catalog.toml
//! 3) built-in seed

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CATALOG_PATH: &str = "FEEDBACK_CATALOG_PATH";
pub const DEFAULT_CATALOG_PATH: &str = "config/catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Load from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading catalog from {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Load using env var + fallbacks (see module docs).
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CATALOG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CATALOG_PATH} points to non-existent path"));
            }
            return Self::load_from(&pb);
        }
        let default = PathBuf::from(DEFAULT_CATALOG_PATH);
        if default.exists() {
            return Self::load_from(&default);
        }
        Ok(Self::default_seed())
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cat: Catalog = toml::from_str(s)?;
        cat.validate()?;
        cat.products.sort_by_key(|p| p.id);
        Ok(cat)
    }

    fn validate(&mut self) -> Result<()> {
        if self.products.is_empty() {
            bail!("catalog has no products");
        }
        let mut ids = BTreeSet::new();
        for p in &mut self.products {
            let name = p.name.trim();
            if name.is_empty() {
                bail!("product {} has an empty name", p.id);
            }
            p.name = name.to_string();
            if !ids.insert(p.id) {
                bail!("duplicate product id {}", p.id);
            }
        }
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Built-in catalog used when no config file is present.
    pub fn default_seed() -> Self {
        let products = [
            (101, "Sterling Silver Solitaire Ring"),
            (102, "Rose Gold Heart Necklace"),
            (103, "Classic Pearl Stud Earrings"),
            (104, "Zirconia Tennis Bracelet"),
            (105, "Evil Eye Gold Anklet"),
        ]
        .into_iter()
        .map(|(id, name)| Product {
            id,
            name: name.to_string(),
        })
        .collect();
        Self { products }
    }
}
