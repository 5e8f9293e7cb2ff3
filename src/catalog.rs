// src/catalog.rs

use crate::domain::Shoe;
use crate::errors::ServerError;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Most recent release first.
    Newest,
    /// Cheapest base price first.
    Price,
}

impl SortBy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "newest" => Some(SortBy::Newest),
            "price" => Some(SortBy::Price),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::Price => "price",
        }
    }
}

/// Read-only list of shoes, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    shoes: Vec<Shoe>,
}

impl Catalog {
    pub fn from_shoes(shoes: Vec<Shoe>) -> Self {
        Self { shoes }
    }

    /// Load the catalog from a JSON array of shoes.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            ServerError::Catalog(format!("Failed to read {}: {e}", path.display()))
        })?;

        let shoes: Vec<Shoe> = serde_json::from_str(&raw).map_err(|e| {
            ServerError::Catalog(format!("Failed to parse {}: {e}", path.display()))
        })?;

        println!("✅ Loaded {} shoes from {}", shoes.len(), path.display());
        Ok(Self::from_shoes(shoes))
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn find(&self, slug: &str) -> Option<&Shoe> {
        self.shoes.iter().find(|s| s.slug == slug)
    }

    /// Stable sort, so ties keep catalog order.
    pub fn sorted(&self, sort: SortBy) -> Vec<&Shoe> {
        let mut shoes: Vec<&Shoe> = self.shoes.iter().collect();
        match sort {
            SortBy::Newest => shoes.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
            SortBy::Price => shoes.sort_by_key(|s| s.price),
        }
        shoes
    }
}
