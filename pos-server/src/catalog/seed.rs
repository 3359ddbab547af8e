//! Seed data: menu and tables loaded at startup

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Category, DiningTable, Dish};
use shared::types::TableId;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Seed loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: i64 },

    #[error("dish {dish_id} references unknown category {category_id}")]
    UnknownCategory { dish_id: i64, category_id: i64 },

    #[error("dish {dish_id} has negative price {price}")]
    NegativePrice { dish_id: i64, price: Decimal },
}

/// Table entry of a seed document; seeded tables always start free
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTable {
    pub id: TableId,
    pub name: String,
}

/// Seed document `{categories, dishes, tables}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub tables: Vec<SeedTable>,
}

impl Default for SeedData {
    /// Built-in menu: three categories, four dishes, three tables
    fn default() -> Self {
        let category = |id: i64, name: &str| Category {
            id,
            name: name.to_string(),
        };
        let dish = |id: i64, category_id: i64, name: &str, price: i64, image: &str, recommended| Dish {
            id,
            category_id,
            name: name.to_string(),
            price: Decimal::from(price),
            image: image.to_string(),
            is_recommended: recommended,
            is_available: true,
        };
        let table = |id: i64, name: &str| SeedTable {
            id,
            name: name.to_string(),
        };

        Self {
            categories: vec![category(1, "热菜"), category(2, "凉菜"), category(3, "饮料")],
            dishes: vec![
                dish(1, 1, "宫保鸡丁", 38, "/images/gongbao.jpg", true),
                dish(2, 1, "鱼香肉丝", 32, "/images/yuxiang.jpg", false),
                dish(3, 2, "拍黄瓜", 16, "/images/paihuanggua.jpg", false),
                dish(4, 3, "可乐", 8, "/images/cola.jpg", false),
            ],
            tables: vec![table(1, "A1"), table(2, "A2"), table(3, "B1")],
        }
    }
}

impl SeedData {
    /// Load and validate a seed document from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: Self = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        seed.validate()?;
        tracing::info!(
            path = %path.display(),
            categories = seed.categories.len(),
            dishes = seed.dishes.len(),
            tables = seed.tables.len(),
            "Seed file loaded"
        );
        Ok(seed)
    }

    /// Reject duplicate ids, dangling category references and negative prices
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut category_ids = HashSet::new();
        for c in &self.categories {
            if !category_ids.insert(c.id) {
                return Err(SeedError::DuplicateId {
                    kind: "category",
                    id: c.id,
                });
            }
        }

        let mut dish_ids = HashSet::new();
        for d in &self.dishes {
            if !dish_ids.insert(d.id) {
                return Err(SeedError::DuplicateId { kind: "dish", id: d.id });
            }
            if !category_ids.contains(&d.category_id) {
                return Err(SeedError::UnknownCategory {
                    dish_id: d.id,
                    category_id: d.category_id,
                });
            }
            if d.price.is_sign_negative() {
                return Err(SeedError::NegativePrice {
                    dish_id: d.id,
                    price: d.price,
                });
            }
        }

        let mut table_ids = HashSet::new();
        for t in &self.tables {
            if !table_ids.insert(t.id) {
                return Err(SeedError::DuplicateId { kind: "table", id: t.id });
            }
        }

        Ok(())
    }

    /// Seeded tables, all free with nobody seated
    pub fn dining_tables(&self) -> Vec<DiningTable> {
        self.tables
            .iter()
            .map(|t| DiningTable::free(t.id, t.name.clone()))
            .collect()
    }
}
