//! Catalog Service - 菜单参考数据 (分类、菜品)
//!
//! The catalog is read-mostly reference data with its own lock, so menu reads
//! never wait on table, cart or order mutations. Listings keep seed order;
//! an upserted dish keeps its slot, a new one goes last.

mod seed;

pub use seed::{SeedData, SeedError, SeedTable};

use indexmap::IndexMap;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::models::{Category, Dish};
use shared::types::{CategoryId, DishId};
use std::sync::Arc;

/// Dish name and unit price captured at a point in time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishSnapshot {
    pub name: String,
    pub price: Decimal,
}

/// Menu catalog with in-memory maps
#[derive(Clone, Default)]
pub struct Catalog {
    /// Categories: id -> Category
    categories: Arc<RwLock<IndexMap<CategoryId, Category>>>,
    /// Dishes: id -> Dish
    dishes: Arc<RwLock<IndexMap<DishId, Dish>>>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("categories", &self.categories.read().len())
            .field("dishes", &self.dishes.read().len())
            .finish()
    }
}

impl Catalog {
    pub fn new(categories: Vec<Category>, dishes: Vec<Dish>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(
                categories.into_iter().map(|c| (c.id, c)).collect(),
            )),
            dishes: Arc::new(RwLock::new(dishes.into_iter().map(|d| (d.id, d)).collect())),
        }
    }

    pub fn from_seed(seed: &SeedData) -> Self {
        Self::new(seed.categories.clone(), seed.dishes.clone())
    }

    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.read().values().cloned().collect()
    }

    /// List dishes, optionally only those of one category
    pub fn list_dishes(&self, category_id: Option<CategoryId>) -> Vec<Dish> {
        let dishes = self.dishes.read();
        match category_id {
            Some(category_id) => dishes
                .values()
                .filter(|d| d.category_id == category_id)
                .cloned()
                .collect(),
            None => dishes.values().cloned().collect(),
        }
    }

    pub fn get_dish(&self, id: DishId) -> Option<Dish> {
        self.dishes.read().get(&id).cloned()
    }

    /// Current name and price of a dish, for carts and order snapshots
    pub fn dish_snapshot(&self, id: DishId) -> Option<DishSnapshot> {
        self.dishes.read().get(&id).map(|d| DishSnapshot {
            name: d.name.clone(),
            price: d.price,
        })
    }

    /// Insert or replace a dish, returning the previous version.
    ///
    /// Maintenance hook for reference-data refreshes; there is no HTTP route for it.
    pub fn upsert_dish(&self, dish: Dish) -> Option<Dish> {
        tracing::info!(dish_id = dish.id, name = %dish.name, price = %dish.price, "Dish upserted");
        self.dishes.write().insert(dish.id, dish)
    }

    pub fn category_count(&self) -> usize {
        self.categories.read().len()
    }

    pub fn dish_count(&self) -> usize {
        self.dishes.read().len()
    }
}
