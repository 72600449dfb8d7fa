//! The in-progress order and its saved copies on disk

pub mod store;

use crate::catalog::{self, Component, Size};
use crate::error::{Error, Result};
use crate::json;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use store::{display_name, list_saved_orders, resolve_prefix, OrderStore};

/// One pizza in the cart with its toppings and size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderItem {
    pub pizza: Component,
    #[serde(default)]
    pub toppings: Vec<Component>,
    pub size: Size,
}

impl OrderItem {
    pub fn new(pizza: Component, toppings: Vec<Component>, size: Size) -> Self {
        Self {
            pizza,
            toppings,
            size,
        }
    }

    pub fn price(&self) -> f64 {
        catalog::price(&self.pizza, &self.toppings, &self.size)
    }
}

/// A cart of order items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(default)]
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. Components are not checked against the catalog.
    pub fn add_item(&mut self, pizza: Component, toppings: Vec<Component>, size: Size) {
        self.items.push(OrderItem::new(pizza, toppings, size));
    }

    /// Remove the item at a 0-based index
    pub fn remove_item(&mut self, index: usize) -> Result<OrderItem> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(OrderItem::price).sum()
    }

    /// Write the order to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        json::write_json(path, self, "order")
    }

    /// Read an order from `path`; `None` when the file does not exist
    pub fn load(path: &Path) -> Result<Option<Order>> {
        let Some(content) = json::read_if_exists(path)? else {
            return Ok(None);
        };

        let order = serde_json::from_str(&content).map_err(|source| Error::OrderParse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(order))
    }
}
