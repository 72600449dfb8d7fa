//! Catalog model, pricing and defaults
//!
//! This module provides:
//! - Entry types (`Component` for pizzas and toppings, `Size` for multipliers)
//! - Price computation for an order item
//! - The `Catalog` document persisted by the config store

pub mod component;
pub mod pricing;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub use component::{find_by_name, CatalogEntry, Component, Size};
pub use pricing::{base_price, price};

/// Default directory for saved orders, relative to the working directory
pub const DEFAULT_ORDERS_PATH: &str = "Orders";

/// One of the three editable catalog lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogList {
    Pizzas,
    Toppings,
    Sizes,
}

impl CatalogList {
    /// Singular noun used in prompts and errors
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogList::Pizzas => "pizza",
            CatalogList::Toppings => "topping",
            CatalogList::Sizes => "size",
        }
    }

    /// What the numeric value of an entry means
    pub fn value_label(&self) -> &'static str {
        match self {
            CatalogList::Pizzas | CatalogList::Toppings => "price",
            CatalogList::Sizes => "multiplier",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogList::Pizzas => "Pizzas",
            CatalogList::Toppings => "Toppings",
            CatalogList::Sizes => "Sizes",
        }
    }
}

impl fmt::Display for CatalogList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configurable set of pizzas, toppings and sizes, plus where orders are saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Catalog {
    #[serde(default = "default_orders_path")]
    pub orders_path: PathBuf,

    #[serde(default)]
    pub pizzas: Vec<Component>,

    #[serde(default)]
    pub toppings: Vec<Component>,

    #[serde(default)]
    pub sizes: Vec<Size>,
}

fn default_orders_path() -> PathBuf {
    PathBuf::from(DEFAULT_ORDERS_PATH)
}

/// The seed catalog written on first run and by "restore defaults"
pub fn default_catalog() -> Catalog {
    Catalog {
        orders_path: default_orders_path(),
        pizzas: vec![
            Component::new("Cheese", 25.0),
            Component::new("Tuna", 40.0),
            Component::new("Pepperoni", 50.0),
            Component::new("Chicken", 50.0),
        ],
        toppings: vec![
            Component::new("Olive", 5.0),
            Component::new("Pepper", 5.0),
            Component::new("Mushroom", 10.0),
        ],
        sizes: vec![
            Size::new("Small", 1.0),
            Size::new("Medium", 1.5),
            Size::new("Big", 2.5),
        ],
    }
}

impl Default for Catalog {
    fn default() -> Self {
        default_catalog()
    }
}

impl Catalog {
    pub fn pizza(&self, name: &str) -> Option<&Component> {
        find_by_name(&self.pizzas, name)
    }

    pub fn topping(&self, name: &str) -> Option<&Component> {
        find_by_name(&self.toppings, name)
    }

    pub fn size(&self, name: &str) -> Option<&Size> {
        find_by_name(&self.sizes, name)
    }

    /// Resolve topping names, skipping any that are not in the catalog
    pub fn toppings_named(&self, names: &[String]) -> Vec<Component> {
        names
            .iter()
            .filter_map(|name| self.topping(name))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self, list: CatalogList) -> bool {
        self.len(list) == 0
    }

    pub fn len(&self, list: CatalogList) -> usize {
        match list {
            CatalogList::Pizzas => self.pizzas.len(),
            CatalogList::Toppings => self.toppings.len(),
            CatalogList::Sizes => self.sizes.len(),
        }
    }

    /// Names of the entries in a list, in catalog order
    pub fn names(&self, list: CatalogList) -> Vec<String> {
        match list {
            CatalogList::Pizzas => names_of(&self.pizzas),
            CatalogList::Toppings => names_of(&self.toppings),
            CatalogList::Sizes => names_of(&self.sizes),
        }
    }

    /// Name and value (price or multiplier) of every entry in a list
    pub fn entries(&self, list: CatalogList) -> Vec<(&str, f64)> {
        fn pairs<T: CatalogEntry>(entries: &[T]) -> Vec<(&str, f64)> {
            entries.iter().map(|e| (e.name(), e.value())).collect()
        }

        match list {
            CatalogList::Pizzas => pairs(&self.pizzas),
            CatalogList::Toppings => pairs(&self.toppings),
            CatalogList::Sizes => pairs(&self.sizes),
        }
    }

    /// Append a new entry; the name must be unique within the list and the
    /// value finite and strictly positive
    pub fn add(&mut self, list: CatalogList, name: &str, value: f64) -> Result<()> {
        let kind = list.kind();
        match list {
            CatalogList::Pizzas => insert_unique(&mut self.pizzas, kind, name, value),
            CatalogList::Toppings => insert_unique(&mut self.toppings, kind, name, value),
            CatalogList::Sizes => insert_unique(&mut self.sizes, kind, name, value),
        }
    }

    /// Remove every entry whose name is in `names`; returns how many were removed
    pub fn remove(&mut self, list: CatalogList, names: &[String]) -> usize {
        match list {
            CatalogList::Pizzas => remove_named(&mut self.pizzas, names),
            CatalogList::Toppings => remove_named(&mut self.toppings, names),
            CatalogList::Sizes => remove_named(&mut self.sizes, names),
        }
    }
}

fn names_of<T: CatalogEntry>(entries: &[T]) -> Vec<String> {
    entries.iter().map(|e| e.name().to_string()).collect()
}

fn insert_unique<T: CatalogEntry>(
    entries: &mut Vec<T>,
    kind: &'static str,
    name: &str,
    value: f64,
) -> Result<()> {
    if find_by_name(entries.as_slice(), name).is_some() {
        return Err(Error::DuplicateName {
            kind,
            name: name.to_string(),
        });
    }
    // serde_json writes non-finite floats as null, which would not load back
    if !(value.is_finite() && value > 0.0) {
        return Err(Error::NonPositiveValue { kind, value });
    }

    entries.push(T::new(name.to_string(), value));
    Ok(())
}

fn remove_named<T: CatalogEntry>(entries: &mut Vec<T>, names: &[String]) -> usize {
    let before = entries.len();
    entries.retain(|e| !names.iter().any(|n| n == e.name()));
    before - entries.len()
}
