//! Catalog entry types

use serde::{Deserialize, Serialize};

/// Shared behaviour of every named, valued catalog entry
pub trait CatalogEntry {
    /// Build an entry from a name and its value (price or multiplier)
    fn new(name: String, value: f64) -> Self;

    fn name(&self) -> &str;

    /// Price for pizzas and toppings, multiplier for sizes
    fn value(&self) -> f64;
}

/// A pizza or topping: a name and the amount it adds to an item's price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Component {
    pub name: String,
    pub price: f64,
}

impl Component {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl CatalogEntry for Component {
    fn new(name: String, value: f64) -> Self {
        Component::new(name, value)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.price
    }
}

/// A pizza size; scales the price of the pizza and its toppings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", try_from = "RawSize")]
pub struct Size {
    pub name: String,
    pub multiplier: f64,
}

impl Size {
    pub fn new(name: impl Into<String>, multiplier: f64) -> Self {
        Self {
            name: name.into(),
            multiplier,
        }
    }
}

impl CatalogEntry for Size {
    fn new(name: String, value: f64) -> Self {
        Size::new(name, value)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        self.multiplier
    }
}

/// On-disk size shape. Older documents stored the multiplier under `Price`,
/// sometimes next to `Multiplier`; the explicit field wins.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawSize {
    name: String,
    #[serde(default)]
    multiplier: Option<f64>,
    #[serde(default)]
    price: Option<f64>,
}

impl TryFrom<RawSize> for Size {
    type Error = String;

    fn try_from(raw: RawSize) -> Result<Self, Self::Error> {
        let multiplier = raw
            .multiplier
            .or(raw.price)
            .ok_or_else(|| format!("size '{}' has no multiplier", raw.name))?;
        Ok(Size::new(raw.name, multiplier))
    }
}

/// Exact-match lookup by name
pub fn find_by_name<'a, T: CatalogEntry>(entries: &'a [T], name: &str) -> Option<&'a T> {
    entries.iter().find(|entry| entry.name() == name)
}
