//! Item price computation

use super::component::{Component, Size};

/// Price of a pizza with its toppings, before the size multiplier
pub fn base_price(pizza: &Component, toppings: &[Component]) -> f64 {
    pizza.price + toppings.iter().map(|t| t.price).sum::<f64>()
}

/// Price of a pizza with its toppings in the given size
pub fn price(pizza: &Component, toppings: &[Component], size: &Size) -> f64 {
    base_price(pizza, toppings) * size.multiplier
}
