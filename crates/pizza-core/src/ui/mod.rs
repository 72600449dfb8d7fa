//! Prompt and render interface consumed by the menu state machine
//!
//! The app never talks to the terminal directly. Anything that can answer
//! these calls (the cliclack front end, a scripted test harness) can drive it.

#[cfg(test)]
pub(crate) mod scripted;

use crate::catalog::{Catalog, CatalogList};
use crate::order::Order;
use std::io;

/// Validator for a text answer; `Err` carries the message shown before re-prompting
pub type TextValidator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Validator for a numeric answer
pub type NumberValidator<'a> = &'a dyn Fn(f64) -> Result<(), String>;

/// One selectable entry in a menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    /// Secondary text shown next to the label (e.g. a price)
    pub hint: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: hint.into(),
        }
    }

    pub fn plain(label: impl Into<String>) -> Self {
        Self::new(label, "")
    }
}

/// Something the UI is asked to draw before the next prompt
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// Order summary table with a total
    Order(&'a Order),
    /// Cart items numbered from 1, shown before removing one
    Cart(&'a Order),
    /// One catalog list with its prices or multipliers
    Catalog {
        catalog: &'a Catalog,
        list: CatalogList,
    },
}

/// Interactive front end for the app.
///
/// Validated prompts must keep asking until the validator accepts an answer.
pub trait UiProvider {
    /// Pick one entry; returns its index in `choices`
    fn select_one(&mut self, title: &str, choices: &[MenuItem]) -> io::Result<usize>;

    /// Pick any number of entries (possibly none); returns their indices
    fn select_many(&mut self, title: &str, choices: &[MenuItem]) -> io::Result<Vec<usize>>;

    fn prompt_text(&mut self, title: &str, validate: TextValidator<'_>) -> io::Result<String>;

    fn prompt_number(&mut self, title: &str, validate: NumberValidator<'_>) -> io::Result<f64>;

    fn confirm(&mut self, message: &str) -> io::Result<bool>;

    fn show_error(&mut self, message: &str) -> io::Result<()>;

    fn show_info(&mut self, message: &str) -> io::Result<()>;

    fn show_success(&mut self, message: &str) -> io::Result<()> {
        self.show_info(message)
    }

    fn render(&mut self, view: View<'_>) -> io::Result<()>;
}

/// Format an amount of money for display
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a size multiplier for display
pub fn format_multiplier(value: f64) -> String {
    format!("x{}", value)
}
