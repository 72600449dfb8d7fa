//! cliclack-backed UI provider

use super::render;
use crate::ui::{MenuItem, NumberValidator, TextValidator, UiProvider, View};
use std::io;

/// Terminal front end built on cliclack prompts
#[derive(Debug, Default)]
pub struct ClackUi;

impl ClackUi {
    pub fn new() -> Self {
        Self
    }
}

impl UiProvider for ClackUi {
    fn select_one(&mut self, title: &str, choices: &[MenuItem]) -> io::Result<usize> {
        // Use indices so labels can repeat without confusing the prompt
        let mut select = cliclack::select(title);
        for (idx, choice) in choices.iter().enumerate() {
            select = select.item(idx, &choice.label, &choice.hint);
        }
        select.interact()
    }

    fn select_many(&mut self, title: &str, choices: &[MenuItem]) -> io::Result<Vec<usize>> {
        let mut multi = cliclack::multiselect(title);
        for (idx, choice) in choices.iter().enumerate() {
            multi = multi.item(idx, &choice.label, &choice.hint);
        }
        multi.required(false).interact()
    }

    fn prompt_text(&mut self, title: &str, validate: TextValidator<'_>) -> io::Result<String> {
        loop {
            let input: String = cliclack::input(title).interact()?;
            match validate(&input) {
                Ok(()) => return Ok(input),
                Err(msg) => cliclack::log::error(msg)?,
            }
        }
    }

    fn prompt_number(&mut self, title: &str, validate: NumberValidator<'_>) -> io::Result<f64> {
        loop {
            let input: String = cliclack::input(title).interact()?;
            let value = match input.trim().parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    cliclack::log::error(format!("'{}' is not a number", input.trim()))?;
                    continue;
                }
            };
            match validate(value) {
                Ok(()) => return Ok(value),
                Err(msg) => cliclack::log::error(msg)?,
            }
        }
    }

    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        cliclack::confirm(message).initial_value(false).interact()
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::error(message)
    }

    fn show_info(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::info(message)
    }

    fn show_success(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::success(message)
    }

    fn render(&mut self, view: View<'_>) -> io::Result<()> {
        match view {
            View::Order(order) => cliclack::note("Order Summary", render::order_summary(order)),
            View::Cart(order) => cliclack::note("Added Pizzas", render::cart(order)),
            View::Catalog { catalog, list } => cliclack::note(
                format!("Edit {}", list.display_name()),
                render::catalog_list(catalog, list),
            ),
        }
    }
}
