//! Text tables for the order and catalog views

use crate::catalog::{Catalog, CatalogList};
use crate::order::Order;
use crate::ui::{format_multiplier, format_price};
use colored::Colorize;

/// Pad `text` to `width` visible columns, ignoring color codes
fn pad(text: &str, width: usize) -> String {
    let visible = console::measure_text_width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(visible)))
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>, min: usize) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max(min)
}

pub(super) fn order_summary(order: &Order) -> String {
    if order.is_empty() {
        return "No items added".italic().dimmed().to_string();
    }

    let width = name_width(
        order.items().iter().map(|i| i.pizza.name.as_str()),
        "Total".len(),
    ) + 12;

    let mut lines = Vec::new();
    for item in order.items() {
        let label = format!("{} {}", item.pizza.name.bold(), format!("({})", item.size.name).dimmed());
        lines.push(format!(
            "{}  {}",
            pad(&label, width),
            format_price(item.price()).green()
        ));
        for topping in &item.toppings {
            lines.push(format!("  + {}", topping.name.italic()));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "{}  {}",
        pad(&"Total".bold().to_string(), width),
        format_price(order.total_price()).green().bold()
    ));

    lines.join("\n")
}

pub(super) fn cart(order: &Order) -> String {
    let mut lines = Vec::new();
    for (i, item) in order.items().iter().enumerate() {
        lines.push(format!(
            "{}  {} {}",
            pad(&format!("#{}", i + 1).dimmed().to_string(), 4),
            item.pizza.name.bold(),
            format!("({})", item.size.name).dimmed()
        ));
        for topping in &item.toppings {
            lines.push(format!("      + {}", topping.name.italic()));
        }
    }
    lines.join("\n")
}

pub(super) fn catalog_list(catalog: &Catalog, list: CatalogList) -> String {
    let entries = catalog.entries(list);
    if entries.is_empty() {
        return format!("No {} yet", list.display_name().to_lowercase())
            .italic()
            .dimmed()
            .to_string();
    }

    let width = name_width(entries.iter().map(|(name, _)| *name), 4) + 2;
    entries
        .iter()
        .map(|(name, value)| {
            let value = match list {
                CatalogList::Sizes => format_multiplier(*value).normal(),
                CatalogList::Pizzas | CatalogList::Toppings => format_price(*value).green(),
            };
            format!("{}{}", pad(&name.bold().to_string(), width), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
