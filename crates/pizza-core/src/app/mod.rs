//! Menu-driven state machine for composing orders and editing the catalog
//!
//! `App` owns the current order and the config store and asks a
//! [`UiProvider`] for every decision. Each menu is a [`State`]; a handler runs
//! for the selected entry and returns the next state.

pub mod menu;

use crate::catalog::{price, CatalogList};
use crate::config::ConfigStore;
use crate::error::Error;
use crate::order::{display_name, resolve_prefix, Order};
use crate::ui::{format_price, MenuItem, UiProvider, View};
use anyhow::Result;

pub use menu::{EditChoice, MainMenuChoice, MenuChoice, SettingsChoice, State};

pub struct App<U: UiProvider> {
    config: ConfigStore,
    order: Order,
    ui: U,
    state: State,
}

impl<U: UiProvider> App<U> {
    pub fn new(config: ConfigStore, ui: U) -> Self {
        Self {
            config,
            order: Order::new(),
            ui,
            state: State::MainMenu,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Run menus until the user quits from the main menu
    pub fn run(&mut self) -> Result<()> {
        while self.state != State::Exit {
            self.step()?;
        }
        Ok(())
    }

    /// Show the current menu once and apply the selection.
    ///
    /// Catalog, order and persistence failures are reported through the UI and
    /// leave the state machine in the menu that produced them. Only UI
    /// failures are returned.
    pub fn step(&mut self) -> Result<()> {
        let result = match self.state {
            State::MainMenu => self.main_menu(),
            State::Settings => self.settings_menu(),
            State::Edit(list) => self.edit_menu(list),
            State::Exit => return Ok(()),
        };

        match result {
            Ok(next) => self.state = next,
            Err(err) => match err.downcast::<Error>() {
                Ok(err) => {
                    tracing::warn!(error = %err, state = ?self.state, "operation failed");
                    self.ui.show_error(&err.to_string())?;
                }
                Err(err) => return Err(err),
            },
        }

        Ok(())
    }

    fn main_menu(&mut self) -> Result<State> {
        self.ui.render(View::Order(&self.order))?;
        let choice: MainMenuChoice = menu::choose(&mut self.ui, "What would you like to do?")?;
        tracing::debug!(?choice, "main menu selection");

        match choice {
            MainMenuChoice::AddPizza => self.add_pizza()?,
            MainMenuChoice::RemovePizza => self.remove_pizza()?,
            MainMenuChoice::NewOrder => self.new_order(),
            MainMenuChoice::SaveOrder => self.save_order()?,
            MainMenuChoice::LoadOrder => self.load_order()?,
            MainMenuChoice::DeleteOrder => self.delete_saved_order()?,
            MainMenuChoice::Settings => return self.enter_settings(),
            MainMenuChoice::Quit => return Ok(State::Exit),
        }

        Ok(State::MainMenu)
    }

    fn add_pizza(&mut self) -> Result<()> {
        let catalog = self.config.catalog();

        if catalog.pizzas.is_empty() {
            self.ui.show_error("No pizzas available!")?;
            return Ok(());
        }
        if catalog.sizes.is_empty() {
            self.ui.show_error("No sizes available!")?;
            return Ok(());
        }

        let pizza_items: Vec<MenuItem> = catalog
            .pizzas
            .iter()
            .map(|p| MenuItem::new(&p.name, format_price(p.price)))
            .collect();
        let idx = self.ui.select_one("Select a pizza", &pizza_items)?;
        let Some(pizza) = catalog.pizzas.get(idx).cloned() else {
            return Ok(());
        };

        let toppings = if catalog.toppings.is_empty() {
            self.ui.show_info("No toppings available")?;
            Vec::new()
        } else {
            let topping_items: Vec<MenuItem> = catalog
                .toppings
                .iter()
                .map(|t| MenuItem::new(&t.name, format_price(t.price)))
                .collect();
            self.ui
                .select_many("Select toppings (optional)", &topping_items)?
                .into_iter()
                .filter_map(|i| catalog.toppings.get(i).cloned())
                .collect()
        };

        let size_items: Vec<MenuItem> = catalog
            .sizes
            .iter()
            .map(|s| MenuItem::new(&s.name, format_price(price(&pizza, &toppings, s))))
            .collect();
        let idx = self.ui.select_one("Select a size", &size_items)?;
        let Some(size) = catalog.sizes.get(idx).cloned() else {
            return Ok(());
        };

        tracing::debug!(pizza = %pizza.name, toppings = toppings.len(), size = %size.name, "item added");
        self.order.add_item(pizza, toppings, size);
        Ok(())
    }

    fn remove_pizza(&mut self) -> Result<()> {
        if self.order.is_empty() {
            self.ui.show_error("No pizzas added to cart!")?;
            return Ok(());
        }

        self.ui.render(View::Cart(&self.order))?;
        let len = self.order.len();
        let number = self.ui.prompt_number(
            "Enter the number of the pizza you want to remove",
            &|n| validate_item_number(n, len),
        )?;

        let Some(index) = (number as usize).checked_sub(1) else {
            return Ok(());
        };
        let Some(item) = self.order.items().get(index) else {
            return Ok(());
        };

        let message = format!("Remove pizza #{} ({}) from the order?", number, item.pizza.name);
        if !self.ui.confirm(&message)? {
            return Ok(());
        }

        self.order.remove_item(index)?;
        Ok(())
    }

    fn new_order(&mut self) {
        self.order = Order::new();
    }

    fn save_order(&mut self) -> Result<()> {
        let orders = self.config.orders();
        orders.ensure_dir()?;
        let existing = orders.names()?;

        let name = self.ui.prompt_text("Enter a name for the order", &|input| {
            validate_order_name(input, &existing)
        })?;

        orders.save(&name, &self.order)?;
        self.order = Order::new();
        self.ui.show_success(&format!("Order saved as '{}'", name))?;
        Ok(())
    }

    fn load_order(&mut self) -> Result<()> {
        let orders = self.config.orders();
        let files = orders.list()?;
        if files.is_empty() {
            self.ui.show_error("No orders saved!")?;
            return Ok(());
        }

        let Some(file) = self.pick_saved_order("Select an order to load", &files)? else {
            return Ok(());
        };

        if let Some(order) = orders.load(&file)? {
            self.order = order;
        }
        Ok(())
    }

    fn delete_saved_order(&mut self) -> Result<()> {
        let orders = self.config.orders();
        let files = orders.list()?;
        if files.is_empty() {
            self.ui.show_error("No orders saved!")?;
            return Ok(());
        }

        let Some(file) = self.pick_saved_order("Select an order to delete", &files)? else {
            return Ok(());
        };

        let message = format!(
            "Delete saved order '{}'? This cannot be undone.",
            display_name(&file)
        );
        if !self.ui.confirm(&message)? {
            return Ok(());
        }

        orders.delete(&file)?;
        Ok(())
    }

    /// Offer saved orders by name and map the pick back to a file by prefix
    fn pick_saved_order(&mut self, title: &str, files: &[String]) -> Result<Option<String>> {
        let items: Vec<MenuItem> = files
            .iter()
            .map(|f| MenuItem::plain(display_name(f)))
            .collect();
        let idx = self.ui.select_one(title, &items)?;

        let Some(selected) = files.get(idx).map(|f| display_name(f)) else {
            return Ok(None);
        };

        Ok(resolve_prefix(files, selected).map(str::to_string))
    }

    fn enter_settings(&mut self) -> Result<State> {
        let confirmed = self
            .ui
            .confirm("Editing settings deletes ALL saved orders and the current order. Continue?")?;
        if !confirmed {
            return Ok(State::MainMenu);
        }

        let orders = self.config.orders();
        orders.wipe()?;
        self.order = Order::new();
        tracing::warn!(dir = %orders.dir().display(), "entered settings, saved orders cleared");

        Ok(State::Settings)
    }

    fn settings_menu(&mut self) -> Result<State> {
        let choice: SettingsChoice = menu::choose(&mut self.ui, "Settings")?;
        tracing::debug!(?choice, "settings selection");

        let next = match choice {
            SettingsChoice::EditPizzas => State::Edit(CatalogList::Pizzas),
            SettingsChoice::EditToppings => State::Edit(CatalogList::Toppings),
            SettingsChoice::EditSizes => State::Edit(CatalogList::Sizes),
            SettingsChoice::RestoreDefaults => {
                self.config.restore_defaults()?;
                self.ui.show_success("Catalog restored to defaults")?;
                State::Settings
            }
            SettingsChoice::Back => State::MainMenu,
        };

        Ok(next)
    }

    fn edit_menu(&mut self, list: CatalogList) -> Result<State> {
        self.ui.render(View::Catalog {
            catalog: self.config.catalog(),
            list,
        })?;
        let title = format!("Edit {}", list.display_name().to_lowercase());
        let choice: EditChoice = menu::choose(&mut self.ui, &title)?;

        match choice {
            EditChoice::Add => self.add_entry(list)?,
            EditChoice::Remove => self.remove_entries(list)?,
            EditChoice::Back => return Ok(State::Settings),
        }

        Ok(State::Edit(list))
    }

    fn add_entry(&mut self, list: CatalogList) -> Result<()> {
        let kind = list.kind();
        let existing = self.config.catalog().names(list);

        let name = self
            .ui
            .prompt_text(&format!("Enter a name for the {}", kind), &|input| {
                validate_entry_name(input, kind, &existing)
            })?;
        let value = self.ui.prompt_number(
            &format!("Enter a {} for the {}", list.value_label(), kind),
            &validate_positive,
        )?;

        self.config.add_entry(list, &name, value)?;
        Ok(())
    }

    fn remove_entries(&mut self, list: CatalogList) -> Result<()> {
        let names = self.config.catalog().names(list);
        if names.is_empty() {
            self.ui.show_error(&format!(
                "No {} available!",
                list.display_name().to_lowercase()
            ))?;
            return Ok(());
        }

        let items: Vec<MenuItem> = names.iter().map(MenuItem::plain).collect();
        let selected: Vec<String> = self
            .ui
            .select_many(
                &format!("Select {} to remove", list.display_name().to_lowercase()),
                &items,
            )?
            .into_iter()
            .filter_map(|i| names.get(i).cloned())
            .collect();
        if selected.is_empty() {
            return Ok(());
        }

        let confirmed = self.ui.confirm(
            "Removing an item invalidates saved orders that use it. Remove the selected items?",
        )?;
        if !confirmed {
            return Ok(());
        }

        self.config.remove_entries(list, &selected)?;
        Ok(())
    }
}

fn validate_item_number(number: f64, len: usize) -> Result<(), String> {
    if number.fract() == 0.0 && number >= 1.0 && number <= len as f64 {
        Ok(())
    } else {
        Err(format!("Invalid selection {}", number))
    }
}

fn validate_order_name(input: &str, existing: &[String]) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("The name cannot be empty".to_string());
    }
    if input.contains(|c: char| c == '/' || c == '\\') {
        return Err("The name cannot contain path separators".to_string());
    }
    if existing.iter().any(|name| name == input) {
        return Err("A file with the same name already exists".to_string());
    }
    Ok(())
}

fn validate_entry_name(input: &str, kind: &str, existing: &[String]) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("The name cannot be empty".to_string());
    }
    if existing.iter().any(|name| name == input) {
        return Err(format!("A {} with the same name already exists", kind));
    }
    Ok(())
}

fn validate_positive(value: f64) -> Result<(), String> {
    if !value.is_finite() {
        Err("The value must be a finite number".to_string())
    } else if value > 0.0 {
        Ok(())
    } else {
        Err("The value must be greater than zero".to_string())
    }
}
