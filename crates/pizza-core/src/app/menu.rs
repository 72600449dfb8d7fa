//! Menu states and the choices offered in each

use crate::catalog::CatalogList;
use crate::ui::{MenuItem, UiProvider};
use std::io;

/// Where the menu state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainMenu,
    Settings,
    /// Add/remove loop over one catalog list
    Edit(CatalogList),
    Exit,
}

/// A closed set of menu entries
pub trait MenuChoice: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    AddPizza,
    RemovePizza,
    NewOrder,
    SaveOrder,
    LoadOrder,
    DeleteOrder,
    Settings,
    Quit,
}

impl MenuChoice for MainMenuChoice {
    const ALL: &'static [Self] = &[
        Self::AddPizza,
        Self::RemovePizza,
        Self::NewOrder,
        Self::SaveOrder,
        Self::LoadOrder,
        Self::DeleteOrder,
        Self::Settings,
        Self::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::AddPizza => "Add Pizza",
            Self::RemovePizza => "Remove Pizza",
            Self::NewOrder => "New Order",
            Self::SaveOrder => "Save Order",
            Self::LoadOrder => "Load Saved Order",
            Self::DeleteOrder => "Delete Saved Order",
            Self::Settings => "Settings",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChoice {
    EditPizzas,
    EditToppings,
    EditSizes,
    RestoreDefaults,
    Back,
}

impl MenuChoice for SettingsChoice {
    const ALL: &'static [Self] = &[
        Self::EditPizzas,
        Self::EditToppings,
        Self::EditSizes,
        Self::RestoreDefaults,
        Self::Back,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::EditPizzas => "Edit Pizzas",
            Self::EditToppings => "Edit Toppings",
            Self::EditSizes => "Edit Sizes",
            Self::RestoreDefaults => "Restore Defaults",
            Self::Back => "Back",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditChoice {
    Add,
    Remove,
    Back,
}

impl MenuChoice for EditChoice {
    const ALL: &'static [Self] = &[Self::Add, Self::Remove, Self::Back];

    fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Remove => "Remove",
            Self::Back => "Back",
        }
    }
}

/// Ask the UI for one entry of a menu
pub(crate) fn choose<C: MenuChoice, U: UiProvider + ?Sized>(
    ui: &mut U,
    title: &str,
) -> io::Result<C> {
    let items: Vec<MenuItem> = C::ALL.iter().map(|c| MenuItem::plain(c.label())).collect();
    let idx = ui.select_one(title, &items)?;

    C::ALL.get(idx).copied().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no menu entry at position {}", idx),
        )
    })
}
