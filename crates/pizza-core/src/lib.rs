//! Pizza Core - catalog, orders and the menu state machine behind the ordering console
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Model** - `catalog` (pizzas, toppings, sizes, pricing) and `order`
//!   (the cart and saved orders on disk)
//! - **Layer 2: Persistence** - `config::ConfigStore`, the JSON-backed owner of the catalog
//! - **Layer 3: Workflow** - `app::App`, a menu state machine driven through the
//!   `ui::UiProvider` trait
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based provider (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (custom front end)
//!
//! ```ignore
//! use pizza_core::{App, ConfigStore, UiProvider};
//!
//! struct MyUi;
//! impl UiProvider for MyUi {
//!     // ... implement the prompt and render methods
//! }
//!
//! let config = ConfigStore::open("config.json")?;
//! App::new(config, MyUi).run()?;
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
mod json;
pub mod order;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use app::{App, State};
pub use catalog::{default_catalog, Catalog, CatalogList, Component, Size};
pub use config::{ConfigStore, DEFAULT_CONFIG_PATH};
pub use error::{Error, Result};
pub use order::{list_saved_orders, Order, OrderItem, OrderStore};
pub use ui::{MenuItem, UiProvider, View};

#[cfg(feature = "tui")]
pub use tui::{run, RunArgs};
