//! Config file loading and saving

use crate::catalog::{default_catalog, Catalog, CatalogList};
use crate::error::{Error, Result};
use crate::json;
use crate::order::OrderStore;
use std::path::{Path, PathBuf};

/// Config file name, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Single source of truth for the catalog, backed by a JSON file
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    catalog: Catalog,
}

impl ConfigStore {
    /// Load the catalog from `path`, or create it with defaults when the file
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let store = match Self::load(&path)? {
            Some(catalog) => {
                tracing::debug!(path = %path.display(), "config loaded");
                Self { path, catalog }
            }
            None => {
                let store = Self {
                    path,
                    catalog: default_catalog(),
                };
                store.save()?;
                tracing::info!(path = %store.path.display(), "created default config");
                store
            }
        };

        Ok(store)
    }

    /// Read a catalog document; `None` when the file does not exist
    pub fn load(path: &Path) -> Result<Option<Catalog>> {
        let Some(content) = json::read_if_exists(path)? else {
            return Ok(None);
        };

        let catalog = serde_json::from_str(&content).map_err(|source| Error::ConfigCorrupt {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(catalog))
    }

    /// Write the whole catalog, replacing the config file
    pub fn save(&self) -> Result<()> {
        json::write_json(&self.path, &self.catalog, "config")?;
        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Saved orders live in the directory named by the catalog
    pub fn orders(&self) -> OrderStore {
        OrderStore::new(self.catalog.orders_path.clone())
    }

    /// Add an entry to one of the catalog lists and persist
    pub fn add_entry(&mut self, list: CatalogList, name: &str, value: f64) -> Result<()> {
        let mut catalog = self.catalog.clone();
        catalog.add(list, name, value)?;
        self.commit(catalog)?;
        tracing::info!(list = %list, name, value, "catalog entry added");
        Ok(())
    }

    /// Remove the named entries from one of the catalog lists and persist.
    ///
    /// Returns how many entries were removed.
    pub fn remove_entries(&mut self, list: CatalogList, names: &[String]) -> Result<usize> {
        let mut catalog = self.catalog.clone();
        let removed = catalog.remove(list, names);
        self.commit(catalog)?;
        tracing::info!(list = %list, removed, "catalog entries removed");
        Ok(removed)
    }

    /// Replace the whole catalog with the seed values and persist
    pub fn restore_defaults(&mut self) -> Result<()> {
        self.commit(default_catalog())?;
        tracing::info!("catalog restored to defaults");
        Ok(())
    }

    /// Write `catalog` and only then make it the current one, so a failed
    /// write leaves memory matching the file
    fn commit(&mut self, catalog: Catalog) -> Result<()> {
        json::write_json(&self.path, &catalog, "config")?;
        tracing::debug!(path = %self.path.display(), "config saved");
        self.catalog = catalog;
        Ok(())
    }
}
