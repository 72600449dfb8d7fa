//! Saved orders: one JSON file per order in the orders directory

use super::Order;
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const ORDER_SUFFIX: &str = ".json";

/// List the `*.json` file names (not paths) in `dir`.
///
/// A missing directory is created and reported as empty. Entries come back
/// in the order the file system reports them.
pub fn list_saved_orders(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::io(dir, e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        // Suffix match so a file named just `.json` is listed too
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(ORDER_SUFFIX) {
            files.push(name);
        }
    }

    Ok(files)
}

/// First listed file whose name starts with `selected`.
///
/// Names shown to the user have their extension stripped, so a selection is
/// mapped back to a file by prefix. With `party.json` and `party2.json` on
/// disk, selecting `party` resolves to whichever of the two is listed first.
pub fn resolve_prefix<'a>(files: &'a [String], selected: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|file| file.starts_with(selected))
        .map(String::as_str)
}

/// File name without the `.json` extension
pub fn display_name(file_name: &str) -> &str {
    file_name
        .strip_suffix(ORDER_SUFFIX)
        .unwrap_or(file_name)
}

/// Saved orders under a single directory
#[derive(Debug, Clone)]
pub struct OrderStore {
    dir: PathBuf,
}

impl OrderStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::io(&self.dir, e))
    }

    /// Saved order file names, creating the directory if needed
    pub fn list(&self) -> Result<Vec<String>> {
        list_saved_orders(&self.dir)
    }

    /// Saved order names without extension, in listing order
    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self
            .list()?
            .iter()
            .map(|file| display_name(file).to_string())
            .collect())
    }

    /// Whether an order with exactly this name (case-sensitive) is saved
    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.names()?.iter().any(|existing| existing == name))
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Save `order` as `<name>.json`, replacing an existing file of that name
    pub fn save(&self, name: &str, order: &Order) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.path_for(&format!("{}{}", name, ORDER_SUFFIX));
        order.save(&path)?;
        tracing::info!(path = %path.display(), items = order.len(), "order saved");
        Ok(path)
    }

    pub fn load(&self, file_name: &str) -> Result<Option<Order>> {
        let path = self.path_for(file_name);
        let order = Order::load(&path)?;
        if order.is_some() {
            tracing::info!(path = %path.display(), "order loaded");
        }
        Ok(order)
    }

    pub fn delete(&self, file_name: &str) -> Result<()> {
        let path = self.path_for(file_name);
        fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
        tracing::info!(path = %path.display(), "saved order deleted");
        Ok(())
    }

    /// Delete the orders directory and everything in it.
    ///
    /// Returns `false` when there was nothing to delete.
    pub fn wipe(&self) -> Result<bool> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => {
                tracing::warn!(dir = %self.dir.display(), "deleted all saved orders");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io(&self.dir, e)),
        }
    }
}
