// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds transient state that should survive restarts but is not
//! user-configurable (unlike preferences in `settings.toml`). Today that is
//! only the last active gallery category.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `ICED_FOLIO_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use crate::gallery::SelectionStore;
use crate::portfolio::CategoryName;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Canonical name of the last selected category.
    #[serde(default, rename = "activeTabCategory")]
    pub active_tab_category: Option<String>,
}

impl AppState {
    /// Loads application state from `base_dir`, or the default data
    /// directory when `None`.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with an i18n key explaining what went wrong.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(err) => {
                        log::warn!("Ignoring unreadable state file {}: {err}", path.display());
                        (
                            Self::default(),
                            Some("notification-state-parse-error".to_string()),
                        )
                    }
                }
            }
            Err(err) => {
                log::warn!("Failed to open state file {}: {err}", path.display());
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves application state to `base_dir`, creating it if needed.
    ///
    /// Returns an i18n warning key if the save failed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            log::warn!("No data directory available for {STATE_FILE}");
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("Failed to create {}: {err}", parent.display());
                return Some("notification-state-dir-error".to_string());
            }
        }

        let file = match fs::File::create(&path) {
            Ok(file) => file,
            Err(err) => {
                log::warn!("Failed to create state file {}: {err}", path.display());
                return Some("notification-state-create-error".to_string());
            }
        };

        if let Err(err) = ciborium::into_writer(self, BufWriter::new(file)) {
            log::warn!("Failed to write state file {}: {err}", path.display());
            return Some("notification-state-write-error".to_string());
        }
        None
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

/// [`SelectionStore`] backed by the CBOR state file.
///
/// Every write goes straight to disk so the value survives a crash right
/// after a click.
#[derive(Debug, Clone, Default)]
pub struct PersistedStore {
    state: AppState,
    base_dir: Option<PathBuf>,
}

impl PersistedStore {
    /// Opens the store at the default location.
    pub fn open() -> (Self, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the store in `base_dir` (tests, portable setups).
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (state, warning) = AppState::load_from(base_dir.clone());
        (Self { state, base_dir }, warning)
    }
}

impl SelectionStore for PersistedStore {
    fn load_active_category(&self) -> Option<String> {
        self.state.active_tab_category.clone()
    }

    fn save_active_category(&mut self, name: &CategoryName) -> Result<()> {
        self.state.active_tab_category = Some(name.to_string());
        match self.state.save_to(self.base_dir.clone()) {
            None => Ok(()),
            Some(key) => Err(Error::State(key)),
        }
    }
}
