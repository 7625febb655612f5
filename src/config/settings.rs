//! User settings for the expense tracker
//!
//! Settings are optional. When `config.json` is absent every field takes its
//! default, so the tool works out of the box.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::validate_date_format;
use crate::storage::file_io::{load_json, JsonFile};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prefixed to displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for new expenses (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Expenses file used when no `--file` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses_file: Option<PathBuf>,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            expenses_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    ///
    /// An unreadable file or an invalid `date_format` is a `Config` error.
    pub fn load_or_default(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        match load_json::<Settings, _>(&settings_path) {
            Ok(JsonFile::Loaded(settings)) => {
                validate_date_format(&settings.date_format)?;
                debug!(path = %settings_path.display(), "loaded settings");
                Ok(settings)
            }
            Ok(JsonFile::Missing | JsonFile::Empty) => Ok(Settings::default()),
            Err(e) => Err(ExpenseError::Config(format!(
                "Failed to load settings from {}: {}",
                settings_path.display(),
                e
            ))),
        }
    }
}
