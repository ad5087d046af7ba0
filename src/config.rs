//! Prompt configuration.
//!
//! Style options and exit code mnemonics are layered, lowest precedence first:
//!
//! 1. built-in defaults (depending on terminal capability)
//! 2. the user config file, TOML with `[style]` and `[exit-codes]` tables
//! 3. the `PROMPT_STYLE` and `PROMPT_EXIT_CODES` environment payloads, JSON
//!
//! A layer that cannot be read or parsed is logged and skipped so the prompt
//! still renders. Invalid option values (bad glyphs, colours outside the
//! palette) are fatal.
//!
//! # Example config
//!
//! ```toml
//! [style]
//! ch_chevron = ">"
//! col_path_bg = 24
//! str_postfix = " $"
//!
//! [exit-codes]
//! "3" = "CONFLICT"
//! "130" = ""  # hide the mnemonic for Ctrl-C
//! ```

pub mod exit_codes;
mod overrides;
pub mod path;

use std::collections::BTreeMap;
use std::path::Path;

use config::ConfigError;
use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::error::PromptError;
use crate::styling::StyleOptions;

pub use exit_codes::ExitCodeTable;
pub use overrides::StyleOverrides;

/// One layer of overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub style: StyleOverrides,
    #[serde(rename = "exit-codes")]
    pub exit_codes: BTreeMap<String, String>,
    #[serde(flatten)]
    pub unknown: BTreeMap<String, IgnoredAny>,
}

impl UserConfig {
    /// Load the config file at `path`, if any.
    ///
    /// A missing file is an empty layer. A file that cannot be parsed is
    /// logged and treated as empty.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("Ignoring config file {}: {e}", path.display());
            Self::default()
        })
    }

    /// Load the config file at `path`, reporting parse errors.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()?;
        settings.try_deserialize()
    }
}

/// Fully resolved style options and exit code table.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptConfig {
    pub style: StyleOptions,
    pub exit_codes: ExitCodeTable,
}

impl PromptConfig {
    /// Apply `layers` in order over the built-in defaults.
    pub fn from_layers<'a>(
        limited: bool,
        layers: impl IntoIterator<Item = &'a UserConfig>,
    ) -> Result<Self, PromptError> {
        let mut style = StyleOptions::defaults(limited);
        let mut exit_codes = ExitCodeTable::default();

        for layer in layers {
            for key in layer.unknown.keys() {
                log::warn!("Ignoring unknown config section {key}");
            }
            layer.style.apply(&mut style)?;
            exit_codes.merge(&layer.exit_codes);
        }

        Ok(Self { style, exit_codes })
    }
}
