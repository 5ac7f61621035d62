//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (the house menu, `$`, raw amounts)
//! 2. Global config: `$XDG_CONFIG_HOME/brewtree/brewtree.toml`
//! 3. Explicit config file: `--config <PATH>` / `BREWTREE_CONFIG`
//! 4. Environment variables: `BREWTREE_*` prefix

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{ItemKind, Menu, MenuEntry, PriceFormat};

/// Raw menu entry for intermediate parsing (fields are Option to detect "not specified").
///
/// - `remove = true` → drop the entry from the base menu
/// - existing key → specified fields override the base entry
/// - new key → `name`, `price` and `kind` are all required
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawMenuEntry {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub kind: Option<ItemKind>,
    pub remove: bool,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub currency: Option<String>,
    pub price_scale: Option<u32>,
    pub menu: BTreeMap<String, RawMenuEntry>,
}

/// Unified configuration for brewtree.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// Currency symbol prefixed to amounts (default: "$")
    pub currency: String,
    /// Decimal places for amounts; unset prints amounts as computed
    pub price_scale: Option<u32>,
    /// Orderable coffees and add-ins
    pub menu: Menu,
}

impl Default for Settings {
    fn default() -> Self {
        let format = PriceFormat::default();
        Self {
            currency: format.currency,
            price_scale: format.scale,
            menu: Menu::default(),
        }
    }
}

/// Get the XDG config directory for brewtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "brewtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("brewtree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    parse_raw_settings(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn parse_raw_settings(content: &str) -> Result<RawSettings, toml::de::Error> {
    toml::from_str(content)
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// An absent variable is `None`; any other lookup failure names the variable.
fn env_value<T>(result: Result<T, ConfigError>, var: &str) -> ApplicationResult<Option<T>> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("{}: {}", var, e),
        }),
    }
}

impl Settings {
    pub fn price_format(&self) -> PriceFormat {
        PriceFormat::new(self.currency.clone(), self.price_scale)
    }

    /// Merge overlay config onto self (base).
    ///
    /// - Scalar options: overlay wins if Some, otherwise keep base
    /// - Menu: merged entry by entry, see [`RawMenuEntry`]
    pub fn merge_with(&self, overlay: &RawSettings) -> ApplicationResult<Self> {
        let mut menu = self.menu.clone();
        for (key, raw) in &overlay.menu {
            merge_menu_entry(&mut menu, key, raw)?;
        }

        Ok(Self {
            currency: overlay
                .currency
                .clone()
                .unwrap_or_else(|| self.currency.clone()),
            price_scale: overlay.price_scale.or(self.price_scale),
            menu,
        })
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; it must exist
    #[instrument(level = "debug")]
    pub fn load(explicit: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?)?;
            }
        }

        // 3. Explicit config file
        if let Some(path) = explicit {
            let path = expand_path(path);
            debug!("loading config: {}", path.display());
            current = current.merge_with(&load_raw_settings(&path)?)?;
        }

        // 4. Environment variables (replace)
        Self::apply_env_overrides(current)
    }

    /// Load settings from TOML text on top of the defaults.
    pub fn from_toml(content: &str) -> ApplicationResult<Self> {
        let raw = parse_raw_settings(content).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })?;
        Self::default().merge_with(&raw)
    }

    /// Apply BREWTREE_* environment variables as explicit overrides.
    ///
    /// A variable that is set but unparseable is a config error, not a skip.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BREWTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("currency"), "BREWTREE_CURRENCY")? {
            settings.currency = val;
        }
        if let Some(val) = env_value(config.get_int("price_scale"), "BREWTREE_PRICE_SCALE")? {
            let scale = u32::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("BREWTREE_PRICE_SCALE out of range: {}", val),
            })?;
            settings.price_scale = Some(scale);
        }

        Ok(settings)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

fn merge_menu_entry(menu: &mut Menu, key: &str, raw: &RawMenuEntry) -> ApplicationResult<()> {
    if raw.remove {
        menu.remove(key);
        return Ok(());
    }

    let entry = match menu.get(key) {
        Some(base) => MenuEntry {
            name: raw.name.clone().unwrap_or_else(|| base.name.clone()),
            price: raw.price.unwrap_or(base.price),
            kind: raw.kind.unwrap_or(base.kind),
        },
        None => match (&raw.name, raw.price, raw.kind) {
            (Some(name), Some(price), Some(kind)) => MenuEntry {
                name: name.clone(),
                price,
                kind,
            },
            _ => {
                return Err(ApplicationError::Config {
                    message: format!("menu entry '{}' needs name, price and kind", key),
                })
            }
        },
    };
    menu.insert(key, entry);
    Ok(())
}
