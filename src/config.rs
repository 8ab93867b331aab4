use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const WEIGHTED_DISPLAY_NAME_LIKE: &str = "weighted_display_name_like";

/// Settings for the user directory ranking, fixed at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Substring that earns a display name a ranking boost. Matched
    /// case-sensitively via `LIKE '%<pattern>%'`. `None` disables the boost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted_display_name_like: Option<String>,
}

impl ModuleConfig {
    /// Extracts the recognised settings from the raw table the host hands over.
    ///
    /// Unknown keys are ignored and a known key holding a non-string value is
    /// treated as unset, so this never fails.
    pub fn parse(raw: &toml::Table) -> Self {
        for key in raw.keys().filter(|k| k.as_str() != WEIGHTED_DISPLAY_NAME_LIKE) {
            log::debug!("Ignoring unrecognized config key {:?}", key);
        }

        let weighted_display_name_like = match raw.get(WEIGHTED_DISPLAY_NAME_LIKE) {
            Some(toml::Value::String(pattern)) => Some(pattern.clone()),
            Some(other) => {
                log::warn!(
                    "{} should be a string, got a {}; display name boost disabled",
                    WEIGHTED_DISPLAY_NAME_LIKE,
                    other.type_str()
                );
                None
            }
            None => None,
        };

        Self {
            weighted_display_name_like,
        }
    }

    /// Loads the config file at `path`, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let raw: toml::Table = content
            .parse()
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(Self::parse(&raw))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".userdir-rank"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
