// Altalt Config Parser - TOML with Serde
// Parses user profiles and general settings from TOML files

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::profile::{Profile, ProfileError, ProfileRegistry};
use crate::table::{KeyMapping, KeyTable, TableRegistry, TapLevel};
use crate::Key;

/// Configuration parser errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Duplicate profile: {0}")]
    DuplicateProfile(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Main configuration structure (root TOML table)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    /// General settings
    #[serde(default)]
    pub general: Option<GeneralConfig>,

    /// Device profiles
    #[serde(default)]
    pub profile: Vec<ProfileToml>,
}

/// General settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Modifier key, by name or raw code
    pub modifier: Option<String>,
    /// Profile used when no device pattern matches
    pub default_profile: Option<String>,
}

/// One `[[profile]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileToml {
    pub name: String,

    /// Regex matched against the device name
    pub device: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub double_tap: Vec<MappingToml>,

    #[serde(default)]
    pub triple_tap: Vec<MappingToml>,
}

/// One key translation inside a profile table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingToml {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub shift: bool,
}

/// Parsed configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Modifier override
    pub modifier: Option<Key>,
    /// Default profile override
    pub default_profile: Option<String>,
    /// User profiles, in file order
    pub profiles: Vec<Profile>,
    /// File the configuration was read from
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Parse a TOML configuration file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path)?;
        let mut config = Self::from_toml(&content)?;
        config.source_path = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let toml_config: ConfigToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
        toml_config.to_config()
    }

    /// Default config location (~/.config/altalt/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("altalt").join("config.toml"))
    }

    /// Load from the default location, or an empty config if there is no file
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                return Self::from_toml_path(path);
            }
        }
        Ok(Self::default())
    }

    /// Build the profile registry: user profiles first, then built-ins
    pub fn profile_registry(&self) -> Result<ProfileRegistry, ConfigError> {
        let registry = ProfileRegistry::with_overrides(
            self.profiles.iter().cloned(),
            self.default_profile.as_deref(),
        )?;
        Ok(registry)
    }
}

impl ConfigToml {
    /// Convert parsed TOML to internal Config structure
    fn to_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        if let Some(general) = &self.general {
            if let Some(key_str) = &general.modifier {
                let key = Key::from_name_or_code(key_str)
                    .map_err(|_| ConfigError::InvalidKey(key_str.clone()))?;
                config.modifier = Some(key);
            }
            config.default_profile = general.default_profile.clone();
        }

        let mut seen = HashSet::new();
        for entry in &self.profile {
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateProfile(entry.name.clone()));
            }
            config.profiles.push(entry.to_profile()?);
        }

        log::debug!("Parsed {} profile(s) from config", config.profiles.len());
        Ok(config)
    }
}

impl ProfileToml {
    fn to_profile(&self) -> Result<Profile, ConfigError> {
        let mut tables = TableRegistry::new();
        if !self.double_tap.is_empty() {
            tables = tables.with_table(TapLevel::Double, parse_table(&self.double_tap)?);
        }
        if !self.triple_tap.is_empty() {
            tables = tables.with_table(TapLevel::Triple, parse_table(&self.triple_tap)?);
        }

        let mut profile = Profile::new(&self.name, tables);
        if let Some(description) = &self.description {
            profile = profile.with_description(description);
        }
        if let Some(pattern) = &self.device {
            profile = profile.with_device_pattern(pattern)?;
        }
        Ok(profile)
    }
}

fn parse_table(entries: &[MappingToml]) -> Result<KeyTable, ConfigError> {
    let mappings = entries
        .iter()
        .map(|entry| {
            Ok(KeyMapping::new(
                parse_key(&entry.from)?,
                parse_key(&entry.to)?,
                entry.shift,
            ))
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;
    Ok(KeyTable::new(mappings))
}

fn parse_key(name: &str) -> Result<Key, ConfigError> {
    name.parse::<Key>()
        .map_err(|_| ConfigError::InvalidKey(name.to_string()))
}
