// Altalt Config API
// User profiles and general settings from TOML

pub mod parser;

pub use parser::{Config, ConfigError, ConfigToml, GeneralConfig, MappingToml, ProfileToml};
