// Altalt Device Profiles
// Maps device names to the key tables used for them

use indexmap::IndexMap;
use regex::Regex;

use crate::table::{KeyMapping, KeyTable, TableRegistry, TapLevel};
use crate::Key;

/// Name of the profile used when no profile matches the device
pub const DEFAULT_PROFILE: &str = "droid4";

/// Profile registry errors
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Invalid device pattern for profile '{profile}': {source}")]
    InvalidPattern {
        profile: String,
        #[source]
        source: regex::Error,
    },
}

/// Key tables for one family of keyboards, plus how to recognise it.
#[derive(Debug, Clone)]
pub struct Profile {
    name: String,
    description: Option<String>,
    device_pattern: Option<Regex>,
    tables: TableRegistry,
}

impl Profile {
    /// Create a profile that never matches a device by name
    pub fn new(name: impl Into<String>, tables: TableRegistry) -> Self {
        Self {
            name: name.into(),
            description: None,
            device_pattern: None,
            tables,
        }
    }

    /// Match devices whose reported name satisfies `pattern` (a regex)
    pub fn with_device_pattern(mut self, pattern: &str) -> Result<Self, ProfileError> {
        let regex = Regex::new(pattern).map_err(|source| ProfileError::InvalidPattern {
            profile: self.name.clone(),
            source,
        })?;
        self.device_pattern = Some(regex);
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn device_pattern(&self) -> Option<&str> {
        self.device_pattern.as_ref().map(Regex::as_str)
    }

    pub fn tables(&self) -> &TableRegistry {
        &self.tables
    }

    /// Check if this profile claims a device with the given name
    pub fn matches_device(&self, device_name: &str) -> bool {
        self.device_pattern
            .as_ref()
            .is_some_and(|re| re.is_match(device_name))
    }
}

/// Outcome of resolving a device name against the registry
#[derive(Debug, Clone, Copy)]
pub enum ProfileSelection<'a> {
    /// A profile pattern matched the device name
    Matched(&'a Profile),
    /// Nothing matched; the default profile is used instead
    Fallback(&'a Profile),
}

impl<'a> ProfileSelection<'a> {
    pub fn profile(&self) -> &'a Profile {
        match self {
            ProfileSelection::Matched(p) | ProfileSelection::Fallback(p) => p,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ProfileSelection::Fallback(_))
    }
}

/// Named profiles with one designated default.
///
/// Profiles are tried in registration order; the first whose device pattern
/// matches wins.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: IndexMap<String, Profile>,
    default: String,
}

impl ProfileRegistry {
    /// Registry holding only the built-in profiles
    pub fn with_builtin() -> Result<Self, ProfileError> {
        Self::with_overrides(Vec::new(), None)
    }

    /// Build a registry where `profiles` come first and override built-ins of the same name.
    pub fn with_overrides(
        profiles: impl IntoIterator<Item = Profile>,
        default: Option<&str>,
    ) -> Result<Self, ProfileError> {
        let mut registry = Self {
            profiles: IndexMap::new(),
            default: DEFAULT_PROFILE.to_string(),
        };
        for profile in profiles {
            registry.insert(profile);
        }
        for profile in builtin_profiles()? {
            if !registry.contains(profile.name()) {
                registry.insert(profile);
            }
        }
        if let Some(name) = default {
            registry.set_default(name)?;
        }
        Ok(registry)
    }

    /// Add a profile, replacing one with the same name in place
    pub fn insert(&mut self, profile: Profile) {
        self.profiles.insert(profile.name().to_string(), profile);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&Profile, ProfileError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ProfileError::UnknownProfile(name.to_string()))
    }

    pub fn set_default(&mut self, name: &str) -> Result<(), ProfileError> {
        if !self.contains(name) {
            return Err(ProfileError::UnknownProfile(name.to_string()));
        }
        self.default = name.to_string();
        Ok(())
    }

    pub fn default_name(&self) -> &str {
        &self.default
    }

    pub fn default_profile(&self) -> Result<&Profile, ProfileError> {
        self.get(&self.default)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Pick the profile for a device by its reported name.
    pub fn select(&self, device_name: &str) -> Result<ProfileSelection<'_>, ProfileError> {
        if let Some(profile) = self.iter().find(|p| p.matches_device(device_name)) {
            log::debug!("Device '{}' matched profile '{}'", device_name, profile.name());
            return Ok(ProfileSelection::Matched(profile));
        }
        log::warn!(
            "Please add device specific map for: {} (using '{}')",
            device_name,
            self.default
        );
        Ok(ProfileSelection::Fallback(self.default_profile()?))
    }
}

/// Profiles compiled into the binary
pub fn builtin_profiles() -> Result<Vec<Profile>, ProfileError> {
    let droid4 = Profile::new(DEFAULT_PROFILE, droid4_tables())
        .with_description("Motorola Droid 4 slider keypad")
        .with_device_pattern(r"^4a31c000\.keypad")?;
    Ok(vec![droid4])
}

fn droid4_tables() -> TableRegistry {
    let double = KeyTable::new(vec![
        // Top row
        KeyMapping::new(Key::KEY_1, Key::ESC, false),
        KeyMapping::new(Key::KEY_9, Key::LEFT_BRACE, false),
        KeyMapping::new(Key::KEY_0, Key::RIGHT_BRACE, false),
        KeyMapping::new(Key::APOSTROPHE, Key::GRAVE, false),
        // Second row
        KeyMapping::new(Key::E, Key::EURO, false),
        KeyMapping::new(Key::BACKSPACE, Key::DELETE, false),
        // Third row
        KeyMapping::new(Key::TAB, Key::GRAVE, true), // ~
        KeyMapping::new(Key::J, Key::BACKSLASH, true), // |
        // Fourth row
        KeyMapping::new(Key::V, Key::INSERT, true), // shift + insert
        KeyMapping::new(Key::COMMA, Key::SEMICOLON, false),
        KeyMapping::new(Key::DOT, Key::SEMICOLON, true), // :
        // Bottom row
        KeyMapping::new(Key::SLASH, Key::BACKSLASH, false),
        KeyMapping::new(Key::UP, Key::PAGE_UP, false),
        KeyMapping::new(Key::DOWN, Key::PAGE_DOWN, false),
    ]);

    let triple = KeyTable::new(vec![
        // Top row
        KeyMapping::new(Key::KEY_1, Key::F1, false),
        KeyMapping::new(Key::KEY_1, Key::F1, false),
        KeyMapping::new(Key::KEY_2, Key::F2, false),
        KeyMapping::new(Key::KEY_3, Key::F3, false),
        KeyMapping::new(Key::KEY_4, Key::F4, false),
        KeyMapping::new(Key::KEY_5, Key::F5, false),
        KeyMapping::new(Key::KEY_6, Key::F6, false),
        KeyMapping::new(Key::KEY_7, Key::F7, false),
        KeyMapping::new(Key::KEY_8, Key::F8, false),
        KeyMapping::new(Key::KEY_9, Key::F9, false),
        KeyMapping::new(Key::KEY_0, Key::F10, false),
        // Second row
        KeyMapping::new(Key::APOSTROPHE, Key::GRAVE, true), // ~
    ]);

    TableRegistry::new()
        .with_table(TapLevel::Double, double)
        .with_table(TapLevel::Triple, triple)
}
