// Altalt Key Tables
// KeyMapping, KeyTable and the per tap-level TableRegistry

use indexmap::IndexMap;
use smallvec::SmallVec;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::Key;

/// Number of modifier taps that select an alternate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, AsRefStr)]
pub enum TapLevel {
    #[strum(serialize = "double")]
    Double,
    #[strum(serialize = "triple")]
    Triple,
}

impl TapLevel {
    /// Map a tap count to its level. Only 2 and 3 taps have a table.
    pub fn from_taps(taps: u8) -> Option<Self> {
        match taps {
            2 => Some(TapLevel::Double),
            3 => Some(TapLevel::Triple),
            _ => None,
        }
    }

    /// Tap count this level corresponds to
    pub fn taps(self) -> u8 {
        match self {
            TapLevel::Double => 2,
            TapLevel::Triple => 3,
        }
    }
}

/// One source-to-target translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyMapping {
    pub source: Key,
    pub target: Key,
    /// Emit the target bracketed by a shift press/release
    pub needs_shift: bool,
}

impl KeyMapping {
    pub const fn new(source: Key, target: Key, needs_shift: bool) -> Self {
        Self {
            source,
            target,
            needs_shift,
        }
    }
}

/// Ordered list of mappings for one tap level.
///
/// Lookup is first-match, so a duplicated source key always resolves to
/// the earliest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTable {
    mappings: Vec<KeyMapping>,
}

impl KeyTable {
    pub fn new(mappings: Vec<KeyMapping>) -> Self {
        Self { mappings }
    }

    pub fn mappings(&self) -> &[KeyMapping] {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// First mapping whose source is `key`
    pub fn lookup(&self, key: Key) -> Option<&KeyMapping> {
        self.mappings.iter().find(|m| m.source == key)
    }
}

impl FromIterator<KeyMapping> for KeyTable {
    fn from_iter<I: IntoIterator<Item = KeyMapping>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Read-only set of key tables, one per tap level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRegistry {
    tables: IndexMap<TapLevel, KeyTable>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style insert, replacing any table already set for `level`
    pub fn with_table(mut self, level: TapLevel, table: KeyTable) -> Self {
        self.tables.insert(level, table);
        self
    }

    pub fn table(&self, level: TapLevel) -> Option<&KeyTable> {
        self.tables.get(&level)
    }

    /// Iterate tables by tap level, double first
    pub fn tables(&self) -> impl Iterator<Item = (TapLevel, &KeyTable)> {
        TapLevel::iter().filter_map(|level| Some((level, self.tables.get(&level)?)))
    }

    /// Look up `key` in the table for `level`.
    ///
    /// Returns `None` when the level has no table or no entry matches.
    pub fn lookup(&self, level: TapLevel, key: Key) -> Option<&KeyMapping> {
        self.tables.get(&level)?.lookup(key)
    }

    /// Every key the synthetic device must be able to emit: all targets plus shift.
    ///
    /// Sorted and deduplicated.
    pub fn output_keys(&self) -> SmallVec<[Key; 32]> {
        let mut keys: SmallVec<[Key; 32]> = self
            .tables
            .values()
            .flat_map(|table| table.mappings().iter().map(|m| m.target))
            .collect();
        keys.push(Key::LEFT_SHIFT);
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}
