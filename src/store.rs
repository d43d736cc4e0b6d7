//! The resolved mapping from [`ConfigKey`] to text.
//!
//! A [`ConfigStore`] is built once, in a local, and only then handed to the
//! provider. Nothing mutates it afterwards, so readers on any thread see either
//! no store or a complete one.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use toml::{Table, Value};

use crate::error::ConfigError;
use crate::keys::ConfigKey;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// The compiled-in default.
    Default,
    /// A line in the config file.
    File,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Default => f.write_str("default"),
            ValueSource::File => f.write_str("file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    value: String,
    source: ValueSource,
}

/// Resolved configuration values, in [`ConfigKey`] declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigStore {
    values: BTreeMap<ConfigKey, Slot>,
}

impl ConfigStore {
    /// A store holding nothing. Every lookup misses.
    pub const fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// A store holding the compiled default of every key.
    pub fn defaults() -> Self {
        let mut store = Self::empty();
        for key in ConfigKey::ALL {
            store.set(key, key.default_value(), ValueSource::Default);
        }
        store
    }

    pub(crate) fn set(&mut self, key: ConfigKey, value: &str, source: ValueSource) {
        self.values.insert(
            key,
            Slot {
                value: value.to_string(),
                source,
            },
        );
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.values.get(&key).map(|slot| slot.value.as_str())
    }

    /// The value of `key`, or `""` when the store does not hold it.
    pub fn text(&self, key: ConfigKey) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn source(&self, key: ConfigKey) -> Option<ValueSource> {
        self.values.get(&key).map(|slot| slot.source)
    }

    /// Parse the value of `key`, ignoring surrounding whitespace.
    ///
    /// Fails with [`ConfigError::KeyNotFound`] when the store does not hold the
    /// key and with [`ConfigError::InvalidValue`] when the text does not parse.
    pub fn parse<T>(&self, key: ConfigKey) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound(key.name().into()))?;
        raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.name().into(),
            value: raw.into(),
            reason: e.to_string(),
        })
    }

    /// All held values in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (ConfigKey, &str)> {
        self.values
            .iter()
            .map(|(key, slot)| (*key, slot.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Every value as a TOML string, keyed by file name.
    pub fn to_table(&self) -> Table {
        self.entries()
            .map(|(key, value)| (key.name().to_string(), Value::String(value.to_string())))
            .collect()
    }
}
