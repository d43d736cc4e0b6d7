//! Core resolution pipeline: overlay the config file on the defaults.
//!
//! Operates on already-read file content with no I/O, so the whole pipeline
//! is testable with synthetic input. Steps:
//!
//! 1. Start from the compiled defaults
//! 2. Parse the file content as `key=value` lines
//! 3. Overwrite the default of every recognized key the file sets (last line wins)
//! 4. Skip unrecognized keys
//!
//! [`to_settings`] then turns a resolved store into the typed [`PlayoutConfig`].

use confique::Config;
use toml::Value;
use tracing::debug;

use crate::error::ConfigError;
use crate::keys::ConfigKey;
use crate::properties;
use crate::schema::PlayoutConfig;
use crate::store::{ConfigStore, ValueSource};

/// Resolve the store from the config file content, or from defaults alone
/// when there is no content.
pub fn resolve(content: Option<&str>) -> ConfigStore {
    let mut store = ConfigStore::defaults();
    let Some(content) = content else {
        return store;
    };

    for (name, value) in properties::parse(content) {
        match ConfigKey::from_name(&name) {
            Some(key) => store.set(key, &value, ValueSource::File),
            None => debug!(key = %name, "Ignoring unrecognized configuration key"),
        }
    }

    let missing: Vec<&str> = ConfigKey::ALL
        .into_iter()
        .filter(|key| store.source(*key) == Some(ValueSource::Default))
        .map(ConfigKey::name)
        .collect();
    if !missing.is_empty() {
        debug!(keys = ?missing, "Configuration file does not set these keys, using defaults");
    }

    store
}

/// Coerce every value of `store` to its declared type in one pass.
pub fn to_settings(store: &ConfigStore) -> Result<PlayoutConfig, ConfigError> {
    let layer: <PlayoutConfig as Config>::Layer = Value::Table(store.to_table())
        .try_into()
        .map_err(|e: toml::de::Error| ConfigError::InvalidConfig {
            reason: e.to_string(),
        })?;

    PlayoutConfig::builder()
        .preloaded(layer)
        .load()
        .map_err(ConfigError::from)
}
