use std::ffi::OsString;
use std::path::PathBuf;

use crate::file;
use crate::provider::ConfigProvider;
use crate::types::ConfigLocation;

/// App name the platform has always used for its config file.
pub const DEFAULT_APP_NAME: &str = "magma-playout";

/// Builder for a [`ConfigProvider`].
///
/// Controls where the config file is looked for:
///
/// - [`app_name()`](Self::app_name) names the file (`.{app_name}.conf` under `Home`).
/// - [`location()`](Self::location) picks the directory or an explicit file.
/// - [`env_var()`](Self::env_var) / [`no_env()`](Self::no_env) control the
///   environment variable that, when set, replaces a `Home` or `Platform`
///   location with a file path. An explicit `Path` location is kept.
pub struct ConfigProviderBuilder {
    app_name: String,
    location: ConfigLocation,
    env_var: Option<String>,
    env_enabled: bool,
}

impl ConfigProviderBuilder {
    pub(crate) fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            location: ConfigLocation::default(),
            env_var: None,
            env_enabled: true,
        }
    }

    /// Set the application name (default: `"magma-playout"`). This derives:
    /// - the file name → `".{app_name}.conf"` (or `"{app_name}.conf"` for `Platform`)
    /// - the env var → `"{APP_NAME}_CONFIG"` (uppercased, `-` becomes `_`)
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = name.to_string();
        self
    }

    /// Set where the config file lives (default: [`ConfigLocation::Home`]).
    pub fn location(mut self, location: ConfigLocation) -> Self {
        self.location = location;
        self
    }

    /// Override the name of the path override variable. The variable is
    /// consulted only for `Home` and `Platform` locations.
    pub fn env_var(mut self, name: &str) -> Self {
        self.env_var = Some(name.to_string());
        self
    }

    /// Ignore the environment when locating the config file.
    pub fn no_env(mut self) -> Self {
        self.env_enabled = false;
        self
    }

    /// Resolve the effective env var name (None if env disabled).
    fn effective_env_var(&self) -> Option<String> {
        if !self.env_enabled {
            return None;
        }
        if let Some(name) = &self.env_var {
            return Some(name.clone());
        }
        Some(format!(
            "{}_CONFIG",
            self.app_name.to_uppercase().replace('-', "_")
        ))
    }

    /// Resolve the effective location given the env var's value, if any.
    /// An explicit [`ConfigLocation::Path`] always wins; otherwise a non-empty
    /// value replaces the configured location.
    fn effective_location(&self, env_value: Option<OsString>) -> ConfigLocation {
        match (&self.location, env_value) {
            (ConfigLocation::Path(_), _) => self.location.clone(),
            (_, Some(value)) if !value.is_empty() => ConfigLocation::Path(PathBuf::from(value)),
            _ => self.location.clone(),
        }
    }

    /// Resolve the config path and build an uninitialized provider.
    pub fn build(self) -> ConfigProvider {
        let env_value = self.effective_env_var().and_then(std::env::var_os);
        let location = self.effective_location(env_value);
        let path = file::resolve_config_path(&location, &self.app_name);
        ConfigProvider::new(path)
    }
}
