//! Config file location and I/O.
//!
//! # Location
//!
//! A [`ConfigLocation`] resolves to one concrete file path:
//!
//! - `Home`: `{home}/.{app_name}.conf`, the historical location.
//! - `Platform`: `{platform config dir}/{app_name}.conf`.
//! - `Path(path)`: the path itself.
//!
//! Resolution returns `None` when the home directory cannot be determined.
//!
//! # Reading and creating
//!
//! [`read_config`] distinguishes "not there" (`Ok(None)`) from every other
//! failure, which the provider needs to decide between creating the file and
//! falling back to defaults. [`create_config`] never replaces an existing
//! file; [`write_config`] does, for explicitly requested output.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::ConfigLocation;

/// File name used by a location, e.g. `.magma-playout.conf` for `Home`.
pub fn file_name(location: &ConfigLocation, app_name: &str) -> Option<String> {
    match location {
        ConfigLocation::Home => Some(format!(".{app_name}.conf")),
        ConfigLocation::Platform => Some(format!("{app_name}.conf")),
        ConfigLocation::Path(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
    }
}

/// Resolve a [`ConfigLocation`] to a concrete file path.
pub fn resolve_config_path(location: &ConfigLocation, app_name: &str) -> Option<PathBuf> {
    match location {
        ConfigLocation::Home => {
            let user = directories::UserDirs::new()?;
            Some(user.home_dir().join(file_name(location, app_name)?))
        }
        ConfigLocation::Platform => {
            let proj = directories::ProjectDirs::from("", "", app_name)?;
            Some(proj.config_dir().join(file_name(location, app_name)?))
        }
        ConfigLocation::Path(path) => Some(path.clone()),
    }
}

/// Read the config file. A missing file is `Ok(None)`; I/O errors and
/// non-UTF-8 content are errors.
pub fn read_config(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Create the config file with `content`. Creates parent directories as
/// needed and fails if the file already exists.
pub fn create_config(path: &Path, content: &str) -> Result<(), ConfigError> {
    ensure_parent(path)?;

    let io_err = |e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    };
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)
}

/// Write `content` to `path`, replacing any existing file. Creates parent
/// directories as needed.
pub fn write_config(path: &Path, content: &str) -> Result<(), ConfigError> {
    ensure_parent(path)?;
    std::fs::write(path, content).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn ensure_parent(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}
