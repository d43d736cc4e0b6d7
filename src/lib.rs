//! Configuration provider for the Magma playout platform.
//!
//! Every process of the platform (the playout engine talking to Melted, the
//! playlist proxy, the devourer transcoding worker, the REST APIs) reads its
//! settings from one file: `~/.magma-playout.conf`. This crate resolves that
//! file against compiled defaults and hands out typed values.
//!
//! ```ignore
//! let provider = ConfigProvider::builder().build();
//! provider.init(&TracingSink);
//! let port = provider.melted_port()?;
//! ```
//!
//! # File format
//!
//! One `key=value` per line, `#` comments, values taken verbatim to end of
//! line. No sections, quoting or escaping:
//!
//! ```text
//! # Magma Playout Configuration File
//! redis_server_hostname=localhost
//! redis_server_port=6379
//! ```
//!
//! Keys the file does not set fall back to their compiled default. Keys the
//! provider does not recognize are ignored.
//!
//! # Load sequence
//!
//! [`ConfigProvider::init`] runs once:
//!
//! - **File present**: each recognized key it sets overrides the default.
//! - **File missing**: a documented file holding every default is created,
//!   so the next run has something to edit. A warning says so.
//! - **Anything else** (unreadable file, unwritable directory, no home
//!   directory): the defaults stay in effect and one warning says so.
//!
//! Initialization never fails and logs at most one warning. An existing file
//! is never rewritten, so keys introduced by a later version are not added to
//! it; they resolve to their default.
//!
//! # Typed access
//!
//! Values are stored as text. Accessors coerce at the boundary:
//!
//! - hostnames, channels and URLs → `&str`
//! - paths → `&Path`
//! - ports, timeouts and counts → `Result<u16 | u32 | u64, ConfigError>`
//!
//! A value that does not coerce (`redis_server_port=not-a-number`, a negative
//! port) fails that accessor with [`ConfigError::InvalidValue`]; the others are
//! unaffected. [`ConfigProvider::settings`] coerces everything at once into a
//! [`PlayoutConfig`], reporting the first bad value.
//!
//! # Location
//!
//! [`ConfigLocation::Home`] (default) is `~/.{app_name}.conf`.
//! [`ConfigLocation::Platform`] uses the platform config directory and
//! [`ConfigLocation::Path`] an explicit file. The `MAGMA_PLAYOUT_CONFIG`
//! environment variable, when set, replaces `Home` or `Platform` with its
//! value. An explicit `Path` is never replaced; see
//! [`ConfigProviderBuilder`] to rename or disable it.
//!
//! # Logging
//!
//! Warnings from `init` and the dump from `print_config` go through a
//! [`LogSink`] supplied by the caller. [`TracingSink`] forwards to `tracing`;
//! tests pass a sink that records messages.

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod file;
mod keys;
mod log;
mod ops;
mod properties;
mod provider;
mod resolve;
mod schema;
mod store;

#[cfg(test)]
mod fixtures;

pub use builder::{ConfigProviderBuilder, DEFAULT_APP_NAME};
#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use error::ConfigError;
pub use keys::ConfigKey;
pub use log::{LogSink, TracingSink};
pub use ops::{ConfigResult, HEADER, generate_template, handle};
pub use provider::ConfigProvider;
pub use schema::PlayoutConfig;
pub use store::{ConfigStore, ValueSource};
pub use types::{ConfigAction, ConfigLocation};
