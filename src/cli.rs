//! Clap adapter for magma-config.
//!
//! Compiled only when the `clap` Cargo feature is enabled (on by default).
//! [`ConfigArgs`] can be embedded in any clap `#[derive(Parser)]` struct; the
//! only bridge to the core is [`ConfigArgs::into_action()`], which converts
//! the parsed arguments into a [`ConfigAction`](crate::ConfigAction) that
//! [`handle()`](crate::handle) runs.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::ConfigAction;

/// Clap-derived args for the config subcommand group.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

/// Available config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show every resolved key=value pair.
    List,
    /// Show the resolved value, origin, and documentation of one key.
    Get {
        /// Key name (e.g. "redis_server_port").
        key: String,
    },
    /// Print a documented config file holding every default.
    Gen {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the path of the config file.
    Path,
}

impl ConfigArgs {
    /// Convert clap-parsed args into a framework-agnostic `ConfigAction`.
    ///
    /// Bare invocation (no subcommand) and explicit `list` both map to
    /// `ConfigAction::List`.
    pub fn into_action(self) -> ConfigAction {
        match self.action {
            None | Some(ConfigSubcommand::List) => ConfigAction::List,
            Some(ConfigSubcommand::Get { key }) => ConfigAction::Get { key },
            Some(ConfigSubcommand::Gen { output }) => ConfigAction::Gen { output },
            Some(ConfigSubcommand::Path) => ConfigAction::Path,
        }
    }
}
