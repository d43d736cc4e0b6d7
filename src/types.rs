use std::path::PathBuf;

/// Where the config file lives.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfigLocation {
    /// A dotfile in the user's home directory: `~/.{app_name}.conf`.
    #[default]
    Home,
    /// The platform config directory (XDG on Linux, ~/Library/Application Support
    /// on macOS): `{config_dir}/{app_name}.conf`.
    Platform,
    /// An explicit file path.
    Path(PathBuf),
}

/// A read-only config operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    List,
    Get { key: String },
    Gen { output: Option<PathBuf> },
    Path,
}
