//! The configuration provider: one-time load, then typed reads.
//!
//! [`ConfigProvider::init`] runs the whole load sequence once:
//!
//! 1. Start from the compiled defaults
//! 2. Read the config file and overlay every recognized key it sets
//! 3. If the file is missing, create it with the defaults (documented)
//! 4. On any I/O failure keep the defaults and warn once
//!
//! Initialization never fails. The resolved store is published through a
//! `OnceLock`, so concurrent first calls run the sequence once and later calls
//! return the same store without logging again.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{Level, debug};

use crate::builder::ConfigProviderBuilder;
use crate::error::ConfigError;
use crate::file;
use crate::keys::ConfigKey;
use crate::log::LogSink;
use crate::ops;
use crate::resolve;
use crate::schema::PlayoutConfig;
use crate::store::ConfigStore;

static INSTANCE: OnceLock<ConfigProvider> = OnceLock::new();
static UNINITIALIZED: ConfigStore = ConfigStore::empty();

/// Process configuration for the playout platform.
///
/// Build one with [`ConfigProvider::builder()`] and pass it to consumers, or
/// use the process-wide [`ConfigProvider::instance()`]. Call
/// [`init()`](Self::init) before reading: until then string accessors return
/// `""`, path accessors an empty path, and integer accessors
/// [`ConfigError::KeyNotFound`].
#[derive(Debug)]
pub struct ConfigProvider {
    path: Option<PathBuf>,
    store: OnceLock<ConfigStore>,
}

impl ConfigProvider {
    pub fn builder() -> ConfigProviderBuilder {
        ConfigProviderBuilder::new()
    }

    pub(crate) fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            store: OnceLock::new(),
        }
    }

    /// The process-wide provider, built with default builder settings on first
    /// call.
    pub fn instance() -> &'static ConfigProvider {
        INSTANCE.get_or_init(|| ConfigProvider::builder().build())
    }

    /// Load the configuration. Only the first call does any work.
    pub fn init(&self, sink: &dyn LogSink) -> &ConfigStore {
        self.store.get_or_init(|| load_store(self.path.as_deref(), sink))
    }

    pub fn is_initialized(&self) -> bool {
        self.store.get().is_some()
    }

    /// The config file path, or `None` when it could not be resolved.
    pub fn config_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The resolved store, or an empty one before [`init()`](Self::init).
    pub fn store(&self) -> &ConfigStore {
        self.store.get().unwrap_or(&UNINITIALIZED)
    }

    /// Every value coerced to its declared type, failing on the first value
    /// that does not coerce.
    pub fn settings(&self) -> Result<PlayoutConfig, ConfigError> {
        resolve::to_settings(self.store())
    }

    /// Log every resolved key at info level. Keys without a value print empty.
    pub fn print_config(&self, sink: &dyn LogSink) {
        let path = self
            .path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        sink.log(
            Level::INFO,
            format_args!("Loaded configuration: -------------------------------------"),
        );
        sink.log(Level::INFO, format_args!("config_path: {path}"));
        let store = self.store();
        for key in ConfigKey::ALL {
            sink.log(Level::INFO, format_args!("{key}: {}", store.text(key)));
        }
        sink.log(
            Level::INFO,
            format_args!("-----------------------------------------------------------"),
        );
    }

    fn text(&self, key: ConfigKey) -> &str {
        self.store().text(key)
    }

    fn path_of(&self, key: ConfigKey) -> &Path {
        Path::new(self.text(key))
    }

    // -- Redis ------------------------------------------------------------------

    pub fn redis_host(&self) -> &str {
        self.text(ConfigKey::RedisHost)
    }

    pub fn redis_port(&self) -> Result<u16, ConfigError> {
        self.store().parse(ConfigKey::RedisPort)
    }

    pub fn redis_pccp_channel(&self) -> &str {
        self.text(ConfigKey::RedisPccpChannel)
    }

    pub fn redis_fscp_channel(&self) -> &str {
        self.text(ConfigKey::RedisFscpChannel)
    }

    pub fn redis_pcr_channel(&self) -> &str {
        self.text(ConfigKey::RedisPcrChannel)
    }

    pub fn redis_msta_channel(&self) -> &str {
        self.text(ConfigKey::RedisMstaChannel)
    }

    /// Milliseconds.
    pub fn redis_reconnection_timeout(&self) -> Result<u64, ConfigError> {
        self.store().parse(ConfigKey::RedisReconnectionTimeout)
    }

    // -- Melted -----------------------------------------------------------------

    pub fn melted_host(&self) -> &str {
        self.text(ConfigKey::MeltedHost)
    }

    pub fn melted_port(&self) -> Result<u16, ConfigError> {
        self.store().parse(ConfigKey::MeltedPort)
    }

    /// Milliseconds.
    pub fn melted_reconnection_timeout(&self) -> Result<u64, ConfigError> {
        self.store().parse(ConfigKey::MeltedReconnectionTimeout)
    }

    pub fn melted_reconnection_tries(&self) -> Result<u32, ConfigError> {
        self.store().parse(ConfigKey::MeltedReconnectionTries)
    }

    /// Minutes.
    pub fn melted_playlist_max_duration(&self) -> Result<u32, ConfigError> {
        self.store().parse(ConfigKey::MeltedPlaylistMaxDuration)
    }

    /// Minutes.
    pub fn melted_appender_worker_freq(&self) -> Result<u32, ConfigError> {
        self.store().parse(ConfigKey::MeltedAppenderWorkerFreq)
    }

    pub fn melt_path(&self) -> &Path {
        self.path_of(ConfigKey::MeltPath)
    }

    pub fn default_media_path(&self) -> &Path {
        self.path_of(ConfigKey::DefaultMediaPath)
    }

    pub fn mlt_spacers_path(&self) -> &Path {
        self.path_of(ConfigKey::MltSpacersPath)
    }

    /// Timeout for melt XML generation, in milliseconds.
    pub fn melt_xml_timeout(&self) -> Result<u64, ConfigError> {
        self.store().parse(ConfigKey::MeltXmlTimeout)
    }

    // -- HTTP endpoints ---------------------------------------------------------

    pub fn filter_server_host(&self) -> &str {
        self.text(ConfigKey::FilterServerHost)
    }

    pub fn playout_api_base_url(&self) -> &str {
        self.text(ConfigKey::PlayoutApiUrl)
    }

    pub fn admin_api_base_url(&self) -> &str {
        self.text(ConfigKey::AdminApiUrl)
    }

    // -- Media and transcoding --------------------------------------------------

    pub fn medias_fps(&self) -> Result<u32, ConfigError> {
        self.store().parse(ConfigKey::MediasFps)
    }

    pub fn devourer_input_dir(&self) -> &Path {
        self.path_of(ConfigKey::DevourerInputDir)
    }

    pub fn devourer_output_dir(&self) -> &Path {
        self.path_of(ConfigKey::DevourerOutputDir)
    }

    pub fn devourer_media_dir(&self) -> &Path {
        self.path_of(ConfigKey::DevourerMediaDir)
    }

    pub fn devourer_thumb_dir(&self) -> &Path {
        self.path_of(ConfigKey::DevourerThumbDir)
    }

    pub fn devourer_ffmpeg_args(&self) -> &str {
        self.text(ConfigKey::DevourerFfmpegArgs)
    }

    pub fn devourer_ffmpeg_path(&self) -> &Path {
        self.path_of(ConfigKey::DevourerFfmpegPath)
    }

    pub fn devourer_ffprobe_path(&self) -> &Path {
        self.path_of(ConfigKey::DevourerFfprobePath)
    }

    pub fn devourer_melt_path(&self) -> &Path {
        self.path_of(ConfigKey::DevourerMeltPath)
    }

    pub fn gui_thumb_dir(&self) -> &Path {
        self.path_of(ConfigKey::GuiThumbDir)
    }
}

/// Run the load sequence. Emits at most one warning through `sink`.
fn load_store(path: Option<&Path>, sink: &dyn LogSink) -> ConfigStore {
    let Some(path) = path else {
        warn_defaults(sink, "<unresolved>", &ConfigError::HomeDirUnavailable);
        return ConfigStore::defaults();
    };
    debug!(path = %path.display(), "Loading configuration");

    match file::read_config(path) {
        Ok(Some(content)) => resolve::resolve(Some(&content)),
        Ok(None) => {
            match file::create_config(path, &ops::generate_template()) {
                Ok(()) => sink.log(
                    Level::WARN,
                    format_args!(
                        "Configuration file not found at {}. Created it with default values.",
                        path.display()
                    ),
                ),
                Err(e) => warn_defaults(sink, &path.display().to_string(), &e),
            }
            ConfigStore::defaults()
        }
        Err(e) => {
            warn_defaults(sink, &path.display().to_string(), &e);
            ConfigStore::defaults()
        }
    }
}

fn warn_defaults(sink: &dyn LogSink, path: &str, error: &ConfigError) {
    sink.log(
        Level::WARN,
        format_args!(
            "Failed reading/writing the configuration file {path} ({error}). Continuing with default values."
        ),
    );
}
