//! Typed view of the resolved configuration.
//!
//! [`PlayoutConfig`] mirrors [`ConfigKey`] one field per key. Its `///` doc
//! comments are the comments written above each entry of a generated config
//! file, so the file documentation cannot drift from the code.
//!
//! Values reach the struct as text (the config file has no types), so numeric
//! fields go through [`parse_text`] during deserialization. Every field is
//! required: the resolved store always carries all keys, and a missing one
//! means the struct and [`ConfigKey`] disagree.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use confique::Config;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::keys::ConfigKey;

/// Every setting of the playout platform, coerced to its declared type.
#[derive(Config, Debug, Clone, PartialEq)]
pub struct PlayoutConfig {
    /// Hostname of the Redis server used for inter-process messaging.
    pub redis_server_hostname: String,

    /// Port of the Redis server.
    #[config(deserialize_with = port)]
    pub redis_server_port: u16,

    /// Channel for playout commands.
    pub redis_pccp_channel: String,

    /// Channel for filesystem change notifications.
    pub redis_fscp_channel: String,

    /// Channel for playlist change requests.
    pub redis_pcr_channel: String,

    /// Channel for media status broadcasts.
    pub redis_msta_channel: String,

    /// Delay between Redis reconnection attempts, in milliseconds.
    #[config(deserialize_with = millis)]
    pub redis_reconnection_timeout: u64,

    /// Hostname of the Melted server.
    pub melted_server_hostname: String,

    /// Port of the Melted server.
    #[config(deserialize_with = port)]
    pub melted_server_port: u16,

    /// Delay between Melted reconnection attempts, in milliseconds.
    #[config(deserialize_with = millis)]
    pub melted_reconnection_timeout: u64,

    /// Number of Melted reconnection attempts (0 retries forever).
    #[config(deserialize_with = count)]
    pub melted_reconnection_tries: u32,

    /// Length of the playlist kept loaded in Melted, in minutes.
    ///
    /// Keeps Melted from being overloaded with appended clips.
    #[config(deserialize_with = count)]
    pub melted_playlist_max_duration: u32,

    /// Polling interval of the Melted appender worker, in minutes.
    #[config(deserialize_with = count)]
    pub melted_appender_worker_freq: u32,

    /// Path to the melt executable.
    pub melt_path: PathBuf,

    /// MLT XML file played when nothing else is loaded.
    pub default_media_path: PathBuf,

    /// Directory holding the MLT spacer clips.
    pub mlt_spacers_path: PathBuf,

    /// URL of the page rendered by the filter server.
    pub filter_server_hostname: String,

    /// Timeout for melt XML generation, in milliseconds.
    #[config(deserialize_with = millis)]
    pub bash_timeout_ms: u64,

    /// Base URL of the playout REST API.
    pub playout_api_url: String,

    /// Base URL of the admin REST API.
    pub admin_api_url: String,

    /// Frame rate of the media library.
    #[config(deserialize_with = count)]
    pub medias_fps: u32,

    /// Directory the transcoder watches for new files.
    pub devourer_input_dir: PathBuf,

    /// Directory the transcoder writes intermediate output to.
    pub devourer_output_dir: PathBuf,

    /// Directory transcoded media is moved to.
    pub devourer_media_dir: PathBuf,

    /// Directory transcoder thumbnails are written to.
    pub devourer_thumb_dir: PathBuf,

    /// Arguments passed to ffmpeg when transcoding.
    pub devourer_ffmpeg_args: String,

    /// Path to the ffmpeg executable.
    pub devourer_ffmpeg_path: PathBuf,

    /// Path to the ffprobe executable.
    pub devourer_ffprobe_path: PathBuf,

    /// Path to the melt executable used by the transcoder.
    pub devourer_melt_path: PathBuf,

    /// Thumbnail directory as seen by the web GUI.
    pub gui_thumb_dir: PathBuf,
}

/// Deserialize a text value and parse it with `FromStr`.
///
/// Surrounding whitespace is ignored. The error names the offending text.
pub fn parse_text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let text = String::deserialize(deserializer)?;
    text.trim()
        .parse()
        .map_err(|e| D::Error::custom(format!("'{text}': {e}")))
}

fn port<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    parse_text(deserializer)
}

fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    parse_text(deserializer)
}

fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    parse_text(deserializer)
}

/// Doc comment lines for a key, taken from [`PlayoutConfig`]'s field docs.
pub fn doc_for(key: ConfigKey) -> Vec<String> {
    PlayoutConfig::META
        .fields
        .iter()
        .find(|field| field.name == key.name())
        .map(|field| field.doc.iter().map(|line| line.trim().to_string()).collect())
        .unwrap_or_default()
}
