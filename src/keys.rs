//! The closed set of recognized configuration keys and their compiled defaults.
//!
//! Every [`ConfigKey`] maps to exactly one on-disk name and one default. The
//! provider never looks up a key outside this enum, so a line in the config
//! file naming anything else is ignored.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A recognized setting.
///
/// Variants are declared in the order they appear in a generated config file
/// and in `print_config` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigKey {
    RedisHost,
    RedisPort,
    RedisPccpChannel,
    RedisFscpChannel,
    RedisPcrChannel,
    RedisMstaChannel,
    RedisReconnectionTimeout,
    MeltedHost,
    MeltedPort,
    MeltedReconnectionTimeout,
    MeltedReconnectionTries,
    MeltedPlaylistMaxDuration,
    MeltedAppenderWorkerFreq,
    MeltPath,
    DefaultMediaPath,
    MltSpacersPath,
    FilterServerHost,
    MeltXmlTimeout,
    PlayoutApiUrl,
    AdminApiUrl,
    MediasFps,
    DevourerInputDir,
    DevourerOutputDir,
    DevourerMediaDir,
    DevourerThumbDir,
    DevourerFfmpegArgs,
    DevourerFfmpegPath,
    DevourerFfprobePath,
    DevourerMeltPath,
    GuiThumbDir,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 30] = [
        ConfigKey::RedisHost,
        ConfigKey::RedisPort,
        ConfigKey::RedisPccpChannel,
        ConfigKey::RedisFscpChannel,
        ConfigKey::RedisPcrChannel,
        ConfigKey::RedisMstaChannel,
        ConfigKey::RedisReconnectionTimeout,
        ConfigKey::MeltedHost,
        ConfigKey::MeltedPort,
        ConfigKey::MeltedReconnectionTimeout,
        ConfigKey::MeltedReconnectionTries,
        ConfigKey::MeltedPlaylistMaxDuration,
        ConfigKey::MeltedAppenderWorkerFreq,
        ConfigKey::MeltPath,
        ConfigKey::DefaultMediaPath,
        ConfigKey::MltSpacersPath,
        ConfigKey::FilterServerHost,
        ConfigKey::MeltXmlTimeout,
        ConfigKey::PlayoutApiUrl,
        ConfigKey::AdminApiUrl,
        ConfigKey::MediasFps,
        ConfigKey::DevourerInputDir,
        ConfigKey::DevourerOutputDir,
        ConfigKey::DevourerMediaDir,
        ConfigKey::DevourerThumbDir,
        ConfigKey::DevourerFfmpegArgs,
        ConfigKey::DevourerFfmpegPath,
        ConfigKey::DevourerFfprobePath,
        ConfigKey::DevourerMeltPath,
        ConfigKey::GuiThumbDir,
    ];

    /// The key as written in the config file.
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::RedisHost => "redis_server_hostname",
            ConfigKey::RedisPort => "redis_server_port",
            ConfigKey::RedisPccpChannel => "redis_pccp_channel",
            ConfigKey::RedisFscpChannel => "redis_fscp_channel",
            ConfigKey::RedisPcrChannel => "redis_pcr_channel",
            ConfigKey::RedisMstaChannel => "redis_msta_channel",
            ConfigKey::RedisReconnectionTimeout => "redis_reconnection_timeout",
            ConfigKey::MeltedHost => "melted_server_hostname",
            ConfigKey::MeltedPort => "melted_server_port",
            ConfigKey::MeltedReconnectionTimeout => "melted_reconnection_timeout",
            ConfigKey::MeltedReconnectionTries => "melted_reconnection_tries",
            ConfigKey::MeltedPlaylistMaxDuration => "melted_playlist_max_duration",
            ConfigKey::MeltedAppenderWorkerFreq => "melted_appender_worker_freq",
            ConfigKey::MeltPath => "melt_path",
            ConfigKey::DefaultMediaPath => "default_media_path",
            ConfigKey::MltSpacersPath => "mlt_spacers_path",
            ConfigKey::FilterServerHost => "filter_server_hostname",
            ConfigKey::MeltXmlTimeout => "bash_timeout_ms",
            ConfigKey::PlayoutApiUrl => "playout_api_url",
            ConfigKey::AdminApiUrl => "admin_api_url",
            ConfigKey::MediasFps => "medias_fps",
            ConfigKey::DevourerInputDir => "devourer_input_dir",
            ConfigKey::DevourerOutputDir => "devourer_output_dir",
            ConfigKey::DevourerMediaDir => "devourer_media_dir",
            ConfigKey::DevourerThumbDir => "devourer_thumb_dir",
            ConfigKey::DevourerFfmpegArgs => "devourer_ffmpeg_args",
            ConfigKey::DevourerFfmpegPath => "devourer_ffmpeg_path",
            ConfigKey::DevourerFfprobePath => "devourer_ffprobe_path",
            ConfigKey::DevourerMeltPath => "devourer_melt_path",
            ConfigKey::GuiThumbDir => "gui_thumb_dir",
        }
    }

    /// The compiled-in default, used whenever the file does not set the key.
    pub fn default_value(self) -> &'static str {
        match self {
            ConfigKey::RedisHost => "localhost",
            ConfigKey::RedisPort => "6379",
            ConfigKey::RedisPccpChannel => "PCCP",
            ConfigKey::RedisFscpChannel => "FSCP",
            ConfigKey::RedisPcrChannel => "PCR",
            ConfigKey::RedisMstaChannel => "MSTA",
            ConfigKey::RedisReconnectionTimeout => "1000",
            ConfigKey::MeltedHost => "localhost",
            ConfigKey::MeltedPort => "5250",
            ConfigKey::MeltedReconnectionTimeout => "1000",
            ConfigKey::MeltedReconnectionTries => "0",
            ConfigKey::MeltedPlaylistMaxDuration => "120",
            ConfigKey::MeltedAppenderWorkerFreq => "5",
            ConfigKey::MeltPath => "/usr/bin/melt/melt",
            ConfigKey::DefaultMediaPath => "/usr/local/share/magma-playout/default.mlt",
            ConfigKey::MltSpacersPath => "/usr/local/share/magma-playout/spacers/",
            ConfigKey::FilterServerHost => "http://localhost:3001/filter-banner.html",
            ConfigKey::MeltXmlTimeout => "5000",
            ConfigKey::PlayoutApiUrl => "http://localhost:8001/api/",
            ConfigKey::AdminApiUrl => "http://localhost:8080/api/",
            ConfigKey::MediasFps => "60",
            ConfigKey::DevourerInputDir => "/var/lib/magma-playout/devourer/input/",
            ConfigKey::DevourerOutputDir => "/var/lib/magma-playout/devourer/output/",
            ConfigKey::DevourerMediaDir => "/var/lib/magma-playout/medias/",
            ConfigKey::DevourerThumbDir => "/var/lib/magma-playout/thumbnails/",
            ConfigKey::DevourerFfmpegArgs => "-f avi -c:v libx264 -qp 0",
            ConfigKey::DevourerFfmpegPath => "/usr/bin/ffmpeg",
            ConfigKey::DevourerFfprobePath => "/usr/bin/ffprobe",
            ConfigKey::DevourerMeltPath => "/usr/bin/melt",
            ConfigKey::GuiThumbDir => "/assets/img/media-thumbnails/",
        }
    }

    /// Look up a key by its on-disk name.
    pub fn from_name(name: &str) -> Option<ConfigKey> {
        ConfigKey::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::from_name(s).ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = ConfigKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), ConfigKey::ALL.len());
    }

    #[test]
    fn all_is_in_declaration_order() {
        let mut sorted = ConfigKey::ALL;
        sorted.sort();
        assert_eq!(sorted, ConfigKey::ALL);
    }

    #[test]
    fn from_name_round_trips() {
        for key in ConfigKey::ALL {
            assert_eq!(ConfigKey::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        let result: Result<ConfigKey, _> = "totally_unused_key".parse();
        assert!(matches!(result, Err(ConfigError::UnknownKey(k)) if k == "totally_unused_key"));
    }

    #[test]
    fn display_uses_file_name() {
        assert_eq!(ConfigKey::MeltXmlTimeout.to_string(), "bash_timeout_ms");
    }

    #[test]
    fn numeric_defaults_parse() {
        assert_eq!(ConfigKey::RedisPort.default_value().parse::<u16>().unwrap(), 6379);
        assert_eq!(ConfigKey::MeltedPort.default_value().parse::<u16>().unwrap(), 5250);
        assert_eq!(ConfigKey::MediasFps.default_value().parse::<u32>().unwrap(), 60);
    }
}
