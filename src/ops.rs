//! Config operations: template generation, key lookup, listing, and result types.
//!
//! Provides the logic behind `list`, `get`, `gen` and `path`, and the
//! `ConfigResult` enum that callers use to display results.

use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::file;
use crate::keys::ConfigKey;
use crate::log::LogSink;
use crate::properties::{self, Entry};
use crate::provider::ConfigProvider;
use crate::schema;
use crate::store::{ConfigStore, ValueSource};
use crate::types::ConfigAction;

/// First comment line of a generated config file.
pub const HEADER: &str = "Magma Playout Configuration File";

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// A generated config file.
    Template(String),
    /// Confirmation that a template was written to a file.
    TemplateWritten { path: PathBuf },
    /// A key's resolved value, its doc comment and where the value came from.
    KeyValue {
        key: String,
        value: String,
        doc: Vec<String>,
        source: ValueSource,
    },
    /// All resolved key-value pairs.
    Listing { entries: Vec<(String, String)> },
    /// The config file path, if one could be resolved.
    Path(Option<PathBuf>),
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::Template(t) => write!(f, "{t}"),
            ConfigResult::TemplateWritten { path } => {
                write!(f, "Config template written to {}", path.display())
            }
            ConfigResult::KeyValue {
                key,
                value,
                doc,
                source,
            } => {
                for line in doc {
                    writeln!(f, "# {line}")?;
                }
                writeln!(f, "# ({source})")?;
                write!(f, "{key}={value}")
            }
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key}={value}")?;
                }
                Ok(())
            }
            ConfigResult::Path(Some(path)) => write!(f, "{}", path.display()),
            ConfigResult::Path(None) => write!(f, "<unresolved>"),
        }
    }
}

/// Render a config file holding every default, each entry preceded by the
/// doc comment of its [`PlayoutConfig`](crate::PlayoutConfig) field.
pub fn generate_template() -> String {
    let entries: Vec<Entry> = ConfigKey::ALL
        .into_iter()
        .map(|key| Entry {
            key: key.name().to_string(),
            value: key.default_value().to_string(),
            doc: schema::doc_for(key),
        })
        .collect();
    properties::render(HEADER, &entries)
}

/// Get a resolved value by key name, including its doc comment.
pub fn get_value(store: &ConfigStore, name: &str) -> Result<ConfigResult, ConfigError> {
    let key: ConfigKey = name.parse()?;
    let value = store
        .get(key)
        .ok_or_else(|| ConfigError::KeyNotFound(name.into()))?;
    let source = store
        .source(key)
        .ok_or_else(|| ConfigError::KeyNotFound(name.into()))?;

    Ok(ConfigResult::KeyValue {
        key: key.name().into(),
        value: value.into(),
        doc: schema::doc_for(key),
        source,
    })
}

/// List every recognized key with its resolved value. Keys the store does not
/// hold are listed with an empty value.
pub fn list_values(store: &ConfigStore) -> ConfigResult {
    let entries = ConfigKey::ALL
        .into_iter()
        .map(|key| (key.name().to_string(), store.text(key).to_string()))
        .collect();
    ConfigResult::Listing { entries }
}

/// Run a [`ConfigAction`] against a provider, initializing it first when the
/// action needs resolved values.
pub fn handle(
    provider: &ConfigProvider,
    action: &ConfigAction,
    sink: &dyn LogSink,
) -> Result<ConfigResult, ConfigError> {
    match action {
        ConfigAction::List => Ok(list_values(provider.init(sink))),
        ConfigAction::Get { key } => get_value(provider.init(sink), key),
        ConfigAction::Gen { output } => {
            let template = generate_template();
            match output {
                Some(path) => {
                    file::write_config(path, &template)?;
                    Ok(ConfigResult::TemplateWritten { path: path.clone() })
                }
                None => Ok(ConfigResult::Template(template)),
            }
        }
        ConfigAction::Path => Ok(ConfigResult::Path(
            provider.config_path().map(|p| p.to_path_buf()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::RecordingSink;
    use crate::resolve::resolve;
    use crate::types::ConfigLocation;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn template_starts_with_header() {
        let template = generate_template();
        assert!(template.starts_with("# Magma Playout Configuration File\n"));
    }

    #[test]
    fn template_contains_every_key_and_docs() {
        let template = generate_template();
        for key in ConfigKey::ALL {
            let line = format!("{}={}", key.name(), key.default_value());
            assert!(template.contains(&line), "missing {line}");
        }
        assert!(template.contains("# Port of the Redis server."));
    }

    #[test]
    fn template_parses_back_to_defaults() {
        let store = resolve(Some(&generate_template()));
        for key in ConfigKey::ALL {
            assert_eq!(store.text(key), key.default_value());
            assert_eq!(store.source(key), Some(ValueSource::File));
        }
    }

    #[test]
    fn get_known_key() {
        let store = resolve(Some("redis_server_port=7000\n"));
        match get_value(&store, "redis_server_port").unwrap() {
            ConfigResult::KeyValue {
                value, source, doc, ..
            } => {
                assert_eq!(value, "7000");
                assert_eq!(source, ValueSource::File);
                assert!(doc.join(" ").contains("Redis"));
            }
            other => panic!("Expected KeyValue, got {other:?}"),
        }
    }

    #[test]
    fn get_unknown_key() {
        let store = ConfigStore::defaults();
        let result = get_value(&store, "totally_unused_key");
        assert!(matches!(result, Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn get_from_empty_store() {
        let result = get_value(&ConfigStore::empty(), "medias_fps");
        assert!(matches!(result, Err(ConfigError::KeyNotFound(_))));
    }

    #[test]
    fn list_includes_all_keys() {
        match list_values(&ConfigStore::defaults()) {
            ConfigResult::Listing { entries } => {
                assert_eq!(entries.len(), ConfigKey::ALL.len());
                assert_eq!(entries[0], ("redis_server_hostname".into(), "localhost".into()));
            }
            other => panic!("Expected Listing, got {other:?}"),
        }
    }

    #[test]
    fn list_empty_store_has_blank_values() {
        match list_values(&ConfigStore::empty()) {
            ConfigResult::Listing { entries } => {
                assert_eq!(entries.len(), ConfigKey::ALL.len());
                assert!(entries.iter().all(|(_, v)| v.is_empty()));
            }
            other => panic!("Expected Listing, got {other:?}"),
        }
    }

    #[test]
    fn listing_display_format() {
        let result = ConfigResult::Listing {
            entries: vec![
                ("redis_server_hostname".into(), "localhost".into()),
                ("redis_server_port".into(), "6379".into()),
            ],
        };
        assert_eq!(
            format!("{result}"),
            "redis_server_hostname=localhost\nredis_server_port=6379"
        );
    }

    #[test]
    fn key_value_display_format() {
        let result = ConfigResult::KeyValue {
            key: "medias_fps".into(),
            value: "60".into(),
            doc: vec!["Frame rate of the media library.".into()],
            source: ValueSource::Default,
        };
        assert_eq!(
            format!("{result}"),
            "# Frame rate of the media library.\n# (default)\nmedias_fps=60"
        );
    }

    #[test]
    fn handle_list_initializes_provider() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("playout.conf");
        fs::write(&path, "medias_fps=25\n").unwrap();
        let provider = ConfigProvider::builder()
            .location(ConfigLocation::Path(path))
            .no_env()
            .build();
        let sink = RecordingSink::default();

        let result = handle(&provider, &ConfigAction::List, &sink).unwrap();
        assert!(format!("{result}").contains("medias_fps=25"));
        assert_eq!(provider.medias_fps().unwrap(), 25);
    }

    #[test]
    fn handle_gen_writes_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out").join("sample.conf");
        let provider = ConfigProvider::builder()
            .location(ConfigLocation::Path(dir.path().join("unused.conf")))
            .no_env()
            .build();
        let action = ConfigAction::Gen {
            output: Some(output.clone()),
        };

        let result = handle(&provider, &action, &RecordingSink::default()).unwrap();
        assert_eq!(result, ConfigResult::TemplateWritten { path: output.clone() });
        assert_eq!(fs::read_to_string(&output).unwrap(), generate_template());
        assert!(!dir.path().join("unused.conf").exists());
    }

    #[test]
    fn handle_gen_reports_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let provider = ConfigProvider::builder()
            .location(ConfigLocation::Path(dir.path().join("unused.conf")))
            .no_env()
            .build();
        let action = ConfigAction::Gen {
            output: Some(blocker.join("sample.conf")),
        };

        let result = handle(&provider, &action, &RecordingSink::default());
        assert!(matches!(result, Err(ConfigError::Io { ref path, .. }) if *path == blocker));
    }

    #[test]
    fn handle_path() {
        let path = PathBuf::from("/etc/magma/playout.conf");
        let provider = ConfigProvider::builder()
            .location(ConfigLocation::Path(path.clone()))
            .no_env()
            .build();
        let result = handle(&provider, &ConfigAction::Path, &RecordingSink::default()).unwrap();
        assert_eq!(result, ConfigResult::Path(Some(path)));
    }
}
