#[cfg(test)]
pub mod test {
    use std::fmt;
    use std::sync::Mutex;

    use tracing::Level;

    use crate::log::LogSink;

    /// A [`LogSink`] that keeps every message for later assertions.
    #[derive(Default)]
    pub struct RecordingSink {
        entries: Mutex<Vec<(Level, String)>>,
    }

    impl RecordingSink {
        pub fn entries(&self) -> Vec<(Level, String)> {
            self.entries.lock().unwrap().clone()
        }

        /// Messages logged at exactly `level`.
        pub fn at(&self, level: Level) -> Vec<String> {
            self.entries()
                .into_iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, message)| message)
                .collect()
        }
    }

    impl LogSink for RecordingSink {
        fn log(&self, level: Level, message: fmt::Arguments<'_>) {
            self.entries.lock().unwrap().push((level, message.to_string()));
        }
    }

    #[test]
    fn records_in_order() {
        let sink = RecordingSink::default();
        sink.log(Level::WARN, format_args!("first {}", 1));
        sink.log(Level::INFO, format_args!("second"));

        assert_eq!(
            sink.entries(),
            vec![
                (Level::WARN, "first 1".to_string()),
                (Level::INFO, "second".to_string())
            ]
        );
        assert_eq!(sink.at(Level::INFO), vec!["second".to_string()]);
    }
}
