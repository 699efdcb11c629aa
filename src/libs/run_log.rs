// The append-only audit log.
//
// Every line the installer considers part of the operator-facing record goes
// through `RunLog::log`: it is timestamped, echoed to stdout, and appended to
// the configured sink. The sink is injected so tests can capture the record
// in memory instead of touching the filesystem. Single-threaded use only; no
// rotation, no levels.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Destination for audit-log lines.
pub trait LogSink {
    fn append(&self, line: &str) -> io::Result<()>;
}

/// Appends to a file at a fixed path, creating it on first write. The file
/// is opened per append, matching the "crash leaves a complete record"
/// behavior an installer wants.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LogSink for FileSink {
    fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

/// The installer's audit log: timestamped lines, echoed to stdout and
/// appended to the sink. Write failures propagate; there is no recovery.
pub struct RunLog {
    sink: Box<dyn LogSink>,
}

impl RunLog {
    pub fn to_file(path: impl AsRef<Path>) -> Self {
        Self::with_sink(Box::new(FileSink::new(path)))
    }

    pub fn with_sink(sink: Box<dyn LogSink>) -> Self {
        Self { sink }
    }

    pub fn log(&self, message: &str) -> io::Result<()> {
        let line = format!(
            "[{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            message
        );
        println!("{line}");
        self.sink.append(&line)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::LogSink;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Captures audit-log lines in memory for assertions.
    #[derive(Default)]
    pub struct MemorySink {
        lines: Mutex<Vec<String>>,
    }

    impl MemorySink {
        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl LogSink for MemorySink {
        fn append(&self, line: &str) -> io::Result<()> {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    impl<S: LogSink> LogSink for Arc<S> {
        fn append(&self, line: &str) -> io::Result<()> {
            (**self).append(line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemorySink;
    use super::*;
    use std::fs;
    use std::sync::Arc;

    #[test]
    fn file_sink_appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("installer.log");
        let log = RunLog::to_file(&path);

        log.log("first message").unwrap();
        log.log("second message").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] first message"));
        assert!(lines[1].ends_with("] second message"));
    }

    #[test]
    fn memory_sink_captures_the_record() {
        let sink = Arc::new(MemorySink::default());
        let log = RunLog::with_sink(Box::new(sink.clone()));

        log.log("hello").unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("hello"));
    }
}
