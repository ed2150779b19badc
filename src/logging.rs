//! Event log injected into the game. Writes timestamped lines to a file
//! so the simulation can be traced without touching the TUI's screen;
//! the default logger is a no-op.

use anyhow::Result;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default)]
pub struct EventLog {
    file: Option<File>,
}

impl EventLog {
    /// Disabled log: every call is a no-op.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Log appending to `path`, created if missing.
    pub fn to_file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file: Some(file) })
    }

    #[allow(dead_code)]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Write one timestamped line. Write errors are swallowed: losing a
    /// log line must never take the game down mid-tick.
    pub fn event(&mut self, message: &str) {
        if let Some(file) = self.file.as_mut() {
            let stamp = Local::now().format("%H:%M:%S%.3f");
            let _ = writeln!(file, "[{stamp}] {message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_log_is_a_noop() {
        let mut log = EventLog::disabled();
        assert!(!log.is_enabled());
        log.event("ignored");
    }

    #[test]
    fn file_log_appends_lines() {
        let path = std::env::temp_dir().join(format!("swaptui-log-{}", std::process::id()));
        let mut log = EventLog::to_file(&path).unwrap();
        assert!(log.is_enabled());
        log.event("combo scored");
        log.event("fall settled");
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("combo scored"));
        let _ = std::fs::remove_file(&path);
    }
}
