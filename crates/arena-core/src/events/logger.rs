//! Event Logger
//!
//! Append-only JSONL event logging.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use arena_events::ArenaEvent;

/// Writes one JSON object per event line
pub struct EventLogger {
    writer: Option<BufWriter<File>>,
    event_count: u64,
}

impl EventLogger {
    /// Create a new event logger writing to the specified path
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            event_count: 0,
        })
    }

    /// Create a logger that discards events (for testing)
    pub fn null() -> Self {
        Self {
            writer: None,
            event_count: 0,
        }
    }

    /// Get the current event count
    pub fn event_count(&self) -> u64 {
        self.event_count
    }

    /// Log an event to the file
    pub fn log(&mut self, event: &ArenaEvent) -> std::io::Result<()> {
        self.event_count += 1;
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(event)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    /// Log multiple events
    pub fn log_batch(&mut self, events: &[ArenaEvent]) -> std::io::Result<()> {
        for event in events {
            self.log(event)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for EventLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to flush event logger: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_events::{EventKind, SnakeRole};

    #[test]
    fn test_null_logger_counts() {
        let mut logger = EventLogger::null();
        logger.log(&ArenaEvent::new(1, EventKind::Reset)).unwrap();
        assert_eq!(logger.event_count(), 1);
    }

    #[test]
    fn test_writes_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        {
            let mut logger = EventLogger::new(&path).unwrap();
            logger
                .log_batch(&[
                    ArenaEvent::new(0, EventKind::Reset),
                    ArenaEvent::new(4, EventKind::PowerupExpired { snake: SnakeRole::Player }),
                ])
                .unwrap();
            assert_eq!(logger.event_count(), 2);
        }
        let content = std::fs::read_to_string(&path).unwrap();
        let events: Vec<ArenaEvent> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].tick, 4);
        assert_eq!(events[1].kind, EventKind::PowerupExpired { snake: SnakeRole::Player });
    }
}
