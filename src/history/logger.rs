//! Append-only history log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{GigForgeError, GigForgeResult};

use super::entry::HistoryEntry;

/// Reads and appends [`HistoryEntry`] records in a JSONL file
#[derive(Debug, Clone)]
pub struct HistoryLog {
    log_path: PathBuf,
}

impl HistoryLog {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry
    pub fn log(&self, entry: &HistoryEntry) -> GigForgeResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| GigForgeError::History(format!("Failed to open history log: {}", e)))?;

        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)
            .and_then(|_| file.flush())
            .map_err(|e| GigForgeError::History(format!("Failed to write history entry: {}", e)))?;

        tracing::debug!(kind = %entry.kind, subject = %entry.subject, "recorded history entry");
        Ok(())
    }

    /// All entries, oldest first
    pub fn read_all(&self) -> GigForgeResult<Vec<HistoryEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| GigForgeError::History(format!("Failed to open history log: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                GigForgeError::History(format!("Failed to read history line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                GigForgeError::History(format!(
                    "Failed to parse history entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> GigForgeResult<Vec<HistoryEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of non-empty lines in the log
    pub fn entry_count(&self) -> GigForgeResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| GigForgeError::History(format!("Failed to open history log: {}", e)))?;

        Ok(BufReader::new(file)
            .lines()
            .map_while(Result::ok)
            .filter(|line| !line.trim().is_empty())
            .count())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentKind, Money, RenderedDocument};
    use tempfile::TempDir;

    fn create_test_log() -> (HistoryLog, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log = HistoryLog::new(temp_dir.path().join("history.log"));
        (log, temp_dir)
    }

    fn entry(subject: &str) -> HistoryEntry {
        let doc = RenderedDocument::new(DocumentKind::Invoice, vec![1, 2, 3]);
        HistoryEntry::for_document(&doc, subject, Some("invoice.pdf".into()))
            .with_total(Money::from_cents(1050))
    }

    #[test]
    fn test_log_and_read() {
        let (log, _temp) = create_test_log();
        log.log(&entry("Acme / Website")).unwrap();

        let entries = log.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, DocumentKind::Invoice);
        assert_eq!(entries[0].subject, "Acme / Website");
        assert_eq!(entries[0].total, Some(Money::from_cents(1050)));
    }

    #[test]
    fn test_read_recent() {
        let (log, _temp) = create_test_log();
        for i in 0..10 {
            log.log(&entry(&format!("client-{}", i))).unwrap();
        }

        assert_eq!(log.entry_count().unwrap(), 10);
        let recent = log.read_recent(3).unwrap();
        let subjects: Vec<&str> = recent.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, vec!["client-7", "client-8", "client-9"]);
        assert_eq!(log.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_empty_log() {
        let (log, _temp) = create_test_log();
        assert!(!log.exists());
        assert_eq!(log.entry_count().unwrap(), 0);
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (log, _temp) = create_test_log();
        log.log(&entry("a")).unwrap();
        let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
        writeln!(file).unwrap();
        log.log(&entry("b")).unwrap();

        assert_eq!(log.read_all().unwrap().len(), 2);
        assert_eq!(log.entry_count().unwrap(), 2);
    }

    #[test]
    fn test_corrupt_line_is_reported() {
        let (log, _temp) = create_test_log();
        std::fs::write(log.path(), "{not json}\n").unwrap();
        let err = log.read_all().unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_survives_restart() {
        let (log, temp) = create_test_log();
        log.log(&entry("Acme")).unwrap();

        let reopened = HistoryLog::new(temp.path().join("history.log"));
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }
}
