//! Generation history for GigForge
//!
//! Every document written by the CLI is recorded in an append-only log so
//! `gigforge history` can list what was generated, when, and for whom.
//!
//! - `HistoryEntry`: one generated document with its kind, subject, output
//!   location and size.
//! - `HistoryLog`: reads and writes entries as line-delimited JSON (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use gigforge::history::{HistoryEntry, HistoryLog};
//!
//! let log = HistoryLog::new(paths.history_log());
//! let entry = HistoryEntry::for_document(&doc, "Acme / Website", Some("invoice.pdf".into()));
//! log.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::HistoryEntry;
pub use logger::HistoryLog;
