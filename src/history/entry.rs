//! History entry data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{DocumentKind, Money, RenderedDocument};

/// A single generated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,

    /// When the document was written (UTC)
    pub timestamp: DateTime<Utc>,

    pub kind: DocumentKind,

    /// Who or what the document is about, e.g. "Acme / Website"
    pub subject: String,

    /// Output file, or `None` when written to stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Size of the serialized document
    pub bytes: usize,

    /// Invoice total or quoted price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Money>,
}

impl HistoryEntry {
    /// Record for a document that was just rendered
    pub fn for_document(
        doc: &RenderedDocument,
        subject: impl Into<String>,
        output: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind: doc.kind(),
            subject: subject.into(),
            output,
            bytes: doc.len(),
            total: None,
        }
    }

    /// Attach a money amount
    pub fn with_total(mut self, total: Money) -> Self {
        self.total = Some(total);
        self
    }

    /// Output location for display
    pub fn destination(&self) -> &str {
        self.output.as_deref().unwrap_or("<stdout>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_document() {
        let doc = RenderedDocument::new(DocumentKind::Invoice, vec![0; 42]);
        let entry = HistoryEntry::for_document(&doc, "Acme / Website", Some("out.pdf".into()))
            .with_total(Money::from_cents(60000));

        assert_eq!(entry.kind, DocumentKind::Invoice);
        assert_eq!(entry.bytes, 42);
        assert_eq!(entry.destination(), "out.pdf");
        assert_eq!(entry.total, Some(Money::from_cents(60000)));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let doc = RenderedDocument::text(DocumentKind::Proposal, "# Hi".into());
        let entry = HistoryEntry::for_document(&doc, "Client / Project", None);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"kind\":\"proposal\""));
        assert!(!json.contains("output"));
        assert!(!json.contains("total"));
        assert_eq!(entry.destination(), "<stdout>");

        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
