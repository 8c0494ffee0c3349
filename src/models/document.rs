//! Rendered document model
//!
//! Every generator returns a [`RenderedDocument`]: the serialized bytes plus
//! the kind of document and its MIME type. Writing the bytes anywhere is the
//! caller's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of documents GigForge produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// PDF invoice
    Invoice,
    /// PNG promo image
    Promo,
    /// Markdown proposal
    Proposal,
    /// Plain-text gig quote
    Quote,
}

impl DocumentKind {
    /// MIME type of documents of this kind
    pub fn mime(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "application/pdf",
            DocumentKind::Promo => "image/png",
            DocumentKind::Proposal => "text/markdown",
            DocumentKind::Quote => "text/plain",
        }
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "pdf",
            DocumentKind::Promo => "png",
            DocumentKind::Proposal => "md",
            DocumentKind::Quote => "txt",
        }
    }

    /// Whether the bytes are printable text
    pub fn is_text(&self) -> bool {
        matches!(self, DocumentKind::Proposal | DocumentKind::Quote)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Invoice => write!(f, "Invoice"),
            DocumentKind::Promo => write!(f, "Promo"),
            DocumentKind::Proposal => write!(f, "Proposal"),
            DocumentKind::Quote => write!(f, "Quote"),
        }
    }
}

/// An immutable, fully serialized document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    kind: DocumentKind,
    bytes: Vec<u8>,
}

impl RenderedDocument {
    /// Wrap serialized bytes of the given kind
    pub fn new(kind: DocumentKind, bytes: Vec<u8>) -> Self {
        Self { kind, bytes }
    }

    /// Wrap a text document (proposal, quote)
    pub fn text(kind: DocumentKind, text: String) -> Self {
        Self::new(kind, text.into_bytes())
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Declared MIME type
    pub fn mime(&self) -> &'static str {
        self.kind.mime()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Take ownership of the serialized bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(DocumentKind::Invoice.mime(), "application/pdf");
        assert_eq!(DocumentKind::Promo.mime(), "image/png");
        assert_eq!(DocumentKind::Proposal.mime(), "text/markdown");
    }

    #[test]
    fn test_text_document() {
        let doc = RenderedDocument::text(DocumentKind::Proposal, "# Hi".to_string());
        assert_eq!(doc.mime(), "text/markdown");
        assert_eq!(doc.len(), 4);
        assert!(doc.kind().is_text());
        assert_eq!(doc.into_bytes(), b"# Hi".to_vec());
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&DocumentKind::Promo).unwrap();
        assert_eq!(json, "\"promo\"");
    }
}
