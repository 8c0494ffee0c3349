//! Writing rendered documents and recording them

use std::io::Write;
use std::path::Path;

use super::CliContext;
use crate::error::{GigForgeError, GigForgeResult};
use crate::history::HistoryEntry;
use crate::models::{Money, RenderedDocument};

/// Where a document should go
#[derive(Debug, Clone, Copy)]
pub enum Destination<'a> {
    Stdout,
    File(&'a Path),
}

impl<'a> Destination<'a> {
    pub fn from_option(path: Option<&'a Path>) -> Self {
        path.map_or(Destination::Stdout, Destination::File)
    }

    fn label(&self) -> Option<String> {
        match self {
            Destination::Stdout => None,
            Destination::File(path) => Some(path.display().to_string()),
        }
    }
}

/// Write `doc` to its destination, then append it to the history log
///
/// A failure to record history is logged and does not fail the command; the
/// document has already been written by then.
pub fn deliver(
    ctx: &CliContext,
    doc: &RenderedDocument,
    destination: Destination<'_>,
    subject: &str,
    total: Option<Money>,
) -> GigForgeResult<()> {
    write_document(doc, destination)?;

    let mut entry = HistoryEntry::for_document(doc, subject, destination.label());
    if let Some(total) = total {
        entry = entry.with_total(total);
    }
    if let Err(e) = record(ctx, &entry) {
        tracing::warn!(error = %e, "could not record history");
    }

    Ok(())
}

fn write_document(doc: &RenderedDocument, destination: Destination<'_>) -> GigForgeResult<()> {
    match destination {
        Destination::File(path) => {
            std::fs::write(path, doc.bytes()).map_err(|e| {
                GigForgeError::Io(format!("Failed to write {}: {}", path.display(), e))
            })?;
            tracing::info!(path = %path.display(), bytes = doc.len(), "wrote {}", doc.kind());
        }
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(doc.bytes())?;
            if doc.kind().is_text() && !doc.bytes().ends_with(b"\n") {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

fn record(ctx: &CliContext, entry: &HistoryEntry) -> GigForgeResult<()> {
    ctx.paths.ensure_directories()?;
    ctx.history.log(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GigForgePaths;
    use crate::models::DocumentKind;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> CliContext {
        CliContext::with_paths(GigForgePaths::with_base_dir(temp_dir.path().join("data"))).unwrap()
    }

    #[test]
    fn test_deliver_to_file_records_history() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        let out = temp_dir.path().join("invoice.pdf");
        let doc = RenderedDocument::new(DocumentKind::Invoice, b"%PDF-1.5".to_vec());

        deliver(
            &ctx,
            &doc,
            Destination::File(&out),
            "Acme / Website",
            Some(Money::from_cents(100)),
        )
        .unwrap();

        assert_eq!(std::fs::read(&out).unwrap(), b"%PDF-1.5");
        let entries = ctx.history.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].output.as_deref(), Some(out.display().to_string().as_str()));
        assert_eq!(entries[0].total, Some(Money::from_cents(100)));
    }

    #[test]
    fn test_unwritable_destination() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        let out = temp_dir.path().join("missing-dir").join("out.png");
        let doc = RenderedDocument::new(DocumentKind::Promo, vec![1]);

        let err = deliver(&ctx, &doc, Destination::File(&out), "Promo", None).unwrap_err();
        assert!(matches!(err, GigForgeError::Io(_)));
        assert!(!ctx.history.exists());
    }

    #[test]
    fn test_destination_from_option() {
        assert!(matches!(Destination::from_option(None), Destination::Stdout));
        let path = Path::new("a.pdf");
        assert_eq!(Destination::from_option(Some(path)).label().as_deref(), Some("a.pdf"));
    }
}
