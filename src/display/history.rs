//! History display formatting

use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::history::HistoryEntry;

/// Human-readable byte size
fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Local timestamp in `date_format`, or ISO when the format is invalid
fn format_when(local: &DateTime<Local>, date_format: &str) -> String {
    let mut date = String::new();
    if write!(date, "{}", local.format(date_format)).is_err() {
        date = local.format("%Y-%m-%d").to_string();
    }
    format!("{} {}", date, local.format("%H:%M"))
}

fn format_row<S: AsRef<str>>(cells: &[S; 6], widths: &[usize; 6]) -> String {
    format!(
        "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}  {:>w4$}  {}\n",
        cells[0].as_ref(),
        cells[1].as_ref(),
        cells[2].as_ref(),
        cells[3].as_ref(),
        cells[4].as_ref(),
        cells[5].as_ref(),
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
        w4 = widths[4],
    )
}

/// Format history entries as a table, oldest first
///
/// Timestamps are shown in local time using `date_format` followed by the
/// time of day.
pub fn format_history_list(entries: &[HistoryEntry], date_format: &str, currency: &str) -> String {
    if entries.is_empty() {
        return "No documents generated yet.".to_string();
    }

    let rows: Vec<[String; 6]> = entries
        .iter()
        .map(|entry| {
            let local = entry.timestamp.with_timezone(&Local);
            [
                format_when(&local, date_format),
                entry.kind.to_string(),
                entry.subject.clone(),
                entry
                    .total
                    .map(|t| t.format_with_symbol(currency))
                    .unwrap_or_default(),
                format_size(entry.bytes),
                entry.destination().to_string(),
            ]
        })
        .collect();

    let headers = ["When", "Kind", "Subject", "Total", "Size", "Output"];
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = format_row(&headers, &widths);
    output.push_str(&format!(
        "{}\n",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    ));
    for row in &rows {
        output.push_str(&format_row(row, &widths));
    }

    output.push_str(&format!("\n{} document(s)\n", entries.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentKind, Money, RenderedDocument};

    #[test]
    fn test_empty_history() {
        assert_eq!(
            format_history_list(&[], "%Y-%m-%d", "$"),
            "No documents generated yet."
        );
    }

    #[test]
    fn test_history_table() {
        let invoice = RenderedDocument::new(DocumentKind::Invoice, vec![0; 2048]);
        let promo = RenderedDocument::new(DocumentKind::Promo, vec![0; 10]);
        let entries = vec![
            HistoryEntry::for_document(&invoice, "Acme / Website", Some("invoice.pdf".into()))
                .with_total(Money::from_cents(60000)),
            HistoryEntry::for_document(&promo, "Logo Design", None),
        ];

        let output = format_history_list(&entries, "%Y-%m-%d", "$");
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("When"));
        assert!(lines[1].starts_with("----"));
        assert!(lines[2].contains("Invoice"));
        assert!(lines[2].contains("$600.00"));
        assert!(lines[2].contains("2.0 KB"));
        assert!(lines[2].ends_with("invoice.pdf"));
        assert!(lines[3].contains("Promo"));
        assert!(lines[3].contains("10 B"));
        assert!(lines[3].ends_with("<stdout>"));
        assert!(output.ends_with("2 document(s)\n"));
    }

    #[test]
    fn test_invalid_date_format_falls_back_to_iso() {
        let promo = RenderedDocument::new(DocumentKind::Promo, vec![0; 10]);
        let entry = HistoryEntry::for_document(&promo, "Logo Design", None);
        let expected = entry
            .timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string();

        let output = format_history_list(&[entry], "%Q", "$");
        assert!(output.lines().nth(2).unwrap().starts_with(&expected));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
