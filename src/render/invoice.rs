//! Invoice rendering
//!
//! An invoice is always a single A4 page:
//!
//! ```text
//!  30mm  INVOICE                               (bold 16)
//!  40mm  To: {client}                          (10)
//!  46mm  Project: {project}
//!  52mm  Date: {yyyy-mm-dd}
//!  70mm  Description            Amount         (bold 11)
//!  +8mm  {item}                         $0.00  (10, amount right edge at 200mm)
//!  ...
//!  +5mm  Total:                         $0.00  (bold 12)
//! ```
//!
//! Vertical offsets are measured from the top edge; every left-aligned run is
//! indented 30mm. Rows are never paginated, so very long invoices run off the
//! bottom of the page.

use chrono::{Local, NaiveDate};

use super::pdf::{mm, write_single_page, PdfFont, TextRun, A4_HEIGHT_MM, A4_WIDTH_MM};
use crate::error::GigForgeResult;
use crate::models::{items_total, DocumentKind, LineItem, Money, RenderedDocument};

const LEFT_MM: f32 = 30.0;
const AMOUNT_HEADER_MM: f32 = 140.0;
const AMOUNT_RIGHT_MM: f32 = 200.0;

const TITLE_TOP_MM: f32 = 30.0;
const CLIENT_TOP_MM: f32 = 40.0;
const PROJECT_TOP_MM: f32 = 46.0;
const DATE_TOP_MM: f32 = 52.0;
const TABLE_TOP_MM: f32 = 70.0;
const ROW_STEP_MM: f32 = 8.0;
const TOTAL_GAP_MM: f32 = 5.0;

const TITLE_SIZE: f32 = 16.0;
const DETAIL_SIZE: f32 = 10.0;
const TABLE_HEADER_SIZE: f32 = 11.0;
const ROW_SIZE: f32 = 10.0;
const TOTAL_SIZE: f32 = 12.0;

/// Positioned text for one invoice page, plus the computed total
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLayout {
    pub runs: Vec<TextRun>,
    /// Sum of all item amounts, in input order
    pub total: Money,
    /// Number of item rows laid out
    pub rows: usize,
}

impl InvoiceLayout {
    /// Page width in points
    pub fn page_width() -> f32 {
        mm(A4_WIDTH_MM)
    }

    /// Page height in points
    pub fn page_height() -> f32 {
        mm(A4_HEIGHT_MM)
    }

    /// Lay out an invoice dated `date`
    ///
    /// Fails only when the item amounts sum past the decimal range.
    pub fn build(
        items: &[LineItem],
        client_name: &str,
        project: &str,
        date: NaiveDate,
    ) -> GigForgeResult<Self> {
        let from_top = |offset_mm: f32| Self::page_height() - mm(offset_mm);
        let left = mm(LEFT_MM);
        let right = mm(AMOUNT_RIGHT_MM);

        let mut runs = vec![
            TextRun::left("INVOICE", left, from_top(TITLE_TOP_MM), PdfFont::HelveticaBold, TITLE_SIZE),
            TextRun::left(
                format!("To: {}", client_name),
                left,
                from_top(CLIENT_TOP_MM),
                PdfFont::Helvetica,
                DETAIL_SIZE,
            ),
            TextRun::left(
                format!("Project: {}", project),
                left,
                from_top(PROJECT_TOP_MM),
                PdfFont::Helvetica,
                DETAIL_SIZE,
            ),
            TextRun::left(
                format!("Date: {}", date.format("%Y-%m-%d")),
                left,
                from_top(DATE_TOP_MM),
                PdfFont::Helvetica,
                DETAIL_SIZE,
            ),
        ];

        let mut y = from_top(TABLE_TOP_MM);
        runs.push(TextRun::left("Description", left, y, PdfFont::HelveticaBold, TABLE_HEADER_SIZE));
        runs.push(TextRun::left(
            "Amount",
            mm(AMOUNT_HEADER_MM),
            y,
            PdfFont::HelveticaBold,
            TABLE_HEADER_SIZE,
        ));
        y -= mm(ROW_STEP_MM);

        let total = items_total(items)?;
        for item in items {
            runs.push(TextRun::left(item.description.as_str(), left, y, PdfFont::Helvetica, ROW_SIZE));
            runs.push(TextRun::right(item.amount.to_string(), right, y, PdfFont::Helvetica, ROW_SIZE));
            y -= mm(ROW_STEP_MM);
        }

        let total_y = y - mm(TOTAL_GAP_MM);
        runs.push(TextRun::left("Total:", left, total_y, PdfFont::HelveticaBold, TOTAL_SIZE));
        runs.push(TextRun::right(total.to_string(), right, total_y, PdfFont::HelveticaBold, TOTAL_SIZE));

        Ok(Self {
            runs,
            total,
            rows: items.len(),
        })
    }

    /// The run holding the formatted total
    pub fn total_run(&self) -> Option<&TextRun> {
        self.runs.last()
    }
}

/// Render an invoice dated today (local time) to PDF
pub fn render_invoice(
    items: &[LineItem],
    client_name: &str,
    project: &str,
) -> GigForgeResult<RenderedDocument> {
    render_invoice_on(items, client_name, project, Local::now().date_naive())
}

/// Render an invoice dated `date` to PDF
pub fn render_invoice_on(
    items: &[LineItem],
    client_name: &str,
    project: &str,
    date: NaiveDate,
) -> GigForgeResult<RenderedDocument> {
    let layout = InvoiceLayout::build(items, client_name, project, date)?;
    let bytes = write_single_page(
        InvoiceLayout::page_width(),
        InvoiceLayout::page_height(),
        &layout.runs,
        &format!("Invoice {} - {}", client_name, project),
    )?;

    tracing::info!(
        client = client_name,
        project,
        rows = layout.rows,
        total = %layout.total,
        bytes = bytes.len(),
        "rendered invoice"
    );

    Ok(RenderedDocument::new(DocumentKind::Invoice, bytes))
}
