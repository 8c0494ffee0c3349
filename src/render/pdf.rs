//! Single-page PDF writer
//!
//! Layout code produces a list of [`TextRun`]s in page coordinates (points,
//! origin at the bottom-left); this module turns them into a PDF byte stream
//! with lopdf. Nothing touches the filesystem.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use super::helvetica::{encode_win_ansi, string_width};
use crate::error::GigForgeResult;

/// Points per millimetre
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// ISO A4 width in millimetres
pub const A4_WIDTH_MM: f32 = 210.0;

/// ISO A4 height in millimetres
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Convert millimetres to points
pub fn mm(value: f32) -> f32 {
    value * POINTS_PER_MM
}

/// The two standard faces used on generated documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFont {
    Helvetica,
    HelveticaBold,
}

impl PdfFont {
    fn resource_name(&self) -> &'static str {
        match self {
            PdfFont::Helvetica => "F1",
            PdfFont::HelveticaBold => "F2",
        }
    }

    fn base_font(&self) -> &'static str {
        match self {
            PdfFont::Helvetica => "Helvetica",
            PdfFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Width of `text` at `size` points
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        string_width(text, size, matches!(self, PdfFont::HelveticaBold))
    }
}

/// Horizontal anchoring of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `x` is where the text starts
    Left,
    /// `x` is where the text ends
    Right,
}

/// A single line of text placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Anchor x in points
    pub x: f32,
    /// Baseline y in points from the bottom edge
    pub y: f32,
    pub font: PdfFont,
    pub size: f32,
    pub align: Align,
}

impl TextRun {
    pub fn left(text: impl Into<String>, x: f32, y: f32, font: PdfFont, size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font,
            size,
            align: Align::Left,
        }
    }

    pub fn right(text: impl Into<String>, x: f32, y: f32, font: PdfFont, size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font,
            size,
            align: Align::Right,
        }
    }

    /// Width of the run's text
    pub fn width(&self) -> f32 {
        self.font.text_width(&self.text, self.size)
    }

    /// The x coordinate where drawing starts
    pub fn origin_x(&self) -> f32 {
        match self.align {
            Align::Left => self.x,
            Align::Right => self.x - self.width(),
        }
    }

    fn operations(&self) -> [Operation; 5] {
        [
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![self.font.resource_name().into(), self.size.into()],
            ),
            Operation::new("Td", vec![self.origin_x().into(), self.y.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(
                    encode_win_ansi(&self.text),
                    StringFormat::Literal,
                )],
            ),
            Operation::new("ET", vec![]),
        ]
    }
}

/// Serialize one page of text runs to PDF bytes
///
/// `width` and `height` are the page size in points. The output depends only
/// on the arguments, so identical input yields identical bytes.
pub fn write_single_page(
    width: f32,
    height: f32,
    runs: &[TextRun],
    title: &str,
) -> GigForgeResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in [PdfFont::Helvetica, PdfFont::HelveticaBold] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let content: Content<Vec<Operation>> = Content {
        operations: runs.iter().flat_map(TextRun::operations).collect(),
    };
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0_i64.into(), 0_i64.into(), width.into(), height.into()],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1_i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_win_ansi(title)),
        "Producer" => Object::string_literal("GigForge"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Test helpers for reading generated PDFs back
#[cfg(test)]
pub(crate) mod inspect {
    use lopdf::content::Content;
    use lopdf::{Document, Object};

    /// Page count and (font, x, y, text) for every Tj on the first page
    pub fn text_runs(bytes: &[u8]) -> (usize, Vec<(String, f32, f32, String)>) {
        let doc = Document::load_mem(bytes).expect("valid pdf");
        let pages = doc.get_pages();
        let page_id = *pages.values().next().expect("at least one page");
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();

        let mut runs = Vec::new();
        let mut font = String::new();
        let mut pos = (0.0, 0.0);
        for op in content.operations {
            match op.operator.as_str() {
                "Tf" => {
                    font = String::from_utf8_lossy(op.operands[0].as_name().unwrap()).to_string();
                }
                "Td" => pos = (number(&op.operands[0]), number(&op.operands[1])),
                "Tj" => {
                    if let Object::String(bytes, _) = &op.operands[0] {
                        runs.push((
                            font.clone(),
                            pos.0,
                            pos.1,
                            String::from_utf8_lossy(bytes).to_string(),
                        ));
                    }
                }
                _ => {}
            }
        }
        (pages.len(), runs)
    }

    fn number(obj: &Object) -> f32 {
        match obj {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r as f32,
            other => panic!("not a number: {:?}", other),
        }
    }
}
