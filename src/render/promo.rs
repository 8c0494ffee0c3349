//! Promo image rendering
//!
//! Draws a centred title and subtitle plus a brand footer on a solid
//! background and encodes the result as PNG.

use std::io::Cursor;

use chrono::{Datelike, Local};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};

use super::fonts::FontSources;
use crate::error::{GigForgeError, GigForgeResult};
use crate::models::{DocumentKind, RenderedDocument};

pub const DEFAULT_BACKGROUND: Rgb<u8> = Rgb([6, 4, 10]);
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 630;
pub const DEFAULT_BRAND: &str = "NightAnvil";

/// Largest canvas, in pixels, a promo image may have (8192x8192)
pub const MAX_CANVAS_PIXELS: u64 = 8192 * 8192;

pub const TITLE_SIZE: f32 = 72.0;
pub const SUBTITLE_SIZE: f32 = 36.0;

pub const TITLE_COLOR: Rgb<u8> = Rgb([234, 246, 255]);
pub const SUBTITLE_COLOR: Rgb<u8> = Rgb([139, 92, 246]);
pub const FOOTER_COLOR: Rgb<u8> = Rgb([153, 163, 179]);

const TITLE_TOP: f32 = 0.22;
const SUBTITLE_TOP: f32 = 0.42;
const FOOTER_LEFT: i32 = 20;
const FOOTER_FROM_BOTTOM: i32 = 40;

/// Canvas, brand and font candidates for a promo image
#[derive(Debug, Clone, PartialEq)]
pub struct PromoStyle {
    pub background: Rgb<u8>,
    pub width: u32,
    pub height: u32,
    pub brand: String,
    pub fonts: FontSources,
}

impl Default for PromoStyle {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            brand: DEFAULT_BRAND.to_string(),
            fonts: FontSources::system(),
        }
    }
}

/// Check that a `width` x `height` canvas is non-empty and within
/// [`MAX_CANVAS_PIXELS`]
pub fn check_canvas(width: u32, height: u32) -> GigForgeResult<()> {
    let pixels = u64::from(width) * u64::from(height);
    if pixels == 0 {
        return Err(GigForgeError::Validation(format!(
            "Promo canvas must not be empty, got {}x{}",
            width, height
        )));
    }
    if pixels > MAX_CANVAS_PIXELS {
        return Err(GigForgeError::Validation(format!(
            "Promo canvas {}x{} exceeds the {} pixel limit",
            width, height, MAX_CANVAS_PIXELS
        )));
    }
    Ok(())
}

/// Footer line, e.g. "NightAnvil • 2026"
pub fn footer_text(brand: &str, year: i32) -> String {
    format!("{} • {}", brand, year)
}

/// Draw the promo canvas for `year`
pub fn compose_promo(
    title: &str,
    subtitle: &str,
    style: &PromoStyle,
    year: i32,
) -> GigForgeResult<RgbImage> {
    check_canvas(style.width, style.height)?;

    let mut canvas = RgbImage::from_pixel(style.width, style.height, style.background);
    let title_face = style.fonts.bold_face(TITLE_SIZE);
    let body_face = style.fonts.regular_face(SUBTITLE_SIZE);
    tracing::debug!(
        title_face = title_face.is_preferred(),
        body_face = body_face.is_preferred(),
        "resolved promo fonts"
    );

    let width = style.width as i32;
    let height = style.height as f32;
    let centred = |text_width: u32| (width - text_width as i32) / 2;

    title_face.draw(
        &mut canvas,
        centred(title_face.text_width(title)),
        (height * TITLE_TOP) as i32,
        title,
        TITLE_COLOR,
    );
    body_face.draw(
        &mut canvas,
        centred(body_face.text_width(subtitle)),
        (height * SUBTITLE_TOP) as i32,
        subtitle,
        SUBTITLE_COLOR,
    );
    body_face.draw(
        &mut canvas,
        FOOTER_LEFT,
        style.height as i32 - FOOTER_FROM_BOTTOM,
        &footer_text(&style.brand, year),
        FOOTER_COLOR,
    );

    Ok(canvas)
}

/// Render a promo image stamped with the current year
pub fn render_promo(title: &str, subtitle: &str, style: &PromoStyle) -> GigForgeResult<RenderedDocument> {
    render_promo_in_year(title, subtitle, style, Local::now().year())
}

/// Render a promo image stamped with `year`
pub fn render_promo_in_year(
    title: &str,
    subtitle: &str,
    style: &PromoStyle,
    year: i32,
) -> GigForgeResult<RenderedDocument> {
    let canvas = compose_promo(title, subtitle, style, year)?;

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(canvas).write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;

    tracing::info!(
        width = style.width,
        height = style.height,
        bytes = bytes.len(),
        "rendered promo"
    );
    Ok(RenderedDocument::new(DocumentKind::Promo, bytes))
}
