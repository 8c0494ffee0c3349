//! Document renderers
//!
//! Renderers take fully-resolved inputs and return a [`RenderedDocument`]
//! held in memory. Writing the bytes anywhere is the caller's job.
//!
//! [`RenderedDocument`]: crate::models::RenderedDocument

pub mod bitmap_font;
pub mod fonts;
pub mod helvetica;
pub mod invoice;
pub mod pdf;
pub mod promo;

pub use fonts::{FontFace, FontSources};
pub use invoice::{render_invoice, render_invoice_on, InvoiceLayout};
pub use promo::{footer_text, render_promo, render_promo_in_year, PromoStyle};
