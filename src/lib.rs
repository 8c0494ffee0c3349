//! GigForge - invoices, proposals and promo images for freelancers
//!
//! This library turns raw quote and billing input into finished documents:
//! a priced quote, a Markdown proposal, a single-page PDF invoice and a PNG
//! promo image. Renderers return the document bytes in memory; writing them
//! is up to the caller.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, line items, proposal contexts and rendered documents
//! - `services`: Pricing, gig quotes and proposal assembly
//! - `templates`: The proposal template environment
//! - `render`: PDF invoice and PNG promo renderers
//! - `history`: Log of generated documents
//! - `cli`, `display`, `logging`: The `gigforge` command-line front end
//!
//! # Example
//!
//! ```rust,ignore
//! use gigforge::models::{LineItem, Money};
//! use gigforge::render::render_invoice;
//!
//! let items = vec![LineItem::new("Design", Money::from_cents(50000))];
//! let pdf = render_invoice(&items, "Acme", "Website")?;
//! std::fs::write("invoice.pdf", pdf.bytes())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod history;
pub mod logging;
pub mod models;
pub mod render;
pub mod services;
pub mod templates;

pub use error::{GigForgeError, GigForgeResult};
