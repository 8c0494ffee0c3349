//! Core data models for GigForge
//!
//! This module contains the data structures shared by the pricing, proposal
//! and rendering layers: money, invoice line items, proposal contexts and
//! rendered documents.

pub mod document;
pub mod line_item;
pub mod money;
pub mod proposal;

pub use document::{DocumentKind, RenderedDocument};
pub use line_item::{items_total, LineItem};
pub use money::{Money, MoneyParseError};
pub use proposal::{ProposalContext, ProposalRequest};
