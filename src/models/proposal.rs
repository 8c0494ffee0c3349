//! Proposal models
//!
//! A [`ProposalRequest`] is the partial input a caller collects (every field
//! optional); a [`ProposalContext`] is the complete field set handed to the
//! proposal template.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Partial proposal input
///
/// Deserializes from any JSON object; unknown keys are ignored and missing
/// keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalRequest {
    pub client: Option<String>,
    pub project: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub deliverables: Option<Vec<String>>,
    pub start_date: Option<NaiveDate>,
    /// Duration in days
    pub duration: Option<u32>,
    /// Explicit price; takes precedence over hours/rate/fixed
    pub price: Option<Decimal>,
    pub hours: Option<Decimal>,
    pub rate: Option<Decimal>,
    pub fixed: Option<Decimal>,
    pub revisions: Option<u32>,
}

/// Complete proposal data, ready for template substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalContext {
    pub client: String,
    pub project: String,
    pub author: String,
    /// Date the proposal was issued
    pub date: NaiveDate,
    pub summary: String,
    pub deliverables: Vec<String>,
    pub start_date: NaiveDate,
    /// Duration in days
    pub duration: u32,
    pub price: Money,
    pub revisions: u32,
}
