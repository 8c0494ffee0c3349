//! Price calculation
//!
//! A billable price is either a fixed fee or hours × rate, marked up by a
//! margin and rounded half-up to cents. No validation is performed: negative
//! inputs produce negative prices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Markup applied when none is given (20%)
pub const DEFAULT_MARGIN: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Inputs to a price calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceInputs {
    pub hours: Decimal,
    pub rate: Decimal,
    /// Fixed fee; when present, hours and rate are ignored
    pub fixed: Option<Decimal>,
    /// Fractional markup (0.2 = 20%)
    pub margin: Decimal,
}

impl Default for PriceInputs {
    fn default() -> Self {
        Self {
            hours: Decimal::ZERO,
            rate: Decimal::ZERO,
            fixed: None,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl PriceInputs {
    /// Hourly inputs with the default margin
    pub fn hourly(hours: Decimal, rate: Decimal) -> Self {
        Self {
            hours,
            rate,
            ..Self::default()
        }
    }

    /// Fixed-fee inputs with the default margin
    pub fn fixed(fee: Decimal) -> Self {
        Self {
            fixed: Some(fee),
            ..Self::default()
        }
    }

    /// Override the margin
    pub fn with_margin(mut self, margin: Decimal) -> Self {
        self.margin = margin;
        self
    }

    /// Base amount before markup
    pub fn base(&self) -> Decimal {
        match self.fixed {
            Some(fee) => fee,
            None => self.hours.saturating_mul(self.rate),
        }
    }

    /// Final rounded price
    pub fn price(&self) -> Money {
        calc_price(self.hours, self.rate, self.fixed, self.margin)
    }
}

/// Compute `round(base * (1 + margin), 2)` where base is `fixed` if present,
/// otherwise `hours * rate`
pub fn calc_price(hours: Decimal, rate: Decimal, fixed: Option<Decimal>, margin: Decimal) -> Money {
    let base = match fixed {
        Some(fee) => fee,
        None => hours.saturating_mul(rate),
    };
    let multiplier = Decimal::ONE.saturating_add(margin);
    Money::new(base.saturating_mul(multiplier)).round_cents()
}
