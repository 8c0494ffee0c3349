//! Invoice line item model

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{GigForgeError, GigForgeResult};

/// One billable entry on an invoice
///
/// Any finite amount is accepted, including zero and negative values
/// (discounts, refunds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// What is being billed
    #[serde(alias = "desc")]
    pub description: String,

    /// Amount billed for this entry
    pub amount: Money,
}

impl LineItem {
    /// Create a new line item
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// Sum of line item amounts, accumulated in the order given
///
/// Fails with a validation error when the sum leaves the decimal range.
pub fn items_total(items: &[LineItem]) -> GigForgeResult<Money> {
    items.iter().try_fold(Money::zero(), |total, item| {
        total.checked_add(item.amount).ok_or_else(|| {
            GigForgeError::Validation(format!(
                "Invoice total overflows after adding \"{}\"",
                item.description
            ))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new() {
        let item = LineItem::new("Design", Money::new(dec!(500)));
        assert_eq!(item.description, "Design");
        assert_eq!(item.amount, Money::from_cents(50000));
    }

    #[test]
    fn test_total_includes_negative_amounts() {
        let items = vec![
            LineItem::new("Design", Money::new(dec!(500))),
            LineItem::new("Discount", Money::new(dec!(-50.25))),
            LineItem::new("Hosting", Money::zero()),
        ];
        assert_eq!(items_total(&items).unwrap(), Money::new(dec!(449.75)));
    }

    #[test]
    fn test_total_of_nothing_is_zero() {
        assert!(items_total(&[]).unwrap().is_zero());
    }

    #[test]
    fn test_total_overflow_is_validation_error() {
        let items = vec![
            LineItem::new("A", Money::new(rust_decimal::Decimal::MAX)),
            LineItem::new("B", Money::from_cents(100)),
        ];
        let err = items_total(&items).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("\"B\""));
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"[{"description": "Dev", "amount": 1200.5}, {"description": "QA", "amount": "80"}]"#;
        let items: Vec<LineItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].amount, Money::new(dec!(1200.50)));
        assert_eq!(items[1].amount, Money::new(dec!(80)));
    }

    #[test]
    fn test_deserialize_short_description_key() {
        let item: LineItem = serde_json::from_str(r#"{"desc": "Logo", "amount": 150}"#).unwrap();
        assert_eq!(item.description, "Logo");
        assert_eq!(item.amount, Money::from_cents(15000));
    }
}
