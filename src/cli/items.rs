//! Line item input parsing
//!
//! Items come from repeated `--item "Description:Amount"` flags and/or a JSON
//! file holding an array of `{"description": ..., "amount": ...}` objects.
//!
//! A flag is split at its **last** colon, so descriptions may contain
//! colons ("Phase 1: Design:500") while amounts never do. Commas have no
//! special meaning. Amounts accept an optional `$` and thousands separators.

use std::path::Path;

use crate::error::{GigForgeError, GigForgeResult};
use crate::models::{LineItem, Money};

/// Parse one `Description:Amount` argument
pub fn parse_item_arg(raw: &str) -> GigForgeResult<LineItem> {
    let (description, amount) = raw.rsplit_once(':').ok_or_else(|| {
        GigForgeError::Validation(format!(
            "Invalid item '{}'. Use the form \"Description:Amount\"",
            raw
        ))
    })?;

    let description = description.trim();
    if description.is_empty() {
        return Err(GigForgeError::Validation(format!(
            "Item '{}' has no description",
            raw
        )));
    }

    let amount = Money::parse(amount).map_err(|e| {
        GigForgeError::Validation(format!("Invalid amount in item '{}': {}", raw, e))
    })?;

    Ok(LineItem::new(description, amount))
}

/// Read a JSON array of line items
pub fn load_items_json(path: &Path) -> GigForgeResult<Vec<LineItem>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| GigForgeError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&contents).map_err(|e| {
        GigForgeError::Validation(format!("Invalid items file {}: {}", path.display(), e))
    })
}

/// Items from the JSON file first, then each `--item` in order
pub fn collect_items(args: &[String], json: Option<&Path>) -> GigForgeResult<Vec<LineItem>> {
    let mut items = match json {
        Some(path) => load_items_json(path)?,
        None => Vec::new(),
    };

    for raw in args {
        items.push(parse_item_arg(raw)?);
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn test_parse_simple() {
        let item = parse_item_arg("Design:500").unwrap();
        assert_eq!(item.description, "Design");
        assert_eq!(item.amount, Money::new(dec!(500)));
    }

    #[test]
    fn test_parse_trims_and_accepts_symbols() {
        let item = parse_item_arg("  Logo, print and web : $1,250.50 ").unwrap();
        assert_eq!(item.description, "Logo, print and web");
        assert_eq!(item.amount, Money::new(dec!(1250.50)));
    }

    #[test]
    fn test_description_may_contain_colons() {
        let item = parse_item_arg("Phase 1: Design:500").unwrap();
        assert_eq!(item.description, "Phase 1: Design");
        assert_eq!(item.amount, Money::from_cents(50000));
    }

    #[test]
    fn test_negative_amount() {
        let item = parse_item_arg("Discount:-50").unwrap();
        assert!(item.amount.is_negative());
    }

    #[test]
    fn test_malformed_items_are_rejected() {
        for raw in ["Design", "Design:", ":500", "Design:lots"] {
            let err = parse_item_arg(raw).unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_collect_items_from_json_and_flags() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        std::fs::write(
            &path,
            r#"[{"description": "Design", "amount": 500}, {"desc": "Hosting", "amount": "25.5"}]"#,
        )
        .unwrap();

        let items = collect_items(&["QA:80".to_string()], Some(&path)).unwrap();
        let descriptions: Vec<&str> = items.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Design", "Hosting", "QA"]);
        assert_eq!(items[1].amount, Money::from_cents(2550));
    }

    #[test]
    fn test_collect_nothing() {
        assert!(collect_items(&[], None).unwrap().is_empty());
    }

    #[test]
    fn test_bad_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        std::fs::write(&path, r#"{"description": "not a list"}"#).unwrap();
        assert!(load_items_json(&path).unwrap_err().is_validation());

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            load_items_json(&missing).unwrap_err(),
            GigForgeError::Io(_)
        ));
    }
}
