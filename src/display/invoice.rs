//! Invoice summary formatting

use crate::models::{LineItem, Money};

/// Format line items and their precomputed total as a table
pub fn format_line_items(items: &[LineItem], total: Money, currency: &str) -> String {
    let amounts: Vec<String> = items
        .iter()
        .map(|item| item.amount.format_with_symbol(currency))
        .collect();
    let total_text = total.format_with_symbol(currency);

    let desc_width = items
        .iter()
        .map(|item| item.description.chars().count())
        .max()
        .unwrap_or(0)
        .max("Description".len());
    let amount_width = amounts
        .iter()
        .map(String::len)
        .chain([total_text.len(), "Amount".len()])
        .max()
        .unwrap_or(6);

    let mut output = format!(
        "{:<desc_width$}  {:>amount_width$}\n{:-<desc_width$}  {:->amount_width$}\n",
        "Description", "Amount", "", "",
    );
    for (item, amount) in items.iter().zip(&amounts) {
        output.push_str(&format!(
            "{:<desc_width$}  {:>amount_width$}\n",
            item.description, amount
        ));
    }
    output.push_str(&format!(
        "{:-<desc_width$}  {:->amount_width$}\n{:<desc_width$}  {:>amount_width$}\n",
        "", "", "Total:", total_text,
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::items_total;

    #[test]
    fn test_line_item_table() {
        let items = vec![
            LineItem::new("Design", Money::from_cents(50000)),
            LineItem::new("Development", Money::from_cents(125050)),
        ];
        let output = format_line_items(&items, items_total(&items).unwrap(), "$");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Description    Amount");
        assert_eq!(lines[2], "Design        $500.00");
        assert_eq!(lines[3], "Development  $1250.50");
        assert_eq!(lines[5], "Total:       $1750.50");
    }

    #[test]
    fn test_empty_items() {
        let output = format_line_items(&[], Money::zero(), "$");
        assert!(output.ends_with("Total:        $0.00\n"));
    }
}
