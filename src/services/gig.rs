//! Gig quotes
//!
//! Short plain-text blurbs for a marketplace listing: a priced outline and an
//! offline description generator.

use crate::models::Money;

/// Priced gig outline
pub fn gig_outline(title: &str, price: Money) -> String {
    format!(
        "{}\n\nPrice: {}\n\nBrief: I will deliver a high-quality {}.",
        title, price, title
    )
}

/// Selling points listed in generated gig descriptions
pub const GIG_SELLING_POINTS: [&str; 3] = ["Fast delivery", "High-quality", "Revisions included"];

/// Generate a gig description with a bulleted list of selling points
///
/// `bullets` caps how many selling points are listed.
pub fn gig_description(title: &str, bullets: usize) -> String {
    let mut text = format!("{}\n\nI will craft an elite {}. Key points:", title, title);
    for point in GIG_SELLING_POINTS.iter().take(bullets) {
        text.push_str("\n- ");
        text.push_str(point);
    }
    text
}
