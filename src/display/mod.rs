//! Display formatting for terminal output
//!
//! Plain-text tables for the summaries the CLI prints after generating a
//! document and for the history listing.

pub mod history;
pub mod invoice;

pub use history::format_history_list;
pub use invoice::format_line_items;
