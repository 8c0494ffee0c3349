//! Business logic layer
//!
//! Pure, stateless operations that turn raw user input into the values the
//! renderers consume.

pub mod gig;
pub mod pricing;
pub mod proposal;

pub use gig::{gig_description, gig_outline};
pub use pricing::{calc_price, PriceInputs, DEFAULT_MARGIN};
pub use proposal::{build_proposal_context, build_proposal_context_on, render_proposal};
