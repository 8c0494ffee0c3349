//! Configuration module for GigForge
//!
//! - XDG-compliant path resolution
//! - User settings persistence (brand, defaults, fonts, promo canvas)

pub mod paths;
pub mod settings;

pub use paths::GigForgePaths;
pub use settings::{FontSettings, PromoSettings, Settings};
