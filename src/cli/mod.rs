//! CLI command handlers
//!
//! Bridges clap argument parsing with the services and renderers. Each
//! handler renders a document, hands it to [`output::deliver`], and records
//! it in the history log.

pub mod history;
pub mod invoice;
pub mod items;
pub mod output;
pub mod price;
pub mod promo;
pub mod proposal;
pub mod setup;

pub use history::{handle_history_command, HistoryArgs};
pub use invoice::{handle_invoice_command, InvoiceArgs};
pub use price::{handle_gig_command, handle_price_command, GigArgs, PriceArgs};
pub use promo::{handle_promo_command, PromoArgs};
pub use proposal::{handle_proposal_command, ProposalArgs};
pub use setup::{handle_config_command, handle_init_command};

use crate::config::{GigForgePaths, Settings};
use crate::error::GigForgeResult;
use crate::history::HistoryLog;
use crate::templates::TemplateEnvironment;

/// Everything a command handler needs, resolved once at startup
#[derive(Debug)]
pub struct CliContext {
    pub paths: GigForgePaths,
    pub settings: Settings,
    pub history: HistoryLog,
    pub templates: TemplateEnvironment,
}

impl CliContext {
    /// Resolve paths from the environment and load settings
    pub fn load() -> GigForgeResult<Self> {
        Self::with_paths(GigForgePaths::new()?)
    }

    pub fn with_paths(paths: GigForgePaths) -> GigForgeResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let history = HistoryLog::new(paths.history_log());
        let templates = TemplateEnvironment::with_override_dir(paths.templates_dir());
        tracing::debug!(
            base_dir = %paths.base_dir().display(),
            initialized = paths.is_initialized(),
            "loaded configuration"
        );

        Ok(Self {
            paths,
            settings,
            history,
            templates,
        })
    }
}
