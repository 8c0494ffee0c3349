//! History command

use clap::Args;

use super::CliContext;
use crate::display::format_history_list;
use crate::error::GigForgeResult;

/// Arguments for `history`
#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

/// Handle `history`: list recently generated documents
pub fn handle_history_command(ctx: &CliContext, args: HistoryArgs) -> GigForgeResult<()> {
    let entries = ctx.history.read_recent(args.limit)?;
    print!(
        "{}",
        format_history_list(&entries, &ctx.settings.date_format, &ctx.settings.currency_symbol)
    );
    if entries.is_empty() {
        println!();
    }
    Ok(())
}
