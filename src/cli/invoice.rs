//! Invoice command

use std::path::PathBuf;

use clap::Args;

use super::items::collect_items;
use super::output::{deliver, Destination};
use super::CliContext;
use crate::display::format_line_items;
use crate::error::GigForgeResult;
use crate::models::items_total;
use crate::render::render_invoice;

/// Arguments for `invoice`
#[derive(Args, Debug, Clone)]
pub struct InvoiceArgs {
    /// Client name
    #[arg(short, long)]
    pub client: String,

    /// Project name
    #[arg(short, long, default_value = "Project")]
    pub project: String,

    /// Line item as "Description:Amount" (repeatable)
    #[arg(short, long = "item")]
    pub items: Vec<String>,

    /// JSON file with an array of {"description", "amount"} objects
    #[arg(long)]
    pub items_json: Option<PathBuf>,

    /// Output PDF path
    #[arg(short, long, default_value = "invoice.pdf")]
    pub out: PathBuf,
}

/// Handle `invoice`: render the PDF and print a summary
pub fn handle_invoice_command(ctx: &CliContext, args: InvoiceArgs) -> GigForgeResult<()> {
    let items = collect_items(&args.items, args.items_json.as_deref())?;
    let total = items_total(&items)?;
    let doc = render_invoice(&items, &args.client, &args.project)?;
    let subject = format!("{} / {}", args.client, args.project);

    deliver(
        ctx,
        &doc,
        Destination::File(&args.out),
        &subject,
        Some(total),
    )?;

    print!("{}", format_line_items(&items, total, &ctx.settings.currency_symbol));
    println!();
    println!("Wrote invoice to {}", args.out.display());
    Ok(())
}
