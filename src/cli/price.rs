//! Price and gig quote commands

use std::path::PathBuf;

use clap::Args;
use rust_decimal::Decimal;

use super::output::{deliver, Destination};
use super::CliContext;
use crate::error::GigForgeResult;
use crate::models::{DocumentKind, Money, RenderedDocument};
use crate::services::{calc_price, gig_description, gig_outline};
use crate::services::gig::GIG_SELLING_POINTS;

/// Pricing inputs shared by `price` and `gig`
#[derive(Args, Debug, Clone, Default)]
pub struct PriceArgs {
    /// Estimated hours
    #[arg(long, default_value = "0")]
    pub hours: Decimal,

    /// Hourly rate
    #[arg(long, default_value = "0")]
    pub rate: Decimal,

    /// Fixed fee; replaces hours x rate when given
    #[arg(long)]
    pub fixed: Option<Decimal>,

    /// Markup as a fraction (0.2 = 20%); defaults to the configured margin
    #[arg(long)]
    pub margin: Option<Decimal>,
}

impl PriceArgs {
    /// Final price using `default_margin` when no margin was given
    pub fn price(&self, default_margin: Decimal) -> Money {
        calc_price(
            self.hours,
            self.rate,
            self.fixed,
            self.margin.unwrap_or(default_margin),
        )
    }
}

/// Arguments for `gig`
#[derive(Args, Debug, Clone)]
pub struct GigArgs {
    /// Gig title
    #[arg(short, long)]
    pub title: String,

    #[command(flatten)]
    pub pricing: PriceArgs,

    /// Append a bulleted description
    #[arg(short, long)]
    pub describe: bool,

    /// Write the quote to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Handle `price`: print the computed price
pub fn handle_price_command(ctx: &CliContext, args: PriceArgs) -> GigForgeResult<()> {
    let price = args.price(ctx.settings.default_margin);
    tracing::debug!(hours = %args.hours, rate = %args.rate, fixed = ?args.fixed, %price, "calculated price");
    println!("{}", ctx.settings.format_money(price));
    Ok(())
}

/// Build the quote text for a gig
pub fn gig_quote(args: &GigArgs, default_margin: Decimal) -> (String, Money) {
    let price = args.pricing.price(default_margin);
    let mut text = gig_outline(&args.title, price);
    if args.describe {
        text.push_str("\n\n");
        text.push_str(&gig_description(&args.title, GIG_SELLING_POINTS.len()));
    }
    (text, price)
}

/// Handle `gig`: print or write a priced gig outline
pub fn handle_gig_command(ctx: &CliContext, args: GigArgs) -> GigForgeResult<()> {
    let (text, price) = gig_quote(&args, ctx.settings.default_margin);
    let doc = RenderedDocument::text(DocumentKind::Quote, text);

    let destination = Destination::from_option(args.out.as_deref());
    deliver(ctx, &doc, destination, &args.title, Some(price))?;

    if let Some(out) = &args.out {
        println!("Wrote gig quote to {}", out.display());
    }
    Ok(())
}
