use anyhow::Result;
use clap::{Parser, Subcommand};

use gigforge::cli::{
    handle_config_command, handle_gig_command, handle_history_command, handle_init_command,
    handle_invoice_command, handle_price_command, handle_promo_command, handle_proposal_command,
    CliContext, GigArgs, HistoryArgs, InvoiceArgs, PriceArgs, PromoArgs, ProposalArgs,
};

#[derive(Parser)]
#[command(
    name = "gigforge",
    version,
    about = "Invoices, proposals and promo images for freelancers",
    long_about = "GigForge prices gigs and generates client-facing documents from the \
                  command line: Markdown proposals, PDF invoices and PNG promo images."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a price from hours and rate or a fixed fee
    Price(PriceArgs),

    /// Print a priced gig outline
    Gig(GigArgs),

    /// Generate a Markdown proposal
    Proposal(ProposalArgs),

    /// Generate a PDF invoice
    Invoice(InvoiceArgs),

    /// Generate a PNG promo image
    Promo(PromoArgs),

    /// Write default settings and templates
    Init,

    /// Show current configuration and paths
    Config,

    /// List recently generated documents
    History(HistoryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    gigforge::logging::init(cli.verbose);

    let ctx = CliContext::load()?;

    match cli.command {
        Some(Commands::Price(args)) => handle_price_command(&ctx, args)?,
        Some(Commands::Gig(args)) => handle_gig_command(&ctx, args)?,
        Some(Commands::Proposal(args)) => handle_proposal_command(&ctx, args)?,
        Some(Commands::Invoice(args)) => handle_invoice_command(&ctx, args)?,
        Some(Commands::Promo(args)) => handle_promo_command(&ctx, args)?,
        Some(Commands::Init) => handle_init_command(&ctx)?,
        Some(Commands::Config) => handle_config_command(&ctx)?,
        Some(Commands::History(args)) => handle_history_command(&ctx, args)?,
        None => {
            println!("GigForge - documents for freelancers");
            println!();
            println!("Run 'gigforge --help' for usage information.");
            println!("Run 'gigforge init' to set up templates and settings.");
        }
    }

    Ok(())
}
