//! Proposal command

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;

use super::output::{deliver, Destination};
use super::CliContext;
use crate::error::{GigForgeError, GigForgeResult};
use crate::models::ProposalRequest;
use crate::services::{build_proposal_context, render_proposal};

/// Arguments for `proposal`
///
/// Flags override the matching keys of `--payload`.
#[derive(Args, Debug, Clone, Default)]
pub struct ProposalArgs {
    /// JSON file with any of the proposal fields
    #[arg(long)]
    pub payload: Option<PathBuf>,

    #[arg(short, long)]
    pub client: Option<String>,

    #[arg(short, long)]
    pub project: Option<String>,

    #[arg(short, long)]
    pub author: Option<String>,

    #[arg(long)]
    pub summary: Option<String>,

    /// Deliverable (repeatable)
    #[arg(long = "deliverable")]
    pub deliverables: Vec<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Duration in days
    #[arg(long)]
    pub duration: Option<u32>,

    #[arg(long)]
    pub revisions: Option<u32>,

    /// Explicit price; skips the hours/rate calculation
    #[arg(long)]
    pub price: Option<Decimal>,

    #[arg(long)]
    pub hours: Option<Decimal>,

    #[arg(long)]
    pub rate: Option<Decimal>,

    #[arg(long)]
    pub fixed: Option<Decimal>,

    /// Write the Markdown to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl ProposalArgs {
    /// Merge the payload file (if any) with the flags
    pub fn to_request(&self) -> GigForgeResult<ProposalRequest> {
        let mut request = match &self.payload {
            Some(path) => load_payload(path)?,
            None => ProposalRequest::default(),
        };

        request.client = self.client.clone().or(request.client);
        request.project = self.project.clone().or(request.project);
        request.author = self.author.clone().or(request.author);
        request.summary = self.summary.clone().or(request.summary);
        request.start_date = self.start_date.or(request.start_date);
        request.duration = self.duration.or(request.duration);
        request.revisions = self.revisions.or(request.revisions);
        request.price = self.price.or(request.price);
        request.hours = self.hours.or(request.hours);
        request.rate = self.rate.or(request.rate);
        request.fixed = self.fixed.or(request.fixed);

        if !self.deliverables.is_empty() {
            request.deliverables = Some(self.deliverables.clone());
        }

        Ok(request)
    }
}

fn load_payload(path: &std::path::Path) -> GigForgeResult<ProposalRequest> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| GigForgeError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&contents).map_err(|e| {
        GigForgeError::Validation(format!("Invalid proposal payload {}: {}", path.display(), e))
    })
}

/// Handle `proposal`: render Markdown to stdout or a file
pub fn handle_proposal_command(ctx: &CliContext, args: ProposalArgs) -> GigForgeResult<()> {
    let mut request = args.to_request()?;
    if request.author.is_none() {
        request.author = Some(ctx.settings.default_author.clone());
    }

    let proposal = build_proposal_context(&request);
    let doc = render_proposal(&ctx.templates, &proposal)?;
    let subject = format!("{} / {}", proposal.client, proposal.project);

    deliver(
        ctx,
        &doc,
        Destination::from_option(args.out.as_deref()),
        &subject,
        Some(proposal.price),
    )?;

    if let Some(out) = &args.out {
        println!("Wrote proposal to {}", out.display());
    }
    Ok(())
}
