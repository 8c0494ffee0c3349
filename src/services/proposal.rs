//! Proposal context assembly
//!
//! Fills a [`ProposalContext`] from a partial [`ProposalRequest`]. Every field
//! has a default, so building a context never fails.

use chrono::{Local, NaiveDate};

use crate::error::GigForgeResult;
use crate::models::{DocumentKind, Money, ProposalContext, ProposalRequest, RenderedDocument};
use crate::templates::{TemplateEnvironment, PROPOSAL_TEMPLATE};

use super::pricing::{calc_price, DEFAULT_MARGIN};

pub const DEFAULT_CLIENT: &str = "Client";
pub const DEFAULT_PROJECT: &str = "Project";
pub const DEFAULT_AUTHOR: &str = "Freelancer";
pub const DEFAULT_DELIVERABLES: [&str; 3] = ["Design", "Dev", "Test"];
pub const DEFAULT_DURATION_DAYS: u32 = 7;
pub const DEFAULT_REVISIONS: u32 = 2;

/// Build a proposal context dated today (local time)
pub fn build_proposal_context(request: &ProposalRequest) -> ProposalContext {
    build_proposal_context_on(request, Local::now().date_naive())
}

/// Build a proposal context as of `today`
///
/// An explicit `price` is used as-is; otherwise the price is computed from
/// hours, rate and fixed fee with the default margin.
pub fn build_proposal_context_on(request: &ProposalRequest, today: NaiveDate) -> ProposalContext {
    let project = request
        .project
        .clone()
        .unwrap_or_else(|| DEFAULT_PROJECT.to_string());

    let summary = request
        .summary
        .clone()
        .unwrap_or_else(|| format!("Work to deliver {}", project));

    let price = match request.price {
        Some(price) => Money::new(price),
        None => calc_price(
            request.hours.unwrap_or_default(),
            request.rate.unwrap_or_default(),
            request.fixed,
            DEFAULT_MARGIN,
        ),
    };

    ProposalContext {
        client: request
            .client
            .clone()
            .unwrap_or_else(|| DEFAULT_CLIENT.to_string()),
        author: request
            .author
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        date: today,
        summary,
        deliverables: request.deliverables.clone().unwrap_or_else(|| {
            DEFAULT_DELIVERABLES
                .iter()
                .map(|d| d.to_string())
                .collect()
        }),
        start_date: request.start_date.unwrap_or(today),
        duration: request.duration.unwrap_or(DEFAULT_DURATION_DAYS),
        price,
        revisions: request.revisions.unwrap_or(DEFAULT_REVISIONS),
        project,
    }
}

/// Render the proposal Markdown for `ctx`
pub fn render_proposal(
    templates: &TemplateEnvironment,
    ctx: &ProposalContext,
) -> GigForgeResult<RenderedDocument> {
    let markdown = templates.render(PROPOSAL_TEMPLATE, ctx)?;
    tracing::info!(
        client = %ctx.client,
        project = %ctx.project,
        price = %ctx.price,
        "rendered proposal"
    );
    Ok(RenderedDocument::text(DocumentKind::Proposal, markdown))
}
