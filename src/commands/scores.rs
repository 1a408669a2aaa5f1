//! `football scores`

use std::io::Write;

use chrono::Duration;
use tracing::info;

use super::{export_and_report, query_date, CommandContext};
use crate::{
    football::normalize::{normalize_matches, partition_scores, LeagueContext, TeamFilter},
    output::{fetching, OutputTarget, Presenter, Records},
    Result,
};

pub const NO_LIVE: &str = "Sorry, no live matches right now";
pub const NO_SCORES: &str = "Sorry, no scores to show right now";

/// Live or recent scores across all competitions, yesterday through tomorrow.
pub async fn handle_scores<W: Write>(
    ctx: &CommandContext,
    presenter: &mut Presenter<W>,
    live: bool,
    team: Option<&str>,
    output: &OutputTarget,
) -> Result<()> {
    let query = [
        ("dateFrom", query_date(ctx.today - Duration::days(1))),
        ("dateTo", query_date(ctx.today + Duration::days(1))),
    ];
    let payload = fetching(ctx.gateway()?.fetch("matches", &query)).await?;

    let records = normalize_matches(
        &payload,
        LeagueContext::Derived(&ctx.directory),
        &TeamFilter::new(team),
    )?;
    let board = partition_scores(records);
    info!(live = board.live.len(), scored = board.scored.len(), "scores");

    let (shown, empty_message) = if live {
        (board.live, NO_LIVE)
    } else {
        (board.scored, NO_SCORES)
    };

    if shown.is_empty() {
        return presenter.update(empty_message);
    }

    presenter.render(Records::Matches(&shown))?;
    export_and_report(presenter, output, &shown)?;
    Ok(())
}
