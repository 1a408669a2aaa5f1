//! `football fixtures`

use std::io::Write;

use chrono::{Duration, NaiveDate};
use tracing::info;

use super::{export_and_report, query_date, CommandContext};
use crate::{
    error::FootballError,
    football::normalize::{normalize_matches, LeagueContext, TeamFilter},
    output::{fetching, OutputTarget, Presenter, Records},
    Days, LeagueCode, Result,
};

pub const NO_FIXTURES: &str = "Sorry, no fixtures to show right now";

/// Arguments of the fixtures command.
#[derive(Debug, Clone, Default)]
pub struct FixturesParams {
    pub days: Days,
    pub league: Option<LeagueCode>,
    pub team: Option<String>,
    pub next: bool,
    pub output: OutputTarget,
}

/// `[today, today + days]` when looking ahead, `[today - days, today]` otherwise.
pub fn date_window(today: NaiveDate, days: u32, next: bool) -> Result<(NaiveDate, NaiveDate)> {
    let span = Duration::days(i64::from(days));
    let window = if next {
        today.checked_add_signed(span).map(|end| (today, end))
    } else {
        today.checked_sub_signed(span).map(|start| (start, today))
    };
    window.ok_or_else(|| FootballError::InvalidInput {
        message: format!("Days value {days} is out of range."),
    })
}

pub async fn handle_fixtures<W: Write>(
    ctx: &CommandContext,
    presenter: &mut Presenter<W>,
    params: &FixturesParams,
) -> Result<()> {
    // Both checks run before any request goes out
    let days = params.days.checked()?;
    let league = params
        .league
        .as_ref()
        .map(|code| ctx.directory.lookup(code.as_str()))
        .transpose()?;

    let (from, to) = date_window(ctx.today, days, params.next)?;
    let query = [("dateFrom", query_date(from)), ("dateTo", query_date(to))];

    let (path, league_context) = match league {
        Some(entry) => (
            format!("competitions/{}/matches", entry.id),
            LeagueContext::Explicit(entry),
        ),
        None => ("matches".to_string(), LeagueContext::Derived(&ctx.directory)),
    };

    let payload = fetching(ctx.gateway()?.fetch(&path, &query)).await?;
    let records = normalize_matches(
        &payload,
        league_context,
        &TeamFilter::new(params.team.as_deref()),
    )?;
    info!(%from, %to, fixtures = records.len(), "fixtures");

    if records.is_empty() {
        return presenter.update(NO_FIXTURES);
    }

    presenter.render(Records::Matches(&records))?;
    export_and_report(presenter, &params.output, &records)?;
    Ok(())
}
