//! `football standings`

use std::io::Write;

use tracing::info;

use super::{export_and_report, CommandContext};
use crate::{
    football::normalize::normalize_standings,
    output::{fetching, OutputTarget, Presenter, Records},
    LeagueCode, Result,
};

pub const NO_STANDINGS: &str = "Sorry, no standings to show right now";

/// Current standings of one league, single table or per group.
pub async fn handle_standings<W: Write>(
    ctx: &CommandContext,
    presenter: &mut Presenter<W>,
    league: &LeagueCode,
    output: &OutputTarget,
) -> Result<()> {
    let entry = ctx.directory.lookup(league.as_str())?;

    let path = format!("competitions/{}/standings", entry.id);
    let payload = fetching(ctx.gateway()?.fetch(&path, &[])).await?;
    let standings = normalize_standings(&payload)?;
    info!(league = %league, rows = standings.row_count(), "standings");

    if standings.is_empty() {
        return presenter.update(NO_STANDINGS);
    }

    presenter.render(Records::Standings(&standings))?;
    export_and_report(presenter, output, &standings.rows())?;
    Ok(())
}
