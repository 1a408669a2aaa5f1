//! `football lists`

use std::io::Write;

use super::CommandContext;
use crate::{
    football::http::fetch_league_ids,
    output::{fetching, Presenter, Records},
    Result,
};

pub const REFRESHED: &str = "New list fetched and saved";

/// Print the league directory, or replace it with the published list.
pub async fn handle_lists<W: Write>(
    ctx: &mut CommandContext,
    presenter: &mut Presenter<W>,
    refresh: bool,
) -> Result<()> {
    if !refresh {
        return presenter.render(Records::Leagues(ctx.directory.all()));
    }

    let raw = fetching(fetch_league_ids(&ctx.league_ids_url)).await?;
    ctx.directory.refresh(&raw, &ctx.paths.league_ids)?;
    presenter.update(REFRESHED)
}
