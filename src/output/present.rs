//! Console output: coloured score lines, standings grids and status messages.

use std::io::Write;

use chrono::{DateTime, FixedOffset, Local, Utc};
use crossterm::style::Stylize;
use tabled::{builder::Builder, settings::Style};

use crate::{
    error::FootballError,
    football::{
        leagues::LeagueEntry,
        types::{MatchRecord, StandingRow, Standings},
    },
    Result,
};

/// Literal shown instead of a time for matches in play.
pub const LIVE: &str = "LIVE";

/// Relative calendar label for `when`, as seen from `now`'s time zone.
///
/// `Today at 3:00 PM`, `Tomorrow at ...`, `Yesterday at ...`, a weekday
/// name within the coming six days, `Last <weekday>` within the past six,
/// otherwise `MM/DD/YYYY`.
pub fn calendar(when: DateTime<Utc>, now: &DateTime<FixedOffset>) -> String {
    let local = when.with_timezone(&now.timezone());
    let time = local.format("%-I:%M %p");
    let days = (local.date_naive() - now.date_naive()).num_days();

    match days {
        0 => format!("Today at {time}"),
        1 => format!("Tomorrow at {time}"),
        -1 => format!("Yesterday at {time}"),
        2..=6 => format!("{} at {time}", local.format("%A")),
        -6..=-2 => format!("Last {} at {time}", local.format("%A")),
        _ => local.format("%m/%d/%Y").to_string(),
    }
}

/// `LIVE` for matches in play, the calendar label otherwise.
pub fn kickoff_label(record: &MatchRecord, now: &DateTime<FixedOffset>) -> String {
    if record.is_live() {
        LIVE.to_string()
    } else {
        calendar(record.kickoff, now)
    }
}

fn goals(g: Option<u32>) -> String {
    g.map(|n| n.to_string()).unwrap_or_default()
}

fn cell<T: ToString>(v: Option<T>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

/// `League  Home 2 vs. 1 Away Today at 3:00 PM`, coloured.
pub fn score_line(record: &MatchRecord, now: &DateTime<FixedOffset>) -> String {
    format!(
        "{}  {} {} vs. {} {} {}",
        record.league_name.as_str().green().bold(),
        record.home_team.as_str().cyan().bold(),
        goals(record.home_goals).cyan().bold(),
        goals(record.away_goals).red().bold(),
        record.away_team.as_str().red().bold(),
        kickoff_label(record, now).yellow().bold(),
    )
}

/// Grid for one standings table. W/D/L columns only when the data has them.
pub fn standings_table(rows: &[StandingRow]) -> String {
    let detailed = rows.iter().any(|r| r.won.is_some());

    let mut builder = Builder::default();
    let header: &[&str] = if detailed {
        &["#", "Team", "MP", "W", "D", "L", "GF", "GA", "GD", "Pts"]
    } else {
        &["#", "Team", "MP", "GF", "GA", "GD", "Pts"]
    };
    builder.push_record(header.iter().map(|h| h.to_string()));

    for r in rows {
        let mut record = vec![r.rank.to_string(), r.team_name.clone(), r.played.to_string()];
        if detailed {
            record.extend([cell(r.won), cell(r.drawn), cell(r.lost)]);
        }
        record.extend([
            cell(r.goals_for),
            cell(r.goals_against),
            r.goal_diff.to_string(),
            r.points.to_string(),
        ]);
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Two-column grid of league captions and codes.
pub fn leagues_table(entries: &[LeagueEntry]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["League".to_string(), "League Code".to_string()]);
    for e in entries {
        builder.push_record([e.caption.clone(), e.code.clone()]);
    }
    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// What to render.
#[derive(Debug, Clone, Copy)]
pub enum Records<'a> {
    Matches(&'a [MatchRecord]),
    Standings(&'a Standings),
    Leagues(&'a [LeagueEntry]),
}

/// Writes rendered records and status messages to a console-like sink.
pub struct Presenter<W: Write> {
    out: W,
    now: DateTime<FixedOffset>,
}

impl<W: Write> Presenter<W> {
    /// Presenter whose relative times are measured from the local clock.
    pub fn new(out: W) -> Self {
        Self::at(out, Local::now().fixed_offset())
    }

    /// Presenter with a fixed "now", for reproducible calendar labels.
    pub fn at(out: W, now: DateTime<FixedOffset>) -> Self {
        Self { out, now }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{text}").map_err(|e| FootballError::local_io("<stdout>", e))
    }

    pub fn render(&mut self, records: Records<'_>) -> Result<()> {
        match records {
            Records::Matches(matches) => {
                for record in matches {
                    let line = score_line(record, &self.now);
                    self.line(line)?;
                }
                Ok(())
            }
            Records::Standings(Standings::Single(rows)) => self.line(standings_table(rows)),
            Records::Standings(Standings::Grouped(groups)) => {
                for group in groups {
                    self.line(format!(" Group: {} ", group.code).white().on_blue().bold())?;
                    self.line(standings_table(&group.rows))?;
                }
                Ok(())
            }
            Records::Leagues(entries) => self.line(leagues_table(entries)),
        }
    }

    /// Informational message (nothing found, file saved, ...).
    pub fn update(&mut self, message: &str) -> Result<()> {
        self.line(message.cyan().bold())
    }
}
