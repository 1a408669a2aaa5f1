//! Response normalization: raw API payloads + filters -> display records.
//!
//! The API has served several JSON shapes for the same data over its
//! versions. Each payload is classified once by inspecting its top-level
//! keys ([`detect_matches`], [`detect_standings`]) and then handled by an
//! exhaustive match on the resulting shape.
//!
//! Filtering happens here too, so callers get exactly the rows to print
//! and export:
//!
//! - team filter: case-insensitive substring on home or away name
//! - live/scored partition for the scores command
//! - standings grouped or single, ranked densely from 1

use serde::{de::Error as _, Deserialize};
use serde_json::Value;
use tracing::debug;

use super::{
    leagues::{LeagueDirectory, LeagueEntry},
    types::{
        ApiMatch, Goals, LegacyFixture, LegacyGroupRow, LegacyStandingRow, MatchRecord,
        MatchStatus, MatchesPayload, StandingGroup, StandingRow, StandingTable, Standings, StandingsPayload,
        TableRow,
    },
};
use crate::{cli::types::CompetitionId, error::FootballError, Result};

/// Placeholder for a team not yet decided (e.g. knockout fixtures).
pub const TBD: &str = "TBD";

/// Case-insensitive team-name substring filter. No needle matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    needle: Option<String>,
}

impl TeamFilter {
    pub fn new(team: Option<&str>) -> Self {
        let needle = team
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);
        Self { needle }
    }

    pub fn any() -> Self {
        Self::default()
    }

    pub fn matches(&self, home: &str, away: &str) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => {
                home.to_lowercase().contains(needle) || away.to_lowercase().contains(needle)
            }
        }
    }
}

/// Where a record's league name comes from.
#[derive(Debug, Clone, Copy)]
pub enum LeagueContext<'a> {
    /// The request was scoped to one league: use its caption.
    Explicit(&'a LeagueEntry),
    /// Derive from the competition reference embedded in each match.
    Derived(&'a LeagueDirectory),
}

impl LeagueContext<'_> {
    fn for_legacy(&self, fixture: &LegacyFixture) -> String {
        match self {
            LeagueContext::Explicit(entry) => entry.caption.clone(),
            LeagueContext::Derived(directory) => fixture
                .links
                .pointer("/competition/href")
                .and_then(Value::as_str)
                .map(|href| league_name_from_href(href, directory))
                .unwrap_or_default(),
        }
    }

    fn for_match(&self, m: &ApiMatch) -> String {
        match self {
            LeagueContext::Explicit(entry) => entry.caption.clone(),
            LeagueContext::Derived(directory) => {
                if let Some(name) = m.competition.get("name").and_then(Value::as_str) {
                    return name.to_string();
                }
                m.competition
                    .get("id")
                    .and_then(Value::as_u64)
                    .and_then(|id| u32::try_from(id).ok())
                    .and_then(|id| directory.by_id(CompetitionId::new(id)))
                    .map(|e| e.caption.clone())
                    .unwrap_or_default()
            }
        }
    }
}

/// Resolve `.../competitions/<id>` to a league caption; empty when unknown.
pub fn league_name_from_href(href: &str, directory: &LeagueDirectory) -> String {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .and_then(|id| directory.by_id(CompetitionId::new(id)))
        .map(|e| e.caption.clone())
        .unwrap_or_default()
}

/// A 200 response may still carry `{ "error": ... }`; surface it verbatim.
pub fn check_upstream_error(payload: &Value) -> Result<()> {
    match payload.get("error") {
        None => Ok(()),
        Some(Value::String(message)) => Err(FootballError::Upstream {
            message: message.clone(),
        }),
        Some(other) => Err(FootballError::Upstream {
            message: other.to_string(),
        }),
    }
}

fn unexpected_shape(what: &str) -> FootballError {
    FootballError::Payload(serde_json::Error::custom(format!(
        "no recognised {what} list in response"
    )))
}

/// Classify a match-list payload by its top-level keys.
pub fn detect_matches(payload: &Value) -> Result<MatchesPayload> {
    check_upstream_error(payload)?;

    if let Some(matches) = payload.get("matches") {
        debug!("matches payload");
        return Ok(MatchesPayload::Matches(Vec::<ApiMatch>::deserialize(
            matches,
        )?));
    }
    if let Some(fixtures) = payload.get("fixtures") {
        debug!("legacy fixtures payload");
        return Ok(MatchesPayload::Legacy(Vec::<LegacyFixture>::deserialize(
            fixtures,
        )?));
    }
    Err(unexpected_shape("match"))
}

/// Pick the score to show: extra time, else full time, else half time.
///
/// Missing counts stay `None` ("not yet played"), never zero.
pub fn pick_score(extra: Option<Goals>, full: Option<Goals>, half: Option<Goals>) -> Goals {
    [extra, full, half]
        .into_iter()
        .flatten()
        .find(Goals::is_present)
        .unwrap_or_default()
}

fn team_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => TBD.to_string(),
    }
}

fn legacy_record(fixture: &LegacyFixture, league: &LeagueContext<'_>) -> MatchRecord {
    let score = fixture
        .result
        .as_ref()
        .map(|r| pick_score(r.extra_time, Some(r.full_time()), r.half_time))
        .unwrap_or_default();

    MatchRecord {
        league_name: league.for_legacy(fixture),
        home_team: team_name(fixture.home_team_name.as_deref()),
        away_team: team_name(fixture.away_team_name.as_deref()),
        home_goals: score.home,
        away_goals: score.away,
        status: fixture.status,
        kickoff: fixture.date,
    }
}

fn match_record(m: &ApiMatch, league: &LeagueContext<'_>) -> MatchRecord {
    let score = m
        .score
        .as_ref()
        .map(|s| pick_score(s.extra_time, s.full_time, s.half_time))
        .unwrap_or_default();

    MatchRecord {
        league_name: league.for_match(m),
        home_team: team_name(m.home_team.as_ref().and_then(|t| t.name.as_deref())),
        away_team: team_name(m.away_team.as_ref().and_then(|t| t.name.as_deref())),
        home_goals: score.home,
        away_goals: score.away,
        status: m.status,
        kickoff: m.utc_date,
    }
}

/// Normalize a match-list payload, keeping only matches that pass `filter`.
///
/// Payload order is preserved.
pub fn normalize_matches(
    payload: &Value,
    league: LeagueContext<'_>,
    filter: &TeamFilter,
) -> Result<Vec<MatchRecord>> {
    let records: Vec<MatchRecord> = match detect_matches(payload)? {
        MatchesPayload::Legacy(fixtures) => fixtures
            .iter()
            .map(|f| legacy_record(f, &league))
            .collect(),
        MatchesPayload::Matches(matches) => {
            matches.iter().map(|m| match_record(m, &league)).collect()
        }
    };

    Ok(records
        .into_iter()
        .filter(|r| filter.matches(&r.home_team, &r.away_team))
        .collect())
}

/// Matches split for the scores command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    /// In play right now.
    pub live: Vec<MatchRecord>,
    /// In play or finished.
    pub scored: Vec<MatchRecord>,
}

/// Partition already team-filtered records into live and scored sets.
pub fn partition_scores(records: impl IntoIterator<Item = MatchRecord>) -> ScoreBoard {
    let mut board = ScoreBoard::default();
    for record in records {
        match record.status {
            MatchStatus::InPlay => {
                board.live.push(record.clone());
                board.scored.push(record);
            }
            MatchStatus::Finished => board.scored.push(record),
            _ => {}
        }
    }
    board
}

/// Classify a standings payload by its top-level keys.
pub fn detect_standings(payload: &Value) -> Result<StandingsPayload> {
    check_upstream_error(payload)?;

    if let Some(standing) = payload.get("standing") {
        debug!("legacy single-table standings");
        return Ok(StandingsPayload::LegacySingle(
            Vec::<LegacyStandingRow>::deserialize(standing)?,
        ));
    }

    match payload.get("standings") {
        Some(Value::Object(groups)) => {
            debug!(groups = groups.len(), "legacy grouped standings");
            let groups = groups
                .iter()
                .map(|(code, rows)| -> Result<(String, Vec<LegacyGroupRow>)> {
                    Ok((code.clone(), Vec::<LegacyGroupRow>::deserialize(rows)?))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(StandingsPayload::LegacyGrouped(groups))
        }
        Some(tables @ Value::Array(_)) => {
            debug!("standings tables");
            Ok(StandingsPayload::Tables(Vec::<StandingTable>::deserialize(
                tables,
            )?))
        }
        _ => Err(unexpected_shape("standings")),
    }
}

/// Stable-sort by upstream position, then number densely from 1.
fn ranked(mut rows: Vec<(u32, StandingRow)>) -> Vec<StandingRow> {
    rows.sort_by_key(|(position, _)| *position);
    rows.into_iter()
        .enumerate()
        .map(|(i, (_, mut row))| {
            row.rank = i as u32 + 1;
            row
        })
        .collect()
}

fn legacy_single_row(row: &LegacyStandingRow) -> (u32, StandingRow) {
    (
        row.position,
        StandingRow {
            group: None,
            rank: row.position,
            team_name: team_name(row.team_name.as_deref()),
            played: row.played_games,
            won: row.wins,
            drawn: row.draws,
            lost: row.losses,
            goals_for: row.goals,
            goals_against: row.goals_against,
            goal_diff: row.goal_difference,
            points: row.points,
        },
    )
}

fn legacy_group_row(code: &str, row: &LegacyGroupRow) -> (u32, StandingRow) {
    (
        row.rank,
        StandingRow {
            group: Some(code.to_string()),
            rank: row.rank,
            team_name: team_name(row.team.as_deref()),
            played: row.played_games,
            won: None,
            drawn: None,
            lost: None,
            goals_for: row.goals,
            goals_against: row.goals_against,
            goal_diff: row.goal_difference,
            points: row.points,
        },
    )
}

fn table_row(group: Option<&str>, row: &TableRow) -> (u32, StandingRow) {
    (
        row.position,
        StandingRow {
            group: group.map(str::to_string),
            rank: row.position,
            team_name: team_name(row.team.as_ref().and_then(|t| t.name.as_deref())),
            played: row.played_games,
            won: row.won,
            drawn: row.draw,
            lost: row.lost,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            goal_diff: row.goal_difference,
            points: row.points,
        },
    )
}

/// `GROUP_A` -> `A`; other labels unchanged.
fn group_code(table: &StandingTable, index: usize) -> String {
    table
        .group
        .as_deref()
        .or(table.stage.as_deref())
        .map(|g| g.strip_prefix("GROUP_").unwrap_or(g).to_string())
        .unwrap_or_else(|| (index + 1).to_string())
}

fn tables_to_standings(tables: &[StandingTable]) -> Standings {
    // Home/away splits repeat the totals; only the overall tables are shown
    let totals: Vec<&StandingTable> = tables
        .iter()
        .filter(|t| t.kind.as_deref().map_or(true, |k| k == "TOTAL"))
        .collect();

    match totals.as_slice() {
        [] => Standings::Single(Vec::new()),
        [only] if only.group.is_none() => Standings::Single(ranked(
            only.table.iter().map(|r| table_row(None, r)).collect(),
        )),
        _ => Standings::Grouped(
            totals
                .iter()
                .enumerate()
                .map(|(i, table)| {
                    let code = group_code(table, i);
                    let rows = table
                        .table
                        .iter()
                        .map(|r| table_row(Some(&code), r))
                        .collect();
                    StandingGroup {
                        rows: ranked(rows),
                        code,
                    }
                })
                .collect(),
        ),
    }
}

/// Normalize a standings payload into a single table or ordered groups.
pub fn normalize_standings(payload: &Value) -> Result<Standings> {
    let standings = match detect_standings(payload)? {
        StandingsPayload::LegacySingle(rows) => {
            Standings::Single(ranked(rows.iter().map(legacy_single_row).collect()))
        }
        StandingsPayload::LegacyGrouped(groups) => Standings::Grouped(
            groups
                .iter()
                .map(|(code, rows)| StandingGroup {
                    code: code.clone(),
                    rows: ranked(rows.iter().map(|r| legacy_group_row(code, r)).collect()),
                })
                .collect(),
        ),
        StandingsPayload::Tables(tables) => tables_to_standings(&tables),
    };
    Ok(standings)
}
