use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;


/// Match state as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Timed,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Suspended,
    Canceled,
    Awarded,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::Timed => "TIMED",
            MatchStatus::InPlay => "IN_PLAY",
            MatchStatus::Paused => "PAUSED",
            MatchStatus::Finished => "FINISHED",
            MatchStatus::Postponed => "POSTPONED",
            MatchStatus::Suspended => "SUSPENDED",
            MatchStatus::Canceled => "CANCELED",
            MatchStatus::Awarded => "AWARDED",
            MatchStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// Goal counts for one phase of a match. `None` means not yet played.
///
/// Accepts the legacy (`goalsHomeTeam`), v2 (`homeTeam`) and short (`home`) keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    #[serde(rename = "homeTeam", alias = "goalsHomeTeam", alias = "home", default)]
    pub home: Option<u32>,
    #[serde(rename = "awayTeam", alias = "goalsAwayTeam", alias = "away", default)]
    pub away: Option<u32>,
}

impl Goals {
    pub fn new(home: u32, away: u32) -> Self {
        Self {
            home: Some(home),
            away: Some(away),
        }
    }

    /// A phase counts as present once either side has a goal count.
    pub fn is_present(&self) -> bool {
        self.home.is_some() || self.away.is_some()
    }
}

// ---------------------------------------------------------------------------
// Legacy shape: `{ "fixtures": [...] }`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyResult {
    #[serde(default)]
    pub goals_home_team: Option<u32>,
    #[serde(default)]
    pub goals_away_team: Option<u32>,
    #[serde(default)]
    pub half_time: Option<Goals>,
    #[serde(default)]
    pub extra_time: Option<Goals>,
}

impl LegacyResult {
    pub fn full_time(&self) -> Goals {
        Goals {
            home: self.goals_home_team,
            away: self.goals_away_team,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyFixture {
    /// Kept untyped so a malformed link never fails the whole payload.
    #[serde(rename = "_links", default)]
    pub links: Value,
    pub date: DateTime<Utc>,
    pub status: MatchStatus,
    #[serde(default)]
    pub home_team_name: Option<String>,
    #[serde(default)]
    pub away_team_name: Option<String>,
    #[serde(default)]
    pub result: Option<LegacyResult>,
}

// ---------------------------------------------------------------------------
// Matches shape: `{ "matches": [...] }`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default)]
    pub full_time: Option<Goals>,
    #[serde(default)]
    pub half_time: Option<Goals>,
    #[serde(default)]
    pub extra_time: Option<Goals>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMatch {
    /// Embedded competition reference, untyped for the same reason as `_links`.
    #[serde(default)]
    pub competition: Value,
    pub utc_date: DateTime<Utc>,
    pub status: MatchStatus,
    #[serde(default)]
    pub home_team: Option<TeamRef>,
    #[serde(default)]
    pub away_team: Option<TeamRef>,
    #[serde(default)]
    pub score: Option<Score>,
}

/// The match-list shapes the API has served over time.
#[derive(Debug, Clone)]
pub enum MatchesPayload {
    Legacy(Vec<LegacyFixture>),
    Matches(Vec<ApiMatch>),
}

// ---------------------------------------------------------------------------
// Standings shapes
// ---------------------------------------------------------------------------

/// Row of the legacy single table: `{ "standing": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyStandingRow {
    pub position: u32,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub played_games: u32,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub draws: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub goals_against: Option<u32>,
    #[serde(default)]
    pub goal_difference: i32,
    #[serde(default)]
    pub points: i32,
}

/// Row of the legacy grouped mapping: `{ "standings": { "A": [...] } }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyGroupRow {
    pub rank: u32,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub played_games: u32,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub goals_against: Option<u32>,
    #[serde(default)]
    pub goal_difference: i32,
    #[serde(default)]
    pub points: i32,
}

/// Row of a newer table: `{ "standings": [ { "table": [...] } ] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub position: u32,
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub played_games: u32,
    #[serde(default)]
    pub won: Option<u32>,
    #[serde(default)]
    pub draw: Option<u32>,
    #[serde(default)]
    pub lost: Option<u32>,
    #[serde(default)]
    pub goals_for: Option<u32>,
    #[serde(default)]
    pub goals_against: Option<u32>,
    #[serde(default)]
    pub goal_difference: i32,
    #[serde(default)]
    pub points: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StandingTable {
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub table: Vec<TableRow>,
}

/// The standings shapes the API has served over time.
#[derive(Debug, Clone)]
pub enum StandingsPayload {
    LegacySingle(Vec<LegacyStandingRow>),
    LegacyGrouped(Vec<(String, Vec<LegacyGroupRow>)>),
    Tables(Vec<StandingTable>),
}

// ---------------------------------------------------------------------------
// Normalized records
// ---------------------------------------------------------------------------

/// One match, independent of the payload shape it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub league_name: String,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    pub status: MatchStatus,
    pub kickoff: DateTime<Utc>,
}

impl MatchRecord {
    pub fn is_live(&self) -> bool {
        self.status == MatchStatus::InPlay
    }
}

/// One team's line in a standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    /// Group code for multi-group competitions, `None` for a single table.
    pub group: Option<String>,
    pub rank: u32,
    pub team_name: String,
    pub played: u32,
    pub won: Option<u32>,
    pub drawn: Option<u32>,
    pub lost: Option<u32>,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    pub goal_diff: i32,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingGroup {
    pub code: String,
    pub rows: Vec<StandingRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Standings {
    Single(Vec<StandingRow>),
    Grouped(Vec<StandingGroup>),
}

impl Standings {
    pub fn row_count(&self) -> usize {
        match self {
            Standings::Single(rows) => rows.len(),
            Standings::Grouped(groups) => groups.iter().map(|g| g.rows.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// All rows in display order, groups flattened.
    pub fn rows(&self) -> Vec<&StandingRow> {
        match self {
            Standings::Single(rows) => rows.iter().collect(),
            Standings::Grouped(groups) => groups.iter().flat_map(|g| g.rows.iter()).collect(),
        }
    }
}
