//! Integration tests for command handlers against a mocked API

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, NaiveDate};
use football_cli::{
    commands::{
        config::{handle_config, UPDATED},
        fixtures::{handle_fixtures, FixturesParams, NO_FIXTURES},
        lists::{handle_lists, REFRESHED},
        scores::{handle_scores, NO_LIVE, NO_SCORES},
        standings::handle_standings,
        CommandContext, LoadMode,
    },
    core::{AppPaths, Config},
    output::{OutputTarget, Presenter},
    CompetitionId, Days, FootballError, LeagueCode, LeagueDirectory,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn context(dir: &TempDir, server: &MockServer) -> CommandContext {
    CommandContext {
        config: Config {
            api_key: "test-key".to_string(),
        },
        directory: LeagueDirectory::bundled().unwrap(),
        paths: AppPaths::in_dir(dir.path()),
        api_url: format!("{}/v2/", server.uri()),
        league_ids_url: format!("{}/contents/leagueIds.json", server.uri()),
        today: NaiveDate::from_ymd_opt(2019, 5, 1).unwrap(),
    }
}

fn presenter() -> Presenter<Vec<u8>> {
    Presenter::at(
        Vec::new(),
        DateTime::parse_from_rfc3339("2019-05-01T12:00:00+00:00").unwrap(),
    )
}

fn output(presenter: Presenter<Vec<u8>>) -> String {
    String::from_utf8(presenter.into_inner()).unwrap()
}

fn api_match(home: &str, away: &str, status: &str, goals: Option<(u32, u32)>) -> Value {
    let full_time = match goals {
        Some((h, a)) => json!({ "homeTeam": h, "awayTeam": a }),
        None => json!({ "homeTeam": null, "awayTeam": null }),
    };
    json!({
        "competition": { "id": 2021, "name": "Premier League" },
        "utcDate": "2019-04-28T15:00:00Z",
        "status": status,
        "homeTeam": { "id": 1, "name": home },
        "awayTeam": { "id": 2, "name": away },
        "score": {
            "fullTime": full_time,
            "halfTime": { "homeTeam": null, "awayTeam": null },
            "extraTime": { "homeTeam": null, "awayTeam": null }
        }
    })
}

fn league_table(size: u32) -> Value {
    // Served out of order; ranks must come back sorted
    let rows: Vec<Value> = (1..=size)
        .rev()
        .map(|pos| {
            json!({
                "position": pos,
                "team": { "id": pos, "name": format!("Team {pos:02}") },
                "playedGames": 38,
                "won": 20 - pos.min(20) / 2,
                "draw": 5,
                "lost": 3,
                "goalsFor": 60,
                "goalsAgainst": 30,
                "goalDifference": 30,
                "points": 100 - pos as i32
            })
        })
        .collect();
    json!({
        "standings": [
            { "stage": "REGULAR_SEASON", "type": "TOTAL", "group": null, "table": rows },
            { "stage": "REGULAR_SEASON", "type": "HOME", "group": null, "table": [] }
        ]
    })
}

async fn mount(server: &MockServer, route: &str, body: Value, expected: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fixtures_team_filter_prints_only_matching_rows() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/competitions/2021/matches"))
        .and(query_param("dateFrom", "2019-04-26"))
        .and(query_param("dateTo", "2019-05-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [
                api_match("Arsenal FC", "Chelsea FC", "FINISHED", Some((2, 0))),
                api_match("Everton FC", "Burnley FC", "FINISHED", Some((1, 1))),
                api_match("Leicester City FC", "ARSENAL FC", "FINISHED", Some((0, 3))),
                api_match("Arsenal FC", "Brighton & Hove Albion FC", "SCHEDULED", None),
                api_match("Watford FC", "Fulham FC", "FINISHED", Some((4, 1))),
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&dir, &server);
    let mut p = presenter();
    let params = FixturesParams {
        days: Days::new(5),
        league: Some(LeagueCode::new("PL")),
        team: Some("arsenal".to_string()),
        next: false,
        output: OutputTarget::default(),
    };
    handle_fixtures(&ctx, &mut p, &params).await.unwrap();

    let out = output(p);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert!(line.to_lowercase().contains("arsenal"));
        assert!(line.contains("Premier League"));
    }
}

#[tokio::test]
async fn test_fixtures_next_window_without_league_uses_matches() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/matches"))
        .and(query_param("dateFrom", "2019-05-01"))
        .and(query_param("dateTo", "2019-05-11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&dir, &server);
    let mut p = presenter();
    let params = FixturesParams {
        next: true,
        ..Default::default()
    };
    handle_fixtures(&ctx, &mut p, &params).await.unwrap();

    assert!(output(p).contains(NO_FIXTURES));
}

#[tokio::test]
async fn test_fixtures_invalid_input_makes_no_request() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = context(&dir, &server);

    let unknown = FixturesParams {
        league: Some(LeagueCode::new("XYZ")),
        ..Default::default()
    };
    let err = handle_fixtures(&ctx, &mut presenter(), &unknown)
        .await
        .unwrap_err();
    assert!(matches!(err, FootballError::UnknownLeague { .. }));
    assert_eq!(err.exit_code(), 2);

    let negative = FixturesParams {
        days: Days::new(-1),
        ..Default::default()
    };
    let err = handle_fixtures(&ctx, &mut presenter(), &negative)
        .await
        .unwrap_err();
    assert!(matches!(err, FootballError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_upstream_error_skips_output_and_export() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount(
        &server,
        "/v2/competitions/2021/matches",
        json!({ "error": "Your API token is invalid." }),
        1,
    )
    .await;

    let ctx = context(&dir, &server);
    let mut p = presenter();
    let params = FixturesParams {
        league: Some(LeagueCode::new("PL")),
        output: OutputTarget {
            json: Some(String::new()),
            csv: Some(String::new()),
            dir: Some(dir.path().join("out")),
        },
        ..Default::default()
    };
    let err = handle_fixtures(&ctx, &mut p, &params).await.unwrap_err();

    match &err {
        FootballError::Upstream { message } => assert_eq!(message, "Your API token is invalid."),
        other => panic!("Expected Upstream, got {other:?}"),
    }
    assert!(output(p).is_empty());
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn test_http_failure_is_request_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .and(path("/v2/competitions/2021/standings"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context(&dir, &server);
    let err = handle_standings(
        &ctx,
        &mut presenter(),
        &LeagueCode::new("PL"),
        &OutputTarget::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, FootballError::Request(_)));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_standings_ranks_in_order() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount(&server, "/v2/competitions/2021/standings", league_table(20), 1).await;

    let ctx = context(&dir, &server);
    let mut p = presenter();
    handle_standings(&ctx, &mut p, &LeagueCode::new("PL"), &OutputTarget::default())
        .await
        .unwrap();

    let out = output(p);
    let positions: Vec<usize> = (1..=20)
        .map(|pos| out.find(&format!("Team {pos:02}")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!out.contains("Group:"));
}

#[tokio::test]
async fn test_standings_unknown_league_makes_no_request() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount(&server, "/v2/competitions/2021/standings", league_table(4), 0).await;

    let ctx = context(&dir, &server);
    let err = handle_standings(
        &ctx,
        &mut presenter(),
        &LeagueCode::new("pl"),
        &OutputTarget::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, FootballError::UnknownLeague { .. }));
}

#[tokio::test]
async fn test_standings_export_writes_both_files() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount(&server, "/v2/competitions/2021/standings", league_table(4), 1).await;

    let ctx = context(&dir, &server);
    let out_dir = dir.path().join("exports");
    let target = OutputTarget {
        json: Some(String::new()),
        csv: Some("table".to_string()),
        dir: Some(out_dir.clone()),
    };
    let mut p = presenter();
    handle_standings(&ctx, &mut p, &LeagueCode::new("PL"), &target)
        .await
        .unwrap();

    let json: Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("footballOut.json")).unwrap())
            .unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["teamName"], "Team 01");

    let csv = std::fs::read_to_string(out_dir.join("table.csv")).unwrap();
    assert_eq!(csv.lines().count(), 5);

    let out = output(p);
    assert_eq!(out.matches("Data has been successfully saved as").count(), 2);
}

#[tokio::test]
async fn test_grouped_standings_print_group_labels() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let group = |code: &str, teams: [&str; 2]| {
        json!({
            "stage": "GROUP_STAGE",
            "type": "TOTAL",
            "group": code,
            "table": [
                { "position": 1, "team": { "name": teams[0] }, "playedGames": 6,
                  "goalsFor": 10, "goalsAgainst": 2, "goalDifference": 8, "points": 15 },
                { "position": 2, "team": { "name": teams[1] }, "playedGames": 6,
                  "goalsFor": 5, "goalsAgainst": 6, "goalDifference": -1, "points": 9 }
            ]
        })
    };
    mount(
        &server,
        "/v2/competitions/2001/standings",
        json!({ "standings": [
            group("GROUP_A", ["Paris", "Napoli"]),
            group("GROUP_B", ["Barcelona", "Inter"])
        ]}),
        1,
    )
    .await;

    let ctx = context(&dir, &server);
    let mut p = presenter();
    handle_standings(&ctx, &mut p, &LeagueCode::new("CL"), &OutputTarget::default())
        .await
        .unwrap();

    let out = output(p);
    let a = out.find("Group: A").unwrap();
    let b = out.find("Group: B").unwrap();
    assert!(a < out.find("Napoli").unwrap());
    assert!(out.find("Napoli").unwrap() < b);
    assert!(b < out.find("Inter").unwrap());
}

#[tokio::test]
async fn test_scores_live_and_recent() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .and(path("/v2/matches"))
        .and(query_param("dateFrom", "2019-04-30"))
        .and(query_param("dateTo", "2019-05-02"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [
                api_match("Arsenal FC", "Chelsea FC", "IN_PLAY", Some((1, 0))),
                api_match("Everton FC", "Burnley FC", "FINISHED", Some((2, 2))),
                api_match("Watford FC", "Fulham FC", "SCHEDULED", None),
            ]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let ctx = context(&dir, &server);

    let mut p = presenter();
    handle_scores(&ctx, &mut p, true, None, &OutputTarget::default())
        .await
        .unwrap();
    let live = output(p);
    assert_eq!(live.lines().count(), 1);
    assert!(live.contains("Arsenal FC") && live.contains("LIVE"));

    let mut p = presenter();
    handle_scores(&ctx, &mut p, false, None, &OutputTarget::default())
        .await
        .unwrap();
    let recent = output(p);
    assert_eq!(recent.lines().count(), 2);
    assert!(recent.contains("Everton FC"));
    assert!(!recent.contains("Watford FC"));
}

#[tokio::test]
async fn test_scores_nothing_found_messages() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount(
        &server,
        "/v2/matches",
        json!({ "matches": [api_match("Watford FC", "Fulham FC", "FINISHED", Some((0, 0)))] }),
        2,
    )
    .await;

    let ctx = context(&dir, &server);

    let mut p = presenter();
    handle_scores(&ctx, &mut p, true, None, &OutputTarget::default())
        .await
        .unwrap();
    assert!(output(p).contains(NO_LIVE));

    let mut p = presenter();
    let target = OutputTarget {
        json: Some(String::new()),
        csv: None,
        dir: Some(dir.path().join("out")),
    };
    handle_scores(&ctx, &mut p, false, Some("arsenal"), &target)
        .await
        .unwrap();
    assert!(output(p).contains(NO_SCORES));
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn test_lists_refresh_replaces_directory() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let published = r#"{ "PL": { "id": 2021, "caption": "Premier League" },
                         "NEW": { "id": "4242", "caption": "New League" } }"#;
    mount(
        &server,
        "/contents/leagueIds.json",
        json!({ "encoding": "base64", "content": STANDARD.encode(published) }),
        1,
    )
    .await;

    let mut ctx = context(&dir, &server);
    let mut p = presenter();
    handle_lists(&mut ctx, &mut p, true).await.unwrap();

    assert!(output(p).contains(REFRESHED));
    assert_eq!(
        ctx.directory.lookup("NEW").unwrap().id,
        CompetitionId::new(4242)
    );
    assert!(ctx.directory.lookup("BL1").is_err());

    let reloaded = LeagueDirectory::load(&ctx.paths.league_ids).unwrap();
    assert_eq!(reloaded, ctx.directory);

    let mut p = presenter();
    handle_lists(&mut ctx, &mut p, false).await.unwrap();
    let table = output(p);
    assert!(table.contains("New League"));
    assert!(table.contains("NEW"));
}

fn seed_corrupt_state(dir: &TempDir) -> AppPaths {
    let paths = AppPaths::in_dir(dir.path());
    std::fs::write(&paths.config, "{ truncated").unwrap();
    std::fs::write(&paths.league_ids, "{ truncated").unwrap();
    paths
}

#[test]
fn test_strict_load_rejects_corrupt_state() {
    let dir = TempDir::new().unwrap();
    let paths = seed_corrupt_state(&dir);

    let err = CommandContext::load(paths, LoadMode::Strict).unwrap_err();
    assert!(matches!(err, FootballError::Corrupt { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_config_rewrites_corrupt_config_file() {
    let dir = TempDir::new().unwrap();
    let paths = seed_corrupt_state(&dir);

    let mut ctx = CommandContext::load(paths.clone(), LoadMode::Repair).unwrap();
    assert_eq!(ctx.directory, LeagueDirectory::bundled().unwrap());

    let mut p = presenter();
    handle_config(&mut ctx, &mut p, Some("fresh-key".to_string())).unwrap();

    assert!(output(p).contains(UPDATED));
    assert_eq!(Config::load(&paths.config).unwrap().api_key, "fresh-key");
}

#[tokio::test]
async fn test_lists_refresh_rewrites_corrupt_directory_file() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let paths = seed_corrupt_state(&dir);
    let published = r#"{ "PL": { "id": 2021, "caption": "Premier League" } }"#;
    mount(
        &server,
        "/contents/leagueIds.json",
        json!({ "encoding": "base64", "content": STANDARD.encode(published) }),
        1,
    )
    .await;

    let mut ctx = CommandContext::load(paths.clone(), LoadMode::Repair).unwrap();
    ctx.league_ids_url = format!("{}/contents/leagueIds.json", server.uri());

    let mut p = presenter();
    handle_lists(&mut ctx, &mut p, true).await.unwrap();

    assert!(output(p).contains(REFRESHED));
    let reloaded = LeagueDirectory::load(&paths.league_ids).unwrap();
    assert_eq!(reloaded.all().len(), 1);
    assert_eq!(reloaded.lookup("PL").unwrap().caption, "Premier League");
}

#[tokio::test]
async fn test_saved_message_shows_path_with_output_dir() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount(&server, "/v2/competitions/2021/standings", league_table(2), 1).await;

    let ctx = context(&dir, &server);
    let out_dir = dir.path().join("exports");
    let target = OutputTarget {
        json: Some("table".to_string()),
        csv: None,
        dir: Some(out_dir.clone()),
    };
    let mut p = presenter();
    handle_standings(&ctx, &mut p, &LeagueCode::new("PL"), &target)
        .await
        .unwrap();

    let expected = format!(
        "Data has been successfully saved as {}",
        out_dir.join("table.json").display()
    );
    assert!(output(p).contains(&expected));
}
