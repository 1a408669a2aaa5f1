//! Entry point: parse CLI and dispatch to command handlers.

use std::{io, process::ExitCode};

use clap::Parser;
use crossterm::style::Stylize;
use football_cli::{
    cli::{Commands, Football},
    commands::{
        config::handle_config,
        fixtures::{handle_fixtures, FixturesParams},
        lists::handle_lists,
        scores::handle_scores,
        standings::handle_standings,
        CommandContext, LoadMode,
    },
    core::AppPaths,
    output::Presenter,
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "football_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(app: Football) -> Result<()> {
    let mode = match &app.command {
        Commands::Config { .. } | Commands::Lists { refresh: true } => LoadMode::Repair,
        _ => LoadMode::Strict,
    };
    let mut ctx = CommandContext::load(AppPaths::resolve(), mode)?;
    let mut presenter = Presenter::new(io::stdout());

    match app.command {
        Commands::Scores { live, team, output } => {
            handle_scores(&ctx, &mut presenter, live, team.as_deref(), &output.into()).await
        }
        Commands::Fixtures {
            days,
            league,
            team,
            next,
            output,
        } => {
            let params = FixturesParams {
                days,
                league,
                team,
                next,
                output: output.into(),
            };
            handle_fixtures(&ctx, &mut presenter, &params).await
        }
        Commands::Standings { league, output } => {
            handle_standings(&ctx, &mut presenter, &league, &output.into()).await
        }
        Commands::Lists { refresh } => handle_lists(&mut ctx, &mut presenter, refresh).await,
        Commands::Config { api_key } => handle_config(&mut ctx, &mut presenter, api_key),
    }
}

/// Run the CLI.
#[tokio::main]
async fn main() -> ExitCode {
    let app = Football::parse();
    init_logging(app.verbose);

    match run(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", e.to_string().red().bold());
            ExitCode::from(e.exit_code())
        }
    }
}
