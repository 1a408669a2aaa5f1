//! `football config`

use std::io::Write;

use dialoguer::{theme::ColorfulTheme, Input};
use tracing::info;

use super::CommandContext;
use crate::{output::Presenter, Result};

pub const PROMPT: &str = "Enter API KEY <leave blank in case unchanged>";
pub const UPDATED: &str = "API KEY has been updated.";

/// Set the API key from `--api-key`, or prompt for it.
pub fn handle_config<W: Write>(
    ctx: &mut CommandContext,
    presenter: &mut Presenter<W>,
    api_key: Option<String>,
) -> Result<()> {
    let answer = match api_key {
        Some(key) => key,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()?,
    };
    apply_answer(ctx, presenter, &answer)
}

/// Store a non-blank answer and confirm; a blank answer changes nothing.
pub fn apply_answer<W: Write>(
    ctx: &mut CommandContext,
    presenter: &mut Presenter<W>,
    answer: &str,
) -> Result<()> {
    if !ctx.config.apply_api_key(answer) {
        info!("API key left unchanged");
        return Ok(());
    }
    ctx.config.save(&ctx.paths.config)?;
    presenter.update(UPDATED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands::test_support::{context, output, presenter},
        core::Config,
    };
    use tempfile::TempDir;

    #[test]
    fn test_answer_is_saved_and_reported() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir, "http://unused");
        let mut p = presenter();

        handle_config(&mut ctx, &mut p, Some("  new-key ".to_string())).unwrap();

        assert_eq!(ctx.config.api_key, "new-key");
        assert_eq!(Config::load(&ctx.paths.config).unwrap().api_key, "new-key");
        assert!(output(p).contains(UPDATED));
    }

    #[test]
    fn test_blank_answer_keeps_key_and_file() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir, "http://unused");
        let mut p = presenter();

        apply_answer(&mut ctx, &mut p, "   ").unwrap();

        assert_eq!(ctx.config.api_key, "test-key");
        assert!(!ctx.paths.config.exists());
        assert!(output(p).is_empty());
    }
}
