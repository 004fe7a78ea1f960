use std::path::PathBuf;

use chrono::NaiveTime;

use crate::api::client::MatchFeed;
use crate::foundation::config::RunConfig;
use crate::foundation::error::CardResult;
use crate::output::write_png;
use crate::render::cpu::CardRenderer;
use crate::scene::config::SceneConfig;
use crate::scene::status::MatchStatus;
use crate::select::select_match;

/// How a run ended, when it did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// A card was written.
    Written {
        path: PathBuf,
        status: MatchStatus,
        teams: [String; 2],
    },
    /// The feed had no live or upcoming tournament match; nothing was written.
    NoMatch,
}

/// Fetch, select, compose, render and save, stamping the footer with the local time.
pub fn run(config: &RunConfig, feed: &dyn MatchFeed) -> CardResult<RunOutcome> {
    run_at(config, feed, chrono::Local::now().time())
}

/// [`run`] with an explicit footer time.
#[tracing::instrument(skip_all, fields(output = %config.output.display()))]
pub fn run_at(
    config: &RunConfig,
    feed: &dyn MatchFeed,
    updated_at: NaiveTime,
) -> CardResult<RunOutcome> {
    let list = feed.fetch_matches()?;
    let Some(record) = select_match(list)? else {
        tracing::info!("no live or upcoming tournament match");
        return Ok(RunOutcome::NoMatch);
    };
    tracing::info!(
        team1 = %record.teams[0],
        team2 = %record.teams[1],
        status = %record.status,
        "selected match"
    );

    let scene = SceneConfig::compose(&record, &config.assets, updated_at)?;
    let mut renderer = CardRenderer::new(config.assets.clone())?;
    let frame = renderer.render(&scene)?;
    write_png(&frame, &config.output)?;

    tracing::info!(path = %config.output.display(), "card written");
    Ok(RunOutcome::Written {
        path: config.output.clone(),
        status: scene.status,
        teams: record.teams,
    })
}
