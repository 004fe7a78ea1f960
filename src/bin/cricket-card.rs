use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cricket-card", version, about)]
struct Cli {
    /// cricketdata.org API key.
    #[arg(long, env = "CRICKET_API_KEY", hide_env_values = true)]
    api_key: String,

    /// API root; `/matches` is appended.
    #[arg(long, default_value = cricket_card::DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory holding the font, backgrounds and `ipl_logos/`.
    #[arg(long, default_value = cricket_card::DEFAULT_ASSETS_DIR)]
    assets: PathBuf,

    /// Output PNG path (its directory must exist).
    #[arg(long, default_value = cricket_card::DEFAULT_OUTPUT_PATH)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api = cricket_card::CricketApi::new(
        cricket_card::ApiConfig::new(cli.api_key).with_base_url(cli.base_url),
    )
    .context("configure match feed")?;

    let config = cricket_card::RunConfig {
        assets: cricket_card::AssetPaths::under(&cli.assets),
        output: cli.out,
    };

    match cricket_card::run(&config, &api)
        .with_context(|| format!("render card to '{}'", config.output.display()))?
    {
        cricket_card::RunOutcome::Written { path, .. } => {
            println!("IPL Image Generated: {}", path.display());
        }
        cricket_card::RunOutcome::NoMatch => {
            println!("No IPL match found");
        }
    }
    Ok(())
}
