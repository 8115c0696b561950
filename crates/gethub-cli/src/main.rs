//! gethub - find the right download in a GitHub release

use anyhow::Result;
use clap::Parser;
use gethub_core::Selection;
use tracing_subscriber::EnvFilter;

use gethub_cli::cmd;
use gethub_cli::{Cli, Commands, ManifestCommands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.source_config();
    let verbose = cli.verbose;

    match cli.command {
        Commands::Show {
            repo,
            release,
            os,
            tag,
            platform,
            json,
        } => {
            let selection = Selection {
                version: release,
                os,
                tag,
            };
            cmd::show::show(
                &repo,
                &selection,
                platform.resolve(),
                config,
                json,
                verbose,
            )
            .await
        }
        Commands::Versions { repo, json } => cmd::versions::versions(&repo, config, json).await,
        Commands::Classify {
            files,
            manifest,
            platform,
            json,
        } => cmd::classify::classify(&files, manifest.as_deref(), platform.resolve(), json),
        Commands::Manifest { command } => match command {
            ManifestCommands::Check { path, strict } => cmd::manifest::check(&path, strict),
        },
        Commands::RateLimit { json } => cmd::rate_limit::rate_limit(config, json).await,
        Commands::Completions { shell } => {
            cmd::completions::completions(shell);
            Ok(())
        }
    }
}
