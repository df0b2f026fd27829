use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use musicly::directory::UnknownArtistsFolder;
use musicly::OrganizeOptions;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Music directory, or any file inside it (asked for interactively when omitted)
    music_dir: Option<String>,
    /// Show what would be done without making changes
    #[arg(long)]
    dry_run: bool,
    /// Do not create the empty "Unknown Artists" folder
    #[arg(long)]
    no_unknown_artists_folder: bool,
    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet { "musicly=warn" } else { "musicly=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    // Load environment variables from a .env file if present
    dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let options = OrganizeOptions {
        dry_run: cli.dry_run,
        unknown_artists_folder: if cli.no_unknown_artists_folder {
            UnknownArtistsFolder::Never
        } else {
            UnknownArtistsFolder::Always
        },
    };

    commands::organize::organize_music_library(cli.music_dir, &options)
}
