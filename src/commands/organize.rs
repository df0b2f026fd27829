use anyhow::{Context, Result};
use musicly::metadata::LoftyTagReader;
use musicly::utils;
use musicly::{OrganizeOptions, RunOutcome};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{info, warn};

/// Ask for the directory to organize; an empty answer picks `default_dir`
pub fn prompt_for_music_dir<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_dir: &str,
) -> Result<String> {
    write!(output, "Music directory to organize [{}]: ", default_dir)
        .context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read music directory from terminal")?;

    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default_dir.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Organize music files into an artist/album structure
pub fn organize_music_library(
    music_dir: Option<String>,
    options: &OrganizeOptions,
) -> Result<ExitCode> {
    let music_dir = match music_dir {
        Some(dir) => dir,
        None => prompt_for_music_dir(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            &utils::get_default_music_dir(),
        )?,
    };

    let outcome = musicly::run(&music_dir, options, &LoftyTagReader)
        .with_context(|| format!("Failed to organize music directory '{}'", music_dir))?;

    match outcome {
        RunOutcome::Completed(summary) => {
            if summary.dry_run {
                info!("This was a dry run. No files were actually moved.");
                info!("Run without --dry-run to perform the actual organization.");
            } else {
                info!(
                    "Organized {} files into {} album folders under {}",
                    summary.files_moved,
                    summary.album_dirs,
                    summary.base_dir.display()
                );
            }
            info!("Closing program.");
            Ok(ExitCode::SUCCESS)
        }
        RunOutcome::Aborted(reason) => {
            warn!("{}", reason);
            info!("Closing program.");
            Ok(ExitCode::from(reason.exit_code()))
        }
    }
}
