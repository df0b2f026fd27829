//! # musicly Core Library
//!
//! Sorts a flat folder of MP3 files into an `Artist/Album` tree using the
//! tags embedded in each file. The binary only parses arguments and prompts
//! for a folder; everything else lives here so it can be driven from tests.

pub mod audio;
pub mod directory;
pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod progress;
pub mod relocate;
pub mod utils;

pub use error::OrganizeError;
pub use pipeline::{run, AbortReason, OrganizeOptions, RunOutcome, RunSummary};
