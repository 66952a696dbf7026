pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod principles;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ShowcaseConfig;
pub use crate::core::{report::OutputFormat, runner::DemoRunner};
pub use domain::model::{Principle, Transcript, TranscriptEntry, Variant};
pub use utils::error::{DemoError, Result};
