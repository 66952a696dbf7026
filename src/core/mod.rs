pub mod report;
pub mod runner;

pub use crate::domain::model::{Principle, Transcript, TranscriptEntry, Variant};
pub use crate::domain::ports::{Console, Demo};
pub use crate::utils::error::Result;
