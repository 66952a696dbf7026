#[cfg(feature = "cli")]
pub mod cli;
pub mod showcase_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use showcase_config::{DipConfig, IspConfig, LspConfig, OcpConfig, ShowcaseConfig, SrpConfig};
