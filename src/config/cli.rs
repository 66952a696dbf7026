use crate::core::report::OutputFormat;
use crate::domain::model::Principle;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-showcase")]
#[command(about = "Flawed and improved designs for five object-oriented principles")]
pub struct CliConfig {
    /// Only run these principles (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<Principle>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Print demo output live as each demo runs instead of rendering a report
    #[arg(long, conflicts_with_all = ["output", "format"])]
    pub stream: bool,

    /// TOML file with sample data for the demos
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }
        Ok(())
    }
}
