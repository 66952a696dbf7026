use crate::core::Transcript;
use crate::utils::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

pub fn render(transcript: &Transcript, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(transcript)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&transcript.entries)?),
        OutputFormat::Csv => render_csv(transcript),
    }
}

fn render_text(transcript: &Transcript) -> String {
    let mut output = String::new();
    let mut current = None;

    for entry in &transcript.entries {
        let section = (entry.principle, entry.variant);
        if current != Some(section) {
            if current.is_some() {
                output.push('\n');
            }
            // Writing to a String cannot fail.
            let _ = writeln!(
                output,
                "== {} ({}) ==",
                entry.principle.title(),
                entry.variant
            );
            current = Some(section);
        }
        output.push_str(&entry.line);
        output.push('\n');
    }

    output
}

fn render_csv(transcript: &Transcript) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for entry in &transcript.entries {
        writer.serialize(entry)?;
    }

    let bytes = writer.into_inner().map_err(|e| DemoError::IoError(e.into_error()))?;
    utf8_output(bytes)
}

fn utf8_output(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| DemoError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn write_report<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    tracing::info!("📁 Report saved to: {}", path.display());
    Ok(())
}
