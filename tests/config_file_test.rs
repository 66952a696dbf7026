use anyhow::Result;
use solid_showcase::core::report::{self, OutputFormat};
use solid_showcase::utils::validation::Validate;
use solid_showcase::{principles, DemoRunner, Principle, ShowcaseConfig, Variant};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_config_file_drives_demos() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[srp]
requests = [
    {{ name = "Grace", email = "grace@example.com" }},
    {{ name = "Mallory", email = "mallory@" }},
]

[dip]
wheel_count = 3
engine = "Diesel"
"#
    )?;

    let config = ShowcaseConfig::from_file(file.path())?;
    config.validate()?;

    let transcript = DemoRunner::new(principles::catalog(&config)?)
        .with_filter(vec![Principle::Srp, Principle::Dip])
        .run()?;

    assert_eq!(
        transcript.lines_for(Principle::Srp, Variant::Improved),
        vec!["Created user Grace <grace@example.com> in the database"]
    );
    assert_eq!(
        transcript.lines_for(Principle::Dip, Variant::Improved),
        vec!["3 wheels are rolling", "Diesel engine is running"]
    );
    // The rigid car ignores configuration.
    assert_eq!(
        transcript.lines_for(Principle::Dip, Variant::Flawed),
        vec!["4 wheels are rolling", "V6 engine is running"]
    );
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let config = ShowcaseConfig::from_toml_str(
        r#"
[isp]
values = []
"#,
    )?;
    assert!(config.validate().is_err());
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = ShowcaseConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, solid_showcase::DemoError::IoError(_)));
}

#[test]
fn test_csv_report_written_to_nested_path() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("reports").join("showcase.csv");

    let transcript = DemoRunner::new(principles::catalog(&ShowcaseConfig::default())?)
        .with_filter(vec![Principle::Ocp])
        .run()?;
    let rendered = report::render(&transcript, OutputFormat::Csv)?;
    report::write_report(&path, &rendered)?;

    let written = std::fs::read_to_string(&path)?;
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("principle,variant,line"));
    assert_eq!(lines.next(), Some("ocp,flawed,London"));
    assert_eq!(written.lines().count(), 1 + transcript.len());
    Ok(())
}
