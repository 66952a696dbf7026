use clap::Parser;
use solid_showcase::adapters::StdoutConsole;
use solid_showcase::core::report;
use solid_showcase::principles;
use solid_showcase::utils::error::ErrorSeverity;
use solid_showcase::utils::{logger, validation::Validate};
use solid_showcase::{CliConfig, DemoError, DemoRunner, ShowcaseConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting solid-showcase");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!("❌ Showcase failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(cli: &CliConfig) -> Result<(), DemoError> {
    cli.validate()?;

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading sample data from: {}", path);
            ShowcaseConfig::from_file(path)?
        }
        None => ShowcaseConfig::default(),
    };
    config.validate()?;

    let runner = DemoRunner::new(principles::catalog(&config)?).with_filter(cli.only.clone());
    if cli.stream {
        let sections = runner.stream(&StdoutConsole)?;
        tracing::info!("Streamed {} sections", sections);
        return Ok(());
    }

    let transcript = runner.run()?;
    let rendered = report::render(&transcript, cli.format)?;

    match &cli.output {
        Some(path) => report::write_report(path, &rendered)?,
        None => print!("{}", rendered),
    }

    Ok(())
}
