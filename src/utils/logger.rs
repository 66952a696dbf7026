use std::io::Stderr;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, format::DefaultFields, format::Format};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "solid_showcase=info";
const VERBOSE_DIRECTIVES: &str = "solid_showcase=debug,info";

// Logs go to stderr so the report on stdout stays clean.
fn base_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> Stderr>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr as fn() -> Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

fn filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

pub fn init_cli_logger(verbose: bool) {
    let directives = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };

    tracing_subscriber::registry()
        .with(filter(directives))
        .with(base_layer().compact())
        .init();
}

/// Structured logs for when the report itself is piped to another tool.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(filter(DEFAULT_DIRECTIVES))
        .with(base_layer().json())
        .init();
}
