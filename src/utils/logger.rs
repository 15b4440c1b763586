use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins when set. Otherwise quiet runs show only this crate's
/// progress lines; `--verbose` adds its debug output (form rejections,
/// gateway URLs, poll attempts) and info from reqwest and friends.
const QUIET_FILTER: &str = "lead_quote=info";
const VERBOSE_FILTER: &str = "lead_quote=debug,info";

fn default_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// Human-readable logs on stderr, leaving stdout for the quote itself.
pub fn init_cli_logger(verbose: bool) {
    let filter = default_filter(if verbose { VERBOSE_FILTER } else { QUIET_FILTER });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// JSON lines for hosts that ship logs to a collector. Same quiet default,
/// since submission outcomes are logged at info and warn.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(default_filter(QUIET_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(false),
        )
        .init();
}
