use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
/// Logs go to stderr as JSON so stdout stays free for the clock itself.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(build_filter(quiet))
        .init();
}

fn build_filter(quiet: bool) -> EnvFilter {
    let directive = if quiet {
        "tickclock=error"
    } else {
        "tickclock=info"
    };

    // Static directives always parse; fall back to the env filter alone if not.
    match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    }
}
