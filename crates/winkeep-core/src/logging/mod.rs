use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// Events are emitted as JSON lines on stderr so stdout stays clean for
/// command output. When `quiet` is true only error-level events pass;
/// otherwise info and above. `RUST_LOG` overrides both.
pub fn init_logging(quiet: bool) {
    let level = if quiet { "error" } else { "info" };

    let mut filter = EnvFilter::from_default_env();
    // Both crates log under their own target prefix
    for target in ["winkeep", "winkeep_core"] {
        let directive = format!("{}={}", target, level);
        filter = filter.add_directive(directive.parse().expect("Invalid log directive"));
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
