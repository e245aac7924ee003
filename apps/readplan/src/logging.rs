use tracing_subscriber::EnvFilter;

/// Crates that emit events: metadata gathering, plan assembly, day rendering.
/// The partition, date and writer crates report through errors only.
const LOG_TARGETS: &[&str] = &["readplan", "rp_catalog", "rp_plan", "rp_schedule"];

/// Install the stderr subscriber.
///
/// `-v` count picks the level for [`LOG_TARGETS`] (none: warn, `-v`: info,
/// `-vv`: debug, more: trace) unless `RUST_LOG` is set. Stdout is left to
/// the JSON summary.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            LOG_TARGETS
                .iter()
                .map(|t| format!("{t}={level}"))
                .collect::<Vec<_>>()
                .join(","),
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
