use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &[
    "kairos",
    "kairos_calendar",
    "kairos_calibrate",
    "kairos_ensemble",
    "kairos_events",
    "kairos_io",
    "kairos_pipeline",
    "kairos_stats",
    "kairos_verify",
    "kairos_window",
];

/// Verbosity count to level: 0 warn, 1 info, 2 debug, 3+ trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing from the CLI verbosity level.
///
/// `RUST_LOG` overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
