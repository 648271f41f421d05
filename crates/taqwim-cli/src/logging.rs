use tracing_subscriber::EnvFilter;

/// Crates whose events follow `-v`. Dependencies stay at `warn`.
const LOG_TARGETS: [&str; 4] = ["taqwim", "taqwim_calendar", "taqwim_events", "taqwim_core"];

fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives for a `-v` count, e.g. `warn,taqwim_calendar=debug,...`.
fn directives(verbosity: u8) -> String {
    let level = level(verbosity);
    std::iter::once("warn".to_string())
        .chain(LOG_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the stderr subscriber. Clamp warnings and config resolution show
/// up here; stdout stays clean for `--json` output. `RUST_LOG` wins over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .without_time()
        .compact()
        .init();
}
