// FollowCheck - util/logging.rs
//
// tracing setup for the command-line binary. Everything goes to stderr so
// a username export on stdout can be piped straight into another tool.
//
// What each level carries:
//   error - the failure that ends the run, just before exit code 1
//   warn  - skipped input files, config values that fell back, failed
//           loads that left the previous session state in place
//   info  - lifecycle: start-up, each document loaded, processing
//           complete with the not-following-back count, export written
//   debug - counts: bytes read and validated per document, distinct
//           followers indexed, reconciliation totals, usernames exported
//   trace - view size after every search or sort change, rows printed
//
// Usernames and profile URLs are never logged, only their counts.
//
// Level selection: RUST_LOG, then --debug, then [logging] level in
// config.toml, then "info".

use super::constants;
use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber.
///
/// Must be called once, after config is loaded and before any work starts.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), debug_flag, config_level);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&directive))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = constants::APP_NAME,
        version = constants::APP_VERSION,
        filter = %directive,
        "Logging initialised"
    );
}

/// Pick the filter directive from the available sources, highest priority first.
fn filter_directive(
    rust_log: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> String {
    match (rust_log, debug_flag, config_level) {
        (Some(env), _, _) if !env.trim().is_empty() => env.to_string(),
        (_, true, _) => "debug".to_string(),
        (_, false, Some(level)) => level.to_string(),
        _ => constants::DEFAULT_LOG_LEVEL.to_string(),
    }
}
