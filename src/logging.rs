//! Logging configuration for the command line front-end.
//!
//! Logs go to stderr so command output on stdout stays clean. Set
//! `RPGHUD_LOG=1` (or pass `--verbose`) to enable debug output for the rpghud
//! crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,rpghud=debug,rpghud_overlay=debug,rpghud_types=debug";

/// Initialize stderr logging. Call once, before any command runs.
pub fn init(verbose: bool) {
    let debug_logging = verbose || std::env::var("RPGHUD_LOG").is_ok();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter = EnvFilter::new(if debug_logging { DEBUG_DIRECTIVE } else { "info" });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "rpghud logging initialized");
}
