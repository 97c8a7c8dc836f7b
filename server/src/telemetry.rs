// server/src/telemetry.rs

use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` controls filtering (default `info`). `LOG_FORMAT=json` switches
/// to JSON lines; anything else gives the human-readable formatter. Span close
/// events are logged so each request and service call reports its duration.
pub fn init_tracing() {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let json = std::env::var("LOG_FORMAT")
    .map(|v| v.eq_ignore_ascii_case("json"))
    .unwrap_or(false);

  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE);

  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}
