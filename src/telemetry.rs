//! Logging setup for the `utm` and `api-server` binaries
//!
//! | Variable | Effect |
//! |---|---|
//! | `RUST_LOG` | Log filter (defaults to `info` for `api-server`, `warn` for `utm`) |
//! | `UTM_LOG_FORMAT=json` | Emit newline-delimited JSON logs |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialises the global `tracing` subscriber
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let use_json = std::env::var("UTM_LOG_FORMAT").as_deref() == Ok("json");

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
