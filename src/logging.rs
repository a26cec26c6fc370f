//! Tracing setup for the `annotree` binary.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. The binary installs one when `ANNOTREE_LOG` (or
//! `RUST_LOG`) is set:
//!
//! ```bash
//! ANNOTREE_LOG=debug annotree annotate tree.json
//! ANNOTREE_LOG="annotree::annotate::walk=trace" annotree annotate tree.json
//! ```
//!
//! Output goes to stderr so it never mixes with the tree on stdout.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ANNOTREE_LOG";

/// Build an `EnvFilter` from `ANNOTREE_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Initialise the global tracing subscriber. Does nothing when neither
/// variable is set, or when a subscriber is already installed.
pub fn init_tracing() {
    let has_own = std::env::var(LOG_ENV).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own && !has_rust_log {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
