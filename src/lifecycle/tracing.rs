//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the server.
//!
//! The compact formatter hides the module prefix (`with_target(false)`); the actor tags
//! every event with a `collection` field instead, and handlers open a span per request.
//!
//! ```bash
//! # Lifecycle events only (default)
//! RUST_LOG=info cargo run
//!
//! # Full payloads for every store request
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, a create followed by an update looks like:
//!
//! ```text
//! DEBUG create_show: Create collection="shows" params=ShowCreate { name: "Breaking Bad", episodes_seen: 5 }
//!  INFO create_show: Created collection="shows" id=1 size=1
//! DEBUG update_show{id="1"}: Update collection="shows" id=1 update=ShowUpdate { name: None, episodes_seen: Some(10) }
//!  INFO update_show{id="1"}: Updated collection="shows" id=1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber, filtered by `RUST_LOG` (default `info`).
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
