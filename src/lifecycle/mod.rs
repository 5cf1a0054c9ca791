//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the server.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - instantiate the show actor and its client
//! 2. **Dependency Injection** - hand the client to the HTTP router as state
//! 3. **Graceful Shutdown** - drop clients, then await the actor task
//! 4. **Configuration** - [`Config`] from flags or `SHOWS_*` environment variables
//! 5. **Observability Setup** - [`setup_tracing`]
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop serving** - `axum::serve` returns after Ctrl-C and in-flight requests finish
//! 2. **Drop all clients** - closes the sender side of the channel
//! 3. **Actor detects closure** - `receiver.recv()` returns `None`, the actor logs its final size
//! 4. **Await completion** - wait for the actor task to finish

pub mod config;
pub mod show_system;
pub mod tracing;

pub use self::config::*;
pub use self::show_system::*;
pub use self::tracing::*;
