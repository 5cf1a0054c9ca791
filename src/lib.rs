//! # Shows API
//!
//! A small HTTP service tracking TV shows and how many episodes have been watched.
//!
//! ## Core Components
//!
//! - **[framework]**: the generic [`ResourceActor`](framework::ResourceActor) that owns a
//!   collection and serves create/list/get/update/delete requests in order.
//! - **[model]**: [`Show`](model::Show) and its create/update payloads.
//! - **[show_actor]**: the [`ActorEntity`](framework::ActorEntity) implementation for shows.
//! - **[clients]**: [`ShowClient`](clients::ShowClient), the typed handle to the store.
//! - **[api]**: axum routes and the `{code, success, message, result}` envelope.
//! - **[lifecycle]**: configuration, tracing setup, startup and shutdown.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 8080
//! ```

pub mod api;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod show_actor;
