//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod show_client;

pub use show_client::*;
