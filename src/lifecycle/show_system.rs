use super::config::Config;
use crate::api;
use crate::clients::ShowClient;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};

/// The runtime orchestrator for the shows API.
///
/// `ShowSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the store actor
/// - **Dependency Wiring**: handing the store client to the HTTP router
///
/// # Example
///
/// ```ignore
/// let system = ShowSystem::new(32);
/// let app = system.router();
/// // ... serve `app` ...
/// system.shutdown().await?;
/// ```
pub struct ShowSystem {
    /// Client for interacting with the Show actor
    pub show_client: ShowClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShowSystem {
    /// Creates the show actor and spawns it on the current runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (show_actor, show_client) = crate::show_actor::new(buffer_size);
        let show_handle = tokio::spawn(show_actor.run(()));

        Self {
            show_client,
            handles: vec![show_handle],
        }
    }

    /// Builds the HTTP router backed by this system's store.
    pub fn router(&self) -> Router {
        api::router(self.show_client.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the actor's channel once every other clone (for
    /// example, the one held by a router) is gone; the actor then drains and exits.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.show_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// Serves the API at `config.addr()` until Ctrl-C, then shuts the system down.
pub async fn serve(config: &Config) -> Result<(), std::io::Error> {
    let system = ShowSystem::new(config.buffer_size);
    let listener = TcpListener::bind(config.addr()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, system.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await.map_err(std::io::Error::other)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
}
