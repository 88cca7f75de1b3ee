use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{delete, get, post},
    Router,
};
use siza_agent::ShoppingAgent;
use siza_core::config::PlatformConfig;
use siza_core::Catalog;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::bootstrap::Application;
use crate::rooms::RoomRegistry;
use crate::{bridge, health};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub agent: ShoppingAgent,
    pub platform: Arc<PlatformConfig>,
    pub rooms: Arc<RoomRegistry>,
}

impl From<&Application> for AppState {
    fn from(app: &Application) -> Self {
        Self {
            catalog: Arc::clone(&app.catalog),
            agent: app.agent.clone(),
            platform: Arc::new(app.config.platform.clone()),
            rooms: Arc::new(RoomRegistry::default()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/tools", get(bridge::list_tools))
        .route("/tools/{name}", post(bridge::call_tool))
        .route("/session", get(bridge::session))
        .route("/audio-policy", get(bridge::audio_policy))
        .route("/rooms", get(bridge::list_rooms))
        .route("/rooms/{room}/join", post(bridge::join_room))
        .route("/rooms/{room}", delete(bridge::leave_room))
        .with_state(state)
}

/// Running HTTP surface. Dropping the handle leaves the server running until
/// the runtime stops; call [`ServerHandle::shutdown`] to drain it.
pub struct ServerHandle {
    pub local_addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// Stops accepting connections and waits up to `grace` for in-flight
    /// requests. Returns `false` when the grace period ran out first.
    pub async fn shutdown(self, grace: Duration) -> bool {
        let _ = self.shutdown.send(());
        match tokio::time::timeout(grace, self.task).await {
            Ok(Ok(Ok(()))) => true,
            Ok(Ok(Err(error))) => {
                error!(
                    event_name = "system.http.error",
                    correlation_id = "shutdown",
                    error = %error,
                    "worker endpoint failed while draining"
                );
                true
            }
            Ok(Err(error)) => {
                error!(
                    event_name = "system.http.error",
                    correlation_id = "shutdown",
                    error = %error,
                    "worker endpoint task aborted"
                );
                true
            }
            Err(_) => {
                warn!(
                    event_name = "system.http.drain_timeout",
                    correlation_id = "shutdown",
                    grace_secs = grace.as_secs(),
                    "in-flight requests did not finish within the grace period"
                );
                false
            }
        }
    }
}

pub async fn spawn(
    bind_address: &str,
    port: u16,
    state: AppState,
) -> std::io::Result<ServerHandle> {
    let address = format!("{bind_address}:{port}");
    let listener = tokio::net::TcpListener::bind(&address).await?;
    let local_addr = listener.local_addr()?;

    info!(
        event_name = "system.http.start",
        correlation_id = "bootstrap",
        bind_address = %local_addr,
        "worker endpoint started"
    );

    let (shutdown, signal) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        let result = axum::serve(listener, router(state))
            .with_graceful_shutdown(async move {
                let _ = signal.await;
            })
            .await;
        if let Err(error) = &result {
            error!(
                event_name = "system.http.error",
                correlation_id = "bootstrap",
                error = %error,
                "worker endpoint terminated unexpectedly"
            );
        }
        result
    });

    Ok(ServerHandle { local_addr, shutdown, task })
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use siza_core::config::AppConfig;

    let app = crate::bootstrap::bootstrap_with_config(AppConfig::default())
        .expect("default config bootstraps");
    AppState::from(&app)
}
