//! turtle-hub — command-and-control server for a fleet of mining turtles.
//!
//! Agents register, poll for queued commands, and upload block scans;
//! operators steer the fleet through the dashboard, the task endpoints, and
//! free-form chat commands.  All state is in-memory and process-wide: the
//! fleet registry and the world model, each behind its own lock.

mod agent;
mod dashboard;
mod operator;
mod routes;
mod state;


use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::state::HubState;

/// Fixed bind address; the server takes no flags.
const BIND_ADDR: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = routes::router(HubState::shared());

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!("turtle-hub listening on {BIND_ADDR}");
    axum::serve(listener, app).await?;
    Ok(())
}
