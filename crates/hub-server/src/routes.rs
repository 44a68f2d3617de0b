//! Route table.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;
use crate::{agent, dashboard, operator};

pub(crate) fn router(state: SharedState) -> Router {
    Router::new()
        // Dashboard & world view
        .route("/", get(dashboard::index))
        .route("/world", get(dashboard::world_view))
        .route("/world_data", get(dashboard::world_data))
        // Agent-facing
        .route("/register", post(agent::register))
        .route("/poll/:id", post(agent::poll))
        .route("/update/:id", post(agent::update))
        .route("/get_position/:id", get(agent::get_position))
        .route("/scan_report/:id", post(agent::scan_report))
        // Operator-facing
        .route("/add_commands", post(operator::add_commands))
        .route("/clear_queue", post(operator::clear_queue))
        .route("/pathfind/:id/:x/:y/:z", get(operator::pathfind))
        .route("/find_and_mine/:id/:name", post(operator::find_and_mine))
        .route("/chat_command", post(operator::chat_command))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
