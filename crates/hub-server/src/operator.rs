//! Operator-facing endpoints: queue writes, planning requests, chat tasks.
//!
//! Form endpoints come from the dashboard and answer with a 303 back to it;
//! planning failures map onto status codes (404 unknown turtle or target,
//! 400 malformed input, 503 empty fleet).

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde_json::json;

use hub_core::{BlockPos, HubError, TurtleId};
use hub_tasks::{dispatch_batch, dispatch_chat, enqueue_goto, enqueue_mine_nearest};

use crate::state::SharedState;

/// The operator-facing answer for any id that was never issued — whether it
/// fails to parse or is simply not in the registry, the turtle doesn't exist.
fn turtle_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Turtle not found" })),
    )
        .into_response()
}

/// Map a task failure onto the operator-facing status codes.
fn task_error(err: HubError) -> Response {
    let message = err.to_string();
    match err {
        HubError::TurtleNotFound(_) => turtle_not_found(),
        HubError::NoTarget(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": "error", "message": message })),
        )
            .into_response(),
        HubError::Parse(_) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }
        HubError::FleetEmpty => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "error", "message": message })),
        )
            .into_response(),
    }
}

#[derive(serde::Deserialize)]
pub(crate) struct AddCommandsForm {
    turtle_id: String,
    #[serde(default)]
    commands: String,
}

/// POST `/add_commands` — dashboard form: a comma/newline batch for one
/// turtle.  Every sub-command goes through the task planner; on success the
/// browser bounces back to the dashboard.
pub(crate) async fn add_commands(
    State(state): State<SharedState>,
    Form(form): Form<AddCommandsForm>,
) -> Response {
    let Ok(id) = form.turtle_id.parse::<TurtleId>() else {
        return turtle_not_found();
    };
    match dispatch_batch(&state.fleet, &state.world, id, &form.commands) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => task_error(err),
    }
}

#[derive(serde::Deserialize)]
pub(crate) struct ClearQueueForm {
    turtle_id: String,
}

/// POST `/clear_queue` — dashboard form: drop everything queued.
pub(crate) async fn clear_queue(
    State(state): State<SharedState>,
    Form(form): Form<ClearQueueForm>,
) -> Response {
    let Ok(id) = form.turtle_id.parse::<TurtleId>() else {
        return turtle_not_found();
    };
    match state.fleet.clear_queue(id) {
        Ok(()) => Redirect::to("/").into_response(),
        Err(err) => task_error(err),
    }
}

/// GET `/pathfind/<id>/<x>/<y>/<z>` — plan a route and queue its waypoints.
pub(crate) async fn pathfind(
    State(state): State<SharedState>,
    Path((id, x, y, z)): Path<(String, String, String, String)>,
) -> Response {
    let Ok(id) = id.parse::<TurtleId>() else {
        return turtle_not_found();
    };
    let (Ok(x), Ok(y), Ok(z)) = (x.parse::<i32>(), y.parse::<i32>(), z.parse::<i32>()) else {
        return task_error(HubError::Parse("invalid coordinates".into()));
    };
    match enqueue_goto(&state.fleet, &state.world, id, BlockPos::new(x, y, z)) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => task_error(err),
    }
}

/// POST `/find_and_mine/<id>/<name>` — plan to the nearest matching block
/// and queue the route plus the mining step.
pub(crate) async fn find_and_mine(
    State(state): State<SharedState>,
    Path((id, name)): Path<(String, String)>,
) -> Response {
    let Ok(id) = id.parse::<TurtleId>() else {
        return turtle_not_found();
    };
    match enqueue_mine_nearest(&state.fleet, &state.world, id, &name) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => task_error(err),
    }
}

#[derive(serde::Deserialize)]
pub(crate) struct ChatRequest {
    command: String,
}

/// POST `/chat_command` — free-form task, turtle chosen by the fleet.
///
/// Task-level failures (unknown block, bad syntax) ride back in the JSON
/// body with `"status": "error"`; only an empty fleet is an HTTP error.
pub(crate) async fn chat_command(
    State(state): State<SharedState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    match dispatch_chat(&state.fleet, &state.world, &request.command) {
        Ok((id, outcome)) => Json(json!({
            "status": "ok",
            "message": format!("turtle {id}: {}", outcome.summary()),
        }))
        .into_response(),
        Err(err @ HubError::FleetEmpty) => task_error(err),
        Err(err) => Json(json!({ "status": "error", "message": err.to_string() })).into_response(),
    }
}
