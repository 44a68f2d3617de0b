//! Agent-facing endpoints: register, poll, update, position, scan upload.
//!
//! Agents treat any non-2xx response as a transport failure, so "you are not
//! registered" travels as HTTP 200 with `{"error": "re-register"}` in the
//! body.  Whatever id the agent presented — stale, malformed, or never
//! issued — the cure is the same: register again.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use hub_core::TurtleId;
use hub_fleet::TurtleStatus;

use crate::state::SharedState;

/// The sentinel that tells an agent to register anew.
fn re_register() -> Response {
    Json(json!({ "error": "re-register" })).into_response()
}

/// POST `/register` — allocate an id and install the turtle.
///
/// A missing body and an empty JSON object both mean "no initial status":
/// the turtle gets the registration default (origin, facing north, fuel
/// `"N/A"`).
pub(crate) async fn register(
    State(state): State<SharedState>,
    body: Option<Json<Value>>,
) -> Response {
    let initial = match body {
        Some(Json(Value::Object(fields))) if !fields.is_empty() => {
            match serde_json::from_value::<TurtleStatus>(Value::Object(fields)) {
                Ok(status) => Some(status),
                Err(err) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "error": format!("invalid status: {err}") })),
                    )
                        .into_response();
                }
            }
        }
        _ => None,
    };
    let id = state.fleet.register(initial);
    Json(json!({ "id": id })).into_response()
}

/// POST `/poll/<id>` — replace the status and drain the queue.
pub(crate) async fn poll(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(status): Json<TurtleStatus>,
) -> Response {
    let Ok(id) = id.parse::<TurtleId>() else {
        return re_register();
    };
    match state.fleet.drain_queue(id, status) {
        Ok(commands) => Json(json!({ "commands": commands })).into_response(),
        Err(_) => re_register(),
    }
}

/// POST `/update/<id>` — replace the status without touching the queue.
pub(crate) async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(status): Json<TurtleStatus>,
) -> Response {
    let Ok(id) = id.parse::<TurtleId>() else {
        return re_register();
    };
    match state.fleet.update_status(id, status) {
        Ok(()) => Json(json!({ "status": "ok" })).into_response(),
        Err(_) => re_register(),
    }
}

/// GET `/get_position/<id>` — the typed slice of the turtle's status.
pub(crate) async fn get_position(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Response {
    let status = id
        .parse::<TurtleId>()
        .and_then(|id| state.fleet.get_status(id));
    match status {
        Ok(status) => Json(json!({
            "x": status.x,
            "y": status.y,
            "z": status.z,
            "dir": status.dir,
        }))
        .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Turtle not found" })),
        )
            .into_response(),
    }
}

/// Body of a scan report: block names keyed by `"x,y,z"`.
#[derive(serde::Deserialize)]
pub(crate) struct ScanReport {
    #[serde(default)]
    blocks: HashMap<String, String>,
}

/// POST `/scan_report/<id>` — merge a scan into the world model.
///
/// Individual entries with malformed keys are dropped; the rest of the scan
/// still counts.
pub(crate) async fn scan_report(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(report): Json<ScanReport>,
) -> Response {
    let Ok(id) = id.parse::<TurtleId>() else {
        return re_register();
    };
    if state.fleet.get_status(id).is_err() {
        return re_register();
    }
    let stats = state.world.ingest(report.blocks);
    Json(json!({
        "status": "ok",
        "message": "Scan data processed.",
        "stored": stats.stored,
        "rejected": stats.rejected,
    }))
    .into_response()
}
