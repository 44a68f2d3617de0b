//! Dashboard and world-view pages.
//!
//! The real 3D front-end is external and talks to `/world_data`; the HTML
//! served here is a minimal operator console — fleet table, command forms,
//! and a placeholder world page.

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use serde_json::{Map, Value, json};

use crate::state::SharedState;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// GET `/` — the operator console.
pub(crate) async fn index(State(state): State<SharedState>) -> Html<String> {
    let mut rows = String::new();
    for (id, turtle) in state.fleet.list() {
        let status = &turtle.status;
        let fuel = status
            .extra
            .get("fuel")
            .map(|v| v.to_string())
            .unwrap_or_else(|| "?".to_string());
        let queue = if turtle.queue.is_empty() {
            "<em>idle</em>".to_string()
        } else {
            escape(&turtle.queue.join(", "))
        };
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}: {queue}</td></tr>\n",
            status.position(),
            status.dir_label(),
            escape(&fuel),
            turtle.queue.len(),
        ));
    }

    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head><title>turtle-hub</title></head>\n<body>\n\
         <h1>turtle-hub</h1>\n\
         <p>{} turtle(s) registered, {} blocks known. <a href=\"/world\">3D world view</a></p>\n\
         <table border=\"1\">\n\
         <tr><th>Id</th><th>Position</th><th>Facing</th><th>Fuel</th><th>Queue</th></tr>\n\
         {rows}</table>\n\
         <h2>Send commands</h2>\n\
         <form method=\"post\" action=\"/add_commands\">\n\
         Turtle <input name=\"turtle_id\" size=\"4\">\n\
         Commands <input name=\"commands\" size=\"60\" \
         placeholder=\"goto 0 70 0, mine iron_ore\">\n\
         <button type=\"submit\">Queue</button>\n\
         </form>\n\
         <form method=\"post\" action=\"/clear_queue\">\n\
         Turtle <input name=\"turtle_id\" size=\"4\">\n\
         <button type=\"submit\">Clear queue</button>\n\
         </form>\n\
         </body>\n</html>\n",
        state.fleet.len(),
        state.world.len(),
    );
    Html(html)
}

/// GET `/world` — placeholder page for the external 3D viewer; it fetches
/// `/world_data` itself.
pub(crate) async fn world_view() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\n<html>\n<head><title>turtle-hub world</title></head>\n<body>\n\
         <h1>World view</h1>\n\
         <p>The 3D viewer renders <a href=\"/world_data\">/world_data</a>.</p>\n\
         </body>\n</html>\n",
    )
}

/// GET `/world_data` — the snapshot the viewer polls: every turtle and every
/// known block.
pub(crate) async fn world_data(State(state): State<SharedState>) -> Json<Value> {
    let mut turtles = Map::new();
    for (id, turtle) in state.fleet.list() {
        turtles.insert(id.to_string(), json!(turtle));
    }

    let blocks: Vec<Value> = state
        .world
        .snapshot()
        .into_iter()
        .map(|cell| {
            json!({
                "x": cell.pos.x,
                "y": cell.pos.y,
                "z": cell.pos.z,
                "name": cell.name,
                "color": cell.color,
            })
        })
        .collect();

    Json(json!({ "turtles": turtles, "blocks": blocks }))
}
