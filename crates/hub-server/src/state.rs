//! Process-wide server state.
//!
//! One context value owns the two stores; handlers receive it via axum's
//! `State` extractor.  Each store synchronizes itself, so the context needs
//! no lock of its own.

use std::sync::Arc;

use hub_fleet::Fleet;
use hub_world::World;

pub(crate) struct HubState {
    pub fleet: Fleet,
    pub world: World,
}

pub(crate) type SharedState = Arc<HubState>;

impl HubState {
    pub fn shared() -> SharedState {
        Arc::new(Self { fleet: Fleet::new(), world: World::new() })
    }
}
