//! Axum router wiring.
//!
//! `/counters/:name` carries the counter operations; ops endpoints are
//! mounted when `server.ops_enabled` is set.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, transport::counters};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new().route(
        "/counters/:name",
        get(counters::read_counter)
            .post(counters::create_counter)
            .put(counters::increment_counter)
            .delete(counters::delete_counter),
    );

    if state.cfg().server.ops_enabled {
        router = router
            .route("/healthz", get(ops::healthz))
            .route("/readyz", get(ops::readyz))
            .route("/metrics", get(ops::metrics));
    }

    router.with_state(state)
}
