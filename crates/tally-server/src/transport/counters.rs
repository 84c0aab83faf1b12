//! `/counters/:name` handlers.
//!
//! Each handler makes exactly one registry call, records the outcome, and
//! renders success as `{ "<name>": value }`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::app_state::AppState;
use crate::transport::CounterRejection;

fn counter_body(name: String, value: u64) -> Json<Value> {
    let mut body = Map::new();
    body.insert(name, Value::from(value));
    Json(Value::Object(body))
}

pub async fn create_counter(
    State(app): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, CounterRejection> {
    tracing::info!(counter = %name, "request to create counter");
    let res = app.registry().create(&name);
    app.metrics().record("create", &res);
    let value = res?;
    Ok((StatusCode::CREATED, counter_body(name, value)).into_response())
}

pub async fn increment_counter(
    State(app): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, CounterRejection> {
    tracing::info!(counter = %name, "request to increment counter");
    let res = app.registry().increment(&name);
    app.metrics().record("increment", &res);
    let value = res?;
    Ok((StatusCode::OK, counter_body(name, value)).into_response())
}

pub async fn delete_counter(
    State(app): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, CounterRejection> {
    tracing::info!(counter = %name, "request to delete counter");
    let res = app.registry().delete(&name);
    app.metrics().record("delete", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn read_counter(
    State(app): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, CounterRejection> {
    tracing::debug!(counter = %name, "request to read counter");
    let res = app.registry().get(&name);
    app.metrics().record("read", &res);
    let value = res?;
    Ok((StatusCode::OK, counter_body(name, value)).into_response())
}
