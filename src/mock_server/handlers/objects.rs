//! Object endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::{ObjectRecord, ObjectRequest, Step};

type SharedState = State<Arc<RwLock<MockState>>>;

fn not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": format!("Object with id={id} was not found.")
        })),
    )
        .into_response()
}

fn forced_failure(step: Step) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": format!("{step} is set to fail")
        })),
    )
        .into_response()
}

/// Collect the repeated `id` parameters of a query string.
fn requested_ids(query: Option<&str>) -> Vec<String> {
    query
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .filter(|(k, _)| k == "id")
                .map(|(_, v)| v.into_owned())
                .collect()
        })
        .unwrap_or_default()
}

/// GET /objects
pub async fn list_objects(State(state): SharedState, RawQuery(query): RawQuery) -> Response {
    let mut state = state.write().await;
    state.record(Step::List, None);
    if state.fails(Step::List) {
        return forced_failure(Step::List);
    }

    let ids = requested_ids(query.as_deref());
    let objects: Vec<ObjectRecord> = state.list_objects(&ids).into_iter().cloned().collect();

    (StatusCode::OK, Json(objects)).into_response()
}

/// POST /objects
pub async fn create_object(
    State(state): SharedState,
    Json(request): Json<ObjectRequest>,
) -> Response {
    let mut state = state.write().await;
    state.record(Step::Create, None);
    if state.fails(Step::Create) {
        return forced_failure(Step::Create);
    }

    let object = state.create_object(request);
    (StatusCode::OK, Json(object)).into_response()
}

/// GET /objects/{id}
pub async fn get_object(State(state): SharedState, Path(id): Path<String>) -> Response {
    let mut state = state.write().await;
    state.record(Step::GetById, Some(&id));
    if state.fails(Step::GetById) {
        return forced_failure(Step::GetById);
    }

    match state.get_object(&id) {
        Some(object) => (StatusCode::OK, Json(object.clone())).into_response(),
        None => not_found(&id),
    }
}

/// PUT /objects/{id}
pub async fn update_object(
    State(state): SharedState,
    Path(id): Path<String>,
    Json(request): Json<ObjectRequest>,
) -> Response {
    let mut state = state.write().await;
    state.record(Step::Update, Some(&id));
    if state.fails(Step::Update) {
        return forced_failure(Step::Update);
    }

    match state.update_object(&id, request) {
        Some(object) => (StatusCode::OK, Json(object)).into_response(),
        None => not_found(&id),
    }
}

/// DELETE /objects/{id}
pub async fn delete_object(State(state): SharedState, Path(id): Path<String>) -> Response {
    let mut state = state.write().await;
    state.record(Step::Delete, Some(&id));
    if state.fails(Step::Delete) {
        return forced_failure(Step::Delete);
    }

    match state.delete_object(&id) {
        Some(_) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": format!("Object with id = {id} has been deleted.")
            })),
        )
            .into_response(),
        None => not_found(&id),
    }
}
