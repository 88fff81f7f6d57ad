pub mod action;
pub mod controller;

use crate::AppState;
use action::UserAction;
use axum::{
    Router,
    extract::{Query, RawPathParams, State, rejection::RawPathParamsRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
};
use std::collections::HashMap;

// mounted under "/user"; the action segment decides, anything after it is
// ignored. "/user" and "/user/" fall through to the app's 404 fallback
pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/{action}", any(dispatch_action))
        .route("/{action}/", any(dispatch_action))
        .route("/{action}/{*rest}", any(dispatch_action))
}

async fn dispatch_action(
    State(state): State<AppState>,
    params: Result<RawPathParams, RawPathParamsRejection>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    // a segment that does not even decode names no action
    let Ok(params) = params else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let action = params
        .iter()
        .find(|(key, _)| *key == "action")
        .and_then(|(_, segment)| UserAction::from_segment(segment));

    match action {
        Some(UserAction::List) => controller::list_action(&state, &method, &query)
            .await
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
