use crate::AppState;
use crate::domain::{Limit, Record};
use crate::error::ApiError;
use crate::models::EntityModel;
use axum::{Json, http::Method};
use std::collections::HashMap;

pub async fn list_action(
    state: &AppState,
    method: &Method,
    params: &HashMap<String, String>,
) -> Result<Json<Vec<Record>>, ApiError> {
    if *method != Method::GET {
        return Err(ApiError::MethodNotSupported);
    }

    let limit = Limit::from_query(params.get("limit").map(String::as_str));

    let model = EntityModel::new(state.database.clone(), state.config.user_entity);
    let records = model
        .list_top_n(limit)
        .await
        .map_err(|e| ApiError::internal(e, state.config.redact_error_details))?;

    tracing::debug!(
        entity = %model.entity(),
        %limit,
        count = records.len(),
        "listed records"
    );

    Ok(Json(records))
}
