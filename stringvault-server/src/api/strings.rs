// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::api::{ApiError, AppState};
use crate::validation;

/// Query parameters for natural-language filtering
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// POST /strings - Analyze and store a string
pub async fn create_string(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let value = validation::extract_value(&body)?;
    let record = state.vault.insert(&value)?;

    info!(id = %record.id, length = record.properties.length, "Created string");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings/:value - Fetch the analysis of a stored string
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state.vault.get_by_value(&value)?;
    Ok(Json(record))
}

/// DELETE /strings/:value - Remove a stored string
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.vault.delete_by_value(&value)?;
    info!("Deleted string");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /strings - List stored strings matching structured filters
pub async fn list_strings(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let spec = validation::parse_filter_params(&params)?;
    let result = state.vault.list_filtered(&spec);

    debug!(count = result.count, "Listed strings");
    Ok(Json(result))
}

/// GET /strings/filter-by-natural-language - List strings matching a free-text query
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = validation::require_query(params.query.as_deref())?;
    let results = state.vault.list_by_query(query)?;

    debug!(
        query = %query,
        count = results.count,
        "Natural language listing"
    );
    Ok(Json(results))
}
