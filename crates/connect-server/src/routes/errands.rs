use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use connect_core::models::errand::{Errand, NewErrand};

use crate::error::{ApiError, ApiJson, ApiPath};
use crate::state::AppState;

pub async fn list_errands(State(state): State<AppState>) -> Result<Json<Vec<Errand>>, ApiError> {
    Ok(Json(state.errands.list().await?))
}

pub async fn get_errand(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Errand>, ApiError> {
    Ok(Json(state.errands.get(id).await?))
}

pub async fn post_errand(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewErrand>,
) -> Result<(StatusCode, Json<Errand>), ApiError> {
    new.validate()?;
    let errand = state.errands.post(new).await?;
    Ok((StatusCode::CREATED, Json(errand)))
}
