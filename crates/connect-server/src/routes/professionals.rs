use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use connect_core::models::professional::{NewProfessional, Professional, ProfessionalMatch};
use connect_search::nearest::{nearest, ProfessionalQuery};

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

#[derive(Serialize)]
pub struct Registered {
    id: u64,
}

pub async fn register_professional(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewProfessional>,
) -> Result<(StatusCode, Json<Registered>), ApiError> {
    new.validate()?;
    let professional = state.professionals.register(new).await?;
    tracing::info!(id = professional.id, profession = %professional.profession, "professional registered");
    Ok((StatusCode::CREATED, Json(Registered { id: professional.id })))
}

pub async fn list_professionals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Professional>>, ApiError> {
    Ok(Json(state.professionals.list().await?))
}

pub async fn search_professionals(
    State(state): State<AppState>,
    ApiJson(query): ApiJson<ProfessionalQuery>,
) -> Result<Json<Vec<ProfessionalMatch>>, ApiError> {
    let professionals = state.professionals.list().await?;
    Ok(Json(nearest(&professionals, &query)?))
}
