use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use connect_core::models::offer::{HelpOffer, HelpType, HelpTypeOption};
use connect_search::matcher::{match_offers, OfferQuery};

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

pub async fn list_help_types() -> Json<Vec<HelpTypeOption>> {
    Json(HelpType::ALL.into_iter().map(HelpTypeOption::from).collect())
}

pub async fn list_offers(State(state): State<AppState>) -> Json<Vec<HelpOffer>> {
    Json(state.offers.load_all().await)
}

pub async fn submit_offer(
    State(state): State<AppState>,
    ApiJson(offer): ApiJson<HelpOffer>,
) -> Result<(StatusCode, Json<HelpOffer>), ApiError> {
    offer.validate()?;
    state.offers.try_submit(offer.clone()).await?;
    tracing::info!(help_type = %offer.help_type, "help offer submitted");
    Ok((StatusCode::CREATED, Json(offer)))
}

pub async fn search_offers(
    State(state): State<AppState>,
    Query(query): Query<OfferQuery>,
) -> Json<Vec<HelpOffer>> {
    let offers = state.offers.load_all().await;
    Json(match_offers(&offers, &query))
}
