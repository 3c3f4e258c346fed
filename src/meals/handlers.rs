use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, instrument};

use crate::{
    error::ApiError,
    pagination::effective_limit,
    state::AppState,
    store::Record,
};

use super::dto::{CalculatedMealResponse, MealQuery, MealRequest, SavedMealResponse};
use super::repo::Meal;
use super::services::{calculate, save_meal};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/api/meals", get(list_meals))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/api/meals/calculate", post(calculate_meal))
        .route("/api/meals/save", post(save))
}

// --- handlers ---

/// POST /api/meals/calculate — totals only, nothing is stored.
#[instrument(skip(payload))]
pub async fn calculate_meal(
    Json(payload): Json<MealRequest>,
) -> Result<Json<CalculatedMealResponse>, ApiError> {
    let totals = calculate(&payload)?;
    debug!(items = payload.items.len(), calories = totals.calories, "meal calculated");
    Ok(Json(CalculatedMealResponse {
        name: payload.name,
        totals,
    }))
}

/// POST /api/meals/save
#[instrument(skip(state, payload))]
pub async fn save(
    State(state): State<AppState>,
    Json(payload): Json<MealRequest>,
) -> Result<Json<SavedMealResponse>, ApiError> {
    let (id, totals) = save_meal(state.store.as_ref(), payload).await?;
    Ok(Json(SavedMealResponse { id, totals }))
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    Query(q): Query<MealQuery>,
) -> Result<Json<Vec<Record<Meal>>>, ApiError> {
    let limit = effective_limit(q.limit, state.config.list_limit_max)?;
    let meals = Meal::list(state.store.as_ref(), limit).await?;
    Ok(Json(meals))
}
