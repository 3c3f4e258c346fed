use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    foods::{
        dto::{CreateFoodRequest, CreatedFoodResponse, FoodQuery},
        repo::Food,
    },
    pagination::effective_limit,
    state::AppState,
    store::Record,
};

pub fn food_routes() -> Router<AppState> {
    Router::new().route("/api/foods", get(list_foods).post(create_food))
}

#[instrument(skip(state, payload))]
pub async fn create_food(
    State(state): State<AppState>,
    Json(payload): Json<CreateFoodRequest>,
) -> Result<Json<CreatedFoodResponse>, ApiError> {
    if let Err(e) = payload.profile.validate() {
        warn!(error = %e, "invalid food");
        return Err(e.into());
    }

    let food = Food {
        name: payload.name,
        profile: payload.profile,
    };
    let id = Food::create(state.store.as_ref(), &food).await?;

    info!(food_id = %id, name = %food.name, "food created");
    Ok(Json(CreatedFoodResponse { id }))
}

#[instrument(skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    Query(q): Query<FoodQuery>,
) -> Result<Json<Vec<Record<Food>>>, ApiError> {
    let limit = effective_limit(q.limit, state.config.list_limit_max)?;
    let foods = Food::list(state.store.as_ref(), q.query.as_deref(), limit).await?;
    Ok(Json(foods))
}
