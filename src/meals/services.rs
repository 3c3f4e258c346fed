use tracing::{info, warn};

use crate::error::{ApiError, ValidationError};
use crate::meals::{dto::MealRequest, repo::Meal};
use crate::nutrition::{calc_totals, validate_items, Totals};
use crate::store::DocumentStore;

/// Validates the submitted items and aggregates them.
pub fn calculate(req: &MealRequest) -> Result<Totals, ValidationError> {
    if let Err(e) = validate_items(&req.items) {
        warn!(error = %e, items = req.items.len(), "invalid meal items");
        return Err(e);
    }
    calc_totals(&req.items)
}

/// Computes the totals and persists the meal in a single insert.
pub async fn save_meal(db: &dyn DocumentStore, req: MealRequest) -> Result<(String, Totals), ApiError> {
    let totals = calculate(&req)?;
    let meal = Meal::new(req.name, req.items, totals);
    let id = Meal::create(db, &meal).await?;
    info!(meal_id = %id, name = %meal.name, calories = totals.calories, "meal saved");
    Ok((id, meal.totals()))
}
