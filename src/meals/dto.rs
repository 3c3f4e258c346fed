use serde::{Deserialize, Serialize};

use crate::nutrition::{MealLineItem, Totals};
use crate::pagination::default_limit;

/// Body of both `/api/meals/calculate` and `/api/meals/save`.
#[derive(Debug, Clone, Deserialize)]
pub struct MealRequest {
    pub items: Vec<MealLineItem>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalculatedMealResponse {
    pub name: Option<String>,
    pub totals: Totals,
}

#[derive(Debug, Serialize)]
pub struct SavedMealResponse {
    pub id: String,
    pub totals: Totals,
}

#[derive(Debug, Deserialize)]
pub struct MealQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}
