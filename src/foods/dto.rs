use serde::{Deserialize, Serialize};

use crate::nutrition::NutrientProfile;
use crate::pagination::default_limit;

#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    pub name: String,
    #[serde(flatten)]
    pub profile: NutrientProfile,
}

#[derive(Debug, Serialize)]
pub struct CreatedFoodResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct FoodQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}
