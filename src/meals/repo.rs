use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::nutrition::{MealLineItem, Totals};
use crate::store::{self, DocumentStore, Record, MEAL_COLLECTION};

pub const DEFAULT_MEAL_NAME: &str = "Meal";

/// A saved meal: the items exactly as submitted plus the totals computed
/// when it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub items: Vec<MealLineItem>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

impl Meal {
    pub fn new(name: Option<String>, items: Vec<MealLineItem>, totals: Totals) -> Self {
        Self {
            name: name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_MEAL_NAME.to_string()),
            items,
            total_calories: totals.calories,
            total_protein: totals.protein,
            total_carbs: totals.carbs,
            total_fat: totals.fat,
        }
    }

    pub fn totals(&self) -> Totals {
        Totals {
            calories: self.total_calories,
            protein: self.total_protein,
            carbs: self.total_carbs,
            fat: self.total_fat,
        }
    }

    pub async fn create(db: &dyn DocumentStore, meal: &Meal) -> Result<String, StoreError> {
        store::insert(db, MEAL_COLLECTION, meal).await
    }

    pub async fn list(db: &dyn DocumentStore, limit: i64) -> Result<Vec<Record<Meal>>, StoreError> {
        store::find(db, MEAL_COLLECTION, None, limit).await
    }
}
