use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::nutrition::NutrientProfile;
use crate::store::{self, DocumentStore, Record, FOOD_COLLECTION};

/// A food as stored in the `food` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    #[serde(flatten)]
    pub profile: NutrientProfile,
}

impl Food {
    pub async fn create(db: &dyn DocumentStore, food: &Food) -> Result<String, StoreError> {
        store::insert(db, FOOD_COLLECTION, food).await
    }

    /// Foods whose name contains `query` (any case), at most `limit` of them.
    pub async fn list(
        db: &dyn DocumentStore,
        query: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Record<Food>>, StoreError> {
        store::find(db, FOOD_COLLECTION, query, limit).await
    }
}
