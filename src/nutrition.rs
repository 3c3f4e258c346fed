use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Macro-nutrients normalised to a 100 g reference quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub calories_per_100g: f64,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fat_per_100g: f64,
}

impl NutrientProfile {
    fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("calories_per_100g", self.calories_per_100g),
            ("protein_per_100g", self.protein_per_100g),
            ("carbs_per_100g", self.carbs_per_100g),
            ("fat_per_100g", self.fat_per_100g),
        ]
    }

    /// Every field must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ValidationError::NegativeNutrient { field, value });
            }
        }
        Ok(())
    }
}

/// One entry of a meal submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLineItem {
    /// Kept verbatim on save; totals always come from the inline profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub grams: f64,
    #[serde(flatten)]
    pub profile: NutrientProfile,
}

impl MealLineItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.grams.is_finite() {
            return Err(ValidationError::NonFinite { field: "grams" });
        }
        if self.grams <= 0.0 {
            return Err(ValidationError::NonPositiveGrams { value: self.grams });
        }
        self.profile.validate()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Totals {
    /// Huge but finite inputs can still overflow once scaled and summed.
    fn check_finite(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("total_calories", self.calories),
            ("total_protein", self.protein),
            ("total_carbs", self.carbs),
            ("total_fat", self.fat),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
        }
        Ok(())
    }
}

/// Rejects an empty list, then the first invalid item.
pub fn validate_items(items: &[MealLineItem]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::EmptyItems);
    }
    items.iter().try_for_each(MealLineItem::validate)
}

/// Scales each item's profile by `grams / 100` and sums across items.
///
/// Totals are rounded to two decimals with `f64::round`, so ties go away
/// from zero. Items are expected to have passed [`validate_items`]; an empty
/// slice is still rejected rather than producing zero totals, and a total
/// that overflows to infinity is rejected as non-finite.
pub fn calc_totals(items: &[MealLineItem]) -> Result<Totals, ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::EmptyItems);
    }

    let mut totals = Totals::default();
    for item in items {
        let factor = item.grams / 100.0;
        totals.calories += item.profile.calories_per_100g * factor;
        totals.protein += item.profile.protein_per_100g * factor;
        totals.carbs += item.profile.carbs_per_100g * factor;
        totals.fat += item.profile.fat_per_100g * factor;
    }

    let rounded = Totals {
        calories: round2(totals.calories),
        protein: round2(totals.protein),
        carbs: round2(totals.carbs),
        fat: round2(totals.fat),
    };
    rounded.check_finite()?;
    Ok(rounded)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
