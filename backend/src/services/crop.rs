//! Crop entry service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use shared::types::CropCategory;
use sqlx::MySqlPool;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Crop service for recording and listing crop entries
#[derive(Clone)]
pub struct CropService {
    db: MySqlPool,
}

/// A stored crop entry
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Crop {
    pub id: i64,
    pub farmer_id: i64,
    pub name: String,
    pub category: String,
    pub quantity_kg: Option<Decimal>,
    pub price_per_kg: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Crop row as shown on the dashboard, newest first
///
/// `remaining_qty` mirrors the stored quantity and defaults to zero when the
/// quantity is NULL; it will diverge once sales are deducted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CropSummary {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity_kg: Option<Decimal>,
    pub remaining_qty: Decimal,
}

/// Input for adding a crop entry
#[derive(Debug, Deserialize, Validate)]
pub struct AddCropInput {
    pub farmer_id: i64,
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
    pub category: CropCategory,
    pub quantity_kg: Decimal,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub price_per_kg: Option<Decimal>,
}

/// Browsers submit omitted optional form fields as empty strings
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl CropService {
    /// Create a new CropService instance
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }

    /// Record a crop entry for a farmer and return the stored row
    pub async fn add_crop(&self, input: AddCropInput) -> AppResult<Crop> {
        input.validate()?;
        shared::validation::validate_quantity_kg(input.quantity_kg)
            .map_err(|msg| AppError::invalid("quantity_kg", msg))?;
        if let Some(price) = input.price_per_kg {
            shared::validation::validate_price_per_kg(price)
                .map_err(|msg| AppError::invalid("price_per_kg", msg))?;
        }

        // Check the farmer exists so a stale form cannot orphan the entry
        let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM farmers WHERE id = ?")
            .bind(input.farmer_id)
            .fetch_one(&self.db)
            .await?;
        if exists == 0 {
            return Err(AppError::NotFound("Farmer".to_string()));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO crops (farmer_id, name, category, quantity_kg, price_per_kg)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(input.farmer_id)
        .bind(input.name.trim())
        .bind(input.category.as_str())
        .bind(input.quantity_kg)
        .bind(input.price_per_kg)
        .execute(&self.db)
        .await?;

        let crop_id = result.last_insert_id() as i64;
        let crop = sqlx::query_as::<_, Crop>(
            r#"
            SELECT id, farmer_id, name, category, quantity_kg, price_per_kg, created_at
            FROM crops
            WHERE id = ?
            "#,
        )
        .bind(crop_id)
        .fetch_one(&self.db)
        .await?;

        Ok(crop)
    }

    /// List a farmer's crops for the dashboard, newest first
    pub async fn summaries_for_farmer(&self, farmer_id: i64) -> AppResult<Vec<CropSummary>> {
        let crops = sqlx::query_as::<_, CropSummary>(
            r#"
            SELECT id, name, category, quantity_kg,
                   IFNULL(quantity_kg, 0) AS remaining_qty
            FROM crops
            WHERE farmer_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(farmer_id)
        .fetch_all(&self.db)
        .await?;

        Ok(crops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct PriceOnly {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        price_per_kg: Option<Decimal>,
    }

    #[test]
    fn test_empty_price_field_is_none() {
        let parsed: PriceOnly = serde_urlencoded::from_str("price_per_kg=").unwrap();
        assert_eq!(parsed.price_per_kg, None);
    }

    #[test]
    fn test_missing_price_field_is_none() {
        let parsed: PriceOnly = serde_urlencoded::from_str("").unwrap();
        assert_eq!(parsed.price_per_kg, None);
    }

    #[test]
    fn test_price_field_parses_decimal() {
        let parsed: PriceOnly = serde_urlencoded::from_str("price_per_kg=25.50").unwrap();
        assert_eq!(parsed.price_per_kg, Some(Decimal::new(2550, 2)));
    }

    #[test]
    fn test_garbage_price_field_is_rejected() {
        assert!(serde_urlencoded::from_str::<PriceOnly>("price_per_kg=abc").is_err());
    }

    #[test]
    fn test_add_crop_form_deserializes() {
        let input: AddCropInput = serde_urlencoded::from_str(
            "farmer_id=3&name=Wheat&category=cereal&quantity_kg=120.50&price_per_kg=",
        )
        .unwrap();
        assert_eq!(input.farmer_id, 3);
        assert_eq!(input.name, "Wheat");
        assert_eq!(input.category, CropCategory::Cereal);
        assert_eq!(input.quantity_kg, Decimal::new(12050, 2));
        assert_eq!(input.price_per_kg, None);
    }

    #[test]
    fn test_unknown_category_is_rejected_at_the_form() {
        assert!(serde_urlencoded::from_str::<AddCropInput>(
            "farmer_id=3&name=Rose&category=flower&quantity_kg=1",
        )
        .is_err());
    }
}
