//! Farmer registration and dashboard service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::crop::{CropService, CropSummary};
use crate::services::sales::{SalesService, SalesSummary};

/// Farmer service for registration and profile lookups
#[derive(Clone)]
pub struct FarmerService {
    db: MySqlPool,
}

/// A registered farmer
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Farmer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub state: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a farmer
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterFarmerInput {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
    pub phone: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub state: String,
    #[validate(length(min = 1, max = 500, message = "must be between 1 and 500 characters"))]
    pub address: String,
}

/// Everything the dashboard page renders for one farmer
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub farmer: Farmer,
    pub crops: Vec<CropSummary>,
    pub sales: SalesSummary,
}

impl FarmerService {
    /// Create a new FarmerService instance
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }

    /// Register a new farmer and return the stored row
    pub async fn register_farmer(&self, input: RegisterFarmerInput) -> AppResult<Farmer> {
        input.validate()?;
        shared::validation::validate_indian_phone(&input.phone)
            .map_err(|msg| AppError::invalid("phone", msg))?;
        shared::validation::validate_indian_state(&input.state)
            .map_err(|msg| AppError::invalid("state", msg))?;

        let result = sqlx::query(
            r#"
            INSERT INTO farmers (name, phone, email, state, address)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(input.name.trim())
        .bind(input.phone.trim())
        .bind(input.email.trim())
        .bind(input.state.trim())
        .bind(input.address.trim())
        .execute(&self.db)
        .await?;

        let farmer_id = result.last_insert_id() as i64;
        self.get_farmer(farmer_id).await
    }

    /// Get a farmer by id
    pub async fn get_farmer(&self, farmer_id: i64) -> AppResult<Farmer> {
        let farmer = sqlx::query_as::<_, Farmer>(
            r#"
            SELECT id, name, phone, email, state, address, created_at
            FROM farmers
            WHERE id = ?
            "#,
        )
        .bind(farmer_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Farmer".to_string()))?;

        Ok(farmer)
    }

    /// Gather the farmer row, crop summary and sales summary for the dashboard
    pub async fn dashboard(&self, farmer_id: i64) -> AppResult<DashboardData> {
        let farmer = self.get_farmer(farmer_id).await?;

        let crops = CropService::new(self.db.clone())
            .summaries_for_farmer(farmer_id)
            .await?;
        let sales = SalesService::new(self.db.clone())
            .summary(farmer_id)
            .await?;

        Ok(DashboardData {
            farmer,
            crops,
            sales,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RegisterFarmerInput {
        RegisterFarmerInput {
            name: "Asha Patil".to_string(),
            phone: "9812345678".to_string(),
            email: "asha@example.com".to_string(),
            state: "Maharashtra".to_string(),
            address: "Village Road 12, Nashik".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut input = valid_input();
        input.name = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_registration_form_deserializes() {
        let input: RegisterFarmerInput = serde_urlencoded::from_str(
            "name=Asha+Patil&phone=9812345678&email=asha%40example.com\
             &state=Maharashtra&address=Village+Road+12",
        )
        .unwrap();
        assert_eq!(input.name, "Asha Patil");
        assert_eq!(input.email, "asha@example.com");
        assert_eq!(input.state, "Maharashtra");
    }
}
