//! Sales service
//!
//! Sales are not recorded yet; the summary counts crop entries as a stand-in
//! until a sales ledger lands, and the sales page renders an empty listing.

use serde::Serialize;
use sqlx::MySqlPool;

use crate::error::AppResult;

/// Sales service for the placeholder sales view
#[derive(Clone)]
pub struct SalesService {
    db: MySqlPool,
}

/// Sales summary shown on the dashboard and sales pages
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SalesSummary {
    pub total_sales: i64,
}

impl SalesService {
    /// Create a new SalesService instance
    pub fn new(db: MySqlPool) -> Self {
        Self { db }
    }

    /// Summary for one farmer
    pub async fn summary(&self, farmer_id: i64) -> AppResult<SalesSummary> {
        let total_sales =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM crops WHERE farmer_id = ?")
                .bind(farmer_id)
                .fetch_one(&self.db)
                .await?;

        Ok(SalesSummary { total_sales })
    }
}
