//! Sales page handler (placeholder view)

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
};

use crate::services::farmer::FarmerService;
use crate::services::sales::SalesService;
use crate::{views, AppState};

/// Render the sales page for one farmer
pub async fn sales(State(state): State<AppState>, Path(farmer_id): Path<i64>) -> impl IntoResponse {
    let farmers = FarmerService::new(state.db.clone());
    let farmer = match farmers.get_farmer(farmer_id).await {
        Ok(farmer) => farmer,
        Err(e) => return e.into_response(),
    };

    match SalesService::new(state.db.clone()).summary(farmer_id).await {
        Ok(summary) => Html(views::sales_page(&farmer, &summary)).into_response(),
        Err(e) => e.into_response(),
    }
}
