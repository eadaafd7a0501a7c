//! Farmer registration, dashboard and profile handlers

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    Form,
};

use crate::services::farmer::{FarmerService, RegisterFarmerInput};
use crate::{views, AppState};

/// Render the farmer registration form
pub async fn show_register_form() -> Html<String> {
    Html(views::register_page())
}

/// Save a farmer registration and send the browser to the new dashboard
pub async fn register_farmer(
    State(state): State<AppState>,
    Form(input): Form<RegisterFarmerInput>,
) -> impl IntoResponse {
    let service = FarmerService::new(state.db.clone());

    match service.register_farmer(input).await {
        Ok(farmer) => Redirect::to(&format!("/dashboard/{}", farmer.id)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Render the dashboard for one farmer
pub async fn dashboard(
    State(state): State<AppState>,
    Path(farmer_id): Path<i64>,
) -> impl IntoResponse {
    let service = FarmerService::new(state.db.clone());

    match service.dashboard(farmer_id).await {
        Ok(data) => Html(views::dashboard_page(&data)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Render a farmer's profile page
pub async fn profile(
    State(state): State<AppState>,
    Path(farmer_id): Path<i64>,
) -> impl IntoResponse {
    let service = FarmerService::new(state.db.clone());

    match service.get_farmer(farmer_id).await {
        Ok(farmer) => Html(views::profile_page(&farmer)).into_response(),
        Err(e) => e.into_response(),
    }
}
