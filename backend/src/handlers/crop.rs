//! Crop entry handlers

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;

use crate::services::crop::{AddCropInput, CropService};
use crate::{views, AppState};

/// Query parameters for the crop entry form
#[derive(Debug, Deserialize)]
pub struct AddCropQuery {
    pub farmer_id: Option<i64>,
}

/// Render the crop entry form, carrying the farmer id through a hidden field
pub async fn show_add_crop_form(Query(query): Query<AddCropQuery>) -> Html<String> {
    Html(views::add_crop_page(query.farmer_id))
}

/// Save a crop entry and send the browser back to the farmer's dashboard
pub async fn add_crop(
    State(state): State<AppState>,
    Form(input): Form<AddCropInput>,
) -> impl IntoResponse {
    let service = CropService::new(state.db.clone());

    match service.add_crop(input).await {
        Ok(crop) => Redirect::to(&format!("/dashboard/{}", crop.farmer_id)).into_response(),
        Err(e) => e.into_response(),
    }
}
