//! Landing page handler

use axum::response::Html;

use crate::views;

/// Render the FarmEasy landing page
pub async fn home() -> Html<String> {
    Html(views::home_page())
}
