//! HTML rendering and page generation
//!
//! Pages are assembled as plain strings inside a shared layout. Everything
//! user-supplied goes through `escape` before it reaches markup.

use axum::http::StatusCode;
use rust_decimal::Decimal;
use shared::types::CropCategory;
use shared::validation::INDIAN_STATES;

use crate::services::crop::CropSummary;
use crate::services::farmer::{DashboardData, Farmer};
use crate::services::sales::SalesSummary;

/// Escape text for safe interpolation into HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page shell
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | FarmEasy</title>
<link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
<header class="topbar"><a class="brand" href="/">FarmEasy</a></header>
<main class="page">
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn quantity_cell(quantity: Option<Decimal>) -> String {
    match quantity {
        Some(q) => q.to_string(),
        None => "-".to_string(),
    }
}

/// Landing page
pub fn home_page() -> String {
    layout(
        "Welcome",
        r#"<section class="hero">
<h1>Grow. Track. Sell.</h1>
<p>Register your farm, record your crops and keep an eye on your produce in one place.</p>
<p><a class="button" href="/register">Register as a farmer</a></p>
</section>"#,
    )
}

/// Farmer registration form
pub fn register_page() -> String {
    let mut states = String::new();
    for state in INDIAN_STATES {
        states.push_str(&format!(
            "<option value=\"{state}\">{state}</option>\n",
            state = escape(state)
        ));
    }

    let body = format!(
        r#"<h1>Register Farmer</h1>
<form method="post" action="/register" class="card">
<label>Name <input type="text" name="name" required maxlength="120"></label>
<label>Phone <input type="tel" name="phone" required placeholder="9812345678"></label>
<label>Email <input type="email" name="email" required></label>
<label>State <select name="state" required>
<option value="" disabled selected>Select a state</option>
{states}</select></label>
<label>Address <textarea name="address" required maxlength="500"></textarea></label>
<button type="submit">Register</button>
</form>"#,
        states = states,
    );
    layout("Register", &body)
}

/// Dashboard: farmer header, crop table and sales summary
pub fn dashboard_page(data: &DashboardData) -> String {
    let farmer = &data.farmer;
    let mut crop_rows = String::new();
    for crop in &data.crops {
        crop_rows.push_str(&crop_row(crop));
    }
    if data.crops.is_empty() {
        crop_rows.push_str(r#"<tr><td colspan="4" class="empty">No crops recorded yet.</td></tr>"#);
    }

    let body = format!(
        r#"<h1>Dashboard</h1>
<section class="card">
<h2>{name}</h2>
<p>{state} &middot; {phone}</p>
<nav class="actions">
<a class="button" href="/add-crop?farmer_id={id}">Add crop</a>
<a href="/profile/{id}">Profile</a>
<a href="/sales/{id}">Sales</a>
</nav>
</section>
<section class="card">
<h2>Crops</h2>
<table>
<thead><tr><th>Name</th><th>Category</th><th>Quantity (kg)</th><th>Remaining (kg)</th></tr></thead>
<tbody>
{crop_rows}</tbody>
</table>
</section>
<section class="card">
<h2>Sales</h2>
<p>Total sales: {total_sales}</p>
</section>"#,
        name = escape(&farmer.name),
        state = escape(&farmer.state),
        phone = escape(&farmer.phone),
        id = farmer.id,
        crop_rows = crop_rows,
        total_sales = data.sales.total_sales,
    );
    layout("Dashboard", &body)
}

fn crop_row(crop: &CropSummary) -> String {
    format!(
        "<tr><td>{name}</td><td>{category}</td><td>{quantity}</td><td>{remaining}</td></tr>\n",
        name = escape(&crop.name),
        category = escape(&crop.category),
        quantity = quantity_cell(crop.quantity_kg),
        remaining = crop.remaining_qty,
    )
}

/// Farmer profile page
pub fn profile_page(farmer: &Farmer) -> String {
    let body = format!(
        r#"<h1>Profile</h1>
<section class="card">
<h2>{name}</h2>
<dl>
<dt>Phone</dt><dd>{phone}</dd>
<dt>Email</dt><dd>{email}</dd>
<dt>State</dt><dd>{state}</dd>
<dt>Address</dt><dd>{address}</dd>
<dt>Registered</dt><dd>{registered}</dd>
</dl>
<p><a href="/dashboard/{id}">Back to dashboard</a></p>
</section>"#,
        name = escape(&farmer.name),
        phone = escape(&farmer.phone),
        email = escape(&farmer.email),
        state = escape(&farmer.state),
        address = escape(&farmer.address),
        registered = farmer.created_at.format("%d %b %Y"),
        id = farmer.id,
    );
    layout("Profile", &body)
}

/// Crop entry form
pub fn add_crop_page(farmer_id: Option<i64>) -> String {
    let mut categories = String::new();
    for category in CropCategory::ALL {
        categories.push_str(&format!(
            "<option value=\"{value}\">{label}</option>\n",
            value = category.as_str(),
            label = category.label(),
        ));
    }

    let farmer_field = match farmer_id {
        Some(id) => format!(r#"<input type="hidden" name="farmer_id" value="{id}">"#),
        None => r#"<label>Farmer ID <input type="number" name="farmer_id" required min="1"></label>"#
            .to_string(),
    };

    let body = format!(
        r#"<h1>Add Crop</h1>
<form method="post" action="/add-crop" class="card">
{farmer_field}
<label>Crop name <input type="text" name="name" required maxlength="120"></label>
<label>Category <select name="category" required>
{categories}</select></label>
<label>Quantity (kg) <input type="number" name="quantity_kg" required min="0.01" step="0.01"></label>
<label>Price per kg (optional) <input type="number" name="price_per_kg" min="0" step="0.01"></label>
<button type="submit">Save crop</button>
</form>"#,
        farmer_field = farmer_field,
        categories = categories,
    );
    layout("Add Crop", &body)
}

/// Sales page (placeholder until a sales ledger exists)
pub fn sales_page(farmer: &Farmer, summary: &SalesSummary) -> String {
    let body = format!(
        r#"<h1>Sales</h1>
<section class="card">
<h2>{name}</h2>
<p>Total sales: {total_sales}</p>
<p class="empty">No sales recorded yet.</p>
<p><a href="/dashboard/{id}">Back to dashboard</a></p>
</section>"#,
        name = escape(&farmer.name),
        total_sales = summary.total_sales,
        id = farmer.id,
    );
    layout("Sales", &body)
}

/// Fixed-status error page
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        r#"<section class="card error">
<h1>{title}</h1>
<p>{message}</p>
<p><a href="/">Back to home</a></p>
</section>"#,
        title = escape(&title),
        message = escape(message),
    );
    layout(&title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_farmer() -> Farmer {
        Farmer {
            id: 7,
            name: "Asha <Patil>".to_string(),
            phone: "9812345678".to_string(),
            email: "asha@example.com".to_string(),
            state: "Maharashtra".to_string(),
            address: "Village Road 12".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_dashboard_escapes_farmer_name() {
        let data = DashboardData {
            farmer: sample_farmer(),
            crops: vec![],
            sales: SalesSummary { total_sales: 0 },
        };
        let html = dashboard_page(&data);
        assert!(html.contains("Asha &lt;Patil&gt;"));
        assert!(!html.contains("<Patil>"));
        assert!(html.contains("No crops recorded yet."));
    }

    #[test]
    fn test_dashboard_lists_crops_with_remaining_quantity() {
        let data = DashboardData {
            farmer: sample_farmer(),
            crops: vec![CropSummary {
                id: 1,
                name: "Wheat".to_string(),
                category: "cereal".to_string(),
                quantity_kg: None,
                remaining_qty: Decimal::ZERO,
            }],
            sales: SalesSummary { total_sales: 1 },
        };
        let html = dashboard_page(&data);
        assert!(html.contains("Wheat"));
        // NULL quantity renders as a dash, remaining defaults to zero
        assert!(html.contains("<td>-</td><td>0</td>"));
    }

    #[test]
    fn test_dashboard_links_carry_farmer_id() {
        let data = DashboardData {
            farmer: sample_farmer(),
            crops: vec![],
            sales: SalesSummary { total_sales: 0 },
        };
        let html = dashboard_page(&data);
        assert!(html.contains("/add-crop?farmer_id=7"));
        assert!(html.contains("/profile/7"));
        assert!(html.contains("/sales/7"));
    }

    #[test]
    fn test_register_page_offers_states() {
        let html = register_page();
        assert!(html.contains("Maharashtra"));
        assert!(html.contains("Tamil Nadu"));
        assert!(html.contains(r#"action="/register""#));
    }

    #[test]
    fn test_add_crop_page_hidden_field() {
        let html = add_crop_page(Some(42));
        assert!(html.contains(r#"name="farmer_id" value="42""#));
        for category in CropCategory::ALL {
            assert!(html.contains(category.as_str()));
        }
    }

    #[test]
    fn test_add_crop_page_without_farmer_id_asks_for_one() {
        let html = add_crop_page(None);
        assert!(html.contains("Farmer ID"));
    }

    #[test]
    fn test_error_page_carries_status_and_message() {
        let html = error_page(StatusCode::NOT_FOUND, "Farmer not found");
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Farmer not found"));
    }
}
