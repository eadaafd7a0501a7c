//! Validation utilities for the FarmEasy platform
//!
//! Includes India-specific validations for farmer registration data.

use rust_decimal::Decimal;

// ============================================================================
// Crop Validations
// ============================================================================

/// Validate a crop quantity is strictly positive
pub fn validate_quantity_kg(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be greater than zero");
    }
    Ok(())
}

/// Validate a price per kg is non-negative when present
pub fn validate_price_per_kg(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price per kg cannot be negative");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

// ============================================================================
// India-Specific Validations
// ============================================================================

/// Validate an Indian mobile number
/// Accepts: 9812345678, 098-1234-5678, +919812345678
pub fn validate_indian_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    let local = match digits.len() {
        // Standard mobile: 10 digits (e.g., 9812345678)
        10 => &digits[..],
        // With trunk prefix: 11 digits starting with 0
        11 if digits.starts_with('0') => &digits[1..],
        // International format with country code: 12 digits starting with 91
        12 if digits.starts_with("91") => &digits[2..],
        _ => return Err("Invalid Indian mobile number format"),
    };

    // Indian mobile numbers start with 6-9
    if local.len() == 10 && matches!(local.as_bytes()[0], b'6'..=b'9') {
        Ok(())
    } else {
        Err("Invalid Indian mobile number format")
    }
}

/// Indian states and union territories accepted at registration
pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// Validate a state is a recognized Indian state or union territory
pub fn validate_indian_state(state: &str) -> Result<(), &'static str> {
    let state = state.trim();
    if INDIAN_STATES.iter().any(|s| s.eq_ignore_ascii_case(state)) {
        Ok(())
    } else {
        Err("State is not a recognized Indian state or union territory")
    }
}
