//! HTTP handlers for the FarmEasy platform

pub mod crop;
pub mod farmer;
pub mod health;
pub mod home;
pub mod sales;

pub use crop::{add_crop, show_add_crop_form};
pub use farmer::{dashboard, profile, register_farmer, show_register_form};
pub use health::health_check;
pub use home::home;
pub use sales::sales;
