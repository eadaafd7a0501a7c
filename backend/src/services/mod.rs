//! Business logic services for the FarmEasy platform

pub mod crop;
pub mod farmer;
pub mod sales;

pub use crop::CropService;
pub use farmer::FarmerService;
pub use sales::SalesService;
