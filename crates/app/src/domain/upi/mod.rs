//! UPI payment identifier singleton

mod errors;
mod models;
mod service;

pub use errors::UpiServiceError;
pub use models::{is_valid_upi_id, UpiRecord};
pub use service::{FirebaseUpiService, MockUpiService, UpiService};
