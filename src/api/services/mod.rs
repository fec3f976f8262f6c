pub mod health;
pub mod lead;

pub use health::{AppStartTime, HealthService, health_routes};
pub use lead::{LeadApiService, LeadResponse, PAYLOAD_TOO_LARGE, lead_routes};
