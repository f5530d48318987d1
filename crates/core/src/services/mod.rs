pub mod aggregation_service;
pub mod chart_service;
pub mod filter_service;
pub mod metrics_service;
pub mod profile_service;
