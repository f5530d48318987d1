pub mod aggregation;
pub mod chart;
pub mod dataset;
pub mod filter;
pub mod metrics;
pub mod profile;
pub mod sale;
pub mod settings;
pub mod view;
