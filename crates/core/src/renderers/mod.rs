pub mod traits;

// Renderer implementations
pub mod vega_lite;
