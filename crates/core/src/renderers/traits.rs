use crate::errors::CoreError;
use crate::models::chart::ChartSpec;

/// Trait abstraction for the charting collaborator.
///
/// A renderer receives a prepared table plus its column-role mapping and
/// produces whatever object the display layer can show. Swapping charting
/// libraries means adding one implementation; the services never change.
pub trait ChartRenderer {
    /// The displayable chart object this renderer produces.
    type Output;

    /// Human-readable name of this renderer (for logs/errors).
    fn name(&self) -> &str;

    /// Draw one chart.
    fn render(&self, spec: &ChartSpec) -> Result<Self::Output, CoreError>;
}
