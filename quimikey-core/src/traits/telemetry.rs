//! Telemetry sink trait

use crate::catalog::Element;
use crate::grid::GridPosition;

/// Trait for reporting explicitly selected elements to a host
pub trait TelemetrySink {
    /// Error type for emit operations
    type Error;

    /// Report one selected element
    fn emit(&mut self, element: &Element, position: GridPosition) -> Result<(), Self::Error>;
}
