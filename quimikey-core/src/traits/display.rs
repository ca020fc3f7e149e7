//! Display sink trait

use crate::catalog::Element;
use crate::grid::GridPosition;
use crate::selection::ViewMode;

/// Trait for the element display
///
/// The controller resolves the element before rendering, so a sink never
/// needs its own catalog access. `element` is `None` for an empty cell and
/// the sink must show that explicitly rather than leave stale content.
pub trait DisplaySink {
    /// Error type for display operations
    ///
    /// Errors are treated as fatal by the caller and never retried.
    type Error;

    /// Show the cell at `position` in the given view
    fn render(
        &mut self,
        position: GridPosition,
        mode: ViewMode,
        element: Option<&Element>,
    ) -> Result<(), Self::Error>;

    /// Blank the display
    fn clear(&mut self) -> Result<(), Self::Error>;
}
