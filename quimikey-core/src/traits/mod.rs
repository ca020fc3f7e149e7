//! Output collaborator traits
//!
//! These traits define the interface between the selection controller and
//! the hardware that shows or reports the current element.

pub mod display;
pub mod telemetry;

pub use display::DisplaySink;
pub use telemetry::TelemetrySink;
