//! Selection state machine and controller
//!
//! The controller is the single owner of the current cell and view mode.
//! Input sources only propose changes; the controller arbitrates them,
//! then drives the display and telemetry sinks.

pub mod controller;
pub mod machine;

pub use controller::{Refresh, SelectionController, SinkError};
pub use machine::{SelectionEvent, SelectionState};

/// What the display shows for the current element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewMode {
    /// Name and symbol
    #[default]
    Basic,
    /// Atomic number and mass
    Detailed,
}

impl ViewMode {
    /// The other mode
    pub const fn toggled(self) -> Self {
        match self {
            ViewMode::Basic => ViewMode::Detailed,
            ViewMode::Detailed => ViewMode::Basic,
        }
    }
}
