//! Selection state machine
//!
//! `Moved` and `Selected` are transient: they record that a display refresh
//! (and, for `Selected`, a telemetry report) is owed, and both return to
//! `Idle` once the outputs have been driven within the same cycle.

/// Selection states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectionState {
    /// Nothing pending
    #[default]
    Idle,
    /// Position or view changed, display refresh owed
    Moved,
    /// Explicit selection, display refresh and telemetry owed
    Selected,
}

/// Events that drive the selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectionEvent {
    /// Stable keypad press on a cell
    KeySelect,
    /// Cell requested over serial
    RemoteSelect,
    /// Confirm button on the current cell
    Confirm,
    /// Joystick moved to a different cell
    Navigate,
    /// View mode flipped
    ToggleView,
    /// Outputs driven for the pending change
    Flushed,
}

impl SelectionEvent {
    /// Check if this event is an explicit selection
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            SelectionEvent::KeySelect | SelectionEvent::RemoteSelect | SelectionEvent::Confirm
        )
    }
}

impl SelectionState {
    /// Check if outputs are owed
    pub fn is_pending(&self) -> bool {
        !matches!(self, SelectionState::Idle)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: SelectionEvent) -> Self {
        use SelectionEvent::*;
        use SelectionState::*;

        match (self, event) {
            (_, Flushed) => Idle,

            // An explicit selection owes everything a move owes, and more
            (_, KeySelect | RemoteSelect | Confirm) => Selected,

            (Selected, Navigate | ToggleView) => Selected,
            (Idle | Moved, Navigate | ToggleView) => Moved,
        }
    }
}
