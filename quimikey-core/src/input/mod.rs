//! Input sources
//!
//! Each source is polled once per cycle and produces an immutable proposal;
//! none of them touches the selection state. The proposals of one cycle are
//! bundled into a [`Cycle`] and handed to the selection controller.

pub mod button;
pub mod debounce;
pub mod joystick;
pub mod keypad;

pub use button::Button;
pub use debounce::Debouncer;
pub use joystick::{JoystickNavigator, JoystickVector};
pub use keypad::{KeyEvent, KeypadError, KeypadScanner};

use crate::grid::{Direction, GridPosition};

/// Everything proposed during one polling cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cycle {
    /// Debounced keypad press
    pub key: Option<KeyEvent>,
    /// Cell requested over the serial link
    pub remote: Option<GridPosition>,
    /// Confirm button pressed
    pub confirm: bool,
    /// Joystick move
    pub stick: Option<Direction>,
    /// View toggle pressed
    pub toggle_view: bool,
}

impl Cycle {
    /// Returns true if no source proposed anything
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
