//! Joystick navigator
//!
//! Converts raw two-axis analog readings into single-cell grid moves.
//! Readings inside the deadzone around the rest baseline mean "no input".
//! Outside it, the axis with the larger displacement wins (vertical on a
//! tie). A held tilt repeats at a fixed cadence instead of on every poll.
//! Once a direction is reported it stays in force for as long as its own
//! axis remains outside the deadzone, so a diagonal tilt cannot flip
//! between axes on every sample.

use crate::config::JoystickConfig;
use crate::grid::Direction;

/// Raw ADC readings for both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickVector {
    pub x: u16,
    pub y: u16,
}

impl JoystickVector {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Last reported move, for repeat throttling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Held {
    direction: Direction,
    since_ms: u32,
}

/// Joystick-to-direction converter
#[derive(Debug, Clone)]
pub struct JoystickNavigator {
    config: JoystickConfig,
    baseline: JoystickVector,
    held: Option<Held>,
}

impl JoystickNavigator {
    /// Create a navigator using the configured center as baseline
    pub fn new(config: JoystickConfig) -> Self {
        Self {
            config,
            baseline: JoystickVector::new(config.center, config.center),
            held: None,
        }
    }

    /// Record the rest position (stick untouched)
    pub fn initialize(&mut self, rest: JoystickVector) {
        self.baseline = rest;
        self.held = None;
    }

    /// Current rest baseline
    pub fn baseline(&self) -> JoystickVector {
        self.baseline
    }

    /// Convert one sample into at most one move
    pub fn poll(&mut self, sample: JoystickVector, now_ms: u32) -> Option<Direction> {
        let (dx, dy) = self.displacement(sample);

        if let Some(held) = self.held {
            if self.engaged(held.direction, dx, dy) {
                if now_ms.wrapping_sub(held.since_ms) < self.config.repeat_ms {
                    return None;
                }
                self.held = Some(Held {
                    direction: held.direction,
                    since_ms: now_ms,
                });
                return Some(held.direction);
            }
        }

        let direction = self.dominant(dx, dy);
        self.held = direction.map(|direction| Held {
            direction,
            since_ms: now_ms,
        });
        direction
    }

    /// Direction implied by a sample, ignoring repeat state
    pub fn classify(&self, sample: JoystickVector) -> Option<Direction> {
        let (dx, dy) = self.displacement(sample);
        self.dominant(dx, dy)
    }

    /// Signed offset from the baseline, after axis inversion
    fn displacement(&self, sample: JoystickVector) -> (i32, i32) {
        let mut dx = sample.x as i32 - self.baseline.x as i32;
        let mut dy = sample.y as i32 - self.baseline.y as i32;
        if self.config.invert_x {
            dx = -dx;
        }
        if self.config.invert_y {
            dy = -dy;
        }
        (dx, dy)
    }

    fn dominant(&self, dx: i32, dy: i32) -> Option<Direction> {
        let deadzone = self.config.deadzone as i32;
        if dx.abs() <= deadzone && dy.abs() <= deadzone {
            return None;
        }

        if dy.abs() >= dx.abs() {
            Some(if dy < 0 { Direction::Up } else { Direction::Down })
        } else {
            Some(if dx < 0 { Direction::Left } else { Direction::Right })
        }
    }

    /// True while the axis of `direction` is still pushed past the deadzone
    fn engaged(&self, direction: Direction, dx: i32, dy: i32) -> bool {
        let deadzone = self.config.deadzone as i32;
        match direction {
            Direction::Up => -dy > deadzone,
            Direction::Down => dy > deadzone,
            Direction::Left => -dx > deadzone,
            Direction::Right => dx > deadzone,
        }
    }
}
