//! Board-agnostic core logic for the periodic table panel
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Grid model (positions, directions, clamped stepping)
//! - Element catalog and the built-in periodic table layout
//! - Keypad scanning with debounce, joystick navigation, button debounce
//! - Selection state machine and controller
//! - Display and telemetry sink traits
//! - Configuration types and parser

#![no_std]
#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod grid;
pub mod input;
pub mod selection;
pub mod traits;

pub use grid::{Direction, GridPosition, GRID_COLS, GRID_ROWS};
