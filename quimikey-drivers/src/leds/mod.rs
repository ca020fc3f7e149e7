//! LED strip frames

pub mod family;

pub use family::{FamilyLeds, LedFrame};
