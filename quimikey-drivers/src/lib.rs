//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in quimikey-core for the panel's output hardware:
//!
//! - Character LCD (HD44780 behind a PCF8574 I2C backpack)
//! - Element view formatting for the LCD
//! - NeoPixel frames colored by chemical family

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;
pub mod leds;
