//! Auxiliary push buttons (view toggle, confirm)

use embedded_hal::digital::InputPin;

use super::debounce::Debouncer;

/// Debounced active-low push button
pub struct Button<P> {
    pin: P,
    debouncer: Debouncer<()>,
}

impl<P: InputPin> Button<P> {
    /// Create a button on a pulled-up input that reads LOW when pressed
    pub fn new(pin: P, debounce_ms: u32) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    /// Sample the pin; returns true once per stable press
    pub fn poll(&mut self, now_ms: u32) -> Result<bool, P::Error> {
        let pressed = self.pin.is_low()?;
        Ok(self
            .debouncer
            .update(pressed.then_some(()), now_ms)
            .is_some())
    }
}
