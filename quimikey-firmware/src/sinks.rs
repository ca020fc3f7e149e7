//! Firmware implementations of the selection sinks
//!
//! The selection controller drives these synchronously from the panel task.
//! The LCD is written in place over blocking I2C; the LED strip and the
//! UART are handed off to their own tasks so a refresh never waits on them.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;

use quimikey_core::catalog::Element;
use quimikey_core::selection::ViewMode;
use quimikey_core::traits::{DisplaySink, TelemetrySink};
use quimikey_core::GridPosition;
use quimikey_drivers::lcd::{LcdDisplay, LcdError};
use quimikey_protocol::{encode_to_vec, TelemetryError};

use crate::channels::{LED_SELECTION, TELEMETRY_CHANNEL};

/// Blocking I2C bus of the LCD backpack
pub type LcdBus = I2c<'static, I2C0, Blocking>;

/// LCD plus LED strip
pub struct PanelDisplay {
    lcd: LcdDisplay<LcdBus, Delay>,
}

impl PanelDisplay {
    pub fn new(lcd: LcdDisplay<LcdBus, Delay>) -> Self {
        Self { lcd }
    }
}

impl DisplaySink for PanelDisplay {
    type Error = LcdError<embassy_rp::i2c::Error>;

    fn render(
        &mut self,
        position: GridPosition,
        mode: ViewMode,
        element: Option<&Element>,
    ) -> Result<(), Self::Error> {
        self.lcd.render(position, mode, element)?;
        LED_SELECTION.signal(Some(position));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        LED_SELECTION.signal(None);
        self.lcd.clear()
    }
}

/// JSON lines out of the UART
pub struct SerialTelemetry;

impl TelemetrySink for SerialTelemetry {
    type Error = TelemetryError;

    fn emit(&mut self, element: &Element, position: GridPosition) -> Result<(), Self::Error> {
        let line = encode_to_vec(element, position)?;
        // A slow host loses records rather than stalling the panel
        if TELEMETRY_CHANNEL.try_send(line).is_err() {
            warn!("Telemetry channel full, dropping {}", element.symbol);
        }
        Ok(())
    }
}
