//! LED strip task
//!
//! Repaints the whole strip whenever the selection changes. Only the latest
//! selection is kept, so bursts of joystick moves collapse into one write.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;

use quimikey_core::catalog::PERIODIC_TABLE;
use quimikey_core::grid::CELL_COUNT;
use quimikey_drivers::leds::FamilyLeds;

use crate::channels::LED_SELECTION;

/// One WS2812 per grid cell, on PIO0 state machine 0
pub type LedStrip = PioWs2812<'static, PIO0, 0, CELL_COUNT>;

#[embassy_executor::task]
pub async fn led_task(mut strip: LedStrip, leds: FamilyLeds) {
    info!("LED task started");

    strip.write(&FamilyLeds::blank()).await;

    loop {
        let frame = match LED_SELECTION.wait().await {
            Some(position) => {
                trace!("LEDs: {},{}", position.row(), position.col());
                leds.frame(&PERIODIC_TABLE, position)
            }
            None => FamilyLeds::blank(),
        };
        strip.write(&frame).await;
    }
}
