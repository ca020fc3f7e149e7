//! Panel task
//!
//! The cooperative polling loop. Every tick it samples each input source
//! once, bundles the proposals into a [`Cycle`] and lets the selection
//! controller arbitrate them. This task is the only owner of the selection.

use defmt::*;
use embassy_rp::adc::{self, Adc, Async};
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Instant, Ticker, Timer};

use quimikey_core::catalog::PERIODIC_TABLE;
use quimikey_core::config::PanelConfig;
use quimikey_core::input::{Button, Cycle, JoystickNavigator, JoystickVector, KeypadScanner};
use quimikey_core::selection::{SelectionController, SinkError};
use quimikey_core::{GRID_COLS, GRID_ROWS};

use crate::channels::REMOTE_CHANNEL;
use crate::sinks::{PanelDisplay, SerialTelemetry};

/// How long the welcome banner stays up
const BANNER_MS: u64 = 1500;

/// Samples averaged for the joystick rest position
const CALIBRATION_SAMPLES: u32 = 8;

/// Hardware read by the panel loop
pub struct PanelInputs {
    /// Keypad row drivers (active low)
    pub rows: [Output<'static>; GRID_ROWS],
    /// Keypad column sense lines (pulled up)
    pub cols: [Input<'static>; GRID_COLS],
    pub adc: Adc<'static, Async>,
    pub stick_x: adc::Channel<'static>,
    pub stick_y: adc::Channel<'static>,
    pub toggle: Input<'static>,
    pub confirm: Input<'static>,
}

/// Milliseconds since boot, wrapping
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Read both joystick axes
async fn read_stick(
    adc: &mut Adc<'static, Async>,
    x: &mut adc::Channel<'static>,
    y: &mut adc::Channel<'static>,
) -> Result<JoystickVector, adc::Error> {
    let x = adc.read(x).await?;
    let y = adc.read(y).await?;
    Ok(JoystickVector::new(x, y))
}

/// Average a few readings with the stick untouched
async fn calibrate(inputs: &mut PanelInputs, fallback: JoystickVector) -> JoystickVector {
    let (mut sum_x, mut sum_y) = (0u32, 0u32);
    for _ in 0..CALIBRATION_SAMPLES {
        match read_stick(&mut inputs.adc, &mut inputs.stick_x, &mut inputs.stick_y).await {
            Ok(sample) => {
                sum_x += sample.x as u32;
                sum_y += sample.y as u32;
            }
            Err(e) => {
                warn!("Joystick calibration failed: {:?}, using configured center", e);
                return fallback;
            }
        }
        Timer::after_millis(2).await;
    }
    JoystickVector::new(
        (sum_x / CALIBRATION_SAMPLES) as u16,
        (sum_y / CALIBRATION_SAMPLES) as u16,
    )
}

#[embassy_executor::task]
pub async fn panel_task(mut inputs: PanelInputs, mut display: PanelDisplay, config: PanelConfig) {
    info!("Panel task started");

    let center = JoystickVector::new(config.joystick.center, config.joystick.center);
    let rest = calibrate(&mut inputs, center).await;
    info!("Joystick rest at x={} y={}", rest.x, rest.y);

    let PanelInputs {
        rows,
        cols,
        mut adc,
        mut stick_x,
        mut stick_y,
        toggle,
        confirm,
    } = inputs;

    let mut keypad = KeypadScanner::new(rows, cols, config.keypad.debounce_ms);
    if let Err(e) = keypad.initialize() {
        error!("Keypad init failed: {:?}", e);
    }

    let mut navigator = JoystickNavigator::new(config.joystick);
    navigator.initialize(rest);

    let mut toggle = Button::new(toggle, config.keypad.debounce_ms);
    let mut confirm = Button::new(confirm, config.keypad.debounce_ms);

    Timer::after_millis(BANNER_MS).await;

    let mut telemetry = SerialTelemetry;
    let mut controller = SelectionController::new(&PERIODIC_TABLE, &mut display, &mut telemetry);
    if let Err(e) = controller.initialize() {
        error!("Display clear failed: {:?}", e);
        panic!("LCD lost");
    }

    let mut ticker = Ticker::every(Duration::from_millis(config.poll_interval_ms as u64));

    loop {
        ticker.next().await;
        let now = now_ms();
        let mut cycle = Cycle::default();

        match keypad.poll(now) {
            Ok(key) => cycle.key = key,
            Err(e) => warn!("Keypad scan failed: {:?}", e),
        }

        // A failed read counts as the stick at rest
        let sample = read_stick(&mut adc, &mut stick_x, &mut stick_y)
            .await
            .unwrap_or_else(|_| navigator.baseline());
        cycle.stick = navigator.poll(sample, now);

        // GPIO reads on RP2350 cannot fail
        cycle.toggle_view = toggle.poll(now).unwrap_or(false);
        cycle.confirm = confirm.poll(now).unwrap_or(false);

        // One host command per cycle, like every other source
        if let Ok(command) = REMOTE_CHANNEL.try_receive() {
            if let Err(e) = command.merge_into(&mut cycle, &PERIODIC_TABLE) {
                warn!("Command {:?} ignored: {:?}", command, e);
            }
        }

        if cycle.is_empty() {
            continue;
        }

        match controller.step(cycle) {
            Ok(Some(refresh)) => {
                debug!(
                    "{:?} at {},{} ({:?}) occupied={} emitted={}",
                    refresh.state,
                    refresh.position.row(),
                    refresh.position.col(),
                    refresh.mode,
                    refresh.occupied,
                    refresh.emitted
                );
            }
            Ok(None) => {}
            Err(SinkError::Display(e)) => {
                error!("Display write failed: {:?}", e);
                panic!("LCD lost");
            }
            Err(SinkError::Telemetry(e)) => {
                error!("Telemetry encode failed: {:?}", e);
            }
        }
    }
}
