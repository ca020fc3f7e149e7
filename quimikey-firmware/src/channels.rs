//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Only the panel task owns selection state; everything else exchanges
//! immutable messages through these.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use heapless::Vec;

use quimikey_core::GridPosition;
use quimikey_protocol::{RemoteCommand, MAX_RECORD_LEN};

/// Channel capacity for host commands
const REMOTE_CHANNEL_SIZE: usize = 4;

/// Channel capacity for outgoing telemetry lines
const TELEMETRY_CHANNEL_SIZE: usize = 4;

/// One encoded telemetry line
pub type TelemetryLine = Vec<u8, MAX_RECORD_LEN>;

/// Commands parsed from the serial link, drained by the panel task
pub static REMOTE_CHANNEL: Channel<CriticalSectionRawMutex, RemoteCommand, REMOTE_CHANNEL_SIZE> =
    Channel::new();

/// Telemetry lines waiting for the UART
pub static TELEMETRY_CHANNEL: Channel<
    CriticalSectionRawMutex,
    TelemetryLine,
    TELEMETRY_CHANNEL_SIZE,
> = Channel::new();

/// Cell to light on the LED strip (None = all off)
///
/// Only the latest value matters, so a signal rather than a queue.
pub static LED_SELECTION: Signal<CriticalSectionRawMutex, Option<GridPosition>> = Signal::new();
