//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod leds;
pub mod panel;
pub mod serial_rx;
pub mod serial_tx;

pub use leds::led_task;
pub use panel::{panel_task, PanelInputs};
pub use serial_rx::serial_rx_task;
pub use serial_tx::serial_tx_task;
