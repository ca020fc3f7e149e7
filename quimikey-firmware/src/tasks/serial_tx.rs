//! Serial transmit task
//!
//! Writes queued telemetry lines to the host.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::TELEMETRY_CHANNEL;

/// Serial TX task - drains the telemetry queue
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: BufferedUartTx) {
    info!("Serial TX task started");

    loop {
        let line = TELEMETRY_CHANNEL.receive().await;
        if let Err(e) = tx.write_all(&line).await {
            warn!("Failed to send telemetry: {:?}", e);
            continue;
        }
        trace!("Telemetry sent: {} bytes", line.len());
    }
}
