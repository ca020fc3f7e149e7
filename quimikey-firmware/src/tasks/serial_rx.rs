//! Serial receive task
//!
//! Splits host input into lines and forwards parsed commands to the panel
//! task. Bad lines are logged and skipped.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use quimikey_protocol::{LineBuffer, RemoteCommand};

use crate::channels::REMOTE_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Serial RX task - receives and parses command lines from the host
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut lines = LineBuffer::<{ quimikey_protocol::MAX_LINE_LEN }>::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match lines.feed(byte) {
                        Ok(Some(line)) => handle_line(line.as_str()),
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Line error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

fn handle_line(line: &str) {
    match RemoteCommand::parse(line) {
        Ok(command) => {
            debug!("Command: {:?}", command);
            // The panel only looks at the queue once per cycle
            if REMOTE_CHANNEL.try_send(command).is_err() {
                warn!("Command channel full, dropping command");
            }
        }
        Err(e) => {
            warn!("Bad command '{}': {:?}", line, e);
        }
    }
}
