//! Quimikey serial link protocol
//!
//! The panel talks to a host over a plain UART using newline-terminated
//! ASCII lines in both directions.
//!
//! # Panel → host: telemetry
//!
//! Every explicit selection of an occupied cell produces one JSON object on
//! its own line:
//!
//! ```text
//! {"id":"26","name":"Iron","symbol":"Fe","atomic_number":26,"atomic_mass":55.845,
//!  "electron_config":"[Ar] 3d6 4s2","family":3,"color":3,"row":3,"col":7}
//! ```
//!
//! # Host → panel: commands
//!
//! ```text
//! SEL <row> <col>     select a cell (out-of-range values clamp)
//! SYM <symbol>        select an element by symbol
//! NUM <number>        select an element by atomic number
//! VIEW                toggle the LCD view
//! INFO                re-select the current cell
//! ```
//!
//! Keywords are case-insensitive. Lines end in `\n`; a trailing `\r` is
//! ignored.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod telemetry;

pub use command::{CommandError, RemoteCommand};
pub use line::{LineBuffer, LineError, MAX_LINE_LEN};
pub use telemetry::{encode_record, encode_to_vec, ElementRecord, TelemetryError, MAX_RECORD_LEN};
