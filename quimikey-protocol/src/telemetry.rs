//! Selection telemetry
//!
//! One JSON object per line, one line per explicit selection of an occupied
//! cell. Encoding never allocates; the caller supplies the buffer.

use heapless::Vec;
use quimikey_core::catalog::Element;
use quimikey_core::GridPosition;
use serde::Serialize;

/// Largest encoded record including the newline
pub const MAX_RECORD_LEN: usize = 256;

/// Errors from record encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TelemetryError {
    /// Encoded record does not fit the buffer
    BufferTooSmall,
}

/// Wire shape of one selection report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRecord<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub symbol: &'a str,
    pub atomic_number: u8,
    pub atomic_mass: f32,
    pub electron_config: &'a str,
    /// Family code (1-9)
    pub family: u8,
    /// LED color code
    pub color: u8,
    pub row: u8,
    pub col: u8,
}

impl<'a> ElementRecord<'a> {
    /// Build the record for an element at a position
    pub fn new(element: &'a Element, position: GridPosition) -> Self {
        Self {
            id: element.number,
            name: element.name,
            symbol: element.symbol,
            atomic_number: element.atomic_number,
            atomic_mass: element.atomic_mass,
            electron_config: element.electron_config,
            family: element.family.code(),
            color: element.color_code(),
            row: position.row(),
            col: position.col(),
        }
    }
}

/// Encode a record as a newline-terminated JSON line
///
/// Returns the number of bytes written.
pub fn encode_record(
    element: &Element,
    position: GridPosition,
    buffer: &mut [u8],
) -> Result<usize, TelemetryError> {
    let record = ElementRecord::new(element, position);
    let len = serde_json_core::to_slice(&record, buffer)
        .map_err(|_| TelemetryError::BufferTooSmall)?;

    let newline = buffer.get_mut(len).ok_or(TelemetryError::BufferTooSmall)?;
    *newline = b'\n';
    Ok(len + 1)
}

/// Encode a record into a heapless Vec
pub fn encode_to_vec(
    element: &Element,
    position: GridPosition,
) -> Result<Vec<u8, MAX_RECORD_LEN>, TelemetryError> {
    let mut buffer = [0u8; MAX_RECORD_LEN];
    let len = encode_record(element, position, &mut buffer)?;
    let mut vec = Vec::new();
    vec.extend_from_slice(&buffer[..len])
        .map_err(|_| TelemetryError::BufferTooSmall)?;
    Ok(vec)
}
