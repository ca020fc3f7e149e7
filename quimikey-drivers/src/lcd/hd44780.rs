//! HD44780 character LCD behind a PCF8574 I2C backpack
//!
//! The backpack exposes the LCD bus as one 8-bit port, so the controller is
//! driven in 4-bit mode: every byte goes out as two nibbles, each latched
//! by pulsing EN.
//!
//! # Port Mapping
//!
//! ```text
//! P7 P6 P5 P4 | P3        | P2 | P1 | P0
//! D7 D6 D5 D4 | BACKLIGHT | EN | RW | RS
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use quimikey_core::config::LcdConfig;

/// HD44780 instructions
#[allow(dead_code)]
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM: u8 = 0x80;

    /// Entry mode: cursor moves right
    pub const ENTRY_INCREMENT: u8 = 0x02;
    /// Display control: display on
    pub const DISPLAY_ON: u8 = 0x04;
    /// Function set: two lines
    pub const TWO_LINES: u8 = 0x08;
}

/// PCF8574 port bits
mod port {
    pub const RS: u8 = 0x01;
    pub const EN: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x08;
}

/// DDRAM start address of each line
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Errors from the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError<E> {
    /// I2C transfer failed
    I2c(E),
    /// Line index beyond the display
    InvalidRow(u8),
}

/// HD44780 driver over PCF8574
pub struct Hd44780<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    columns: u8,
    rows: u8,
    backlight: bool,
}

impl<I2C, D> Hd44780<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver; call [`Self::init`] before use
    pub fn new(i2c: I2C, delay: D, config: &LcdConfig) -> Self {
        Self {
            i2c,
            delay,
            address: config.address,
            columns: config.columns,
            rows: config.rows,
            backlight: true,
        }
    }

    /// Display size as (columns, rows)
    pub fn dimensions(&self) -> (u8, u8) {
        (self.columns, self.rows)
    }

    /// Run the 4-bit initialization sequence and clear the screen
    pub fn init(&mut self) -> Result<(), LcdError<I2C::Error>> {
        // Power-on settle time
        self.delay.delay_ms(50);
        self.write_port(0)?;

        // Force 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20, 0)?;

        let lines = if self.rows > 1 { cmd::TWO_LINES } else { 0 };
        self.command(cmd::FUNCTION_SET | lines)?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)?;
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT)?;
        self.clear()
    }

    /// Clear the screen and home the cursor
    pub fn clear(&mut self) -> Result<(), LcdError<I2C::Error>> {
        self.command(cmd::CLEAR)?;
        // Clear is the one slow instruction
        self.delay.delay_ms(2);
        Ok(())
    }

    /// Switch the backlight
    pub fn set_backlight(&mut self, on: bool) -> Result<(), LcdError<I2C::Error>> {
        self.backlight = on;
        self.write_port(0)
    }

    /// Move the cursor
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), LcdError<I2C::Error>> {
        if row >= self.rows || row as usize >= ROW_OFFSETS.len() {
            return Err(LcdError::InvalidRow(row));
        }
        let col = col.min(self.columns.saturating_sub(1));
        self.command(cmd::SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }

    /// Write text at the cursor
    ///
    /// Characters outside printable ASCII are shown as `?`.
    pub fn write_str(&mut self, text: &str) -> Result<(), LcdError<I2C::Error>> {
        for ch in text.chars() {
            let byte = if ch.is_ascii() && !ch.is_ascii_control() {
                ch as u8
            } else {
                b'?'
            };
            self.data(byte)?;
        }
        Ok(())
    }

    /// Replace a whole line
    ///
    /// The text is truncated to the display width and padded with spaces,
    /// so nothing from the previous content survives.
    pub fn print_line(&mut self, row: u8, text: &str) -> Result<(), LcdError<I2C::Error>> {
        self.set_cursor(0, row)?;

        let width = self.columns as usize;
        let mut written = 0;
        for ch in text.chars().take(width) {
            let mut utf8 = [0u8; 4];
            self.write_str(ch.encode_utf8(&mut utf8))?;
            written += 1;
        }
        for _ in written..width {
            self.data(b' ')?;
        }
        Ok(())
    }

    /// Release the bus and delay provider
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    #[cfg(test)]
    pub(crate) fn bus_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    fn command(&mut self, value: u8) -> Result<(), LcdError<I2C::Error>> {
        self.send(value, 0)
    }

    fn data(&mut self, value: u8) -> Result<(), LcdError<I2C::Error>> {
        self.send(value, port::RS)
    }

    fn send(&mut self, value: u8, mode: u8) -> Result<(), LcdError<I2C::Error>> {
        self.write_nibble(value & 0xF0, mode)?;
        self.write_nibble((value << 4) & 0xF0, mode)
    }

    /// Latch the upper four bits of `nibble` with an EN pulse
    fn write_nibble(&mut self, nibble: u8, mode: u8) -> Result<(), LcdError<I2C::Error>> {
        let bits = (nibble & 0xF0) | mode;
        self.write_port(bits | port::EN)?;
        self.delay.delay_us(1);
        self.write_port(bits)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn write_port(&mut self, bits: u8) -> Result<(), LcdError<I2C::Error>> {
        let backlight = if self.backlight { port::BACKLIGHT } else { 0 };
        self.i2c
            .write(self.address, &[bits | backlight])
            .map_err(LcdError::I2c)
    }
}
