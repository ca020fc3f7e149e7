//! LCD as the panel's display sink

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use quimikey_core::catalog::Element;
use quimikey_core::selection::ViewMode;
use quimikey_core::traits::DisplaySink;
use quimikey_core::GridPosition;

use super::hd44780::{Hd44780, LcdError};
use super::view::{format_view, WELCOME};

/// Two-line element display
pub struct LcdDisplay<I2C, D> {
    lcd: Hd44780<I2C, D>,
}

impl<I2C, D> LcdDisplay<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(lcd: Hd44780<I2C, D>) -> Self {
        Self { lcd }
    }

    /// Initialize the controller and show the welcome banner
    pub fn init(&mut self) -> Result<(), LcdError<I2C::Error>> {
        self.lcd.init()?;
        for (row, text) in WELCOME.iter().enumerate() {
            self.lcd.print_line(row as u8, text)?;
        }
        Ok(())
    }

    /// Access the underlying driver
    pub fn lcd(&mut self) -> &mut Hd44780<I2C, D> {
        &mut self.lcd
    }

    pub fn release(self) -> Hd44780<I2C, D> {
        self.lcd
    }
}

impl<I2C, D> DisplaySink for LcdDisplay<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = LcdError<I2C::Error>;

    fn render(
        &mut self,
        position: GridPosition,
        mode: ViewMode,
        element: Option<&Element>,
    ) -> Result<(), Self::Error> {
        let lines = format_view(position, mode, element);
        for (row, text) in lines.iter().enumerate() {
            self.lcd.print_line(row as u8, text)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.lcd.clear()
    }
}
