//! Matrix keypad scanner
//!
//! The panel keypad is a 9×18 matrix with no diodes. Rows are outputs
//! idling HIGH; columns are inputs with pull-ups. Driving one row LOW pulls
//! the column of any closed key on that row LOW.
//!
//! A sweep drives each row in turn and samples every column. The first
//! closure in row-major order wins. Sweeps are fed through a [`Debouncer`]
//! so each physical press yields exactly one [`KeyEvent`].

use embedded_hal::digital::{InputPin, OutputPin};

use super::debounce::Debouncer;
use crate::grid::{GridPosition, GRID_COLS, GRID_ROWS};

/// A debounced key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// Row line index
    pub row: u8,
    /// Column line index
    pub col: u8,
    /// Time the press became stable
    pub at_ms: u32,
}

impl KeyEvent {
    /// Grid cell under this key
    ///
    /// Key (r, c) sits on grid cell (r, c); the scanner only produces
    /// in-range indices, anything else is clamped.
    pub fn position(&self) -> GridPosition {
        GridPosition::clamped(self.row as i32, self.col as i32)
    }
}

/// Errors from the keypad pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError {
    /// Row output failed to switch
    Row(u8),
    /// Column input could not be read
    Column(u8),
}

/// A row held LOW for the duration of a sample
///
/// [`ActiveRow::deactivate`] returns the row HIGH and reports failure. If
/// the guard is dropped instead (early return from a failed column read),
/// the row is still returned HIGH on a best-effort basis.
struct ActiveRow<'a, R: OutputPin> {
    pin: &'a mut R,
    armed: bool,
}

impl<'a, R: OutputPin> ActiveRow<'a, R> {
    fn activate(pin: &'a mut R) -> Result<Self, R::Error> {
        pin.set_low()?;
        Ok(Self { pin, armed: true })
    }

    fn deactivate(mut self) -> Result<(), R::Error> {
        self.armed = false;
        self.pin.set_high()
    }
}

impl<R: OutputPin> Drop for ActiveRow<'_, R> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.pin.set_high();
        }
    }
}

/// Keypad scanner over row and column pins
pub struct KeypadScanner<R, C, const ROWS: usize = GRID_ROWS, const COLS: usize = GRID_COLS> {
    rows: [R; ROWS],
    cols: [C; COLS],
    debouncer: Debouncer<(u8, u8)>,
}

impl<R, C, const ROWS: usize, const COLS: usize> KeypadScanner<R, C, ROWS, COLS>
where
    R: OutputPin,
    C: InputPin,
{
    /// Create a scanner
    ///
    /// Column pins must already be configured as inputs with pull-up.
    pub fn new(rows: [R; ROWS], cols: [C; COLS], debounce_ms: u32) -> Self {
        Self {
            rows,
            cols,
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    /// Drive every row to its inactive (HIGH) level
    pub fn initialize(&mut self) -> Result<(), KeypadError> {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.set_high().map_err(|_| KeypadError::Row(index as u8))?;
        }
        self.debouncer.reset();
        Ok(())
    }

    /// Perform one raw sweep
    ///
    /// Returns the first closed key in row-major order, without debouncing.
    pub fn scan(&mut self) -> Result<Option<(u8, u8)>, KeypadError> {
        for (r, row) in self.rows.iter_mut().enumerate() {
            let active = ActiveRow::activate(row).map_err(|_| KeypadError::Row(r as u8))?;

            let mut closed_col = None;
            for (c, col) in self.cols.iter_mut().enumerate() {
                if col.is_low().map_err(|_| KeypadError::Column(c as u8))? {
                    closed_col = Some(c as u8);
                    break;
                }
            }

            active
                .deactivate()
                .map_err(|_| KeypadError::Row(r as u8))?;
            if let Some(c) = closed_col {
                return Ok(Some((r as u8, c)));
            }
        }
        Ok(None)
    }

    /// Sweep and debounce; returns at most one event per physical press
    pub fn poll(&mut self, now_ms: u32) -> Result<Option<KeyEvent>, KeypadError> {
        let sample = self.scan()?;
        Ok(self
            .debouncer
            .update(sample, now_ms)
            .map(|(row, col)| KeyEvent {
                row,
                col,
                at_ms: now_ms,
            }))
    }

    /// Release the pins
    pub fn release(self) -> ([R; ROWS], [C; COLS]) {
        (self.rows, self.cols)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Simulated key matrix for tests

    use core::cell::Cell;
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

    use crate::grid::{GRID_COLS, GRID_ROWS};

    /// Shared matrix state: which keys are closed and which rows are LOW
    pub struct Matrix {
        closed: [[Cell<bool>; GRID_COLS]; GRID_ROWS],
        row_low: [Cell<bool>; GRID_ROWS],
        /// Largest number of rows seen LOW at the same time
        pub max_rows_low: Cell<usize>,
        /// Row whose driver fails to go HIGH
        pub stuck_row: Cell<Option<usize>>,
    }

    impl Matrix {
        pub fn new() -> Self {
            Self {
                closed: core::array::from_fn(|_| core::array::from_fn(|_| Cell::new(false))),
                row_low: core::array::from_fn(|_| Cell::new(false)),
                max_rows_low: Cell::new(0),
                stuck_row: Cell::new(None),
            }
        }

        pub fn press(&self, row: usize, col: usize) {
            self.closed[row][col].set(true);
        }

        pub fn release(&self, row: usize, col: usize) {
            self.closed[row][col].set(false);
        }

        pub fn any_row_low(&self) -> bool {
            self.row_low.iter().any(|r| r.get())
        }

        pub fn pins(&self) -> ([MockRow<'_>; GRID_ROWS], [MockCol<'_>; GRID_COLS]) {
            (
                core::array::from_fn(|index| MockRow { matrix: self, index }),
                core::array::from_fn(|index| MockCol { matrix: self, index }),
            )
        }
    }

    pub struct MockRow<'a> {
        matrix: &'a Matrix,
        index: usize,
    }

    impl ErrorType for MockRow<'_> {
        type Error = ErrorKind;
    }

    impl OutputPin for MockRow<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.matrix.row_low[self.index].set(true);
            let low = self.matrix.row_low.iter().filter(|r| r.get()).count();
            if low > self.matrix.max_rows_low.get() {
                self.matrix.max_rows_low.set(low);
            }
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            if self.matrix.stuck_row.get() == Some(self.index) {
                return Err(ErrorKind::Other);
            }
            self.matrix.row_low[self.index].set(false);
            Ok(())
        }
    }

    pub struct MockCol<'a> {
        matrix: &'a Matrix,
        index: usize,
    }

    impl ErrorType for MockCol<'_> {
        type Error = Infallible;
    }

    impl InputPin for MockCol<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.is_low().map(|low| !low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            let pulled = (0..GRID_ROWS).any(|r| {
                self.matrix.row_low[r].get() && self.matrix.closed[r][self.index].get()
            });
            Ok(pulled)
        }
    }
}
