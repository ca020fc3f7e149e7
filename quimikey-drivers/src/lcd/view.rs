//! Element views for a two-line character display

use core::fmt::{self, Write};

use heapless::String;
use quimikey_core::catalog::Element;
use quimikey_core::selection::ViewMode;
use quimikey_core::GridPosition;

/// Widest supported display line
pub const MAX_COLUMNS: usize = 20;

/// One display line
pub type LcdLine = String<MAX_COLUMNS>;

/// Banner shown after power-up
pub const WELCOME: [&str; 2] = ["Quimikey", "Press an element"];

/// Writer that silently drops what does not fit
struct Truncating<'a>(&'a mut LcdLine);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

fn line(args: fmt::Arguments<'_>) -> LcdLine {
    let mut out = LcdLine::new();
    let _ = Truncating(&mut out).write_fmt(args);
    out
}

/// Lines to show for a cell
///
/// - Basic: element name, then symbol
/// - Detailed: atomic number, then atomic mass
/// - Empty cell: a "no element" notice with the cell coordinates
pub fn format_view(
    position: GridPosition,
    mode: ViewMode,
    element: Option<&Element>,
) -> [LcdLine; 2] {
    match (element, mode) {
        (None, _) => [
            line(format_args!("No element")),
            line(format_args!("Cell {},{}", position.row(), position.col())),
        ],
        (Some(e), ViewMode::Basic) => [
            line(format_args!("{}", e.name)),
            line(format_args!("Symbol: {}", e.symbol)),
        ],
        (Some(e), ViewMode::Detailed) => [
            line(format_args!("Z: {}", e.atomic_number)),
            line(format_args!("Mass: {:.3}", e.atomic_mass)),
        ],
    }
}
