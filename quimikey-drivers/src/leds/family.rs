//! Family coloring for the per-cell LED strip
//!
//! One LED sits under every grid cell, chained in row-major order, so the
//! LED index of a cell is its [`GridPosition::cell_index`]. The selected
//! element glows in its family color; other members of the same family
//! glow dimly; everything else is dark.

use quimikey_core::catalog::{Catalog, Family};
use quimikey_core::grid::CELL_COUNT;
use quimikey_core::GridPosition;
use smart_leds::RGB8;

/// One color per cell
pub type LedFrame = [RGB8; CELL_COUNT];

const OFF: RGB8 = RGB8::new(0, 0, 0);

/// Frame builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyLeds {
    /// Scale for the selected cell (255 = full)
    pub brightness: u8,
    /// Scale for the rest of the family (0 = off)
    pub family_brightness: u8,
}

impl Default for FamilyLeds {
    fn default() -> Self {
        Self {
            brightness: 64,
            family_brightness: 8,
        }
    }
}

impl FamilyLeds {
    /// Color of a family at the given scale
    pub fn color(family: Family, scale: u8) -> RGB8 {
        let rgb = family.color();
        RGB8::new(dim(rgb.r, scale), dim(rgb.g, scale), dim(rgb.b, scale))
    }

    /// All LEDs off
    pub fn blank() -> LedFrame {
        [OFF; CELL_COUNT]
    }

    /// Frame for a selection
    ///
    /// An empty selected cell leaves the strip dark.
    pub fn frame<C: Catalog>(&self, catalog: &C, selected: GridPosition) -> LedFrame {
        let mut frame = Self::blank();
        let Some(family) = catalog.lookup(selected).map(|e| e.family) else {
            return frame;
        };

        if self.family_brightness > 0 {
            for (index, led) in frame.iter_mut().enumerate() {
                let same_family = GridPosition::from_cell_index(index)
                    .and_then(|position| catalog.lookup(position))
                    .is_some_and(|e| e.family == family);
                if same_family {
                    *led = Self::color(family, self.family_brightness);
                }
            }
        }

        frame[selected.cell_index()] = Self::color(family, self.brightness);
        frame
    }
}

fn dim(channel: u8, scale: u8) -> u8 {
    ((channel as u16 * scale as u16) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use quimikey_core::catalog::PERIODIC_TABLE;

    fn pos(row: u8, col: u8) -> GridPosition {
        GridPosition::new(row, col).unwrap()
    }

    #[test]
    fn test_full_scale_matches_family_color() {
        assert_eq!(
            FamilyLeds::color(Family::AlkaliMetal, 255),
            RGB8::new(255, 0, 0)
        );
        assert_eq!(
            FamilyLeds::color(Family::Lanthanide, 255),
            RGB8::new(255, 192, 203)
        );
        assert_eq!(FamilyLeds::color(Family::NobleGas, 0), OFF);
    }

    #[test]
    fn test_selected_cell_lit() {
        let leds = FamilyLeds {
            brightness: 255,
            family_brightness: 0,
        };
        let frame = leds.frame(&PERIODIC_TABLE, pos(0, 17));

        assert_eq!(frame[17], RGB8::new(255, 0, 255));
        assert_eq!(frame.iter().filter(|c| **c != OFF).count(), 1);
    }

    #[test]
    fn test_family_glows_dimly() {
        let leds = FamilyLeds {
            brightness: 255,
            family_brightness: 51,
        };
        // Helium: the noble gas column
        let frame = leds.frame(&PERIODIC_TABLE, pos(0, 17));

        assert_eq!(frame[pos(0, 17).cell_index()], RGB8::new(255, 0, 255));
        for row in 1..=6 {
            assert_eq!(frame[pos(row, 17).cell_index()], RGB8::new(51, 0, 51));
        }
        assert_eq!(frame.iter().filter(|c| **c != OFF).count(), 7);
    }

    #[test]
    fn test_empty_cell_dark() {
        let frame = FamilyLeds::default().frame(&PERIODIC_TABLE, pos(0, 5));
        assert_eq!(frame, FamilyLeds::blank());
    }
}
