//! Element catalog
//!
//! Read-only lookup of elements by grid position. An empty cell is a valid
//! outcome (`None`), not an error: the 9×18 layout has gaps above the
//! transition metals and around the f-block rows.

mod periodic;

pub use periodic::PERIODIC_TABLE;

use crate::grid::{GridPosition, GRID_COLS, GRID_ROWS};

/// Chemical family, used for LED color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Family {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    NobleGas,
    Lanthanide,
    Actinide,
}

/// RGB color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Family {
    /// Family code (1-9)
    pub const fn code(self) -> u8 {
        match self {
            Family::AlkaliMetal => 1,
            Family::AlkalineEarthMetal => 2,
            Family::TransitionMetal => 3,
            Family::PostTransitionMetal => 4,
            Family::Metalloid => 5,
            Family::Nonmetal => 6,
            Family::NobleGas => 7,
            Family::Lanthanide => 8,
            Family::Actinide => 9,
        }
    }

    /// Parse a family code, rejecting anything outside 1-9
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Family::AlkaliMetal),
            2 => Some(Family::AlkalineEarthMetal),
            3 => Some(Family::TransitionMetal),
            4 => Some(Family::PostTransitionMetal),
            5 => Some(Family::Metalloid),
            6 => Some(Family::Nonmetal),
            7 => Some(Family::NobleGas),
            8 => Some(Family::Lanthanide),
            9 => Some(Family::Actinide),
            _ => None,
        }
    }

    /// LED color for this family
    pub const fn color(self) -> Rgb {
        match self {
            Family::AlkaliMetal => Rgb::new(255, 0, 0),
            Family::AlkalineEarthMetal => Rgb::new(255, 165, 0),
            Family::TransitionMetal => Rgb::new(255, 255, 0),
            Family::PostTransitionMetal => Rgb::new(0, 255, 0),
            Family::Metalloid => Rgb::new(0, 0, 255),
            Family::Nonmetal => Rgb::new(0, 255, 255),
            Family::NobleGas => Rgb::new(255, 0, 255),
            Family::Lanthanide => Rgb::new(255, 192, 203),
            Family::Actinide => Rgb::new(255, 105, 180),
        }
    }

    /// Short label for display
    pub const fn label(self) -> &'static str {
        match self {
            Family::AlkaliMetal => "Alkali metal",
            Family::AlkalineEarthMetal => "Alkaline earth",
            Family::TransitionMetal => "Transition",
            Family::PostTransitionMetal => "Post-transition",
            Family::Metalloid => "Metalloid",
            Family::Nonmetal => "Nonmetal",
            Family::NobleGas => "Noble gas",
            Family::Lanthanide => "Lanthanide",
            Family::Actinide => "Actinide",
        }
    }
}

/// Static properties of one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Identifier as shown to users (the atomic number as text)
    pub number: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub atomic_number: u8,
    /// Standard atomic weight (mass number of the most stable isotope for
    /// synthetic elements)
    pub atomic_mass: f32,
    /// Ground state configuration in noble gas shorthand
    pub electron_config: &'static str,
    pub family: Family,
}

impl Element {
    /// Color code sent alongside the family code
    ///
    /// Colors are assigned per family, so this equals the family code.
    pub const fn color_code(&self) -> u8 {
        self.family.code()
    }
}

/// Lookup of elements by grid position
pub trait Catalog {
    /// Element at a position, or `None` for an empty cell
    fn lookup(&self, position: GridPosition) -> Option<&Element>;
}

/// Grid-shaped element table
///
/// The layout holds atomic numbers (0 for an empty cell); `elements` is
/// indexed by atomic number minus one.
pub struct ElementTable {
    layout: [[u8; GRID_COLS]; GRID_ROWS],
    elements: &'static [Element],
}

impl ElementTable {
    /// Create a table from a layout of atomic numbers
    pub const fn new(layout: [[u8; GRID_COLS]; GRID_ROWS], elements: &'static [Element]) -> Self {
        Self { layout, elements }
    }

    /// Find the position of an element by symbol (case-insensitive)
    pub fn locate_symbol(&self, symbol: &str) -> Option<GridPosition> {
        self.locate(|e| e.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Find the position of an element by atomic number
    pub fn locate_number(&self, atomic_number: u8) -> Option<GridPosition> {
        self.locate(|e| e.atomic_number == atomic_number)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Iterate occupied cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridPosition, &'static Element)> + '_ {
        let elements = self.elements;
        self.layout.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, &z)| {
                let element = element_for(elements, z)?;
                GridPosition::new(r as u8, c as u8).map(|pos| (pos, element))
            })
        })
    }

    fn locate(&self, mut pred: impl FnMut(&Element) -> bool) -> Option<GridPosition> {
        self.iter().find(|(_, e)| pred(e)).map(|(pos, _)| pos)
    }
}

fn element_for(elements: &'static [Element], atomic_number: u8) -> Option<&'static Element> {
    match atomic_number {
        0 => None,
        z => elements.get(z as usize - 1),
    }
}

impl Catalog for ElementTable {
    fn lookup(&self, position: GridPosition) -> Option<&Element> {
        let z = self.layout[position.row() as usize][position.col() as usize];
        element_for(self.elements, z)
    }
}
