//! Built-in periodic table
//!
//! Standard 18-column layout. Lanthanum and actinium sit in group 3 of
//! periods 6 and 7; cerium-lutetium and thorium-lawrencium occupy the two
//! breakout rows, columns 3-16.

use super::{Element, ElementTable, Family};

macro_rules! element {
    ($z:literal, $name:literal, $symbol:literal, $mass:literal, $config:literal, $family:ident) => {
        Element {
            number: stringify!($z),
            name: $name,
            symbol: $symbol,
            atomic_number: $z,
            atomic_mass: $mass,
            electron_config: $config,
            family: Family::$family,
        }
    };
}

/// The panel's element table
pub static PERIODIC_TABLE: ElementTable = ElementTable::new(LAYOUT, &ELEMENTS);

/// Atomic number per cell, 0 = empty
#[rustfmt::skip]
const LAYOUT: [[u8; 18]; 9] = [
    [  1,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   2],
    [  3,   4,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   5,   6,   7,   8,   9,  10],
    [ 11,  12,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,  13,  14,  15,  16,  17,  18],
    [ 19,  20,  21,  22,  23,  24,  25,  26,  27,  28,  29,  30,  31,  32,  33,  34,  35,  36],
    [ 37,  38,  39,  40,  41,  42,  43,  44,  45,  46,  47,  48,  49,  50,  51,  52,  53,  54],
    [ 55,  56,  57,  72,  73,  74,  75,  76,  77,  78,  79,  80,  81,  82,  83,  84,  85,  86],
    [ 87,  88,  89, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118],
    [  0,   0,   0,  58,  59,  60,  61,  62,  63,  64,  65,  66,  67,  68,  69,  70,  71,   0],
    [  0,   0,   0,  90,  91,  92,  93,  94,  95,  96,  97,  98,  99, 100, 101, 102, 103,   0],
];

/// Element records indexed by atomic number minus one
static ELEMENTS: [Element; 118] = [
    element!(1, "Hydrogen", "H", 1.008, "1s1", Nonmetal),
    element!(2, "Helium", "He", 4.0026, "1s2", NobleGas),
    element!(3, "Lithium", "Li", 6.94, "[He] 2s1", AlkaliMetal),
    element!(4, "Beryllium", "Be", 9.0122, "[He] 2s2", AlkalineEarthMetal),
    element!(5, "Boron", "B", 10.81, "[He] 2s2 2p1", Metalloid),
    element!(6, "Carbon", "C", 12.011, "[He] 2s2 2p2", Nonmetal),
    element!(7, "Nitrogen", "N", 14.007, "[He] 2s2 2p3", Nonmetal),
    element!(8, "Oxygen", "O", 15.999, "[He] 2s2 2p4", Nonmetal),
    element!(9, "Fluorine", "F", 18.998, "[He] 2s2 2p5", Nonmetal),
    element!(10, "Neon", "Ne", 20.180, "[He] 2s2 2p6", NobleGas),
    element!(11, "Sodium", "Na", 22.990, "[Ne] 3s1", AlkaliMetal),
    element!(12, "Magnesium", "Mg", 24.305, "[Ne] 3s2", AlkalineEarthMetal),
    element!(13, "Aluminium", "Al", 26.982, "[Ne] 3s2 3p1", PostTransitionMetal),
    element!(14, "Silicon", "Si", 28.085, "[Ne] 3s2 3p2", Metalloid),
    element!(15, "Phosphorus", "P", 30.974, "[Ne] 3s2 3p3", Nonmetal),
    element!(16, "Sulfur", "S", 32.06, "[Ne] 3s2 3p4", Nonmetal),
    element!(17, "Chlorine", "Cl", 35.45, "[Ne] 3s2 3p5", Nonmetal),
    element!(18, "Argon", "Ar", 39.948, "[Ne] 3s2 3p6", NobleGas),
    element!(19, "Potassium", "K", 39.098, "[Ar] 4s1", AlkaliMetal),
    element!(20, "Calcium", "Ca", 40.078, "[Ar] 4s2", AlkalineEarthMetal),
    element!(21, "Scandium", "Sc", 44.956, "[Ar] 3d1 4s2", TransitionMetal),
    element!(22, "Titanium", "Ti", 47.867, "[Ar] 3d2 4s2", TransitionMetal),
    element!(23, "Vanadium", "V", 50.942, "[Ar] 3d3 4s2", TransitionMetal),
    element!(24, "Chromium", "Cr", 51.996, "[Ar] 3d5 4s1", TransitionMetal),
    element!(25, "Manganese", "Mn", 54.938, "[Ar] 3d5 4s2", TransitionMetal),
    element!(26, "Iron", "Fe", 55.845, "[Ar] 3d6 4s2", TransitionMetal),
    element!(27, "Cobalt", "Co", 58.933, "[Ar] 3d7 4s2", TransitionMetal),
    element!(28, "Nickel", "Ni", 58.693, "[Ar] 3d8 4s2", TransitionMetal),
    element!(29, "Copper", "Cu", 63.546, "[Ar] 3d10 4s1", TransitionMetal),
    element!(30, "Zinc", "Zn", 65.38, "[Ar] 3d10 4s2", TransitionMetal),
    element!(31, "Gallium", "Ga", 69.723, "[Ar] 3d10 4s2 4p1", PostTransitionMetal),
    element!(32, "Germanium", "Ge", 72.630, "[Ar] 3d10 4s2 4p2", Metalloid),
    element!(33, "Arsenic", "As", 74.922, "[Ar] 3d10 4s2 4p3", Metalloid),
    element!(34, "Selenium", "Se", 78.971, "[Ar] 3d10 4s2 4p4", Nonmetal),
    element!(35, "Bromine", "Br", 79.904, "[Ar] 3d10 4s2 4p5", Nonmetal),
    element!(36, "Krypton", "Kr", 83.798, "[Ar] 3d10 4s2 4p6", NobleGas),
    element!(37, "Rubidium", "Rb", 85.468, "[Kr] 5s1", AlkaliMetal),
    element!(38, "Strontium", "Sr", 87.62, "[Kr] 5s2", AlkalineEarthMetal),
    element!(39, "Yttrium", "Y", 88.906, "[Kr] 4d1 5s2", TransitionMetal),
    element!(40, "Zirconium", "Zr", 91.224, "[Kr] 4d2 5s2", TransitionMetal),
    element!(41, "Niobium", "Nb", 92.906, "[Kr] 4d4 5s1", TransitionMetal),
    element!(42, "Molybdenum", "Mo", 95.95, "[Kr] 4d5 5s1", TransitionMetal),
    element!(43, "Technetium", "Tc", 98.0, "[Kr] 4d5 5s2", TransitionMetal),
    element!(44, "Ruthenium", "Ru", 101.07, "[Kr] 4d7 5s1", TransitionMetal),
    element!(45, "Rhodium", "Rh", 102.91, "[Kr] 4d8 5s1", TransitionMetal),
    element!(46, "Palladium", "Pd", 106.42, "[Kr] 4d10", TransitionMetal),
    element!(47, "Silver", "Ag", 107.87, "[Kr] 4d10 5s1", TransitionMetal),
    element!(48, "Cadmium", "Cd", 112.41, "[Kr] 4d10 5s2", TransitionMetal),
    element!(49, "Indium", "In", 114.82, "[Kr] 4d10 5s2 5p1", PostTransitionMetal),
    element!(50, "Tin", "Sn", 118.71, "[Kr] 4d10 5s2 5p2", PostTransitionMetal),
    element!(51, "Antimony", "Sb", 121.76, "[Kr] 4d10 5s2 5p3", Metalloid),
    element!(52, "Tellurium", "Te", 127.60, "[Kr] 4d10 5s2 5p4", Metalloid),
    element!(53, "Iodine", "I", 126.90, "[Kr] 4d10 5s2 5p5", Nonmetal),
    element!(54, "Xenon", "Xe", 131.29, "[Kr] 4d10 5s2 5p6", NobleGas),
    element!(55, "Caesium", "Cs", 132.91, "[Xe] 6s1", AlkaliMetal),
    element!(56, "Barium", "Ba", 137.33, "[Xe] 6s2", AlkalineEarthMetal),
    element!(57, "Lanthanum", "La", 138.91, "[Xe] 5d1 6s2", Lanthanide),
    element!(58, "Cerium", "Ce", 140.12, "[Xe] 4f1 5d1 6s2", Lanthanide),
    element!(59, "Praseodymium", "Pr", 140.91, "[Xe] 4f3 6s2", Lanthanide),
    element!(60, "Neodymium", "Nd", 144.24, "[Xe] 4f4 6s2", Lanthanide),
    element!(61, "Promethium", "Pm", 145.0, "[Xe] 4f5 6s2", Lanthanide),
    element!(62, "Samarium", "Sm", 150.36, "[Xe] 4f6 6s2", Lanthanide),
    element!(63, "Europium", "Eu", 151.96, "[Xe] 4f7 6s2", Lanthanide),
    element!(64, "Gadolinium", "Gd", 157.25, "[Xe] 4f7 5d1 6s2", Lanthanide),
    element!(65, "Terbium", "Tb", 158.93, "[Xe] 4f9 6s2", Lanthanide),
    element!(66, "Dysprosium", "Dy", 162.50, "[Xe] 4f10 6s2", Lanthanide),
    element!(67, "Holmium", "Ho", 164.93, "[Xe] 4f11 6s2", Lanthanide),
    element!(68, "Erbium", "Er", 167.26, "[Xe] 4f12 6s2", Lanthanide),
    element!(69, "Thulium", "Tm", 168.93, "[Xe] 4f13 6s2", Lanthanide),
    element!(70, "Ytterbium", "Yb", 173.05, "[Xe] 4f14 6s2", Lanthanide),
    element!(71, "Lutetium", "Lu", 174.97, "[Xe] 4f14 5d1 6s2", Lanthanide),
    element!(72, "Hafnium", "Hf", 178.49, "[Xe] 4f14 5d2 6s2", TransitionMetal),
    element!(73, "Tantalum", "Ta", 180.95, "[Xe] 4f14 5d3 6s2", TransitionMetal),
    element!(74, "Tungsten", "W", 183.84, "[Xe] 4f14 5d4 6s2", TransitionMetal),
    element!(75, "Rhenium", "Re", 186.21, "[Xe] 4f14 5d5 6s2", TransitionMetal),
    element!(76, "Osmium", "Os", 190.23, "[Xe] 4f14 5d6 6s2", TransitionMetal),
    element!(77, "Iridium", "Ir", 192.22, "[Xe] 4f14 5d7 6s2", TransitionMetal),
    element!(78, "Platinum", "Pt", 195.08, "[Xe] 4f14 5d9 6s1", TransitionMetal),
    element!(79, "Gold", "Au", 196.97, "[Xe] 4f14 5d10 6s1", TransitionMetal),
    element!(80, "Mercury", "Hg", 200.59, "[Xe] 4f14 5d10 6s2", TransitionMetal),
    element!(81, "Thallium", "Tl", 204.38, "[Xe] 4f14 5d10 6s2 6p1", PostTransitionMetal),
    element!(82, "Lead", "Pb", 207.2, "[Xe] 4f14 5d10 6s2 6p2", PostTransitionMetal),
    element!(83, "Bismuth", "Bi", 208.98, "[Xe] 4f14 5d10 6s2 6p3", PostTransitionMetal),
    element!(84, "Polonium", "Po", 209.0, "[Xe] 4f14 5d10 6s2 6p4", PostTransitionMetal),
    element!(85, "Astatine", "At", 210.0, "[Xe] 4f14 5d10 6s2 6p5", Metalloid),
    element!(86, "Radon", "Rn", 222.0, "[Xe] 4f14 5d10 6s2 6p6", NobleGas),
    element!(87, "Francium", "Fr", 223.0, "[Rn] 7s1", AlkaliMetal),
    element!(88, "Radium", "Ra", 226.0, "[Rn] 7s2", AlkalineEarthMetal),
    element!(89, "Actinium", "Ac", 227.0, "[Rn] 6d1 7s2", Actinide),
    element!(90, "Thorium", "Th", 232.04, "[Rn] 6d2 7s2", Actinide),
    element!(91, "Protactinium", "Pa", 231.04, "[Rn] 5f2 6d1 7s2", Actinide),
    element!(92, "Uranium", "U", 238.03, "[Rn] 5f3 6d1 7s2", Actinide),
    element!(93, "Neptunium", "Np", 237.0, "[Rn] 5f4 6d1 7s2", Actinide),
    element!(94, "Plutonium", "Pu", 244.0, "[Rn] 5f6 7s2", Actinide),
    element!(95, "Americium", "Am", 243.0, "[Rn] 5f7 7s2", Actinide),
    element!(96, "Curium", "Cm", 247.0, "[Rn] 5f7 6d1 7s2", Actinide),
    element!(97, "Berkelium", "Bk", 247.0, "[Rn] 5f9 7s2", Actinide),
    element!(98, "Californium", "Cf", 251.0, "[Rn] 5f10 7s2", Actinide),
    element!(99, "Einsteinium", "Es", 252.0, "[Rn] 5f11 7s2", Actinide),
    element!(100, "Fermium", "Fm", 257.0, "[Rn] 5f12 7s2", Actinide),
    element!(101, "Mendelevium", "Md", 258.0, "[Rn] 5f13 7s2", Actinide),
    element!(102, "Nobelium", "No", 259.0, "[Rn] 5f14 7s2", Actinide),
    element!(103, "Lawrencium", "Lr", 266.0, "[Rn] 5f14 7s2 7p1", Actinide),
    element!(104, "Rutherfordium", "Rf", 267.0, "[Rn] 5f14 6d2 7s2", TransitionMetal),
    element!(105, "Dubnium", "Db", 268.0, "[Rn] 5f14 6d3 7s2", TransitionMetal),
    element!(106, "Seaborgium", "Sg", 269.0, "[Rn] 5f14 6d4 7s2", TransitionMetal),
    element!(107, "Bohrium", "Bh", 270.0, "[Rn] 5f14 6d5 7s2", TransitionMetal),
    element!(108, "Hassium", "Hs", 269.0, "[Rn] 5f14 6d6 7s2", TransitionMetal),
    element!(109, "Meitnerium", "Mt", 278.0, "[Rn] 5f14 6d7 7s2", TransitionMetal),
    element!(110, "Darmstadtium", "Ds", 281.0, "[Rn] 5f14 6d8 7s2", TransitionMetal),
    element!(111, "Roentgenium", "Rg", 282.0, "[Rn] 5f14 6d9 7s2", TransitionMetal),
    element!(112, "Copernicium", "Cn", 285.0, "[Rn] 5f14 6d10 7s2", TransitionMetal),
    element!(113, "Nihonium", "Nh", 286.0, "[Rn] 5f14 6d10 7s2 7p1", PostTransitionMetal),
    element!(114, "Flerovium", "Fl", 289.0, "[Rn] 5f14 6d10 7s2 7p2", PostTransitionMetal),
    element!(115, "Moscovium", "Mc", 290.0, "[Rn] 5f14 6d10 7s2 7p3", PostTransitionMetal),
    element!(116, "Livermorium", "Lv", 293.0, "[Rn] 5f14 6d10 7s2 7p4", PostTransitionMetal),
    element!(117, "Tennessine", "Ts", 294.0, "[Rn] 5f14 6d10 7s2 7p5", Metalloid),
    element!(118, "Oganesson", "Og", 294.0, "[Rn] 5f14 6d10 7s2 7p6", NobleGas),
];
