//! Built-in five-band diverging tables.
//!
//! Both cover `(0, 5]` in unit steps. `red_green` is the default table.

use super::{Colour, SymbologyEntry, SymbologyTable};

/// Named preset tables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    PurpleGreen,
    #[default]
    RedGreen,
}

impl Preset {
    pub fn label(&self) -> &'static str {
        match self {
            Preset::PurpleGreen => "Purple-Green",
            Preset::RedGreen => "Red-Green",
        }
    }

    /// Lowercase identifier accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::PurpleGreen => "purple-green",
            Preset::RedGreen => "red-green",
        }
    }

    pub fn all() -> &'static [Preset] {
        &[Preset::PurpleGreen, Preset::RedGreen]
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::all().iter().copied().find(|p| p.name() == name)
    }

    pub fn table(&self) -> SymbologyTable {
        match self {
            Preset::PurpleGreen => purple_green(),
            Preset::RedGreen => red_green(),
        }
    }
}

const PURPLE_GREEN: [(u8, u8, u8); 5] = [
    (0x7b, 0x32, 0x94),
    (0xc2, 0xa5, 0xcf),
    (0xf7, 0xf7, 0xf7),
    (0xa6, 0xdb, 0xa0),
    (0x00, 0x88, 0x37),
];

const RED_GREEN: [(u8, u8, u8); 5] = [
    (0xd7, 0x19, 0x1c),
    (0xfd, 0xae, 0x61),
    (0xff, 0xff, 0xbf),
    (0xa6, 0xd9, 0x6a),
    (0x1a, 0x96, 0x41),
];

/// Purple to green: `#7b3294 #c2a5cf #f7f7f7 #a6dba0 #008837`.
pub fn purple_green() -> SymbologyTable {
    unit_bands(&PURPLE_GREEN)
}

/// Red to green: `#d7191c #fdae61 #ffffbf #a6d96a #1a9641`.
pub fn red_green() -> SymbologyTable {
    unit_bands(&RED_GREEN)
}

fn unit_bands(colours: &[(u8, u8, u8)]) -> SymbologyTable {
    let entries = colours
        .iter()
        .enumerate()
        .map(|(i, &(r, g, b))| {
            SymbologyEntry::new(
                format!("{} to {}", i, i + 1),
                Colour::from_rgb(r, g, b),
                i as f64,
                (i + 1) as f64,
            )
        })
        .collect();

    SymbologyTable::from_trusted(entries)
}
