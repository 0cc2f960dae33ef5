//! Tile types and the 8-slot neighbourhood kernel
//!
//! Slots run row-major around the 3x3 neighbourhood of a cell, skipping the
//! centre, with `y` growing downward:
//!
//! ```text
//! +---+---+---+
//! | 0 | 1 | 2 |
//! +---+---+---+
//! | 3 |   | 4 |
//! +---+---+---+
//! | 5 | 6 | 7 |
//! +---+---+---+
//! ```

use std::fmt;

/// Number of neighbour slots around a cell
pub const NEIGHBOR_COUNT: usize = 8;

/// Coordinate offsets `[dx, dy]` for each neighbour slot
pub const NEIGHBOR_OFFSETS: [[i32; 2]; NEIGHBOR_COUNT] = [
    [-1, -1],
    [0, -1],
    [1, -1],
    [-1, 0],
    [1, 0],
    [-1, 1],
    [0, 1],
    [1, 1],
];

/// Content of a single grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileType {
    /// Solid, impassable cell
    Wall,
    /// Open floor space
    Empty,
    /// Reserved for level exits
    Stairs,
    /// Reserved for decorated floor
    Floor,
    /// Placeholder for a cell that has not been resolved yet
    #[default]
    Unknown,
}

impl TileType {
    /// Number of tile type variants
    pub const COUNT: usize = 5;

    /// Concrete tile types in the fixed order used for weighted choice
    pub const CONCRETE: [Self; 4] = [Self::Wall, Self::Empty, Self::Stairs, Self::Floor];

    /// Dense index used for per-tile weight tables
    pub const fn index(self) -> usize {
        match self {
            Self::Wall => 0,
            Self::Empty => 1,
            Self::Stairs => 2,
            Self::Floor => 3,
            Self::Unknown => 4,
        }
    }

    /// Whether the tile has been decided
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Whether the tile may appear in a pattern template
    pub const fn is_template_tile(self) -> bool {
        matches!(self, Self::Wall | Self::Empty)
    }

    /// Single character used for text rendering
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Empty => '.',
            Self::Stairs => '>',
            Self::Floor => ',',
            Self::Unknown => '?',
        }
    }

    /// Parse a glyph produced by [`TileType::glyph`]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Empty),
            '>' => Some(Self::Stairs),
            ',' => Some(Self::Floor),
            '?' => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wall => "Wall",
            Self::Empty => "Empty",
            Self::Stairs => "Stairs",
            Self::Floor => "Floor",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Observed or expected tiles of the eight neighbours of a cell
pub type Kernel = [TileType; NEIGHBOR_COUNT];

/// Render a kernel as a compact 3x3 block with the centre shown as `*`
pub fn kernel_to_string(kernel: &Kernel) -> String {
    let mut out = String::with_capacity(11);
    for (slot, tile) in kernel.iter().enumerate() {
        out.push(tile.glyph());
        match slot {
            2 | 4 => out.push('/'),
            3 => out.push('*'),
            _ => {}
        }
    }
    out
}

/// Neighbour coordinates of `position`, or `None` for slots that fall off
/// the low edge of the coordinate space
pub fn neighbor_positions(position: [usize; 2]) -> [Option<[usize; 2]>; NEIGHBOR_COUNT] {
    NEIGHBOR_OFFSETS.map(|[dx, dy]| {
        let x = position[0].checked_add_signed(dx as isize)?;
        let y = position[1].checked_add_signed(dy as isize)?;
        Some([x, y])
    })
}
