//! Quarter-turn rotations of neighbour templates
//!
//! Each rotation is a permutation of the eight neighbour slots. Rotating by
//! 90° moves every slot two steps clockwise around the ring
//! `0, 1, 2, 4, 7, 6, 5, 3`.

use bitvec::prelude::*;
use std::fmt;

use crate::spatial::tiles::NEIGHBOR_COUNT;

/// Slot permutation for one rotation
pub type SlotPermutation = [usize; NEIGHBOR_COUNT];

/// Slot to compare against for each rotation, indexed by [`Rotation::index`]
pub const ROTATION_LOOKUP: [SlotPermutation; Rotation::COUNT] = [
    [0, 1, 2, 3, 4, 5, 6, 7],
    [2, 4, 7, 1, 6, 0, 3, 5],
    [7, 6, 5, 4, 3, 2, 1, 0],
    [5, 3, 0, 6, 1, 7, 4, 2],
];

/// Quarter-turn orientation of a pattern template
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    /// Template used as authored
    R0,
    /// Quarter turn
    R90,
    /// Half turn
    R180,
    /// Three quarter turn
    R270,
}

impl Rotation {
    /// Number of rotation states
    pub const COUNT: usize = 4;

    /// All rotations in ascending angle
    pub const ALL: [Self; Self::COUNT] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Position in [`Rotation::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }

    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// Rotation for an angle that is a multiple of 90°
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Self::R0),
            90 => Some(Self::R90),
            180 => Some(Self::R180),
            270 => Some(Self::R270),
            _ => None,
        }
    }

    /// Apply one further quarter turn
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::R0 => Self::R90,
            Self::R90 => Self::R180,
            Self::R180 => Self::R270,
            Self::R270 => Self::R0,
        }
    }

    /// Slot permutation for this rotation
    pub const fn permutation(self) -> &'static SlotPermutation {
        match self {
            Self::R0 => &ROTATION_LOOKUP[0],
            Self::R90 => &ROTATION_LOOKUP[1],
            Self::R180 => &ROTATION_LOOKUP[2],
            Self::R270 => &ROTATION_LOOKUP[3],
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Template slot compared against observed slot `slot` under `rotation`
///
/// Slots outside `0..8` are returned unchanged.
pub fn rotated_index(rotation: Rotation, slot: usize) -> usize {
    rotation.permutation().get(slot).copied().unwrap_or(slot)
}

/// Set of rotations a pattern applies under
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationSet {
    bits: BitArr!(for Rotation::COUNT, in u8),
}

impl RotationSet {
    /// Set containing no rotation
    pub const fn empty() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Set containing every rotation
    pub fn all() -> Self {
        Self::from_rotations(&Rotation::ALL)
    }

    /// Set containing only the authored orientation
    pub fn identity() -> Self {
        Self::from_rotations(&[Rotation::R0])
    }

    /// Build a set from a list of rotations, ignoring duplicates
    pub fn from_rotations(rotations: &[Rotation]) -> Self {
        let mut set = Self::empty();
        for &rotation in rotations {
            set.insert(rotation);
        }
        set
    }

    /// Add a rotation
    pub fn insert(&mut self, rotation: Rotation) {
        self.bits.set(rotation.index(), true);
    }

    /// Test membership
    pub fn contains(&self, rotation: Rotation) -> bool {
        self.bits.get(rotation.index()).as_deref() == Some(&true)
    }

    /// Test if no rotation is present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of rotations present
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Rotations present, in ascending angle
    pub fn iter(&self) -> impl Iterator<Item = Rotation> + '_ {
        self.bits
            .iter_ones()
            .filter_map(|index| Rotation::ALL.get(index).copied())
    }
}

impl fmt::Debug for RotationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
