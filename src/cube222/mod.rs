//! The 2x2x2 cube, represented by its eight corners. The DBL corner never moves, so only the R, U
//! and F faces are turned.

/// Coordinates of the 2x2x2.
pub mod coordcube;
/// Face turns of the 2x2x2.
pub mod moves;
pub mod stickers;

pub use moves::{Move222, Move222Type};
pub use stickers::{Face, StickerCube222};

use crate::error::TryFromIntToEnumError;
use crate::orientation::Twist;

/// A corner piece, or the position it belongs in. DBL comes last since it is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Corner {
    UFR = 0,
    UFL = 1,
    UBL = 2,
    UBR = 3,
    DFR = 4,
    DFL = 5,
    DBR = 6,
    DBL = 7,
}

impl Corner {
    /// Every corner, in order.
    pub const ARRAY: [Corner; 8] = [
        Corner::UFR,
        Corner::UFL,
        Corner::UBL,
        Corner::UBR,
        Corner::DFR,
        Corner::DFL,
        Corner::DBR,
        Corner::DBL,
    ];
}

impl From<Corner> for u8 {
    fn from(c: Corner) -> u8 {
        c as u8
    }
}

impl TryFrom<u8> for Corner {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Corner::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// A 2x2x2 at the level of pieces. `cp[i]` is the corner sitting in position `i` and `co[i]` is
/// its twist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube222 {
    /// Corner permutation.
    pub cp: [Corner; 8],
    /// Corner orientation.
    pub co: [Twist; 8],
}

impl Default for Cube222 {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl Cube222 {
    /// The solved cube stored as a const.
    pub const SOLVED: Cube222 = Cube222 {
        cp: Corner::ARRAY,
        co: [Twist::Oriented; 8],
    };

    /// Whether this is the solved state.
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// The total twist of the corners. This is `Oriented` for every reachable state.
    pub fn co_parity(&self) -> Twist {
        self.co
            .iter()
            .fold(Twist::Oriented, |acc, &t| acc.twist_by(t))
    }

    /// Whether the corners are a permutation with each corner appearing once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; 8];
        for c in self.cp {
            if std::mem::replace(&mut seen[c as usize], true) {
                return false;
            }
        }
        true
    }

    /// Whether this state can be reached from the solved state using R, U and F turns.
    pub fn legal(&self) -> bool {
        self.is_permutation()
            && self.co_parity() == Twist::Oriented
            && self.cp[Corner::DBL as usize] == Corner::DBL
            && self.co[Corner::DBL as usize] == Twist::Oriented
    }

    /// Multiply two cube states in the 2x2x2 group. The result is `self` followed by `other`.
    pub fn multiply_cube(self, other: Cube222) -> Cube222 {
        let mut result = Cube222::SOLVED;

        for i in 0..8 {
            let p = other.cp[i] as usize;
            result.co[i] = self.co[p].twist_by(other.co[i]);
            result.cp[i] = self.cp[p];
        }

        result
    }

    /// Get the inverse in the 2x2x2 group.
    pub fn inverse(self) -> Cube222 {
        let mut result = Cube222::SOLVED;

        for (i, &c) in Corner::ARRAY.iter().enumerate() {
            result.co[self.cp[i] as usize] = self.co[i].inverse();
            result.cp[self.cp[i] as usize] = c;
        }

        result
    }
}
