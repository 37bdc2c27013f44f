//! The 1x2x2, a single 2x2 layer of blocks. Turning the right or front half rotates it 180
//! degrees, swapping two blocks and turning them upside down. The back left block is fixed.

/// Coordinates of the 1x2x2.
pub mod coordcube;
/// Half turns of the 1x2x2.
pub mod moves;

pub use moves::Move122;

use crate::error::TryFromIntToEnumError;
use crate::orientation::Flip;

/// A block, or the position it belongs in, as seen from above. BL comes last since it is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Block122 {
    FL = 0,
    FR = 1,
    BR = 2,
    BL = 3,
}

impl Block122 {
    /// Every block, in order.
    pub const ARRAY: [Block122; 4] = [Block122::FL, Block122::FR, Block122::BR, Block122::BL];
}

impl From<Block122> for u8 {
    fn from(b: Block122) -> u8 {
        b as u8
    }
}

impl TryFrom<u8> for Block122 {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Block122::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// A 1x2x2 state. `bp[i]` is the block in position `i` and `bo[i]` whether it is upside down.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube122 {
    /// Block permutation.
    pub bp: [Block122; 4],
    /// Block orientation.
    pub bo: [Flip; 4],
}

impl Default for Cube122 {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl Cube122 {
    /// The solved puzzle.
    pub const SOLVED: Cube122 = Cube122 {
        bp: Block122::ARRAY,
        bo: [Flip::Oriented; 4],
    };

    /// Whether this is the solved state.
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }
}
