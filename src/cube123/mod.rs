//! The 1x2x3, a 2x3 layer of blocks. Turning an end (R or L) swaps its front and back blocks,
//! turning a long side (F or B) reverses its row, and both turn the blocks upside down. The middle
//! blocks never leave their positions, they can only be flipped.

/// Coordinates of the 1x2x3.
pub mod coordcube;
/// Half turns of the 1x2x3.
pub mod moves;

pub use moves::Move123;

use crate::error::TryFromIntToEnumError;
use crate::orientation::Flip;

/// One of the four end blocks, or the position it belongs in, as seen from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Block123 {
    FL = 0,
    FR = 1,
    BL = 2,
    BR = 3,
}

impl Block123 {
    /// Every end block, in order.
    pub const ARRAY: [Block123; 4] = [Block123::FL, Block123::FR, Block123::BL, Block123::BR];
}

impl From<Block123> for u8 {
    fn from(b: Block123) -> u8 {
        b as u8
    }
}

impl TryFrom<u8> for Block123 {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Block123::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// A 1x2x3 state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube123 {
    /// End block permutation, `bp[i]` is the block in position `i`.
    pub bp: [Block123; 4],
    /// End block orientation.
    pub bo: [Flip; 4],
    /// Orientation of the front and back middle blocks.
    pub mo: [Flip; 2],
}

impl Default for Cube123 {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl Cube123 {
    /// The solved puzzle.
    pub const SOLVED: Cube123 = Cube123 {
        bp: Block123::ARRAY,
        bo: [Flip::Oriented; 4],
        mo: [Flip::Oriented; 2],
    };

    /// Whether this is the solved state.
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }
}
