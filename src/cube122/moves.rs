use super::Cube122;
use crate::error::ParseMoveError;
use crate::moves::{Cancellation, Move, MoveSequence};
use crate::puzzle::Puzzle;

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A half turn of the right or front half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Move122 {
    R2,
    F2,
}

impl Move for Move122 {
    fn inverse(self) -> Self {
        self
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self == b
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self == b {
            Cancellation::NoMove
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

impl fmt::Display for Move122 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for Move122 {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R2" | "R2'" => Ok(Move122::R2),
            "F2" | "F2'" => Ok(Move122::F2),
            _ => Err(ParseMoveError::UnknownMove(s.to_owned())),
        }
    }
}

const BP_OFFSETS: [[usize; 4]; 2] = [[0, 2, 1, 3], [1, 0, 2, 3]];
const BO_OFFSETS: [[bool; 4]; 2] = [[false, true, true, false], [true, true, false, false]];

impl Cube122 {
    /// Apply an algorithm.
    pub fn make_moves(self, mvs: MoveSequence<Move122>) -> Cube122 {
        mvs.into_iter().fold(self, |c, m| c.make_move(m))
    }

    /// Apply a move.
    pub fn make_move(self, mv: Move122) -> Cube122 {
        let bp_offsets = BP_OFFSETS[mv as usize];
        let bo_offsets = BO_OFFSETS[mv as usize];

        let mut result = Cube122::SOLVED;
        for i in 0..4 {
            result.bp[i] = self.bp[bp_offsets[i]];
            result.bo[i] = if bo_offsets[i] {
                self.bo[bp_offsets[i]].flip()
            } else {
                self.bo[bp_offsets[i]]
            };
        }

        result
    }
}

impl Puzzle for Cube122 {
    type Move = Move122;

    const SOLVED: Self = Cube122::SOLVED;

    const MOVE_LIST: &'static [Move122] = &[Move122::R2, Move122::F2];

    fn make_move(self, mv: Move122) -> Self {
        Cube122::make_move(self, mv)
    }

    fn move_index(mv: Move122) -> usize {
        mv as usize
    }
}
