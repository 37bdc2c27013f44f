use super::Cube123;
use crate::error::ParseMoveError;
use crate::moves::{Cancellation, Move, MoveSequence};
use crate::puzzle::Puzzle;

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A half turn of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Move123 {
    R2,
    L2,
    F2,
    B2,
}

impl Move for Move123 {
    fn inverse(self) -> Self {
        self
    }

    fn commutes_with(&self, b: &Self) -> bool {
        use Move123 as M;
        match self {
            M::R2 | M::L2 => matches!(b, M::R2 | M::L2),
            M::F2 | M::B2 => matches!(b, M::F2 | M::B2),
        }
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self == b {
            Cancellation::NoMove
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

impl fmt::Display for Move123 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for Move123 {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_suffix('\'').unwrap_or(s) {
            "R2" => Ok(Move123::R2),
            "L2" => Ok(Move123::L2),
            "F2" => Ok(Move123::F2),
            "B2" => Ok(Move123::B2),
            _ => Err(ParseMoveError::UnknownMove(s.to_owned())),
        }
    }
}

const BP_OFFSETS: [[usize; 4]; 4] = [[0, 3, 2, 1], [2, 1, 0, 3], [1, 0, 2, 3], [0, 1, 3, 2]];
const BO_OFFSETS: [[bool; 4]; 4] = [
    [false, true, false, true],
    [true, false, true, false],
    [true, true, false, false],
    [false, false, true, true],
];
const MO_OFFSETS: [[bool; 2]; 4] = [[false, false], [false, false], [true, false], [false, true]];

impl Cube123 {
    /// Apply an algorithm.
    pub fn make_moves(self, mvs: MoveSequence<Move123>) -> Cube123 {
        mvs.into_iter().fold(self, |c, m| c.make_move(m))
    }

    /// Apply a move.
    pub fn make_move(self, mv: Move123) -> Cube123 {
        let bp_offsets = BP_OFFSETS[mv as usize];
        let bo_offsets = BO_OFFSETS[mv as usize];
        let mo_offsets = MO_OFFSETS[mv as usize];

        let mut result = self.clone();
        for i in 0..4 {
            let from = bp_offsets[i];
            result.bp[i] = self.bp[from];
            result.bo[i] = if bo_offsets[i] {
                self.bo[from].flip()
            } else {
                self.bo[from]
            };
        }
        for i in 0..2 {
            if mo_offsets[i] {
                result.mo[i] = self.mo[i].flip();
            }
        }

        result
    }
}

impl Puzzle for Cube123 {
    type Move = Move123;

    const SOLVED: Self = Cube123::SOLVED;

    const MOVE_LIST: &'static [Move123] = &[Move123::R2, Move123::L2, Move123::F2, Move123::B2];

    fn make_move(self, mv: Move123) -> Self {
        Cube123::make_move(self, mv)
    }

    fn move_index(mv: Move123) -> usize {
        mv as usize
    }
}
