//! Module for puzzle move generics and related functionality

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoveError;

/// What two adjacent moves reduce to. See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// Nothing is left, e.g. `R R'`.
    NoMove,
    /// A single move is left, e.g. `R R` becomes `R2`.
    OneMove(M),
    /// The moves stay as they are, e.g. `R U`.
    TwoMove(M, M),
}

/// A generator of a puzzle's move group, raised to some power.
///
/// Two kinds of relation are known about moves: each move has a finite order (`R4` does nothing
/// on a 2x2x2), which `cancel` encodes, and some moves commute (`R2` and `L2` on a 1x2x3), which
/// `commutes_with` encodes. `MoveSequence::cancel` uses nothing else.
pub trait Move: Eq + Clone {
    /// The move undoing this one, so that `X X'` and `X' X` both do nothing.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Whether `A B = B A`. This must be an equivalence relation, so moves that commute with a
    /// common move also commute with each other.
    fn commutes_with(&self, b: &Self) -> bool;

    /// Reduce `self` followed by `b`.
    ///
    /// ```rust
    /// # fn main() {
    /// use twisty::mv;
    /// use twisty::moves::{Cancellation, Move};
    ///
    /// // In the context of a 2x2x2
    /// assert!(mv!(R, 1).cancel(mv!(U, 3)) == Cancellation::TwoMove(mv!(R, 1), mv!(U, 3)));
    /// assert!(mv!(R, 1).cancel(mv!(R, 1)) == Cancellation::OneMove(mv!(R, 2)));
    /// assert!(mv!(R, 1).cancel(mv!(R, 3)) == Cancellation::NoMove);
    /// # }
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves, also called an alg.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// The sequence undoing this one: the inverse moves, in reverse order.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Cancel an alg completely, including rearrangement of commutative moves.
    pub fn cancel(mut self) -> Self {
        let mut cancellation: Vec<M> = Vec::new();

        for next_mv in self.0.drain(..) {
            // Walk back through the reduced prefix while the new move commutes past each entry.
            // The prefix has no cancellations left, so a merged move can sit at the end.
            let mut cancelled = false;

            for i in (0..cancellation.len()).rev() {
                match cancellation[i].clone().cancel(next_mv.clone()) {
                    Cancellation::NoMove => {
                        cancellation.remove(i);
                        cancelled = true;
                    }
                    Cancellation::OneMove(m) => {
                        cancellation.remove(i);
                        cancellation.push(m);
                        cancelled = true;
                    }
                    Cancellation::TwoMove(_, _) => {}
                }

                if cancelled || !next_mv.commutes_with(&cancellation[i]) {
                    break;
                }
            }

            if !cancelled {
                cancellation.push(next_mv);
            }
        }

        Self(cancellation)
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate another sequence onto the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// Iterate over the moves in order.
    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.0.iter()
    }
}

impl<M: Move> From<Vec<M>> for MoveSequence<M> {
    fn from(mvs: Vec<M>) -> Self {
        Self(mvs)
    }
}

impl<M: Move> IntoIterator for MoveSequence<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<M: Move + fmt::Display> fmt::Display for MoveSequence<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

impl<M> FromStr for MoveSequence<M>
where
    M: Move + FromStr<Err = ParseMoveError>,
{
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(MoveSequence)
    }
}
