//! The interface the solver needs from a puzzle.

use crate::coord::Coordinate;
use crate::moves::{Move, MoveSequence};

/// A puzzle with a fixed set of generating moves.
pub trait Puzzle: Clone + Eq + Sized {
    /// The moves of the puzzle.
    type Move: Move + Copy + std::fmt::Debug + 'static;

    /// The solved state.
    const SOLVED: Self;

    /// A list of all valid moves. The index of a move in this list will be the same index used
    /// when accessing move tables.
    const MOVE_LIST: &'static [Self::Move];

    /// Apply a move.
    fn make_move(self, mv: Self::Move) -> Self;

    /// Get the index of a move in `MOVE_LIST`.
    fn move_index(mv: Self::Move) -> usize;

    /// Apply an algorithm.
    fn make_moves(self, mvs: MoveSequence<Self::Move>) -> Self {
        mvs.into_iter().fold(self, |p, m| p.make_move(m))
    }

    /// Returns all of the states that come from applying each move to the given puzzle, along with
    /// the given move.
    fn successor_states(self) -> impl Iterator<Item = (Self::Move, Self)> {
        Self::MOVE_LIST
            .iter()
            .map(move |&m| (m, self.clone().make_move(m)))
    }

    /// Whether this is the solved state.
    fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }
}

/// A puzzle whose states are identified by a permutation coordinate together with an orientation
/// coordinate. Solvers also need the puzzle to implement `FromCoordinate` for both, so that each
/// coordinate can be set independently of the other.
pub trait Solvable: Puzzle {
    /// Coordinate of the piece permutation.
    type Perm: Coordinate<Self> + std::fmt::Debug;
    /// Coordinate of the piece orientations.
    type Orient: Coordinate<Self> + std::fmt::Debug;

    /// A short name for the puzzle, used in logs.
    const NAME: &'static str;
}
