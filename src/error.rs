//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error type for reading moves written in standard notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The token does not name a move of the puzzle.
    #[error("`{0}` is not a move of this puzzle")]
    UnknownMove(String),
}

/// Error type for the solver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The state can't be reached from the solved state with the moves of the puzzle, e.g. a
    /// single flipped block.
    #[error("the puzzle is in a state that can't be solved")]
    Unsolvable,
}

/// Error type for reading a sticker description of a 2x2x2.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StickerError {
    /// The description did not have one character per sticker.
    #[error("expected 24 stickers, found {0}")]
    WrongLength(usize),
    /// The description did not use six colours four times each.
    #[error("expected 6 colours appearing 4 times each")]
    ColourCount,
    /// The colours could not be matched to faces of a cube.
    #[error("the colours do not form a consistent colour scheme")]
    NoColourScheme,
    /// The stickers at this position do not make up any corner.
    #[error("the stickers of corner position {0} do not form a corner")]
    InvalidCorner(usize),
    /// Some corner appears more than once.
    #[error("a corner appears more than once")]
    DuplicateCorner,
    /// The corner twists do not sum to zero.
    #[error("a corner is twisted")]
    Twisted,
}
