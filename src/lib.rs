//! A library for solving the 1x2x2, 1x2x3 and 2x2x2 twisty puzzles optimally, along with the
//! move algebra and coordinates used to do so.

#![deny(missing_docs)]

pub mod coord;
pub mod cube122;
pub mod cube123;
pub mod cube222;
pub mod error;
pub mod moves;
pub mod orientation;
pub mod puzzle;
pub mod solver;
