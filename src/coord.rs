//! We give a general description of a coordinate, which is a type used to encode coset information
//! of a puzzle, along with the encodings shared by the puzzles in this crate.

/// A coordinate type, encoding cosets of the puzzle P.
pub trait Coordinate<P>: Copy + Default + Eq {
    /// Obtain the coordinate that corresponds to the given puzzle.
    fn from_puzzle(puzzle: &P) -> Self;

    /// Determine whether the given coordinate represents a solved state
    fn solved(self) -> bool {
        self.repr() == 0
    }

    /// The number of possible coordinate states.
    fn count() -> usize;

    /// A representation of this coordinate as a usize, for use in table lookups.
    fn repr(self) -> usize;

    /// Convert the representation of a coordinate to the coordinate itself. We assume 0
    /// corresponds to the solved state.
    fn from_repr(n: usize) -> Self;
}

/// Gives the ability to set a coordinate onto a puzzle.
pub trait FromCoordinate<C>: Sized
where
    C: Coordinate<Self>,
{
    /// Modify the puzzle so that its coordinate for `C` is `coord`. Pieces that `C` does not
    /// describe are left alone.
    fn set_coord(&mut self, coord: C);
}

/// Encode orientations where the orientation of the first piece is determined by the others
/// (they sum to zero modulo `STATES`).
pub(crate) fn to_o_coord<const STATES: u16>(arr: &[u8]) -> u16 {
    arr.iter()
        .skip(1)
        .fold(0, |acc, &i| (acc * STATES) + i as u16)
}

/// Inverse of `to_o_coord`.
pub(crate) fn from_o_coord<const STATES: u16>(mut n: u16, arr: &mut [u8]) {
    let mut sum = 0;
    for i in (1..arr.len()).rev() {
        arr[i] = (n % STATES) as u8;
        sum += arr[i] as u16;
        n /= STATES;
    }
    arr[0] = ((STATES - sum % STATES) % STATES) as u8;
}

/// Encode orientations with no constraint between them.
pub(crate) fn to_free_o_coord<const STATES: u16>(arr: &[u8]) -> u16 {
    arr.iter().fold(0, |acc, &i| (acc * STATES) + i as u16)
}

/// Inverse of `to_free_o_coord`.
pub(crate) fn from_free_o_coord<const STATES: u16>(mut n: u16, arr: &mut [u8]) {
    for i in (0..arr.len()).rev() {
        arr[i] = (n % STATES) as u8;
        n /= STATES;
    }
}

/// Encode a permutation of `0..arr.len()`. Each position contributes the number of earlier
/// entries that are larger, in a factorial number system.
pub(crate) fn to_p_coord(arr: &[u8]) -> u32 {
    (1..arr.len()).rev().fold(0, |acc, idx| {
        (acc * (idx + 1) as u32) + arr[0..idx].iter().filter(|&&x| x > arr[idx]).count() as u32
    })
}

/// Inverse of `to_p_coord`.
pub(crate) fn from_p_coord(mut n: u32, arr: &mut [u8]) {
    let mut orders = vec![0];
    for i in 1..arr.len() as u32 {
        orders.push(n % (i + 1));
        n /= i + 1;
    }

    let mut pieces: Vec<u8> = (0..arr.len() as u8).collect();
    for (i, k) in orders.into_iter().enumerate().rev() {
        arr[i] = pieces.remove(i - k as usize);
    }
}
