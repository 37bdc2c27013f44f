use super::{Block123, Cube123};
use crate::coord::{
    from_free_o_coord, from_p_coord, to_free_o_coord, to_p_coord, Coordinate, FromCoordinate,
};
use crate::orientation::Flip;
use crate::puzzle::Solvable;

/// The permutation of the end blocks.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct BPCoord(u8);

/// The orientation of all six blocks, end blocks first. F2 and B2 flip three blocks, so there is
/// no parity constraint here.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct OCoord(u8);

impl Coordinate<Cube123> for BPCoord {
    fn from_puzzle(puzzle: &Cube123) -> Self {
        let bp: [u8; 4] = puzzle.bp.map(|b| b.into());
        BPCoord(to_p_coord(&bp) as u8)
    }

    fn count() -> usize {
        24
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        BPCoord(n as u8)
    }
}

impl FromCoordinate<BPCoord> for Cube123 {
    fn set_coord(&mut self, coord: BPCoord) {
        let mut bp = [0; 4];
        from_p_coord(coord.0 as u32, &mut bp);
        self.bp = bp.map(|n| Block123::ARRAY[n as usize]);
    }
}

impl Coordinate<Cube123> for OCoord {
    fn from_puzzle(puzzle: &Cube123) -> Self {
        let mut o = [0u8; 6];
        for (i, f) in puzzle.bo.iter().chain(puzzle.mo.iter()).enumerate() {
            o[i] = (*f).into();
        }
        OCoord(to_free_o_coord::<2>(&o) as u8)
    }

    fn count() -> usize {
        // 2^6
        64
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        OCoord(n as u8)
    }
}

impl FromCoordinate<OCoord> for Cube123 {
    fn set_coord(&mut self, coord: OCoord) {
        let mut o = [0u8; 6];
        from_free_o_coord::<2>(coord.0 as u16, &mut o);
        let flip = |n: u8| if n == 0 { Flip::Oriented } else { Flip::Flipped };
        for i in 0..4 {
            self.bo[i] = flip(o[i]);
        }
        for i in 0..2 {
            self.mo[i] = flip(o[4 + i]);
        }
    }
}

impl Solvable for Cube123 {
    type Perm = BPCoord;
    type Orient = OCoord;

    const NAME: &'static str = "1x2x3";
}
