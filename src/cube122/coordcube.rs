use super::{Block122, Cube122};
use crate::coord::{from_o_coord, from_p_coord, to_o_coord, to_p_coord, Coordinate, FromCoordinate};
use crate::orientation::Flip;
use crate::puzzle::Solvable;

/// The number of blocks that move.
const FREE: usize = 3;

/// The permutation of the three moving blocks.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct BPCoord(u8);

/// The orientation of the three moving blocks. Every move flips two blocks, so the first block's
/// orientation follows from the other two.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct BOCoord(u8);

impl Coordinate<Cube122> for BPCoord {
    fn from_puzzle(puzzle: &Cube122) -> Self {
        let bp: [u8; 4] = puzzle.bp.map(|b| b.into());
        BPCoord(to_p_coord(&bp[..FREE]) as u8)
    }

    fn count() -> usize {
        6
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        BPCoord(n as u8)
    }
}

impl FromCoordinate<BPCoord> for Cube122 {
    fn set_coord(&mut self, coord: BPCoord) {
        let mut bp = [0; FREE];
        from_p_coord(coord.0 as u32, &mut bp);
        for (i, &n) in bp.iter().enumerate() {
            self.bp[i] = Block122::ARRAY[n as usize];
        }
        self.bp[3] = Block122::BL;
    }
}

impl Coordinate<Cube122> for BOCoord {
    fn from_puzzle(puzzle: &Cube122) -> Self {
        let bo: [u8; 4] = puzzle.bo.map(|f| f.into());
        BOCoord(to_o_coord::<2>(&bo[..FREE]) as u8)
    }

    fn count() -> usize {
        // 2^2
        4
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        BOCoord(n as u8)
    }
}

impl FromCoordinate<BOCoord> for Cube122 {
    fn set_coord(&mut self, coord: BOCoord) {
        let mut bo = [0; FREE];
        from_o_coord::<2>(coord.0 as u16, &mut bo);
        for (i, &n) in bo.iter().enumerate() {
            self.bo[i] = if n == 0 { Flip::Oriented } else { Flip::Flipped };
        }
        self.bo[3] = Flip::Oriented;
    }
}

impl Solvable for Cube122 {
    type Perm = BPCoord;
    type Orient = BOCoord;

    const NAME: &'static str = "1x2x2";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_round_trip() {
        for n in 0..BPCoord::count() {
            let mut c = Cube122::SOLVED;
            c.set_coord(BPCoord::from_repr(n));
            assert_eq!(BPCoord::from_puzzle(&c).repr(), n);
        }
        for n in 0..BOCoord::count() {
            let mut c = Cube122::SOLVED;
            c.set_coord(BOCoord::from_repr(n));
            assert_eq!(BOCoord::from_puzzle(&c).repr(), n);
            assert_eq!(c.bo.iter().filter(|&&f| f == Flip::Flipped).count() % 2, 0);
        }
    }
}
