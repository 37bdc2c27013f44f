use super::{Corner, Cube222};
use crate::coord::{from_o_coord, from_p_coord, to_o_coord, to_p_coord, Coordinate, FromCoordinate};
use crate::orientation::Twist;
use crate::puzzle::Solvable;

/// The number of corners that move. DBL is always the last corner.
const FREE: usize = 7;

/// A coordinate representation of the corner orientation of the seven moving corners.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct COCoord(u16);

/// A coordinate representation of the corner permutation of the seven moving corners.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct CPCoord(u16);

impl Coordinate<Cube222> for COCoord {
    fn from_puzzle(puzzle: &Cube222) -> Self {
        let co: [u8; 8] = puzzle.co.map(|n| n.into());
        COCoord(to_o_coord::<3>(&co[..FREE]))
    }

    fn count() -> usize {
        // 3^6
        729
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        COCoord(n as u16)
    }
}

impl FromCoordinate<COCoord> for Cube222 {
    fn set_coord(&mut self, coord: COCoord) {
        let mut co = [0; FREE];
        from_o_coord::<3>(coord.0, &mut co);

        for (i, &n) in co.iter().enumerate() {
            self.co[i] = match n {
                0 => Twist::Oriented,
                1 => Twist::Clockwise,
                _ => Twist::AntiClockwise,
            };
        }
        self.co[Corner::DBL as usize] = Twist::Oriented;
    }
}

impl Coordinate<Cube222> for CPCoord {
    fn from_puzzle(puzzle: &Cube222) -> Self {
        let cp: [u8; 8] = puzzle.cp.map(|n| n.into());
        CPCoord(to_p_coord(&cp[..FREE]) as u16)
    }

    fn count() -> usize {
        // 7!
        5040
    }

    fn repr(self) -> usize {
        self.0 as usize
    }

    fn from_repr(n: usize) -> Self {
        CPCoord(n as u16)
    }
}

impl FromCoordinate<CPCoord> for Cube222 {
    fn set_coord(&mut self, coord: CPCoord) {
        let mut cp = [0; FREE];
        from_p_coord(coord.0 as u32, &mut cp);

        for (i, &n) in cp.iter().enumerate() {
            self.cp[i] = Corner::ARRAY[n as usize];
        }
        self.cp[Corner::DBL as usize] = Corner::DBL;
    }
}

impl Solvable for Cube222 {
    type Perm = CPCoord;
    type Orient = COCoord;

    const NAME: &'static str = "2x2x2";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube222::Move222;
    use crate::moves::MoveSequence;

    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn solved_is_zero() {
        assert!(COCoord::from_puzzle(&Cube222::SOLVED).solved());
        assert!(CPCoord::from_puzzle(&Cube222::SOLVED).solved());
    }

    proptest! {
        #[test]
        fn convert_invertible_co(c in (0..729u16).prop_map(COCoord)) {
            let mut cube = Cube222::SOLVED;
            cube.set_coord(c);
            prop_assert_eq!(cube.co_parity(), Twist::Oriented);
            prop_assert_eq!(c, COCoord::from_puzzle(&cube));
        }

        #[test]
        fn convert_invertible_cp(c in (0..5040u16).prop_map(CPCoord)) {
            let mut cube = Cube222::SOLVED;
            cube.set_coord(c);
            prop_assert!(cube.legal());
            prop_assert_eq!(c, CPCoord::from_puzzle(&cube));
        }

        #[test]
        fn coords_determine_state(mvs in vec(any::<Move222>(), 0..20).prop_map(MoveSequence)) {
            let cube = Cube222::SOLVED.make_moves(mvs);
            let mut rebuilt = Cube222::SOLVED;
            rebuilt.set_coord(CPCoord::from_puzzle(&cube));
            rebuilt.set_coord(COCoord::from_puzzle(&cube));
            prop_assert_eq!(rebuilt, cube);
        }
    }
}
