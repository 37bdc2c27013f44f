use super::Cube222;
use crate::error::ParseMoveError;
use crate::moves::{Cancellation, MoveSequence};
use crate::puzzle::Puzzle;

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Represents each type of move. Note that the `Move222` struct uses this variable along with a
/// counter to represents move such as R2 or U'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Move222Type {
    /// Right
    R,
    /// Up
    U,
    /// Front
    F,
}

/// Stores a move type and counter. An anti-clockwise move will have a count of 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move222 {
    pub ty: Move222Type,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

/// Create a 2x2x2 move by specifying a move type and move count. Note that you do not need to
/// specify for example Move222Type::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($ty:ident, $count: expr) => {
        $crate::cube222::Move222 {
            ty: $crate::cube222::Move222Type::$ty,
            count: $count,
        }
    };
}

impl crate::moves::Move for Move222 {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            count: 4u8.wrapping_sub(self.count).rem_euclid(4),
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty == b.ty
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.ty == b.ty {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(Move222 { ty: self.ty, count })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

// I don't want to have the default derive debug for this!
impl fmt::Debug for Move222 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Move222 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            1 => write!(f, "{:?}", self.ty),
            3 => write!(f, "{:?}'", self.ty),
            _ => write!(f, "{:?}{}", self.ty, self.count),
        }
    }
}

impl FromStr for Move222 {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError::UnknownMove(s.to_owned());
        let mut chars = s.chars();

        let ty = match chars.next() {
            Some('R') => Move222Type::R,
            Some('U') => Move222Type::U,
            Some('F') => Move222Type::F,
            _ => return Err(err()),
        };
        let count = match chars.as_str() {
            "" | "1" => 1,
            "2" | "2'" => 2,
            "'" | "3" => 3,
            _ => return Err(err()),
        };

        Ok(Move222 { ty, count })
    }
}

impl From<Move222> for usize {
    fn from(mv: Move222) -> usize {
        (mv.count as usize - 1) * 3 + mv.ty as usize
    }
}

/// Half turn metric moves, in the order of their index.
const HTM: &[Move222] = &[
    mv!(R, 1),
    mv!(U, 1),
    mv!(F, 1),
    mv!(R, 2),
    mv!(U, 2),
    mv!(F, 2),
    mv!(R, 3),
    mv!(U, 3),
    mv!(F, 3),
];

const CO_OFFSETS: [[u8; 8]; 3] = [
    [2, 0, 0, 1, 1, 0, 2, 0],
    [0; 8],
    [1, 2, 0, 0, 2, 1, 0, 0],
];
const CP_OFFSETS: [[u8; 8]; 3] = [
    [4, 1, 2, 0, 6, 5, 3, 7],
    [3, 0, 1, 2, 4, 5, 6, 7],
    [1, 5, 2, 3, 0, 4, 6, 7],
];

impl Cube222 {
    /// Apply an algorithm to a cube
    pub fn make_moves(self, mvs: MoveSequence<Move222>) -> Cube222 {
        mvs.into_iter().fold(self, |c, m| c.make_move(m))
    }

    /// Apply a move to a cube.
    pub fn make_move(self, mv: Move222) -> Cube222 {
        (0..mv.count).fold(self, |c, _| c.make_move_type(mv.ty))
    }

    /// Make a single clockwise quarter turn.
    pub fn make_move_type(self, mv: Move222Type) -> Cube222 {
        let co_offsets = CO_OFFSETS[mv as usize];
        let cp_offsets = CP_OFFSETS[mv as usize];

        let mut result = Cube222::SOLVED;
        for i in 0..8 {
            let from = cp_offsets[i] as usize;
            result.cp[i] = self.cp[from];
            result.co[i] = match co_offsets[i] {
                0 => self.co[from],
                1 => self.co[from].clockwise(),
                _ => self.co[from].anticlockwise(),
            };
        }

        result
    }
}

impl Puzzle for Cube222 {
    type Move = Move222;

    const SOLVED: Self = Cube222::SOLVED;

    const MOVE_LIST: &'static [Move222] = HTM;

    fn make_move(self, mv: Move222) -> Self {
        Cube222::make_move(self, mv)
    }

    fn move_index(mv: Move222) -> usize {
        mv.into()
    }

    fn is_solved(&self) -> bool {
        Cube222::is_solved(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube222::Corner;
    use crate::moves::Move;

    use proptest::collection::vec;
    use proptest::prelude::*;

    /// The corners that a face turn moves, in the order they cycle.
    fn face_corners(ty: Move222Type) -> [Corner; 4] {
        use Corner as C;
        match ty {
            Move222Type::R => [C::UFR, C::UBR, C::DBR, C::DFR],
            Move222Type::U => [C::UFR, C::UFL, C::UBL, C::UBR],
            Move222Type::F => [C::UFL, C::UFR, C::DFR, C::DFL],
        }
    }

    #[test]
    fn r_loop() {
        for ty in [Move222Type::R, Move222Type::U, Move222Type::F] {
            let mut cube = Cube222::SOLVED;
            for _ in 0..4 {
                cube = cube.make_move(Move222 { ty, count: 1 });
            }
            assert_eq!(cube, Cube222::SOLVED);
        }
    }

    #[test]
    fn quarter_turns_cycle_their_face() {
        for ty in [Move222Type::R, Move222Type::U, Move222Type::F] {
            let cube = Cube222::SOLVED.make_move_type(ty);
            let cycle = face_corners(ty);
            for i in 0..4 {
                // the corner at cycle[i] moves on to cycle[i + 1]
                assert_eq!(cube.cp[cycle[(i + 1) % 4] as usize], cycle[i]);
            }
            assert_eq!(cube.cp[Corner::DBL as usize], Corner::DBL);
        }
    }

    #[test]
    fn move_list_is_indexed() {
        for (i, &m) in Cube222::MOVE_LIST.iter().enumerate() {
            assert_eq!(Cube222::move_index(m), i);
        }
    }

    #[test]
    fn parse_and_print() {
        let alg: MoveSequence<Move222> = "R U2 F' R1 U2'".parse().unwrap();
        assert_eq!(
            alg,
            MoveSequence(vec![mv!(R, 1), mv!(U, 2), mv!(F, 3), mv!(R, 1), mv!(U, 2)])
        );
        assert_eq!(alg.to_string(), "R U2 F' R U2");
        assert_eq!(
            "R L".parse::<MoveSequence<Move222>>(),
            Err(ParseMoveError::UnknownMove("L".to_owned()))
        );
        assert!("R4".parse::<Move222>().is_err());
        assert!("".parse::<MoveSequence<Move222>>().unwrap().is_empty());
    }

    #[test]
    fn sexy_move_order() {
        let sexy: MoveSequence<Move222> = "R U R' U'".parse().unwrap();
        let mut cube = Cube222::SOLVED;
        for i in 1..=6 {
            cube = cube.make_moves(sexy.clone());
            assert_eq!(cube.is_solved(), i == 6);
        }
    }

    proptest! {
        #[test]
        fn cancel_same_moves(mvs in vec(any::<Move222>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert!(cancelled.len() <= mvs.len());
            prop_assert_eq!(Cube222::SOLVED.make_moves(mvs), Cube222::SOLVED.make_moves(cancelled));
        }

        #[test]
        fn invert_identity(mvs in vec(any::<Move222>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert_eq!(Cube222::SOLVED.make_moves(mvs.clone()).make_moves(mvs.inverse()), Cube222::SOLVED);
            prop_assert!(cancelled.clone().append(cancelled.clone().inverse()).cancel().is_empty());
        }

        #[test]
        fn cancel_idempotent(mvs in vec(any::<Move222>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert_eq!(cancelled.clone().cancel(), cancelled);
        }

        #[test]
        fn display_round_trips(mvs in vec(any::<Move222>(), 0..20).prop_map(MoveSequence)) {
            prop_assert_eq!(mvs.to_string().parse::<MoveSequence<Move222>>(), Ok(mvs));
        }

        #[test]
        fn move_inverse(m in any::<Move222>()) {
            prop_assert_eq!(Cube222::SOLVED.make_move(m).make_move(m.inverse()), Cube222::SOLVED);
        }
    }
}
