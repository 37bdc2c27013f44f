//! Move tables for each coordinate type

use crate::coord::{Coordinate, FromCoordinate};
use crate::moves::MoveSequence;
use crate::puzzle::Puzzle;

use std::marker::PhantomData;

/// A move table, which stores mappings of coordinate + move pairs to the coordinate that results
/// from applying the move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveTable<P: Puzzle, C: Coordinate<P>> {
    table: Box<[C]>,
    _phantom: PhantomData<P>,
}

impl<P: Puzzle, C: Coordinate<P>> MoveTable<P, C>
where
    P: FromCoordinate<C>,
{
    /// Generate a move table. This is slightly expensive so making move tables repeatedly should
    /// be avoided, since the resulting move table generated will always be identical.
    ///
    /// Every coordinate gets an entry, including ones that no sequence of moves reaches, since
    /// each coordinate is set onto the solved puzzle directly.
    pub fn generate() -> Self {
        let moves = P::MOVE_LIST.len();
        let mut table: Box<[C]> = vec![C::default(); C::count() * moves].into_boxed_slice();

        for c in (0..C::count()).map(C::from_repr) {
            let mut puzzle = P::SOLVED;
            puzzle.set_coord(c);

            for (mv, next) in puzzle.successor_states() {
                table[c.repr() * moves + P::move_index(mv)] = C::from_puzzle(&next);
            }
        }

        Self {
            table,
            _phantom: PhantomData,
        }
    }
}

impl<P: Puzzle, C: Coordinate<P>> MoveTable<P, C> {
    /// Determine what coordinate comes from applying a move.
    pub fn make_move(&self, coord: C, mv: P::Move) -> C {
        self.table[coord.repr() * P::MOVE_LIST.len() + P::move_index(mv)]
    }

    /// Determine what coordinate comes from applying a sequence of moves.
    pub fn make_moves(&self, coord: C, alg: MoveSequence<P::Move>) -> C {
        alg.into_iter().fold(coord, |c, m| self.make_move(c, m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube122::{coordcube as c122, Cube122, Move122};
    use crate::cube123::{coordcube as c123, Cube123, Move123};
    use crate::cube222::{coordcube as c222, Cube222, Move222};

    use proptest::collection::vec;
    use proptest::prelude::*;

    /* We check that the following diagram commutes
     *
     *     Puzzle --apply_move--> Puzzle
     *      |                        |
     *      |                        |
     * from_puzzle              from_puzzle
     *      |                        |
     *      |                        |
     *      v                        v
     *    Coord -----apply_move---> Coord
     *
     * Move application should be compatable with coordinate translation.
     */

    fn diagram_commutes<P: Puzzle, C: Coordinate<P> + std::fmt::Debug>(
        table: &MoveTable<P, C>,
        p: P,
        mvs: MoveSequence<P::Move>,
    ) {
        let l = table.make_moves(C::from_puzzle(&p), mvs.clone());
        let r = C::from_puzzle(&p.make_moves(mvs));
        assert_eq!(l, r);
    }

    #[test]
    fn commutes_222() {
        let cp_table = MoveTable::<Cube222, c222::CPCoord>::generate();
        let co_table = MoveTable::<Cube222, c222::COCoord>::generate();
        proptest!(|(mvs in vec(any::<Move222>(), 0..20).prop_map(MoveSequence))| {
            diagram_commutes(&cp_table, Cube222::SOLVED, mvs.clone());
            diagram_commutes(&co_table, Cube222::SOLVED, mvs.clone());
        });
    }

    #[test]
    fn commutes_flat() {
        let bp_122 = MoveTable::<Cube122, c122::BPCoord>::generate();
        let bo_122 = MoveTable::<Cube122, c122::BOCoord>::generate();
        let bp_123 = MoveTable::<Cube123, c123::BPCoord>::generate();
        let o_123 = MoveTable::<Cube123, c123::OCoord>::generate();
        proptest!(|(mvs in vec(any::<Move122>(), 0..20).prop_map(MoveSequence))| {
            diagram_commutes(&bp_122, Cube122::SOLVED, mvs.clone());
            diagram_commutes(&bo_122, Cube122::SOLVED, mvs.clone());
        });
        proptest!(|(mvs in vec(any::<Move123>(), 0..20).prop_map(MoveSequence))| {
            diagram_commutes(&bp_123, Cube123::SOLVED, mvs.clone());
            diagram_commutes(&o_123, Cube123::SOLVED, mvs.clone());
        });
    }
}
