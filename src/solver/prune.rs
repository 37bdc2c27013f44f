//! The pruning table for the solver.
//!
//! The table covers every pair of permutation and orientation coordinates, so the bound it gives
//! is the exact distance to solved.

use super::move_tables::MoveTable;
use crate::coord::{Coordinate, FromCoordinate};
use crate::puzzle::Solvable;

use std::rc::Rc;

use tracing::trace;

/// Marks a pair that the breadth first search never reached.
const UNREACHED: u8 = 3;

/// A pruning table indexed by a permutation coordinate and an orientation coordinate.
///
/// An entry is the optimal search depth of the state modulo 3, see
/// https://kociemba.org/math/pruning.htm for a detailed explanation. Essentially though, we can
/// compute the whole pruning depth based on solely the pruning depth modulo 3 if we know the
/// pruning depth of the current state we are in, when searching. We store 4 entries per byte.
pub struct PruningTable<P: Solvable> {
    table: Box<[u8]>,
    perm_moves: Rc<MoveTable<P, P::Perm>>,
    orient_moves: Rc<MoveTable<P, P::Orient>>,
    depth_counts: Vec<usize>,
}

impl<P: Solvable> PruningTable<P>
where
    P: FromCoordinate<P::Perm> + FromCoordinate<P::Orient>,
{
    /// Generate the table with a breadth first search from the solved state.
    pub fn generate(
        perm_moves: Rc<MoveTable<P, P::Perm>>,
        orient_moves: Rc<MoveTable<P, P::Orient>>,
    ) -> Self {
        let entries = P::Perm::count() * P::Orient::count();
        let table = vec![0xff; entries.div_ceil(4)].into_boxed_slice();
        let mut table = Self {
            table,
            perm_moves,
            orient_moves,
            depth_counts: vec![1],
        };

        let p = P::Perm::from_puzzle(&P::SOLVED);
        let o = P::Orient::from_puzzle(&P::SOLVED);
        table.set(p, o, 0);
        let mut stack = vec![(p, o)];
        let mut next = vec![];
        let mut depth = 1;

        while !stack.is_empty() {
            while let Some((p, o)) = stack.pop() {
                for &m in P::MOVE_LIST {
                    let p2 = table.perm_moves.make_move(p, m);
                    let o2 = table.orient_moves.make_move(o, m);
                    if table.query(p2, o2) == UNREACHED {
                        next.push((p2, o2));
                        table.set(p2, o2, (depth % 3) as u8);
                    }
                }
            }

            if !next.is_empty() {
                trace!(depth, states = next.len(), "pruning table layer");
                table.depth_counts.push(next.len());
            }
            stack = std::mem::take(&mut next);
            depth += 1;
        }

        table
    }
}

impl<P: Solvable> PruningTable<P> {
    /// Compute the index and shift into the table given a coordinate pair.
    fn index(&self, p: P::Perm, o: P::Orient) -> (usize, usize) {
        let i = p.repr() * P::Orient::count() + o.repr();
        (i >> 2, (i & 3) * 2)
    }

    /// Set the depth in the search tree of this coordinate pair modulo 3.
    fn set(&mut self, p: P::Perm, o: P::Orient, val: u8) {
        assert!(val & !3 == 0);

        let (index, shift) = self.index(p, o);
        self.table[index] &= !(3 << shift);
        self.table[index] |= val << shift;
    }

    /// Determine the bound of a coordinate pair modulo 3 with a lookup
    fn query(&self, p: P::Perm, o: P::Orient) -> u8 {
        let (index, shift) = self.index(p, o);

        (self.table[index] >> shift) & 3
    }

    /// Whether the pair can be reached from the solved state.
    pub fn reachable(&self, p: P::Perm, o: P::Orient) -> bool {
        self.query(p, o) != UNREACHED
    }

    /// Update a prune bound given the next state (fast)
    pub fn update(&self, cur: usize, p: P::Perm, o: P::Orient) -> usize {
        let n = self.query(p, o) as usize;
        let c = cur % 3;
        let d = (n + 3 - c).rem_euclid(3);
        match d {
            0 => cur,
            1 => cur + 1,
            2 => cur - 1,
            _ => unreachable!(),
        }
    }

    /// Compute the bound on a given coordinate pair (slow), or `None` if the pair can't be
    /// reached.
    pub fn bound(&self, mut p: P::Perm, mut o: P::Orient) -> Option<usize> {
        let mut bound = 0;
        while !(p.solved() && o.solved()) {
            let n = self.query(p, o);
            if n == UNREACHED {
                return None;
            }
            // n - 1 but underflow
            let goal = (n + 2).rem_euclid(3);
            (p, o) = P::MOVE_LIST
                .iter()
                .map(|&m| (self.perm_moves.make_move(p, m), self.orient_moves.make_move(o, m)))
                .find(|&(p, o)| self.query(p, o) == goal)?;

            bound += 1;
        }
        Some(bound)
    }

    /// The number of states at each distance from solved.
    pub fn depth_counts(&self) -> &[usize] {
        &self.depth_counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube122::Cube122;
    use crate::cube123::{Cube123, Move123};
    use crate::cube222::{Cube222, Move222};
    use crate::moves::MoveSequence;
    use crate::puzzle::Puzzle;

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn table<P: Solvable>() -> PruningTable<P>
    where
        P: FromCoordinate<P::Perm> + FromCoordinate<P::Orient>,
    {
        PruningTable::generate(Rc::new(MoveTable::generate()), Rc::new(MoveTable::generate()))
    }

    fn admissable_and_update_correct<P: Solvable>(
        prune_table: &PruningTable<P>,
        mvs: MoveSequence<P::Move>,
    ) {
        let p = prune_table
            .perm_moves
            .make_moves(P::Perm::from_puzzle(&P::SOLVED), mvs.clone());
        let o = prune_table
            .orient_moves
            .make_moves(P::Orient::from_puzzle(&P::SOLVED), mvs.clone());
        let b = prune_table.bound(p, o).unwrap();
        assert!(b <= mvs.len());

        for &m in P::MOVE_LIST {
            let p2 = prune_table.perm_moves.make_move(p, m);
            let o2 = prune_table.orient_moves.make_move(o, m);
            let b2 = prune_table.update(b, p2, o2);
            assert_eq!(Some(b2), prune_table.bound(p2, o2));
        }
    }

    #[test]
    fn layer_sizes_122() {
        let t = table::<Cube122>();
        assert_eq!(t.depth_counts(), &[1, 2, 2, 1]);
    }

    #[test]
    fn layer_sizes_123() {
        let t = table::<Cube123>();
        assert_eq!(t.depth_counts(), &[1, 4, 10, 18, 27, 26, 10]);
        proptest!(|(mvs in vec(any::<Move123>(), 0..20).prop_map(MoveSequence))| {
            admissable_and_update_correct(&t, mvs.clone());
        });
    }

    #[test]
    fn check_222() {
        let t = table::<Cube222>();
        assert_eq!(
            t.depth_counts(),
            &[1, 9, 54, 321, 1847, 9992, 50136, 227536, 870072, 1887748, 623800, 2644]
        );
        proptest!(|(mvs in vec(any::<Move222>(), 0..20).prop_map(MoveSequence))| {
            admissable_and_update_correct(&t, mvs.clone());
        });
    }

    #[test]
    fn unreachable_pairs() {
        let t = table::<Cube122>();
        let mut flipped = Cube122::SOLVED;
        flipped.bo[0] = crate::orientation::Flip::Flipped;
        flipped.bo[1] = crate::orientation::Flip::Flipped;
        let p = <Cube122 as Solvable>::Perm::from_puzzle(&flipped);
        let o = <Cube122 as Solvable>::Orient::from_puzzle(&flipped);
        assert!(!t.reachable(p, o));
        assert_eq!(t.bound(p, o), None);
        assert_eq!(t.bound(p, <Cube122 as Solvable>::Orient::default()), Some(0));
    }
}
