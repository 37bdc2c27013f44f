//! An optimal solver for any puzzle whose states are described by a permutation coordinate and an
//! orientation coordinate. It runs IDA* guided by a pruning table holding the exact distance of
//! every state, so the first solutions it finds are optimal.

mod move_tables;
mod prune;

pub use move_tables::MoveTable;
pub use prune::PruningTable;

use crate::coord::{Coordinate, FromCoordinate};
use crate::error::SolveError;
use crate::moves::{Cancellation, Move, MoveSequence};
use crate::puzzle::{Puzzle, Solvable};

use std::rc::Rc;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node<A, B> {
    perm: A,
    orient: B,
}

/// A solver for the puzzle `P`.
pub struct Solver<P: Solvable> {
    perm_moves: Rc<MoveTable<P, P::Perm>>,
    orient_moves: Rc<MoveTable<P, P::Orient>>,
    pruner: PruningTable<P>,
}

impl<P: Solvable> Default for Solver<P>
where
    P: FromCoordinate<P::Perm> + FromCoordinate<P::Orient>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Solvable> Solver<P>
where
    P: FromCoordinate<P::Perm> + FromCoordinate<P::Orient>,
{
    /// Create a solver. This generates all of the tables, which takes a few seconds for the
    /// 2x2x2, so solvers should be reused.
    pub fn new() -> Self {
        let start = Instant::now();
        let perm_moves = Rc::new(MoveTable::generate());
        let orient_moves = Rc::new(MoveTable::generate());
        let pruner = PruningTable::generate(perm_moves.clone(), orient_moves.clone());

        let solver = Self {
            perm_moves,
            orient_moves,
            pruner,
        };
        debug!(
            puzzle = P::NAME,
            states = solver.state_count(),
            max_depth = solver.max_depth(),
            elapsed = ?start.elapsed(),
            "generated solver tables"
        );
        solver
    }

    /// Pick a state uniformly at random from every state reachable from solved.
    pub fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> P {
        loop {
            let perm = P::Perm::from_repr(rng.random_range(0..P::Perm::count()));
            let orient = P::Orient::from_repr(rng.random_range(0..P::Orient::count()));
            if self.pruner.reachable(perm, orient) {
                let mut puzzle = P::SOLVED;
                FromCoordinate::<P::Perm>::set_coord(&mut puzzle, perm);
                FromCoordinate::<P::Orient>::set_coord(&mut puzzle, orient);
                return puzzle;
            }
        }
    }

    /// A random state scramble, i.e. an optimal sequence of moves that takes the solved state to
    /// a uniformly random state.
    pub fn scramble<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<MoveSequence<P::Move>, SolveError> {
        let state = self.random_state(rng);
        Ok(self.solve(&state)?.inverse())
    }

    /// Project a puzzle onto its coordinates. The coordinates drop pieces that are fixed or
    /// determined by the others, so a state outside the group can share coordinates with a legal
    /// one. Such states are caught by rebuilding the puzzle from its coordinates.
    fn node(&self, puzzle: &P) -> Result<Node<P::Perm, P::Orient>, SolveError> {
        let perm = P::Perm::from_puzzle(puzzle);
        let orient = P::Orient::from_puzzle(puzzle);

        let mut rebuilt = P::SOLVED;
        FromCoordinate::<P::Perm>::set_coord(&mut rebuilt, perm);
        FromCoordinate::<P::Orient>::set_coord(&mut rebuilt, orient);
        if rebuilt != *puzzle {
            return Err(SolveError::Unsolvable);
        }

        Ok(Node { perm, orient })
    }

    fn make_move(
        &self,
        node: Node<P::Perm, P::Orient>,
        m: P::Move,
    ) -> Node<P::Perm, P::Orient> {
        Node {
            perm: self.perm_moves.make_move(node.perm, m),
            orient: self.orient_moves.make_move(node.orient, m),
        }
    }

    /// The number of moves in an optimal solution.
    pub fn distance(&self, puzzle: &P) -> Result<usize, SolveError> {
        let node = self.node(puzzle)?;
        self.pruner
            .bound(node.perm, node.orient)
            .ok_or(SolveError::Unsolvable)
    }

    /// Obtain an optimal solving sequence for the puzzle (such that applying the sequence solves
    /// the puzzle).
    pub fn solve(&self, puzzle: &P) -> Result<MoveSequence<P::Move>, SolveError> {
        self.search_optimal(puzzle, false)?
            .into_iter()
            .next()
            .ok_or(SolveError::Unsolvable)
    }

    /// Obtain every optimal solving sequence. Moves that commute are only given in one order, the
    /// order of the puzzle's move list.
    pub fn solve_all(&self, puzzle: &P) -> Result<Vec<MoveSequence<P::Move>>, SolveError> {
        self.search_optimal(puzzle, true)
    }

    /// The number of states at each distance from solved.
    pub fn depth_counts(&self) -> &[usize] {
        self.pruner.depth_counts()
    }

    /// The number of states reachable from solved.
    pub fn state_count(&self) -> usize {
        self.depth_counts().iter().sum()
    }

    /// The largest distance from solved of any state, also known as God's number.
    pub fn max_depth(&self) -> usize {
        self.depth_counts().len() - 1
    }

    fn search_optimal(
        &self,
        puzzle: &P,
        all: bool,
    ) -> Result<Vec<MoveSequence<P::Move>>, SolveError> {
        let node = self.node(puzzle)?;
        let prune = self
            .pruner
            .bound(node.perm, node.orient)
            .ok_or(SolveError::Unsolvable)?;

        let mut found = Vec::new();
        let mut depth = prune;
        loop {
            trace!(puzzle = P::NAME, depth, "searching");
            let mut sol = Vec::new();
            let next = self.search(node, prune, 0, depth, &mut sol, &mut found, all);
            if !found.is_empty() {
                return Ok(found);
            }
            if next == usize::MAX {
                return Err(SolveError::Unsolvable);
            }
            depth = next;
        }
    }

    /// Depth first search for solutions of length `depth`. Returns the smallest estimate that went
    /// over `depth`, for use as the next depth.
    #[allow(clippy::too_many_arguments)]
    fn search(
        &self,
        node: Node<P::Perm, P::Orient>,
        prune: usize,
        cost: usize,
        depth: usize,
        sol: &mut Vec<P::Move>,
        found: &mut Vec<MoveSequence<P::Move>>,
        all: bool,
    ) -> usize {
        if node.perm.solved() && node.orient.solved() {
            found.push(MoveSequence(sol.clone()));
            return cost;
        }
        let estimate = cost + prune;
        if estimate > depth {
            return estimate;
        }

        let mut min = usize::MAX;
        for &m in P::MOVE_LIST {
            if sol.last().is_some_and(|&last| redundant::<P>(last, m)) {
                continue;
            }
            let node2 = self.make_move(node, m);
            let prune2 = self.pruner.update(prune, node2.perm, node2.orient);
            sol.push(m);

            let d = self.search(node2, prune2, cost + 1, depth, sol, found, all);
            sol.pop();
            if !all && !found.is_empty() {
                return d;
            }
            min = min.min(d);
        }

        min
    }
}

/// Whether `next` should never follow `last` in a solution: they cancel, or they commute and are
/// out of move list order.
fn redundant<P: Puzzle>(last: P::Move, next: P::Move) -> bool {
    !matches!(last.cancel(next), Cancellation::TwoMove(_, _))
        || (last.commutes_with(&next) && P::move_index(next) < P::move_index(last))
}
