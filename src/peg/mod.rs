mod board;
mod moves;

pub use board::{CENTER, PegBoard, SIZE};
pub use moves::{PegMove, apply_move, generate_moves};

use parking_lot::Mutex;

use crate::puzzle::{Puzzle, VisitedSet};

pub struct PegPuzzle {
    start: PegBoard,
}

impl PegPuzzle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: PegBoard::initial(),
        }
    }

    #[must_use]
    pub const fn from_board(start: PegBoard) -> Self {
        Self { start }
    }
}

impl Default for PegPuzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl Puzzle for PegPuzzle {
    type Position = PegBoard;
    type Move = PegMove;

    fn initial_position(&self) -> PegBoard {
        self.start
    }

    fn is_goal(&self, position: &PegBoard) -> bool {
        position.is_solved()
    }

    fn legal_moves(&self, position: &PegBoard) -> Vec<PegMove> {
        generate_moves(position)
    }

    fn apply(&self, position: &PegBoard, mov: &PegMove) -> PegBoard {
        apply_move(position, mov)
    }
}

pub struct PegSymmetrySet {
    seen: Mutex<hashbrown::HashSet<u64, ahash::RandomState>>,
}

impl PegSymmetrySet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(hashbrown::HashSet::with_hasher(ahash::RandomState::new())),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}

impl Default for PegSymmetrySet {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitedSet<PegBoard> for PegSymmetrySet {
    fn mark_if_new(&self, position: &PegBoard) -> bool {
        self.seen.lock().insert(position.canonical())
    }
}
