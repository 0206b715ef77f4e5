use std::fmt;

use smallvec::SmallVec;

use super::board::PegBoard;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PegMove {
    pub from: (u8, u8),
    pub to: (u8, u8),
}

impl PegMove {
    #[must_use]
    pub const fn new(from: (u8, u8), to: (u8, u8)) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub const fn over(&self) -> (u8, u8) {
        ((self.from.0 + self.to.0) / 2, (self.from.1 + self.to.1) / 2)
    }
}

impl fmt::Display for PegMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

fn jumps_into(board: &PegBoard, row: u8, col: u8, moves: &mut SmallVec<[PegMove; 32]>) {
    let to = (row, col);
    if col >= 2
        && PegBoard::is_valid_position(row, col - 2)
        && board.has_peg(row, col - 2)
        && board.has_peg(row, col - 1)
    {
        moves.push(PegMove::new((row, col - 2), to));
    }
    if PegBoard::is_valid_position(row, col + 2)
        && board.has_peg(row, col + 2)
        && board.has_peg(row, col + 1)
    {
        moves.push(PegMove::new((row, col + 2), to));
    }
    if row >= 2
        && PegBoard::is_valid_position(row - 2, col)
        && board.has_peg(row - 2, col)
        && board.has_peg(row - 1, col)
    {
        moves.push(PegMove::new((row - 2, col), to));
    }
    if PegBoard::is_valid_position(row + 2, col)
        && board.has_peg(row + 2, col)
        && board.has_peg(row + 1, col)
    {
        moves.push(PegMove::new((row + 2, col), to));
    }
}

#[must_use]
pub fn generate_moves(board: &PegBoard) -> Vec<PegMove> {
    let mut moves: SmallVec<[PegMove; 32]> = SmallVec::new();
    for row in 0..super::board::SIZE {
        for col in 0..super::board::SIZE {
            if PegBoard::is_valid_position(row, col) && !board.has_peg(row, col) {
                jumps_into(board, row, col, &mut moves);
            }
        }
    }
    moves.into_vec()
}

#[must_use]
pub fn apply_move(board: &PegBoard, mov: &PegMove) -> PegBoard {
    let mut next = *board;
    let over = mov.over();
    next.clear_peg(mov.from.0, mov.from.1);
    next.clear_peg(over.0, over.1);
    next.set_peg(mov.to.0, mov.to.1);
    next
}
