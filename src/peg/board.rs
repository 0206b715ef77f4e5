pub const SIZE: u8 = 7;
pub const CENTER: u8 = 3;
const CORNER_SIZE: u8 = 2;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PegBoard {
    bits: u64,
}

const fn cell_mask(row: u8, col: u8) -> u64 {
    1u64 << (row * SIZE + col)
}

impl PegBoard {
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if Self::is_valid_position(row, col) {
                    board.set_peg(row, col);
                }
            }
        }
        board.clear_peg(CENTER, CENTER);
        board
    }

    #[must_use]
    pub fn from_pegs(pegs: &[(u8, u8)]) -> Self {
        let mut board = Self::empty();
        for &(row, col) in pegs {
            assert!(
                Self::is_valid_position(row, col),
                "({row}, {col}) 不是合法的棋盘位置"
            );
            board.set_peg(row, col);
        }
        board
    }

    #[must_use]
    pub const fn is_valid_position(row: u8, col: u8) -> bool {
        if row >= SIZE || col >= SIZE {
            return false;
        }
        if row >= CORNER_SIZE && row < SIZE - CORNER_SIZE {
            return true;
        }
        col >= CORNER_SIZE && col < SIZE - CORNER_SIZE
    }

    #[must_use]
    pub const fn has_peg(&self, row: u8, col: u8) -> bool {
        self.bits & cell_mask(row, col) != 0
    }

    pub const fn set_peg(&mut self, row: u8, col: u8) {
        self.bits |= cell_mask(row, col);
    }

    pub const fn clear_peg(&mut self, row: u8, col: u8) {
        self.bits &= !cell_mask(row, col);
    }

    #[must_use]
    pub const fn pegs_left(&self) -> u32 {
        self.bits.count_ones()
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.pegs_left() == 1 && self.has_peg(CENTER, CENTER)
    }

    #[must_use]
    pub fn canonical(&self) -> u64 {
        let mut minimum = u64::MAX;
        for variant in 0..8u8 {
            let transformed = self.transform(variant);
            if transformed < minimum {
                minimum = transformed;
            }
        }
        minimum
    }

    fn transform(&self, variant: u8) -> u64 {
        let n = SIZE - 1;
        let mut bits = 0u64;
        for row in 0..SIZE {
            for col in 0..SIZE {
                if !self.has_peg(row, col) {
                    continue;
                }
                let (r, c) = match variant {
                    0 => (row, col),
                    1 => (col, n - row),
                    2 => (n - row, n - col),
                    3 => (n - col, row),
                    4 => (row, n - col),
                    5 => (col, row),
                    6 => (n - row, col),
                    _ => (n - col, n - row),
                };
                bits |= cell_mask(r, c);
            }
        }
        bits
    }
}
