use quandary::{
    peg::{PegBoard, PegPuzzle, PegSymmetrySet, apply_move, generate_moves},
    puzzle::{Puzzle, VisitedSet},
    solver::{ConcurrentSolver, SearchParams, SequentialSolver},
};

#[test]
fn initial_board_shape() {
    let board = PegBoard::initial();
    assert_eq!(board.pegs_left(), 32);
    assert!(!board.has_peg(3, 3));
    assert!(!board.is_solved());
}

#[test]
fn corner_cells_are_invalid() {
    assert!(!PegBoard::is_valid_position(0, 0));
    assert!(!PegBoard::is_valid_position(0, 1));
    assert!(!PegBoard::is_valid_position(1, 6));
    assert!(!PegBoard::is_valid_position(6, 5));
    assert!(!PegBoard::is_valid_position(7, 3));
    assert!(PegBoard::is_valid_position(0, 2));
    assert!(PegBoard::is_valid_position(3, 0));
    assert!(PegBoard::is_valid_position(3, 3));
    assert!(PegBoard::is_valid_position(6, 4));
}

#[test]
fn initial_board_has_four_jumps() {
    let moves = generate_moves(&PegBoard::initial());
    assert_eq!(moves.len(), 4);
    for mov in &moves {
        assert_eq!(mov.to, (3, 3));
    }
}

#[test]
fn apply_move_updates_cells() {
    let board = PegBoard::initial();
    let moves = generate_moves(&board);
    let mov = moves[0];
    let next = apply_move(&board, &mov);
    assert_eq!(next.pegs_left(), 31);
    assert!(!next.has_peg(mov.from.0, mov.from.1));
    let over = mov.over();
    assert!(!next.has_peg(over.0, over.1));
    assert!(next.has_peg(3, 3));
}

#[test]
fn symmetric_first_moves_share_a_canonical_key() {
    let board = PegBoard::initial();
    let moves = generate_moves(&board);
    let keys: Vec<u64> = moves
        .iter()
        .map(|mov| apply_move(&board, mov).canonical())
        .collect();
    assert!(keys.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn symmetry_set_folds_rotated_boards() {
    let set = PegSymmetrySet::new();
    let board = PegBoard::from_pegs(&[(3, 1), (3, 2)]);
    let rotated = PegBoard::from_pegs(&[(1, 3), (2, 3)]);
    assert_ne!(board, rotated);
    assert_eq!(board.canonical(), rotated.canonical());
    assert!(set.mark_if_new(&board));
    assert!(!set.mark_if_new(&rotated));
    assert_eq!(set.len(), 1);
}

fn near_goal_board() -> PegBoard {
    PegBoard::from_pegs(&[(1, 2), (2, 2), (3, 1)])
}

fn assert_solves(board: PegBoard, path: &[quandary::peg::PegMove]) {
    let mut current = board;
    for mov in path {
        current = apply_move(&current, mov);
    }
    assert!(current.is_solved());
}

#[test]
fn near_goal_board_solved_concurrently() {
    for mix in [0.0, 0.4, 1.0] {
        let solver = ConcurrentSolver::with_params(
            PegPuzzle::from_board(near_goal_board()),
            SearchParams::new(mix, 64, 4),
        );
        let path = solver.solve().unwrap().expect("两步内可解的残局");
        assert_eq!(path.len(), 2);
        assert_solves(near_goal_board(), &path);
    }
}

#[test]
fn near_goal_board_solved_sequentially() {
    let solver = SequentialSolver::new(PegPuzzle::from_board(near_goal_board()));
    let path = solver.solve().unwrap().expect("两步内可解的残局");
    assert_eq!(path.len(), 2);
    assert_solves(near_goal_board(), &path);
}

#[test]
fn one_peg_off_center_is_not_solved() {
    let puzzle = PegPuzzle::from_board(PegBoard::from_pegs(&[(3, 2)]));
    assert!(!puzzle.is_goal(&puzzle.initial_position()));
    let solver = SequentialSolver::new(puzzle);
    assert_eq!(solver.solve(), Ok(None));
}
