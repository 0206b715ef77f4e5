use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Instant,
};

use crate::{
    config::Config,
    peg::{PegBoard, PegMove, PegPuzzle, PegSymmetrySet, SIZE, apply_move},
    puzzle::{NullObserver, ProgressObserver},
    solver::{ConcurrentSolver, SolveError},
};

pub fn print_board(board: &PegBoard) {
    print!("  ");
    for col in 0..SIZE {
        print!("{col} ");
    }
    println!();
    for row in 0..SIZE {
        print!("{row} ");
        for col in 0..SIZE {
            if !PegBoard::is_valid_position(row, col) {
                print!("  ");
            } else if board.has_peg(row, col) {
                print!("● ");
            } else {
                print!("· ");
            }
        }
        println!();
    }
}

struct ConsoleObserver {
    interval: u64,
}

impl ProgressObserver<PegBoard, PegMove> for ConsoleObserver {
    fn on_progress(&self, position: &PegBoard, tries: u64) {
        if tries % self.interval == 0 {
            println!(
                "已尝试 {tries} 个局面，当前剩余 {} 枚棋子",
                position.pegs_left()
            );
        }
    }
}

fn print_solution(start: PegBoard, path: &[PegMove]) {
    println!("找到解，共 {} 步:", path.len());
    let mut board = start;
    for (index, mov) in path.iter().enumerate() {
        board = apply_move(&board, mov);
        println!("第 {} 步: {mov}", index.saturating_add(1));
    }
    println!("\n最终局面:");
    print_board(&board);
}

pub fn run(exit_flag: &Arc<AtomicBool>, config: &Config) {
    let params = config.search_params();
    println!(
        "HiQ 独立钻石棋求解器 (mix={}, pool_capacity={}, num_threads={})",
        params.mix, params.pool_capacity, params.num_threads
    );
    let start = PegBoard::initial();
    println!("\n初始局面:");
    print_board(&start);
    println!();

    let observer: Arc<dyn ProgressObserver<PegBoard, PegMove>> = if config.verbose {
        Arc::new(ConsoleObserver {
            interval: config.progress_interval,
        })
    } else {
        Arc::new(NullObserver)
    };
    let solver = ConcurrentSolver::with_visited_and_stop(
        PegPuzzle::new(),
        params,
        Some(Arc::new(PegSymmetrySet::new())),
        observer,
        exit_flag,
    );

    let start_time = Instant::now();
    let outcome = solver.solve();
    let elapsed = start_time.elapsed().as_secs_f64();
    match outcome {
        Ok(Some(path)) => print_solution(start, &path),
        Ok(None) => println!("该谜题无解"),
        Err(SolveError::Aborted) => {
            println!("搜索被中止");
            return;
        }
        Err(err) => {
            eprintln!("搜索失败: {err}");
            return;
        }
    }
    let stats = solver.stats_snapshot();
    println!(
        "用时 {elapsed:.2} 秒，尝试局面: {}, 扩展节点: {}, 重复剪枝: {}, 信号剪枝: {}, 并行提交: \
         {}, 串行展开: {}, 饱和丢弃: {}",
        stats.tries,
        stats.expanded,
        stats.pruned_duplicate,
        stats.pruned_signaled,
        stats.submitted,
        stats.inline_runs,
        stats.discarded
    );
    if exit_flag.load(Ordering::SeqCst) {
        println!("已收到退出信号");
    }
}
