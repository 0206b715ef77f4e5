use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
        mpsc,
    },
    time::Duration,
};

use quandary::solver::{SubmitError, WorkerPool};

#[test]
fn runs_submitted_jobs() {
    let mut pool = WorkerPool::new(4, 100);
    let counter = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel();
    for _ in 0..20 {
        let counter = Arc::clone(&counter);
        let tx = tx.clone();
        pool.submit(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            tx.send(()).unwrap();
        }))
        .unwrap();
    }
    for _ in 0..20 {
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
    }
    pool.shutdown();
    assert_eq!(counter.load(Ordering::SeqCst), 20);
}

#[test]
fn saturated_queue_rejects() {
    let mut pool = WorkerPool::new(1, 1);
    let (block_tx, block_rx) = mpsc::channel::<()>();
    let (started_tx, started_rx) = mpsc::channel();
    pool.submit(Box::new(move || {
        started_tx.send(()).unwrap();
        block_rx.recv().unwrap();
    }))
    .unwrap();
    started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    pool.submit(Box::new(|| {})).unwrap();
    assert_eq!(pool.submit(Box::new(|| {})), Err(SubmitError::Saturated));
    block_tx.send(()).unwrap();
    pool.shutdown();
}

#[test]
fn closed_pool_rejects() {
    let mut pool = WorkerPool::new(1, 4);
    let handle = pool.handle();
    pool.shutdown();
    assert_eq!(handle.submit(Box::new(|| {})), Err(SubmitError::Closed));
}

#[test]
fn panicking_job_does_not_kill_worker() {
    let mut pool = WorkerPool::new(1, 4);
    let (tx, rx) = mpsc::channel();
    pool.submit(Box::new(|| panic!("故意触发"))).unwrap();
    pool.submit(Box::new(move || tx.send(()).unwrap())).unwrap();
    rx.recv_timeout(Duration::from_secs(5)).unwrap();
    pool.shutdown();
}
