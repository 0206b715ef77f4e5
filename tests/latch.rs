use std::{
    sync::{
        Arc, Barrier,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Duration,
};

use quandary::solver::ResultLatch;

#[test]
fn publish_first_wins_sequential() {
    let latch = ResultLatch::new();
    assert!(!latch.is_signaled());
    assert!(latch.publish(7));
    assert!(latch.is_signaled());
    assert!(!latch.publish(9));
    assert_eq!(latch.wait(), 7);
    assert_eq!(latch.wait(), 7);
}

#[test]
fn publish_race_has_single_winner() {
    for _ in 0..50 {
        let latch = Arc::new(ResultLatch::new());
        let wins = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8u32)
            .map(|value| {
                let latch = Arc::clone(&latch);
                let wins = Arc::clone(&wins);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    if latch.publish(value) {
                        wins.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(wins.load(Ordering::SeqCst), 1);
        let value = latch.wait();
        assert!(value < 8);
        assert_eq!(latch.wait(), value);
    }
}

#[test]
fn wait_blocks_until_publish() {
    let latch = Arc::new(ResultLatch::new());
    let publisher = {
        let latch = Arc::clone(&latch);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            assert!(latch.publish("done"));
        })
    };
    assert_eq!(latch.wait(), "done");
    publisher.join().unwrap();
}

#[test]
fn concurrent_waiters_see_same_value() {
    let latch = Arc::new(ResultLatch::new());
    let waiters: Vec<_> = (0..4)
        .map(|_| {
            let latch = Arc::clone(&latch);
            thread::spawn(move || latch.wait())
        })
        .collect();
    thread::sleep(Duration::from_millis(20));
    assert!(latch.publish(42));
    for waiter in waiters {
        assert_eq!(waiter.join().unwrap(), 42);
    }
}

#[test]
fn wait_timeout_expires_then_delivers() {
    let latch: ResultLatch<u32> = ResultLatch::new();
    assert_eq!(latch.wait_timeout(Duration::from_millis(20)), None);
    assert!(latch.publish(3));
    assert_eq!(latch.wait_timeout(Duration::from_millis(20)), Some(3));
}
