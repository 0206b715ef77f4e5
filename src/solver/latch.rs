use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

use parking_lot::{Condvar, Mutex};

pub struct ResultLatch<T> {
    slot: Mutex<Option<T>>,
    signal: Condvar,
    signaled: AtomicBool,
}

impl<T: Clone> ResultLatch<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            signal: Condvar::new(),
            signaled: AtomicBool::new(false),
        }
    }

    pub fn publish(&self, value: T) -> bool {
        let mut slot = self.slot.lock();
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        self.signaled.store(true, Ordering::Release);
        drop(slot);
        self.signal.notify_all();
        true
    }

    #[must_use]
    pub fn is_signaled(&self) -> bool {
        self.signaled.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn wait(&self) -> T {
        let mut slot = self.slot.lock();
        loop {
            if let Some(value) = slot.as_ref() {
                return value.clone();
            }
            self.signal.wait(&mut slot);
        }
    }

    #[must_use]
    pub fn wait_timeout(&self, timeout: Duration) -> Option<T> {
        let deadline = Instant::now().checked_add(timeout)?;
        let mut slot = self.slot.lock();
        loop {
            if let Some(value) = slot.as_ref() {
                return Some(value.clone());
            }
            if self.signal.wait_until(&mut slot, deadline).timed_out() {
                return slot.clone();
            }
        }
    }
}

impl<T: Clone> Default for ResultLatch<T> {
    fn default() -> Self {
        Self::new()
    }
}
