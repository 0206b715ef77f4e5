use std::hash::Hash;

use parking_lot::Mutex;

pub trait Puzzle: Send + Sync + 'static {
    type Position: Clone + Eq + Hash + Send + Sync + 'static;
    type Move: Clone + Send + Sync + 'static;

    fn initial_position(&self) -> Self::Position;
    fn is_goal(&self, position: &Self::Position) -> bool;
    fn legal_moves(&self, position: &Self::Position) -> Vec<Self::Move>;
    fn apply(&self, position: &Self::Position, mov: &Self::Move) -> Self::Position;
}

pub trait VisitedSet<P>: Send + Sync {
    fn mark_if_new(&self, position: &P) -> bool;
}

pub struct HashVisitedSet<P> {
    seen: Mutex<hashbrown::HashSet<P, ahash::RandomState>>,
}

impl<P: Eq + Hash> HashVisitedSet<P> {
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

impl<P: Eq + Hash> Default for HashVisitedSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone + Eq + Hash + Send + Sync> VisitedSet<P> for HashVisitedSet<P> {
    fn mark_if_new(&self, position: &P) -> bool {
        let mut seen = self.seen.lock();
        if seen.contains(position) {
            false
        } else {
            seen.insert(position.clone());
            true
        }
    }
}

pub struct NoDedup;

impl<P> VisitedSet<P> for NoDedup {
    fn mark_if_new(&self, _position: &P) -> bool {
        true
    }
}

pub trait ProgressObserver<P, M>: Send + Sync {
    fn on_progress(&self, _position: &P, _tries: u64) {}
    fn on_finished(&self, _path: Option<&[M]>, _final_position: &P, _tries: u64) {}
}

pub struct NullObserver;

impl<P, M> ProgressObserver<P, M> for NullObserver {}
