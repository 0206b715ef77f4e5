use std::sync::Arc;

pub type NodeRef<P, M> = Arc<SearchNode<P, M>>;

pub struct SearchNode<P, M> {
    pub position: P,
    pub mov: Option<M>,
    parent: Option<NodeRef<P, M>>,
}

impl<P, M> SearchNode<P, M> {
    #[must_use]
    pub fn new_root(position: P) -> NodeRef<P, M> {
        Arc::new(Self {
            position,
            mov: None,
            parent: None,
        })
    }

    #[must_use]
    pub fn expand(parent: &NodeRef<P, M>, mov: M, position: P) -> NodeRef<P, M> {
        Arc::new(Self {
            position,
            mov: Some(mov),
            parent: Some(Arc::clone(parent)),
        })
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0usize;
        let mut current = self;
        while let Some(parent) = &current.parent {
            depth = depth.saturating_add(1);
            current = parent;
        }
        depth
    }
}

impl<P, M: Clone> SearchNode<P, M> {
    #[must_use]
    pub fn path(&self) -> Vec<M> {
        let mut moves = Vec::with_capacity(self.depth());
        let mut current = self;
        loop {
            if let Some(mov) = &current.mov {
                moves.push(mov.clone());
            }
            match &current.parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        moves.reverse();
        moves
    }
}
