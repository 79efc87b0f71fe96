//! Call-scoped cycle detection for serialization.

use smallvec::SmallVec;
use sv_engine::ObjectId;

/// Stack of container identities on the current traversal path. Scoped to
/// one top-level serialize call; membership on entry is the cycle check.
pub struct VisitedSet {
    stack: SmallVec<[ObjectId; 8]>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self {
            stack: SmallVec::new(),
        }
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.stack.iter().any(|&seen| seen == id)
    }

    pub fn push(&mut self, id: ObjectId) {
        self.stack.push(id);
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
