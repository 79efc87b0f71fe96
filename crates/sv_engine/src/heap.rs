//! Heap storage for script values.
//!
//! An append-only arena: the bridge never collects, and an `Engine` is
//! expected to be short-lived or cleared wholesale by its embedder.

use super::object::{FunctionInstance, ObjectInstance};

/// Handle to a heap-allocated object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub usize);

pub enum ManagedObject {
    Str(String),
    /// Milliseconds since the Unix epoch.
    Date(f64),
    Object(Box<ObjectInstance>),
    Function(Box<FunctionInstance>),
}

pub struct Heap {
    objects: Vec<ManagedObject>,
}

impl Heap {
    pub fn new() -> Self {
        Self {
            objects: Vec::with_capacity(64),
        }
    }

    /// Allocate a managed object on the heap.
    pub fn alloc(&mut self, obj: ManagedObject) -> ObjectId {
        let id = self.objects.len();
        self.objects.push(obj);
        ObjectId(id)
    }

    pub fn get(&self, id: ObjectId) -> &ManagedObject {
        &self.objects[id.0]
    }

    pub fn get_mut(&mut self, id: ObjectId) -> &mut ManagedObject {
        &mut self.objects[id.0]
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Drop every object. Invalidates all outstanding `ObjectId`s.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
