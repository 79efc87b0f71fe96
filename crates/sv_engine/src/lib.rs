//! Script-side value engine: NaN-boxed dynamic values over an object heap.
//!
//! This crate supplies the host value system that the bridge serializes:
//! primitives, dates, unified indexable/property objects, and native
//! functions, with identity comparison and ordered key enumeration.

#![allow(clippy::new_without_default)]
#![allow(clippy::collapsible_if)]

pub mod engine;
pub mod errors;
pub mod heap;
pub mod object;
pub mod value;

pub use engine::{ContextId, Engine};
pub use heap::{Heap, ManagedObject, ObjectId};
pub use object::{FunctionInstance, NativeFn, ObjectInstance};
pub use value::Value;
