//! Bidirectional converter between script value graphs and transport trees.
//!
//! The serializer walks a potentially cyclic script value graph and streams
//! it into a transport container, externalizing functions through the
//! callback registry and dates through the date bridge. The deserializer is
//! the inverse over the (acyclic) transport tree. Neither direction ever
//! surfaces an error: every failure mode degrades to Null.

#![allow(clippy::new_without_default)]

pub mod callbacks;
pub mod date;
pub mod deserializer;
pub mod serializer;
pub mod visited;

pub use callbacks::{CallbackEntry, CallbackHandle, CallbackRegistry};
pub use date::DateBridge;
pub use deserializer::deserialize;
pub use serializer::{serialize, CycleDetected, HIDDEN_KEY_PREFIX};
pub use visited::VisitedSet;
