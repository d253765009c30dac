//! Keyed persistence primitive for linkgraph
//!
//! Graph structures never touch a concrete map directly. They go through the
//! [`KeyedStore`] trait, which mirrors the contract of the ledger's dynamic
//! field store: strict insert/update/remove, point lookups, and no ordering
//! guarantee on iteration.
//!
//! [`MemoryStore`] is the in-process implementation used by the engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod traits;

pub use memory::MemoryStore;
pub use traits::KeyedStore;
