//! Graph engine for linkgraph
//!
//! Built bottom-up:
//! - [`KeyedPropertyStore`]: keyed payload overlay with set/get/unset
//! - [`AdjacencySet`]: per-source set of distinct outgoing targets
//! - [`RelationshipGraph`]: account relationships with an optional out-degree cap
//!   and property overlays on accounts and on relationships
//! - [`LabeledGraph`]: labeled directed graph with incoming-edge bookkeeping
//! - [`BeneficiaryLink`]: paired TO/FROM designations with independent caps
//!
//! Every mutating operation takes the caller identity explicitly. Operations
//! check all preconditions before mutating, so a failed call leaves the graph
//! untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adjacency;
pub mod beneficiary;
pub mod labeled;
pub mod property;
pub mod relationship;
pub mod snapshot;

pub use adjacency::AdjacencySet;
pub use beneficiary::{BeneficiaryLink, Direction};
pub use labeled::{LabeledGraph, NodeEntry};
pub use property::KeyedPropertyStore;
pub use relationship::RelationshipGraph;
pub use snapshot::{LabeledSnapshot, RelationshipSnapshot};
