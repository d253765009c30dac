//! linkgraph: account relationship graphs.
//!
//! Two structures are provided:
//!
//! - [`RelationshipGraph`]: each account declares outgoing relationships to
//!   other accounts, bounded by an optional out-degree cap, and may annotate
//!   itself and its relationships with a typed payload.
//! - [`BeneficiaryLink`]: a symmetric benefactor/beneficiary designation built
//!   on a [`LabeledGraph`], with independent caps in each direction.
//!
//! Every mutating operation takes the caller's identity explicitly and either
//! commits fully or fails without changing anything.
//!
//! ```ignore
//! use linkgraph::{AccountId, GraphOptions, RelationshipGraph};
//!
//! let mut graph = RelationshipGraph::<()>::create(GraphOptions::new().max_out_degree(1))?;
//! let me: AccountId = "0x1".parse()?;
//! graph.add_relationship(me, "0x123".parse()?)?;
//! assert!(graph.add_relationship(me, "0x456".parse()?).is_err());
//! ```

#![warn(missing_docs)]

pub mod types;

pub use types::*;

pub use linkgraph_engine::{
    AdjacencySet, BeneficiaryLink, Direction, KeyedPropertyStore, LabeledGraph,
    LabeledSnapshot, RelationshipGraph, RelationshipSnapshot,
};
pub use linkgraph_storage::{KeyedStore, MemoryStore};
