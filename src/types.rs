//! Public types for the linkgraph API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Identities
pub use linkgraph_core::{AccountId, GraphId, ParseAccountError};

// Property payload capability set
pub use linkgraph_core::Props;

// Errors
pub use linkgraph_core::{GraphError, GraphResult, StoreError};

// Change notifications
pub use linkgraph_core::{EventLog, EventSink, GraphEvent, NullSink, TracingSink};

// Configuration
pub use linkgraph_core::{BeneficiaryOptions, GraphOptions};
