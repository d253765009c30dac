//! Error types for linkgraph.
//!
//! Every failure at this layer is a logical precondition violation: there is
//! no I/O and nothing transient, so nothing here is retryable. A call that
//! returns an error has left its graph exactly as it found it.

use thiserror::Error;

/// Failures of the keyed persistence primitive.
///
/// The primitive is strict: `insert` requires an absent key, while `get`,
/// `update` and `remove` require a present one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert on a key that already holds a value.
    #[error("key already present: {key}")]
    KeyExists {
        /// Debug rendering of the offending key
        key: String,
    },

    /// Lookup, update or removal of a key that holds no value.
    #[error("key not found: {key}")]
    KeyMissing {
        /// Debug rendering of the offending key
        key: String,
    },
}

impl StoreError {
    /// Build a `KeyExists` error from any debuggable key.
    pub fn exists(key: &impl std::fmt::Debug) -> Self {
        StoreError::KeyExists {
            key: format!("{:?}", key),
        }
    }

    /// Build a `KeyMissing` error from any debuggable key.
    pub fn missing(key: &impl std::fmt::Debug) -> Self {
        StoreError::KeyMissing {
            key: format!("{:?}", key),
        }
    }
}

/// Errors raised by graph operations.
///
/// Node and account identities are carried in their display form so the
/// error stays independent of the graph's node type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A degree cap of zero was supplied at creation.
    #[error("invalid degree cap for {field}: must be at least 1")]
    InvalidDegree {
        /// Which cap was rejected
        field: &'static str,
    },

    /// The source already holds `cap` outgoing relationships.
    #[error("account {account} reached its out-degree cap of {cap}")]
    DegreeExceeded {
        /// Account whose insert was rejected
        account: String,
        /// Configured cap
        cap: u64,
    },

    /// A keyed entry that must exist does not.
    #[error("{kind} not found for {key}")]
    NotFound {
        /// What was being looked up
        kind: &'static str,
        /// Key that was looked up
        key: String,
    },

    /// The `(source, target)` relationship does not exist.
    #[error("relationship {src} -> {dst} does not exist")]
    RelationshipNotExist {
        /// Relationship source
        src: String,
        /// Relationship target
        dst: String,
    },

    /// Node creation on a node that is already materialized.
    #[error("node {node} already exists")]
    AlreadyExists {
        /// The duplicate node
        node: String,
    },

    /// Node is not materialized in the graph.
    #[error("node {node} does not exist")]
    NodeNotFound {
        /// The missing node
        node: String,
    },

    /// Node removal while other nodes still point at it.
    #[error("node {node} still has {count} incoming edge(s)")]
    NodeHasIncoming {
        /// The node that could not be removed
        node: String,
        /// Current incoming counter
        count: u128,
    },

    /// Node removal while it still has outgoing edges.
    #[error("node {node} still has {count} outgoing edge(s)")]
    NodeHasOutgoing {
        /// The node that could not be removed
        node: String,
        /// Current adjacency set size
        count: usize,
    },

    /// Benefactor already designates the maximum number of beneficiaries.
    #[error("benefactor {benefactor} already has {cap} beneficiaries")]
    BeneficiaryExceeded {
        /// The benefactor whose cap was hit
        benefactor: String,
        /// Configured cap
        cap: u64,
    },

    /// Beneficiary is already designated by the maximum number of benefactors.
    #[error("beneficiary {beneficiary} already has {cap} benefactors")]
    BenefactorExceeded {
        /// The beneficiary whose cap was hit
        beneficiary: String,
        /// Configured cap
        cap: u64,
    },

    /// Teardown of a graph that still holds entries.
    #[error("graph {graph} is not empty: {remaining} entries remain")]
    NotEmpty {
        /// Graph identity
        graph: String,
        /// Number of live entries blocking teardown
        remaining: usize,
    },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Parser message
        reason: String,
    },

    /// The keyed persistence primitive rejected an operation.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl GraphError {
    /// Build a `NotFound` error.
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        GraphError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    /// Build a `RelationshipNotExist` error.
    pub fn relationship_not_exist(src: impl ToString, dst: impl ToString) -> Self {
        GraphError::RelationshipNotExist {
            src: src.to_string(),
            dst: dst.to_string(),
        }
    }

    /// Build a `NodeNotFound` error.
    pub fn node_not_found(node: impl ToString) -> Self {
        GraphError::NodeNotFound {
            node: node.to_string(),
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
