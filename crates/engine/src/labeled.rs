//! Labeled directed graph with incoming-edge bookkeeping.
//!
//! Each materialized node stores its outgoing `(target, label)` tuples and a
//! counter of edges pointing at it. The counter is only ever changed together
//! with some source's adjacency set, so it always equals the number of live
//! edges targeting the node.
//!
//! Behavior on missing entries:
//! - `add_edge` materializes absent endpoints
//! - `remove_edge` on an absent edge or node is a no-op
//! - `remove_node`, `adjacency_of`, `incoming_count` and `out_degree` on an
//!   absent node fail with `NodeNotFound`
//!
//! A node can only be removed once nothing points at it and it points at nothing.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use linkgraph_core::{GraphError, GraphId, GraphResult};
use linkgraph_storage::{KeyedStore, MemoryStore};

use crate::adjacency::AdjacencySet;

/// Storage for one materialized node.
#[derive(Debug, Clone)]
pub struct NodeEntry<N: Hash + Eq, L: Hash + Eq> {
    adjacency: AdjacencySet<(N, L)>,
    incoming: u128,
}

impl<N: Hash + Eq, L: Hash + Eq> NodeEntry<N, L> {
    fn new() -> Self {
        Self {
            adjacency: AdjacencySet::new(),
            incoming: 0,
        }
    }

    /// Outgoing `(target, label)` tuples.
    pub fn adjacency(&self) -> &AdjacencySet<(N, L)> {
        &self.adjacency
    }

    /// Number of edges targeting this node.
    pub fn incoming(&self) -> u128 {
        self.incoming
    }
}

/// Labeled directed graph over nodes `N` with edge labels `L`.
#[derive(Debug, Clone)]
pub struct LabeledGraph<N: Hash + Eq, L: Hash + Eq> {
    id: GraphId,
    nodes: MemoryStore<N, NodeEntry<N, L>>,
}

impl<N, L> LabeledGraph<N, L>
where
    N: Hash + Eq + Clone + Debug + Display,
    L: Hash + Eq + Clone + Debug,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        let graph = Self {
            id: GraphId::new(),
            nodes: MemoryStore::new(),
        };
        tracing::debug!(graph = %graph.id, "Created labeled graph");
        graph
    }

    /// Identity of this graph.
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Tear the graph down. Every node must have been removed first.
    #[allow(clippy::result_large_err)]
    pub fn destroy(self) -> Result<GraphId, (Self, GraphError)> {
        let remaining = self.nodes.len();
        if remaining > 0 {
            tracing::warn!(graph = %self.id, remaining, "Refusing to destroy non-empty graph");
            let err = GraphError::NotEmpty {
                graph: self.id.to_string(),
                remaining,
            };
            return Err((self, err));
        }
        tracing::debug!(graph = %self.id, "Destroyed labeled graph");
        Ok(self.id)
    }

    // =========================================================================
    // Nodes
    // =========================================================================

    /// Materialize `node` with no edges. Fails with `AlreadyExists` if present.
    pub fn add_node(&mut self, node: N) -> GraphResult<()> {
        if self.nodes.contains(&node) {
            return Err(GraphError::AlreadyExists {
                node: node.to_string(),
            });
        }
        tracing::debug!(graph = %self.id, node = %node, "Added node");
        self.nodes.insert(node, NodeEntry::new())?;
        Ok(())
    }

    /// Remove `node`.
    ///
    /// Fails with `NodeHasIncoming` while other edges point at it and with
    /// `NodeHasOutgoing` while it has edges of its own.
    pub fn remove_node(&mut self, node: &N) -> GraphResult<()> {
        let entry = self
            .nodes
            .lookup(node)
            .ok_or_else(|| GraphError::node_not_found(node))?;
        if entry.incoming > 0 {
            tracing::warn!(graph = %self.id, node = %node, incoming = %entry.incoming, "Node still has incoming edges");
            return Err(GraphError::NodeHasIncoming {
                node: node.to_string(),
                count: entry.incoming,
            });
        }
        if !entry.adjacency.is_empty() {
            tracing::warn!(graph = %self.id, node = %node, outgoing = entry.adjacency.len(), "Node still has outgoing edges");
            return Err(GraphError::NodeHasOutgoing {
                node: node.to_string(),
                count: entry.adjacency.len(),
            });
        }
        self.nodes.remove(node)?;
        tracing::debug!(graph = %self.id, node = %node, "Removed node");
        Ok(())
    }

    /// Whether `node` is materialized.
    pub fn node_exists(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Number of materialized nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges targeting `node`.
    pub fn incoming_count(&self, node: &N) -> GraphResult<u128> {
        Ok(self.entry(node)?.incoming)
    }

    /// Outgoing `(target, label)` tuples of `node`.
    pub fn adjacency_of(&self, node: &N) -> GraphResult<&AdjacencySet<(N, L)>> {
        Ok(&self.entry(node)?.adjacency)
    }

    /// Number of outgoing edges of `node`.
    pub fn out_degree(&self, node: &N) -> GraphResult<usize> {
        Ok(self.entry(node)?.adjacency.len())
    }

    // =========================================================================
    // Edges
    // =========================================================================

    /// Add the edge `src -> dst` labeled `label`, materializing either endpoint
    /// if needed.
    ///
    /// Returns false, and changes nothing, if the exact edge already exists.
    pub fn add_edge(&mut self, src: N, dst: N, label: L) -> GraphResult<bool> {
        let tuple = (dst.clone(), label);
        if self.edge_tuple_exists(&src, &tuple) {
            return Ok(false);
        }

        self.materialize(&src)?;
        self.materialize(&dst)?;
        self.nodes.get_mut(&src)?.adjacency.insert(tuple.clone());
        self.nodes.get_mut(&dst)?.incoming += 1;

        tracing::debug!(graph = %self.id, src = %src, dst = %dst, label = ?tuple.1, "Added edge");
        Ok(true)
    }

    /// Remove the edge `src -> dst` labeled `label`.
    ///
    /// Returns false, and changes nothing, if the edge does not exist.
    pub fn remove_edge(&mut self, src: &N, dst: &N, label: &L) -> GraphResult<bool> {
        let tuple = (dst.clone(), label.clone());
        if !self.edge_tuple_exists(src, &tuple) {
            return Ok(false);
        }
        // An existing edge implies a materialized target.
        if !self.nodes.contains(dst) {
            return Err(GraphError::node_not_found(dst));
        }

        self.nodes.get_mut(src)?.adjacency.remove(&tuple);
        self.nodes.get_mut(dst)?.incoming -= 1;

        tracing::debug!(graph = %self.id, src = %src, dst = %dst, label = ?label, "Removed edge");
        Ok(true)
    }

    /// Whether the edge `src -> dst` labeled `label` exists.
    pub fn edge_exists(&self, src: &N, dst: &N, label: &L) -> bool {
        self.edge_tuple_exists(src, &(dst.clone(), label.clone()))
    }

    fn edge_tuple_exists(&self, src: &N, tuple: &(N, L)) -> bool {
        self.nodes
            .lookup(src)
            .is_some_and(|entry| entry.adjacency.contains(tuple))
    }

    fn materialize(&mut self, node: &N) -> GraphResult<()> {
        if !self.nodes.contains(node) {
            self.nodes.insert(node.clone(), NodeEntry::new())?;
        }
        Ok(())
    }

    fn entry(&self, node: &N) -> GraphResult<&NodeEntry<N, L>> {
        self.nodes
            .lookup(node)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&N, &NodeEntry<N, L>)> + '_ {
        self.nodes.iter()
    }
}

impl<N, L> Default for LabeledGraph<N, L>
where
    N: Hash + Eq + Clone + Debug + Display,
    L: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
