//! Point-in-time exports of graph state.
//!
//! Snapshots are plain serde values with every collection sorted, so two
//! graphs holding the same data produce identical snapshots regardless of
//! hash iteration order.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use linkgraph_core::{AccountId, GraphId, Props};

use crate::labeled::LabeledGraph;
use crate::relationship::RelationshipGraph;

/// Export of a [`RelationshipGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipSnapshot<P> {
    /// Graph identity.
    pub graph_id: GraphId,
    /// Out-degree cap at creation.
    pub max_out_degree: Option<u64>,
    /// source -> sorted targets, sorted by source.
    pub relationships: Vec<(AccountId, Vec<AccountId>)>,
    /// Annotated accounts, sorted by account.
    pub account_props: Vec<(AccountId, P)>,
    /// Annotated relationships, sorted by (source, target).
    pub relationship_props: Vec<(AccountId, AccountId, P)>,
}

impl<P> RelationshipSnapshot<P> {
    /// Total number of relationships.
    pub fn relationship_count(&self) -> usize {
        self.relationships.iter().map(|(_, t)| t.len()).sum()
    }

    /// Flatten to `(source, target)` pairs.
    pub fn to_edge_list(&self) -> Vec<(AccountId, AccountId)> {
        self.relationships
            .iter()
            .flat_map(|(src, targets)| targets.iter().map(move |dst| (*src, *dst)))
            .collect()
    }
}

/// Export of a [`LabeledGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSnapshot<N, L> {
    /// Graph identity.
    pub graph_id: GraphId,
    /// Every materialized node with its incoming counter, sorted by node.
    pub nodes: Vec<(N, u128)>,
    /// Every edge as `(src, dst, label)`, sorted.
    pub edges: Vec<(N, N, L)>,
}

impl<N, L> LabeledSnapshot<N, L> {
    /// Number of materialized nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<P: Props> RelationshipGraph<P> {
    /// Export the current state.
    pub fn snapshot(&self) -> RelationshipSnapshot<P> {
        let mut relationships: Vec<(AccountId, Vec<AccountId>)> = self
            .relationship_entries()
            .map(|(src, targets)| (*src, targets.to_sorted_vec()))
            .collect();
        relationships.sort_by_key(|(src, _)| *src);

        let mut account_props: Vec<(AccountId, P)> = self
            .account_prop_entries()
            .map(|(acct, p)| (*acct, p.clone()))
            .collect();
        account_props.sort_by_key(|(acct, _)| *acct);

        let mut relationship_props: Vec<(AccountId, AccountId, P)> = self
            .relationship_prop_entries()
            .map(|((src, dst), p)| (*src, *dst, p.clone()))
            .collect();
        relationship_props.sort_by_key(|(src, dst, _)| (*src, *dst));

        RelationshipSnapshot {
            graph_id: self.id(),
            max_out_degree: self.max_out_degree(),
            relationships,
            account_props,
            relationship_props,
        }
    }
}

impl<N, L> LabeledGraph<N, L>
where
    N: Hash + Eq + Ord + Clone + Debug + Display,
    L: Hash + Eq + Ord + Clone + Debug,
{
    /// Export the current state.
    pub fn snapshot(&self) -> LabeledSnapshot<N, L> {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for (node, entry) in self.entries() {
            nodes.push((node.clone(), entry.incoming()));
            for (dst, label) in entry.adjacency().iter() {
                edges.push((node.clone(), dst.clone(), label.clone()));
            }
        }
        nodes.sort();
        edges.sort();
        LabeledSnapshot {
            graph_id: self.id(),
            nodes,
            edges,
        }
    }
}
