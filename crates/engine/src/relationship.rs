//! Account relationship graph.
//!
//! Each account declares outgoing relationships to other accounts and may
//! annotate itself and its relationships with a payload of type `P`.
//!
//! # Storage
//!
//! - `relationships`: source -> [`AdjacencySet`] of targets. Sparse: a source
//!   with no targets has no entry at all.
//! - `account_props`: account -> payload
//! - `relationship_props`: (source, target) -> payload. An entry exists only
//!   while the relationship does; removing a relationship cascades.
//!
//! # Semantics
//!
//! | Operation | Missing entry |
//! |-----------|---------------|
//! | `add_relationship` | creates the source entry |
//! | `remove_relationship` | `NotFound` / `RelationshipNotExist` |
//! | `clear_relationships` | empty result |
//! | `unset_account_props` | `None` |
//! | `set_relationship_props` | `RelationshipNotExist` |
//! | `unset_relationship_props` | `None` |

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use linkgraph_core::{
    AccountId, EventSink, GraphError, GraphEvent, GraphId, GraphOptions, GraphResult, Props,
    TracingSink,
};
use linkgraph_storage::{KeyedStore, MemoryStore};

use crate::adjacency::AdjacencySet;
use crate::property::KeyedPropertyStore;

/// Directed relationship graph between accounts.
pub struct RelationshipGraph<P: Props> {
    id: GraphId,
    max_out_degree: Option<u64>,
    relationships: MemoryStore<AccountId, AdjacencySet<AccountId>>,
    account_props: KeyedPropertyStore<AccountId, P>,
    relationship_props: KeyedPropertyStore<(AccountId, AccountId), P>,
    sink: Arc<dyn EventSink<P>>,
}

impl<P: Props> RelationshipGraph<P> {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Create a graph whose notifications go to `tracing`.
    ///
    /// Fails with `InvalidDegree` if `options.max_out_degree` is `Some(0)`.
    pub fn create(options: GraphOptions) -> GraphResult<Self> {
        Self::create_with_sink(options, Arc::new(TracingSink))
    }

    /// Create a graph that reports changes to `sink`.
    pub fn create_with_sink(
        options: GraphOptions,
        sink: Arc<dyn EventSink<P>>,
    ) -> GraphResult<Self> {
        options.validate()?;
        let graph = Self {
            id: GraphId::new(),
            max_out_degree: options.max_out_degree,
            relationships: MemoryStore::new(),
            account_props: KeyedPropertyStore::new(),
            relationship_props: KeyedPropertyStore::new(),
            sink,
        };
        tracing::debug!(graph = %graph.id, max_out_degree = ?graph.max_out_degree, "Created relationship graph");
        graph.sink.emit(GraphEvent::GraphCreated { graph_id: graph.id });
        Ok(graph)
    }

    /// Tear the graph down.
    ///
    /// Every map must already be empty. On failure the graph is handed back
    /// untouched together with a `NotEmpty` error.
    #[allow(clippy::result_large_err)]
    pub fn destroy(self) -> Result<GraphId, (Self, GraphError)> {
        let remaining =
            self.relationships.len() + self.account_props.len() + self.relationship_props.len();
        if remaining > 0 {
            tracing::warn!(graph = %self.id, remaining, "Refusing to destroy non-empty graph");
            let err = GraphError::NotEmpty {
                graph: self.id.to_string(),
                remaining,
            };
            return Err((self, err));
        }
        tracing::debug!(graph = %self.id, "Destroyed relationship graph");
        self.sink.emit(GraphEvent::GraphDestroyed { graph_id: self.id });
        Ok(self.id)
    }

    /// Identity of this graph.
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Configured out-degree cap, if any.
    pub fn max_out_degree(&self) -> Option<u64> {
        self.max_out_degree
    }

    // =========================================================================
    // Relationships
    // =========================================================================

    /// Declare a relationship from `caller` to `target`.
    ///
    /// Re-adding an existing target is a silent no-op, even when `caller` is
    /// at the cap. Otherwise fails with `DegreeExceeded` once `caller` holds
    /// `max_out_degree` targets.
    pub fn add_relationship(&mut self, caller: AccountId, target: AccountId) -> GraphResult<()> {
        let current = self
            .relationships
            .lookup(&caller)
            .map(|targets| (targets.contains(&target), targets.len()));

        match current {
            None => {
                self.relationships
                    .insert(caller, AdjacencySet::singleton(target))?;
            }
            Some((true, _)) => {
                tracing::debug!(graph = %self.id, source = %caller, target = %target, "Relationship already present");
                return Ok(());
            }
            Some((false, len)) => {
                if let Some(cap) = self.max_out_degree {
                    if len as u64 >= cap {
                        tracing::warn!(graph = %self.id, source = %caller, target = %target, cap, "Out-degree cap reached");
                        return Err(GraphError::DegreeExceeded {
                            account: caller.to_string(),
                            cap,
                        });
                    }
                }
                self.relationships.get_mut(&caller)?.insert(target);
            }
        }

        tracing::debug!(graph = %self.id, source = %caller, target = %target, "Added relationship");
        self.sink.emit(GraphEvent::RelationshipAdded {
            graph_id: self.id,
            source: caller,
            target,
        });
        Ok(())
    }

    /// Remove the relationship from `caller` to `target`.
    ///
    /// Fails with `NotFound` if `caller` has no relationships and with
    /// `RelationshipNotExist` if `target` is not among them. Any relationship
    /// payload is unset as well and returned.
    pub fn remove_relationship(
        &mut self,
        caller: AccountId,
        target: AccountId,
    ) -> GraphResult<Option<P>> {
        let targets = self
            .relationships
            .lookup(&caller)
            .ok_or_else(|| GraphError::not_found("relationships", caller))?;
        if !targets.contains(&target) {
            return Err(GraphError::relationship_not_exist(caller, target));
        }

        let now_empty = {
            let targets = self.relationships.get_mut(&caller)?;
            targets.remove(&target);
            targets.is_empty()
        };
        if now_empty {
            self.relationships.remove(&caller)?;
        }

        tracing::debug!(graph = %self.id, source = %caller, target = %target, "Removed relationship");
        self.sink.emit(GraphEvent::RelationshipRemoved {
            graph_id: self.id,
            source: caller,
            target,
        });
        Ok(self.cascade_relationship_props(caller, target))
    }

    /// Remove every relationship of `caller` in one step.
    ///
    /// Returns the cascaded relationship payload for each removed target.
    /// Empty if `caller` had no relationships.
    pub fn clear_relationships(&mut self, caller: AccountId) -> HashMap<AccountId, Option<P>> {
        let Some(targets) = self.relationships.take(&caller) else {
            return HashMap::new();
        };

        let mut removed = HashMap::with_capacity(targets.len());
        for target in targets.into_targets() {
            self.sink.emit(GraphEvent::RelationshipRemoved {
                graph_id: self.id,
                source: caller,
                target,
            });
            let previous = self.cascade_relationship_props(caller, target);
            removed.insert(target, previous);
        }
        tracing::debug!(graph = %self.id, source = %caller, count = removed.len(), "Cleared relationships");
        removed
    }

    /// Whether `source -> target` exists.
    pub fn has_relationship(&self, source: &AccountId, target: &AccountId) -> bool {
        self.relationships
            .lookup(source)
            .is_some_and(|targets| targets.contains(target))
    }

    /// Targets of `source`, in ascending order.
    pub fn relationships_of(&self, source: &AccountId) -> Vec<AccountId> {
        self.relationships
            .lookup(source)
            .map(AdjacencySet::to_sorted_vec)
            .unwrap_or_default()
    }

    /// Number of targets of `source`.
    pub fn out_degree(&self, source: &AccountId) -> usize {
        self.relationships.lookup(source).map_or(0, AdjacencySet::len)
    }

    /// Number of accounts with at least one relationship.
    pub fn source_count(&self) -> usize {
        self.relationships.len()
    }

    // =========================================================================
    // Account properties
    // =========================================================================

    /// Attach `props` to `caller`, returning the previous payload.
    pub fn set_account_props(&mut self, caller: AccountId, props: P) -> Option<P> {
        let previous = self.account_props.set(caller, props.clone());
        tracing::debug!(graph = %self.id, account = %caller, replaced = previous.is_some(), "Set account props");
        self.sink.emit(GraphEvent::AccountPropsSet {
            graph_id: self.id,
            account: caller,
            props,
        });
        previous
    }

    /// Remove the payload of `caller`. Returns `None` if there was none.
    pub fn unset_account_props(&mut self, caller: AccountId) -> Option<P> {
        let previous = self.account_props.unset(&caller)?;
        tracing::debug!(graph = %self.id, account = %caller, "Unset account props");
        self.sink.emit(GraphEvent::AccountPropsUnset {
            graph_id: self.id,
            account: caller,
            props: previous.clone(),
        });
        Some(previous)
    }

    /// Payload attached to `account`.
    pub fn get_account_props(&self, account: &AccountId) -> Option<&P> {
        self.account_props.get(account)
    }

    // =========================================================================
    // Relationship properties
    // =========================================================================

    /// Attach `props` to the relationship `caller -> target`.
    ///
    /// Fails with `RelationshipNotExist` unless the relationship exists.
    pub fn set_relationship_props(
        &mut self,
        caller: AccountId,
        target: AccountId,
        props: P,
    ) -> GraphResult<Option<P>> {
        if !self.has_relationship(&caller, &target) {
            return Err(GraphError::relationship_not_exist(caller, target));
        }
        let previous = self.relationship_props.set((caller, target), props.clone());
        tracing::debug!(graph = %self.id, source = %caller, target = %target, replaced = previous.is_some(), "Set relationship props");
        self.sink.emit(GraphEvent::RelationshipPropsSet {
            graph_id: self.id,
            source: caller,
            target,
            props,
        });
        Ok(previous)
    }

    /// Remove the payload of `caller -> target`. Returns `None` if there was none.
    pub fn unset_relationship_props(
        &mut self,
        caller: AccountId,
        target: AccountId,
    ) -> Option<P> {
        self.cascade_relationship_props(caller, target)
    }

    /// Payload attached to `source -> target`.
    pub fn get_relationship_props(
        &self,
        source: &AccountId,
        target: &AccountId,
    ) -> Option<&P> {
        self.relationship_props.get(&(*source, *target))
    }

    fn cascade_relationship_props(&mut self, source: AccountId, target: AccountId) -> Option<P> {
        let previous = self.relationship_props.unset(&(source, target))?;
        self.sink.emit(GraphEvent::RelationshipPropsUnset {
            graph_id: self.id,
            source,
            target,
            props: previous.clone(),
        });
        Some(previous)
    }

    // Crate-internal accessors for snapshots.

    pub(crate) fn relationship_entries(
        &self,
    ) -> impl Iterator<Item = (&AccountId, &AdjacencySet<AccountId>)> + '_ {
        self.relationships.iter()
    }

    pub(crate) fn account_prop_entries(&self) -> impl Iterator<Item = (&AccountId, &P)> + '_ {
        self.account_props.iter()
    }

    pub(crate) fn relationship_prop_entries(
        &self,
    ) -> impl Iterator<Item = (&(AccountId, AccountId), &P)> + '_ {
        self.relationship_props.iter()
    }
}

impl<P: Props> fmt::Debug for RelationshipGraph<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationshipGraph")
            .field("id", &self.id)
            .field("max_out_degree", &self.max_out_degree)
            .field("sources", &self.relationships.len())
            .field("account_props", &self.account_props.len())
            .field("relationship_props", &self.relationship_props.len())
            .finish_non_exhaustive()
    }
}
