//! Change notifications.
//!
//! Every committed mutation produces one [`GraphEvent`] per changed key. Events
//! are handed to an [`EventSink`] after the mutation commits and are never
//! awaited; a failed operation emits nothing.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::types::{AccountId, GraphId, Props};

/// A structured change notification, labeled by operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GraphEvent<P> {
    /// A graph instance was created.
    GraphCreated {
        /// The new graph
        graph_id: GraphId,
    },
    /// A graph instance was torn down.
    GraphDestroyed {
        /// The destroyed graph
        graph_id: GraphId,
    },
    /// `source` declared a relationship to `target`.
    RelationshipAdded {
        /// Owning graph
        graph_id: GraphId,
        /// Relationship source
        source: AccountId,
        /// Relationship target
        target: AccountId,
    },
    /// The `source -> target` relationship was removed.
    RelationshipRemoved {
        /// Owning graph
        graph_id: GraphId,
        /// Relationship source
        source: AccountId,
        /// Relationship target
        target: AccountId,
    },
    /// Properties were attached to an account.
    AccountPropsSet {
        /// Owning graph
        graph_id: GraphId,
        /// Annotated account
        account: AccountId,
        /// The new payload
        props: P,
    },
    /// Properties were removed from an account.
    AccountPropsUnset {
        /// Owning graph
        graph_id: GraphId,
        /// Account that lost its annotation
        account: AccountId,
        /// The removed payload
        props: P,
    },
    /// Properties were attached to a relationship.
    RelationshipPropsSet {
        /// Owning graph
        graph_id: GraphId,
        /// Relationship source
        source: AccountId,
        /// Relationship target
        target: AccountId,
        /// The new payload
        props: P,
    },
    /// Properties were removed from a relationship.
    RelationshipPropsUnset {
        /// Owning graph
        graph_id: GraphId,
        /// Relationship source
        source: AccountId,
        /// Relationship target
        target: AccountId,
        /// The removed payload
        props: P,
    },
}

impl<P> GraphEvent<P> {
    /// Graph the event belongs to.
    pub fn graph_id(&self) -> GraphId {
        match self {
            GraphEvent::GraphCreated { graph_id }
            | GraphEvent::GraphDestroyed { graph_id }
            | GraphEvent::RelationshipAdded { graph_id, .. }
            | GraphEvent::RelationshipRemoved { graph_id, .. }
            | GraphEvent::AccountPropsSet { graph_id, .. }
            | GraphEvent::AccountPropsUnset { graph_id, .. }
            | GraphEvent::RelationshipPropsSet { graph_id, .. }
            | GraphEvent::RelationshipPropsUnset { graph_id, .. } => *graph_id,
        }
    }

    /// Operation label, e.g. `"RelationshipAdded"`.
    pub fn label(&self) -> &'static str {
        match self {
            GraphEvent::GraphCreated { .. } => "GraphCreated",
            GraphEvent::GraphDestroyed { .. } => "GraphDestroyed",
            GraphEvent::RelationshipAdded { .. } => "RelationshipAdded",
            GraphEvent::RelationshipRemoved { .. } => "RelationshipRemoved",
            GraphEvent::AccountPropsSet { .. } => "AccountPropsSet",
            GraphEvent::AccountPropsUnset { .. } => "AccountPropsUnset",
            GraphEvent::RelationshipPropsSet { .. } => "RelationshipPropsSet",
            GraphEvent::RelationshipPropsUnset { .. } => "RelationshipPropsUnset",
        }
    }
}

/// Receiver of change notifications.
///
/// Delivery is fire-and-forget: implementations must not fail and the graph
/// never waits on them.
pub trait EventSink<P>: Send + Sync {
    /// Accept one committed change.
    fn emit(&self, event: GraphEvent<P>);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<P> EventSink<P> for NullSink {
    fn emit(&self, _event: GraphEvent<P>) {}
}

/// Sink that forwards events to `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl<P: Props> EventSink<P> for TracingSink {
    fn emit(&self, event: GraphEvent<P>) {
        tracing::info!(
            graph = %event.graph_id(),
            kind = event.label(),
            event = ?event,
            "graph event"
        );
    }
}

/// Sink that records events in memory, in emission order.
#[derive(Debug)]
pub struct EventLog<P> {
    events: Mutex<Vec<GraphEvent<P>>>,
}

impl<P> EventLog<P> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Take every recorded event, leaving the log empty.
    pub fn drain(&self) -> Vec<GraphEvent<P>> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl<P: Clone> EventLog<P> {
    /// Copy of every recorded event.
    pub fn events(&self) -> Vec<GraphEvent<P>> {
        self.events.lock().clone()
    }
}

impl<P> Default for EventLog<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Send> EventSink<P> for EventLog<P> {
    fn emit(&self, event: GraphEvent<P>) {
        self.events.lock().push(event);
    }
}
