//! Beneficiary designations.
//!
//! A benefactor designating a beneficiary is stored as two labeled edges in a
//! [`LabeledGraph`]:
//!
//! ```text
//! benefactor  --TO-->   beneficiary
//! beneficiary --FROM--> benefactor
//! ```
//!
//! Both edges are added and removed together. TO-edges originating at a node
//! count its beneficiaries, FROM-edges originating at a node count its
//! benefactors; each count has its own cap.

use serde::{Deserialize, Serialize};

use linkgraph_core::{AccountId, BeneficiaryOptions, GraphError, GraphId, GraphResult};

use crate::labeled::LabeledGraph;

/// Edge label of a designation half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Benefactor -> beneficiary.
    To,
    /// Beneficiary -> benefactor.
    From,
}

/// Symmetric benefactor/beneficiary relationship with per-direction caps.
#[derive(Debug, Clone)]
pub struct BeneficiaryLink {
    options: BeneficiaryOptions,
    graph: LabeledGraph<AccountId, Direction>,
}

impl BeneficiaryLink {
    /// Create an empty link. Both caps must be at least 1.
    pub fn create(options: BeneficiaryOptions) -> GraphResult<Self> {
        options.validate()?;
        let graph = LabeledGraph::new();
        tracing::debug!(
            graph = %graph.id(),
            max_as_benefactor = options.max_as_benefactor,
            max_as_beneficiary = options.max_as_beneficiary,
            "Created beneficiary link"
        );
        Ok(Self { options, graph })
    }

    /// Identity of the underlying graph.
    pub fn id(&self) -> GraphId {
        self.graph.id()
    }

    /// Configured caps.
    pub fn options(&self) -> BeneficiaryOptions {
        self.options
    }

    /// Read-only view of the underlying labeled graph.
    pub fn graph(&self) -> &LabeledGraph<AccountId, Direction> {
        &self.graph
    }

    /// Tear the link down. Every designation must have been removed first.
    #[allow(clippy::result_large_err)]
    pub fn destroy(self) -> Result<GraphId, (Self, GraphError)> {
        let options = self.options;
        self.graph
            .destroy()
            .map_err(|(graph, err)| (Self { options, graph }, err))
    }

    /// Designate `beneficiary` as a beneficiary of `caller`.
    ///
    /// Fails with `BeneficiaryExceeded` if `caller` already has
    /// `max_as_benefactor` beneficiaries and with `BenefactorExceeded` if
    /// `beneficiary` already has `max_as_beneficiary` benefactors. Caps are
    /// checked before membership, so repeating a designation at a full cap
    /// fails as well; below the caps a repeat is a no-op. An account may
    /// designate itself, which stores a TO and a FROM self-loop.
    pub fn add(&mut self, caller: AccountId, beneficiary: AccountId) -> GraphResult<()> {
        let cap = self.options.max_as_benefactor;
        if self.count(&caller, Direction::To)? as u64 >= cap {
            tracing::warn!(graph = %self.id(), benefactor = %caller, cap, "Beneficiary cap reached");
            return Err(GraphError::BeneficiaryExceeded {
                benefactor: caller.to_string(),
                cap,
            });
        }

        let cap = self.options.max_as_beneficiary;
        if self.count(&beneficiary, Direction::From)? as u64 >= cap {
            tracing::warn!(graph = %self.id(), beneficiary = %beneficiary, cap, "Benefactor cap reached");
            return Err(GraphError::BenefactorExceeded {
                beneficiary: beneficiary.to_string(),
                cap,
            });
        }

        // Endpoints are auto-materialized, so neither insert can fail past this point.
        self.graph.add_edge(caller, beneficiary, Direction::To)?;
        self.graph.add_edge(beneficiary, caller, Direction::From)?;
        tracing::debug!(graph = %self.id(), benefactor = %caller, beneficiary = %beneficiary, "Added beneficiary");
        Ok(())
    }

    /// Remove the designation of `beneficiary` by `caller`.
    ///
    /// Both halves are removed unconditionally. Nodes left without any edges
    /// are dropped from the underlying graph. Returns true only if both halves
    /// existed.
    pub fn remove(&mut self, caller: AccountId, beneficiary: AccountId) -> GraphResult<bool> {
        let had_to = self
            .graph
            .remove_edge(&caller, &beneficiary, &Direction::To)?;
        let had_from = self
            .graph
            .remove_edge(&beneficiary, &caller, &Direction::From)?;
        if had_to != had_from {
            tracing::warn!(graph = %self.id(), benefactor = %caller, beneficiary = %beneficiary, "Designation was only half present");
        }

        self.prune(&caller)?;
        self.prune(&beneficiary)?;
        tracing::debug!(graph = %self.id(), benefactor = %caller, beneficiary = %beneficiary, existed = had_to && had_from, "Removed beneficiary");
        Ok(had_to && had_from)
    }

    /// Beneficiaries designated by `benefactor`, ascending.
    pub fn beneficiaries_of(&self, benefactor: &AccountId) -> Vec<AccountId> {
        self.neighbors(benefactor, Direction::To)
    }

    /// Benefactors designating `beneficiary`, ascending.
    pub fn benefactors_of(&self, beneficiary: &AccountId) -> Vec<AccountId> {
        self.neighbors(beneficiary, Direction::From)
    }

    /// Number of beneficiaries of `benefactor`.
    pub fn beneficiary_count(&self, benefactor: &AccountId) -> usize {
        self.count(benefactor, Direction::To).unwrap_or(0)
    }

    /// Number of benefactors of `beneficiary`.
    pub fn benefactor_count(&self, beneficiary: &AccountId) -> usize {
        self.count(beneficiary, Direction::From).unwrap_or(0)
    }

    /// Whether `benefactor` designates `beneficiary`.
    pub fn is_beneficiary(&self, benefactor: &AccountId, beneficiary: &AccountId) -> bool {
        self.graph
            .edge_exists(benefactor, beneficiary, &Direction::To)
    }

    /// Edges labeled `direction` originating at `node`. Zero for unknown nodes.
    fn count(&self, node: &AccountId, direction: Direction) -> GraphResult<usize> {
        if !self.graph.node_exists(node) {
            return Ok(0);
        }
        Ok(self
            .graph
            .adjacency_of(node)?
            .count_where(|(_, label)| *label == direction))
    }

    fn neighbors(&self, node: &AccountId, direction: Direction) -> Vec<AccountId> {
        let Ok(adjacency) = self.graph.adjacency_of(node) else {
            return Vec::new();
        };
        let mut out: Vec<AccountId> = adjacency
            .iter()
            .filter(|(_, label)| *label == direction)
            .map(|(account, _)| *account)
            .collect();
        out.sort();
        out
    }

    fn prune(&mut self, node: &AccountId) -> GraphResult<()> {
        if self.graph.node_exists(node)
            && self.graph.incoming_count(node)? == 0
            && self.graph.out_degree(node)? == 0
        {
            self.graph.remove_node(node)?;
        }
        Ok(())
    }
}
