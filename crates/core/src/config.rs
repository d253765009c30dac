//! Structural configuration for graph instances.
//!
//! Options are fixed at creation. Use the builder methods or load them from TOML:
//!
//! ```ignore
//! use linkgraph_core::GraphOptions;
//!
//! let opts = GraphOptions::new().max_out_degree(8);
//! let same = GraphOptions::from_toml_str("max_out_degree = 8")?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Options for a relationship graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphOptions {
    /// Maximum number of distinct targets per source. `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_out_degree: Option<u64>,
}

impl GraphOptions {
    /// Unbounded options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the out-degree of every source.
    pub fn max_out_degree(mut self, cap: u64) -> Self {
        self.max_out_degree = Some(cap);
        self
    }

    /// Reject a zero cap.
    pub fn validate(&self) -> GraphResult<()> {
        if self.max_out_degree == Some(0) {
            return Err(GraphError::InvalidDegree {
                field: "max_out_degree",
            });
        }
        Ok(())
    }

    /// Parse and validate options from a TOML document.
    pub fn from_toml_str(s: &str) -> GraphResult<Self> {
        let opts: Self = toml::from_str(s).map_err(|e| GraphError::InvalidConfig {
            reason: e.to_string(),
        })?;
        opts.validate()?;
        Ok(opts)
    }
}

/// Options for a beneficiary link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeneficiaryOptions {
    /// How many beneficiaries one benefactor may designate.
    pub max_as_benefactor: u64,
    /// How many benefactors may designate one beneficiary.
    pub max_as_beneficiary: u64,
}

impl BeneficiaryOptions {
    /// Options with both caps set.
    pub fn new(max_as_benefactor: u64, max_as_beneficiary: u64) -> Self {
        Self {
            max_as_benefactor,
            max_as_beneficiary,
        }
    }

    /// Reject zero caps.
    pub fn validate(&self) -> GraphResult<()> {
        if self.max_as_benefactor == 0 {
            return Err(GraphError::InvalidDegree {
                field: "max_as_benefactor",
            });
        }
        if self.max_as_beneficiary == 0 {
            return Err(GraphError::InvalidDegree {
                field: "max_as_beneficiary",
            });
        }
        Ok(())
    }

    /// Parse and validate options from a TOML document.
    pub fn from_toml_str(s: &str) -> GraphResult<Self> {
        let opts: Self = toml::from_str(s).map_err(|e| GraphError::InvalidConfig {
            reason: e.to_string(),
        })?;
        opts.validate()?;
        Ok(opts)
    }
}
