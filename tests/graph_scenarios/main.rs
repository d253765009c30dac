//! Graph Scenario Test Suite
//!
//! Black-box scenarios run against the public `linkgraph` facade only.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test graph_scenarios
//! ```

mod test_utils;

mod beneficiary_scenarios;
mod event_scenarios;
mod relationship_scenarios;
