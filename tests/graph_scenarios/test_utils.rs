//! Shared fixtures for scenario tests.

use std::sync::Arc;

use linkgraph::{AccountId, EventLog, GraphOptions, RelationshipGraph};

/// Install a test-writer subscriber once so `RUST_LOG`-style output shows up
/// under `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Parse a short hex address such as `"0x123"`.
pub fn addr(s: &str) -> AccountId {
    s.parse().unwrap()
}

/// A graph with the given cap and an attached event log.
pub fn recorded_graph<P: linkgraph::Props>(
    cap: Option<u64>,
) -> (Arc<EventLog<P>>, RelationshipGraph<P>) {
    init_tracing();
    let log = Arc::new(EventLog::new());
    let opts = GraphOptions {
        max_out_degree: cap,
    };
    let graph = RelationshipGraph::<P>::create_with_sink(opts, log.clone()).unwrap();
    (log, graph)
}
