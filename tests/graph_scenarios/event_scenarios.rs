//! Change notification scenarios.

use linkgraph::GraphEvent;

use crate::test_utils::{addr, recorded_graph};

#[test]
fn full_lifecycle_event_stream() {
    let (log, mut g) = recorded_graph::<String>(None);
    let (a, b) = (addr("0xa"), addr("0xb"));
    let id = g.id();

    g.add_relationship(a, b).unwrap();
    g.set_account_props(a, "me".to_string());
    g.set_relationship_props(a, b, "edge".to_string()).unwrap();
    g.remove_relationship(a, b).unwrap();
    g.unset_account_props(a);
    g.destroy().unwrap();

    assert_eq!(
        log.events(),
        vec![
            GraphEvent::GraphCreated { graph_id: id },
            GraphEvent::RelationshipAdded {
                graph_id: id,
                source: a,
                target: b
            },
            GraphEvent::AccountPropsSet {
                graph_id: id,
                account: a,
                props: "me".to_string()
            },
            GraphEvent::RelationshipPropsSet {
                graph_id: id,
                source: a,
                target: b,
                props: "edge".to_string()
            },
            GraphEvent::RelationshipRemoved {
                graph_id: id,
                source: a,
                target: b
            },
            GraphEvent::RelationshipPropsUnset {
                graph_id: id,
                source: a,
                target: b,
                props: "edge".to_string()
            },
            GraphEvent::AccountPropsUnset {
                graph_id: id,
                account: a,
                props: "me".to_string()
            },
            GraphEvent::GraphDestroyed { graph_id: id },
        ]
    );
}

#[test]
fn failures_and_noops_emit_nothing() {
    let (log, mut g) = recorded_graph::<u8>(Some(1));
    let a = addr("0xa");
    g.add_relationship(a, addr("0x1")).unwrap();
    log.drain();

    let _ = g.add_relationship(a, addr("0x2"));
    g.add_relationship(a, addr("0x1")).unwrap();
    let _ = g.remove_relationship(addr("0xb"), a);
    g.unset_account_props(a);
    g.unset_relationship_props(a, addr("0x1"));

    assert!(log.is_empty());
}
