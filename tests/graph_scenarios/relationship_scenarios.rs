//! Relationship graph scenarios.

use linkgraph::{GraphError, GraphOptions, RelationshipGraph};

use crate::test_utils::{addr, init_tracing, recorded_graph};

/// Struct payload with structural equality.
#[derive(Debug, Clone, PartialEq)]
struct Profile {
    name: String,
    weight: u32,
}

#[test]
fn cap_of_one_scenario() {
    let (_log, mut g) = recorded_graph::<()>(Some(1));
    let caller = addr("0x1");

    g.add_relationship(caller, addr("0x123")).unwrap();
    let err = g.add_relationship(caller, addr("0x456")).unwrap_err();
    assert!(matches!(err, GraphError::DegreeExceeded { cap: 1, .. }));

    g.remove_relationship(caller, addr("0x123")).unwrap();
    assert!(!g.has_relationship(&caller, &addr("0x123")));
    assert_eq!(g.source_count(), 0);
    assert!(g.snapshot().relationships.is_empty());
}

#[test]
fn cap_rejects_the_next_distinct_insert() {
    let (_log, mut g) = recorded_graph::<()>(Some(3));
    let caller = addr("0xa");
    for t in ["0x1", "0x2", "0x3"] {
        g.add_relationship(caller, addr(t)).unwrap();
    }
    assert!(matches!(
        g.add_relationship(caller, addr("0x4")),
        Err(GraphError::DegreeExceeded { .. })
    ));
    assert_eq!(g.out_degree(&caller), 3);
}

#[test]
fn unbounded_graph_accepts_a_thousand_targets() {
    init_tracing();
    let mut g = RelationshipGraph::<()>::create(GraphOptions::new()).unwrap();
    let caller = addr("0xbeef");
    for i in 0..1000u64 {
        g.add_relationship(caller, linkgraph::AccountId::from_u64(i + 1))
            .unwrap();
    }
    assert_eq!(g.out_degree(&caller), 1000);
    assert_eq!(g.max_out_degree(), None);
}

#[test]
fn add_then_remove_leaves_no_trace() {
    let (_log, mut g) = recorded_graph::<Profile>(None);
    let (a, b) = (addr("0xa"), addr("0xb"));

    g.add_relationship(a, b).unwrap();
    g.set_relationship_props(
        a,
        b,
        Profile {
            name: "friend".to_string(),
            weight: 3,
        },
    )
    .unwrap();

    let cascaded = g.remove_relationship(a, b).unwrap();
    assert_eq!(cascaded.map(|p| p.weight), Some(3));
    assert!(!g.has_relationship(&a, &b));
    assert!(g.get_relationship_props(&a, &b).is_none());

    // Nothing left, so the graph can be torn down.
    assert!(g.destroy().is_ok());
}

#[test]
fn account_props_roundtrip_and_overwrite() {
    let (_log, mut g) = recorded_graph::<Profile>(None);
    let me = addr("0x1");
    let p = Profile {
        name: "alice".to_string(),
        weight: 1,
    };
    let p2 = Profile {
        name: "alice".to_string(),
        weight: 2,
    };

    assert_eq!(g.set_account_props(me, p.clone()), None);
    assert_eq!(g.get_account_props(&me), Some(&p));
    assert_eq!(g.set_account_props(me, p2.clone()), Some(p));
    assert_eq!(g.unset_account_props(me), Some(p2));
    assert_eq!(g.unset_account_props(me), None);
}

#[test]
fn failed_operations_leave_state_unchanged() {
    let (_log, mut g) = recorded_graph::<u32>(Some(2));
    let a = addr("0xa");
    g.add_relationship(a, addr("0x1")).unwrap();
    g.add_relationship(a, addr("0x2")).unwrap();
    g.set_relationship_props(a, addr("0x1"), 9).unwrap();
    let before = g.snapshot();

    assert!(g.add_relationship(a, addr("0x3")).is_err());
    assert!(g.remove_relationship(a, addr("0x3")).is_err());
    assert!(g.remove_relationship(addr("0xb"), addr("0x1")).is_err());
    assert!(g.set_relationship_props(a, addr("0x3"), 1).is_err());

    assert_eq!(g.snapshot(), before);
}

#[test]
fn clear_then_destroy() {
    let (_log, mut g) = recorded_graph::<u32>(None);
    let a = addr("0xa");
    for (i, t) in ["0x1", "0x2"].iter().enumerate() {
        g.add_relationship(a, addr(t)).unwrap();
        g.set_relationship_props(a, addr(t), i as u32).unwrap();
    }

    let removed = g.clear_relationships(a);
    assert_eq!(removed.len(), 2);
    assert_eq!(removed[&addr("0x2")], Some(1));
    assert!(g.snapshot().relationship_props.is_empty());
    assert!(g.destroy().is_ok());
}

#[test]
fn options_from_toml() {
    init_tracing();
    let opts = GraphOptions::from_toml_str("max_out_degree = 2").unwrap();
    let mut g = RelationshipGraph::<()>::create(opts).unwrap();
    let a = addr("0xa");
    g.add_relationship(a, addr("0x1")).unwrap();
    g.add_relationship(a, addr("0x2")).unwrap();
    assert!(g.add_relationship(a, addr("0x3")).is_err());
}
