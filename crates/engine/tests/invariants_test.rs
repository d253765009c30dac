//! Property tests for structural invariants
//!
//! - Incoming counters always equal the number of live edges targeting a node
//! - No source ever exceeds the out-degree cap
//! - Relationship payloads never outlive their relationship
//! - Beneficiary edges always come in TO/FROM pairs

use std::collections::{HashMap, HashSet};

use linkgraph_core::{AccountId, BeneficiaryOptions, GraphError, GraphOptions};
use linkgraph_engine::{BeneficiaryLink, Direction, LabeledGraph, RelationshipGraph};
use proptest::prelude::*;

fn acct(n: u8) -> AccountId {
    AccountId::from_u64(n as u64)
}

#[derive(Debug, Clone)]
enum EdgeOp {
    Add(u8, u8, u8),
    Remove(u8, u8, u8),
}

fn edge_op() -> impl Strategy<Value = EdgeOp> {
    prop_oneof![
        (0u8..6, 0u8..6, 0u8..2).prop_map(|(s, d, l)| EdgeOp::Add(s, d, l)),
        (0u8..6, 0u8..6, 0u8..2).prop_map(|(s, d, l)| EdgeOp::Remove(s, d, l)),
    ]
}

#[derive(Debug, Clone)]
enum RelOp {
    Add(u8, u8),
    Remove(u8, u8),
    Clear(u8),
    SetProps(u8, u8, u16),
}

fn rel_op() -> impl Strategy<Value = RelOp> {
    prop_oneof![
        4 => (0u8..5, 0u8..8).prop_map(|(s, t)| RelOp::Add(s, t)),
        2 => (0u8..5, 0u8..8).prop_map(|(s, t)| RelOp::Remove(s, t)),
        1 => (0u8..5).prop_map(RelOp::Clear),
        2 => (0u8..5, 0u8..8, any::<u16>()).prop_map(|(s, t, p)| RelOp::SetProps(s, t, p)),
    ]
}

proptest! {
    #[test]
    fn incoming_count_matches_live_edges(ops in prop::collection::vec(edge_op(), 0..120)) {
        let mut g: LabeledGraph<u8, u8> = LabeledGraph::new();
        let mut live: HashSet<(u8, u8, u8)> = HashSet::new();

        for op in ops {
            match op {
                EdgeOp::Add(s, d, l) => {
                    let inserted = g.add_edge(s, d, l).unwrap();
                    prop_assert_eq!(inserted, live.insert((s, d, l)));
                }
                EdgeOp::Remove(s, d, l) => {
                    let removed = g.remove_edge(&s, &d, &l).unwrap();
                    prop_assert_eq!(removed, live.remove(&(s, d, l)));
                }
            }

            for node in 0u8..6 {
                let expected = live.iter().filter(|(_, d, _)| *d == node).count() as u128;
                if g.node_exists(&node) {
                    prop_assert_eq!(g.incoming_count(&node).unwrap(), expected);
                } else {
                    prop_assert_eq!(expected, 0);
                }
            }
        }
    }

    #[test]
    fn remove_node_precondition_is_exact(ops in prop::collection::vec(edge_op(), 0..60)) {
        let mut g: LabeledGraph<u8, u8> = LabeledGraph::new();
        for op in ops {
            if let EdgeOp::Add(s, d, l) = op {
                g.add_edge(s, d, l).unwrap();
            }
        }

        for node in 0u8..6 {
            if !g.node_exists(&node) {
                continue;
            }
            let incoming = g.incoming_count(&node).unwrap();
            let outgoing = g.out_degree(&node).unwrap();
            let before = g.snapshot();
            match g.remove_node(&node) {
                Ok(()) => prop_assert!(incoming == 0 && outgoing == 0),
                Err(GraphError::NodeHasIncoming { .. }) => {
                    prop_assert!(incoming > 0);
                    prop_assert_eq!(g.snapshot(), before);
                }
                Err(GraphError::NodeHasOutgoing { .. }) => {
                    prop_assert!(incoming == 0 && outgoing > 0);
                    prop_assert_eq!(g.snapshot(), before);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }

    #[test]
    fn out_degree_never_exceeds_cap(cap in 1u64..4, ops in prop::collection::vec(rel_op(), 0..150)) {
        let mut g = RelationshipGraph::<u16>::create(GraphOptions::new().max_out_degree(cap)).unwrap();

        for op in ops {
            let before = g.snapshot();
            let failed = match op {
                RelOp::Add(s, t) => {
                    let full = g.out_degree(&acct(s)) as u64 >= cap;
                    let present = g.has_relationship(&acct(s), &acct(t));
                    let res = g.add_relationship(acct(s), acct(t));
                    if full && !present {
                        prop_assert!(
                            matches!(res, Err(GraphError::DegreeExceeded { .. })),
                            "expected DegreeExceeded"
                        );
                    } else {
                        prop_assert!(res.is_ok());
                    }
                    res.is_err()
                }
                RelOp::Remove(s, t) => g.remove_relationship(acct(s), acct(t)).is_err(),
                RelOp::Clear(s) => {
                    g.clear_relationships(acct(s));
                    false
                }
                RelOp::SetProps(s, t, p) => g.set_relationship_props(acct(s), acct(t), p).is_err(),
            };
            if failed {
                prop_assert_eq!(g.snapshot(), before);
            }

            let snap = g.snapshot();
            for (_, targets) in &snap.relationships {
                prop_assert!(!targets.is_empty());
                prop_assert!(targets.len() as u64 <= cap);
            }
            for (s, t, _) in &snap.relationship_props {
                prop_assert!(g.has_relationship(s, t));
            }
        }
    }

    #[test]
    fn beneficiary_edges_stay_paired(
        ops in prop::collection::vec((any::<bool>(), 0u8..6, 0u8..6), 0..100)
    ) {
        let mut link = BeneficiaryLink::create(BeneficiaryOptions::new(2, 3)).unwrap();

        for (add, a, b) in ops {
            if add {
                let _ = link.add(acct(a), acct(b));
            } else {
                link.remove(acct(a), acct(b)).unwrap();
            }

            let snap = link.graph().snapshot();
            let edges: HashSet<_> = snap.edges.iter().cloned().collect();
            let mut to_counts: HashMap<AccountId, u64> = HashMap::new();
            let mut from_counts: HashMap<AccountId, u64> = HashMap::new();
            for (src, dst, label) in &snap.edges {
                let mirror = match label {
                    Direction::To => (*dst, *src, Direction::From),
                    Direction::From => (*dst, *src, Direction::To),
                };
                prop_assert!(edges.contains(&mirror));
                match label {
                    Direction::To => *to_counts.entry(*src).or_default() += 1,
                    Direction::From => *from_counts.entry(*src).or_default() += 1,
                }
            }
            prop_assert!(to_counts.values().all(|c| *c <= 2));
            prop_assert!(from_counts.values().all(|c| *c <= 3));
        }
    }
}
