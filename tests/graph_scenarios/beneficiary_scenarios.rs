//! Beneficiary link scenarios.

use linkgraph::{BeneficiaryLink, BeneficiaryOptions, Direction, GraphError};

use crate::test_utils::{addr, init_tracing};

fn link(max_as_benefactor: u64, max_as_beneficiary: u64) -> BeneficiaryLink {
    init_tracing();
    BeneficiaryLink::create(BeneficiaryOptions::new(max_as_benefactor, max_as_beneficiary)).unwrap()
}

#[test]
fn add_then_remove_pair() {
    let mut l = link(3, 3);
    let (benefactor, beneficiary) = (addr("0xa"), addr("0xb"));

    l.add(benefactor, beneficiary).unwrap();
    let g = l.graph();
    let to_edges = g
        .adjacency_of(&benefactor)
        .unwrap()
        .count_where(|(_, label)| *label == Direction::To);
    let from_edges = g
        .adjacency_of(&beneficiary)
        .unwrap()
        .count_where(|(_, label)| *label == Direction::From);
    assert_eq!(to_edges, 1);
    assert_eq!(from_edges, 1);
    assert_eq!(g.snapshot().edge_count(), 2);

    assert!(l.remove(benefactor, beneficiary).unwrap());
    assert_eq!(l.graph().snapshot().edge_count(), 0);
    assert!(!l.is_beneficiary(&benefactor, &beneficiary));
    assert!(l.destroy().is_ok());
}

#[test]
fn each_direction_has_its_own_cap() {
    let mut l = link(2, 1);
    let owner = addr("0x1");

    l.add(owner, addr("0x10")).unwrap();
    l.add(owner, addr("0x11")).unwrap();
    assert!(matches!(
        l.add(owner, addr("0x12")),
        Err(GraphError::BeneficiaryExceeded { cap: 2, .. })
    ));

    // 0x10 already has its single benefactor.
    assert!(matches!(
        l.add(addr("0x2"), addr("0x10")),
        Err(GraphError::BenefactorExceeded { cap: 1, .. })
    ));

    assert_eq!(l.beneficiaries_of(&owner), vec![addr("0x10"), addr("0x11")]);
    assert_eq!(l.benefactors_of(&addr("0x10")), vec![owner]);
    assert_eq!(l.beneficiary_count(&addr("0x2")), 0);
}

#[test]
fn rejected_add_leaves_graph_untouched() {
    let mut l = link(1, 1);
    l.add(addr("0x1"), addr("0x2")).unwrap();
    let before = l.graph().snapshot();

    assert!(l.add(addr("0x1"), addr("0x3")).is_err());
    assert!(l.add(addr("0x4"), addr("0x2")).is_err());
    // Repeating a designation at a full cap is still rejected.
    assert!(l.add(addr("0x1"), addr("0x2")).is_err());

    assert_eq!(l.graph().snapshot(), before);
}

#[test]
fn self_designation_counts_against_both_caps() {
    let mut l = link(1, 1);
    let me = addr("0x5");

    l.add(me, me).unwrap();
    assert!(l.is_beneficiary(&me, &me));
    assert_eq!(l.beneficiary_count(&me), 1);
    assert_eq!(l.benefactor_count(&me), 1);
    assert!(matches!(
        l.add(me, addr("0x6")),
        Err(GraphError::BeneficiaryExceeded { cap: 1, .. })
    ));

    assert!(l.remove(me, me).unwrap());
    assert!(l.destroy().is_ok());
}

#[test]
fn options_from_toml() {
    init_tracing();
    let opts = BeneficiaryOptions::from_toml_str("max_as_benefactor = 1\nmax_as_beneficiary = 4")
        .unwrap();
    let l = BeneficiaryLink::create(opts).unwrap();
    assert_eq!(l.options().max_as_beneficiary, 4);
}
