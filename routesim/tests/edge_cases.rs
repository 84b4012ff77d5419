mod common;

use routesim::concepts::table::{RouteEntry, RoutingTable, TableSet};
use routesim::concepts::topology::Topology;
use routesim::feedback::TopologyError;
use routesim::path::resolve_path;
use routesim::router::{distance_vector_tables, link_state_tables};

#[test]
fn isolated_device_has_no_route() {
    let net = common::graphs::vnet_with_isolated();
    for tables in [
        distance_vector_tables(&net.topology),
        link_state_tables(&net.topology),
    ] {
        for s in 0..3 {
            assert_eq!(tables.table(s).unwrap().next_hop(3), None);
            assert_eq!(tables.table(s).unwrap().metric(3), None);
        }
        assert_eq!(tables.table(3).unwrap().next_hop(0), None);
        assert_eq!(resolve_path(&tables, 0, 3), None);
        assert_eq!(resolve_path(&tables, 3, 0), None);
    }
}

#[test]
fn self_loop_next_hop_is_no_route() {
    // malformed by hand: device 0 claims itself as the hop toward 1
    let mut table = RoutingTable::new(0);
    table.routes.insert(
        1,
        RouteEntry {
            next_hop: Some(0),
            metric: Some(1),
        },
    );
    let tables = TableSet::new(vec![table, RoutingTable::new(1)]);
    assert_eq!(resolve_path(&tables, 0, 1), None);
}

#[test]
fn cyclic_table_hits_length_bound() {
    // devices 0 and 1 forward to each other forever
    let mut t0 = RoutingTable::new(0);
    t0.routes.insert(
        2,
        RouteEntry {
            next_hop: Some(1),
            metric: None,
        },
    );
    let mut t1 = RoutingTable::new(1);
    t1.routes.insert(
        2,
        RouteEntry {
            next_hop: Some(0),
            metric: None,
        },
    );
    let tables = TableSet::new(vec![t0, t1, RoutingTable::new(2)]);
    assert_eq!(resolve_path(&tables, 0, 2), None);
}

#[test]
fn missing_table_is_no_route() {
    let tables = TableSet::new(vec![]);
    assert_eq!(resolve_path(&tables, 0, 1), None);
}

#[test]
fn trivial_path_to_self() {
    let net = common::graphs::vnet_triangle();
    let tables = link_state_tables(&net.topology);
    assert_eq!(resolve_path(&tables, 1, 1), Some(vec![1]));
}

#[test]
fn topology_rejects_bad_matrices() {
    let asymmetric = vec![
        vec![Some(0), Some(1)],
        vec![Some(2), Some(0)],
    ];
    assert_eq!(
        Topology::from_matrix(asymmetric),
        Err(TopologyError::Asymmetric { i: 0, j: 1 })
    );

    let ragged = vec![vec![Some(0), Some(1)], vec![Some(1)]];
    assert!(matches!(
        Topology::from_matrix(ragged),
        Err(TopologyError::NotSquare { row: 1, .. })
    ));

    let diagonal = vec![vec![Some(3)]];
    assert_eq!(
        Topology::from_matrix(diagonal),
        Err(TopologyError::NonZeroDiagonal { index: 0 })
    );

    assert_eq!(
        Topology::from_edges(2, &[(0, 5, 1)]),
        Err(TopologyError::EdgeOutOfRange { a: 0, b: 5 })
    );
}
