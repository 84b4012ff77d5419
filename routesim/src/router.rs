use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::concepts::table::{RouteEntry, RoutingTable, TableSet};
use crate::concepts::topology::{Cost, Topology};
use crate::feedback::InvalidStrategy;
use crate::framework::NodeIndex;
use crate::util::sum_costs;

/// Routing-table computation strategies.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Strategy {
    /// hand-configured direct routes, no cost computation
    Static,
    /// RIP-style routing, computed as centralized Bellman-Ford
    DistanceVector,
    /// OSPF-style routing, computed as centralized Dijkstra
    LinkState,
}

impl FromStr for Strategy {
    type Err = InvalidStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Strategy::Static),
            "distance-vector" | "rip" => Ok(Strategy::DistanceVector),
            "link-state" | "ospf" => Ok(Strategy::LinkState),
            other => Err(InvalidStrategy(other.to_string())),
        }
    }
}

/// Builds the full table set for a strategy. Always computes from scratch:
/// tables never carry over between strategy selections.
pub fn compute_tables(strategy: Strategy, topo: &Topology) -> TableSet {
    match strategy {
        Strategy::Static => static_tables(topo),
        Strategy::DistanceVector => distance_vector_tables(topo),
        Strategy::LinkState => link_state_tables(topo),
    }
}

/// Static routing: every destination is assumed to be directly reachable,
/// so each table maps it to itself as next hop. The cost matrix is ignored
/// on purpose; these model routes configured by hand, not computed ones,
/// and carry no metric.
pub fn static_tables(topo: &Topology) -> TableSet {
    let n = topo.len();
    debug!("building static tables for {n} devices");
    let mut tables = Vec::with_capacity(n);
    for source in 0..n {
        let mut table = RoutingTable::new(source);
        for dest in 0..n {
            if dest != source {
                table.routes.insert(
                    dest,
                    RouteEntry {
                        next_hop: Some(dest),
                        metric: None,
                    },
                );
            }
        }
        tables.push(table);
    }
    TableSet::new(tables)
}

/// Distance-vector routing: centralized Bellman-Ford per source device.
/// All ordered pairs are relaxed exactly N-1 times, in ascending index
/// order, which makes the output deterministic.
pub fn distance_vector_tables(topo: &Topology) -> TableSet {
    let n = topo.len();
    debug!("building distance-vector tables for {n} devices");
    let mut tables = Vec::with_capacity(n);
    for source in 0..n {
        let (dist, pred) = bellman_ford(topo, source);
        tables.push(table_from_predecessors(source, &dist, &pred));
    }
    TableSet::new(tables)
}

/// Link-state routing: Dijkstra per source device over the full topology.
/// Agrees with the distance-vector tables on every distance and on
/// reachability, since both are exact shortest-path computations.
pub fn link_state_tables(topo: &Topology) -> TableSet {
    let n = topo.len();
    debug!("building link-state tables for {n} devices");
    let mut tables = Vec::with_capacity(n);
    for source in 0..n {
        let (dist, pred) = dijkstra(topo, source);
        tables.push(table_from_predecessors(source, &dist, &pred));
    }
    TableSet::new(tables)
}

fn bellman_ford(
    topo: &Topology,
    source: NodeIndex,
) -> (Vec<Option<Cost>>, Vec<Option<NodeIndex>>) {
    let n = topo.len();
    let mut dist: Vec<Option<Cost>> = vec![None; n];
    let mut pred: Vec<Option<NodeIndex>> = vec![None; n];
    dist[source] = Some(0);
    pred[source] = Some(source);

    for _round in 1..n {
        for u in 0..n {
            for v in 0..n {
                if u == v {
                    continue;
                }
                if let Some(relaxed) = sum_costs(dist[u], topo.cost(u, v)) {
                    if dist[v].map_or(true, |d| relaxed < d) {
                        dist[v] = Some(relaxed);
                        pred[v] = Some(u);
                    }
                }
            }
        }
    }
    (dist, pred)
}

fn dijkstra(topo: &Topology, source: NodeIndex) -> (Vec<Option<Cost>>, Vec<Option<NodeIndex>>) {
    let n = topo.len();
    let mut dist: Vec<Option<Cost>> = vec![None; n];
    let mut pred: Vec<Option<NodeIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[source] = Some(0);
    pred[source] = Some(source);

    loop {
        // unvisited device with the smallest tentative distance, lowest id
        // on ties
        let mut next: Option<(NodeIndex, Cost)> = None;
        for u in 0..n {
            if visited[u] {
                continue;
            }
            if let Some(d) = dist[u] {
                if next.map_or(true, |(_, best)| d < best) {
                    next = Some((u, d));
                }
            }
        }
        let Some((u, du)) = next else { break };
        visited[u] = true;

        for v in 0..n {
            if visited[v] {
                continue;
            }
            if let Some(alt) = sum_costs(Some(du), topo.cost(u, v)) {
                if dist[v].map_or(true, |d| alt < d) {
                    dist[v] = Some(alt);
                    pred[v] = Some(u);
                }
            }
        }
    }
    (dist, pred)
}

fn table_from_predecessors(
    source: NodeIndex,
    dist: &[Option<Cost>],
    pred: &[Option<NodeIndex>],
) -> RoutingTable {
    let mut table = RoutingTable::new(source);
    for dest in 0..dist.len() {
        if dest == source {
            continue;
        }
        let next_hop = first_hop(pred, source, dest);
        let metric = if next_hop.is_some() { dist[dest] } else { None };
        table.routes.insert(dest, RouteEntry { next_hop, metric });
    }
    table
}

/// Walks a predecessor chain backward from `dest` to recover the first hop
/// out of `source`. Bellman-Ford and Dijkstra both record the predecessor
/// on the shortest path, not the hop out of the source, and the two differ
/// for any path longer than one edge. The walk ends at the source (the
/// node visited just before it is the hop), at a fixed point, or at an
/// unset predecessor; the latter two mean the destination is unreachable.
fn first_hop(pred: &[Option<NodeIndex>], source: NodeIndex, dest: NodeIndex) -> Option<NodeIndex> {
    let mut hop = dest;
    loop {
        match pred[hop] {
            None => return None,
            Some(p) if p == source => return Some(hop),
            Some(p) if p == hop => return None,
            Some(p) => hop = p,
        }
    }
}
