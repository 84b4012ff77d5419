use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::concepts::topology::Cost;
use crate::framework::NodeIndex;

/// One row of a device's routing table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RouteEntry {
    /// the neighbour to forward through, `None` is the explicit
    /// "no route" marker
    pub next_hop: Option<NodeIndex>,
    /// total path cost under the strategy that computed the table; `None`
    /// for unreachable destinations and for static routes, which carry no
    /// computed cost
    pub metric: Option<Cost>,
}

/// Routing table of a single source device: destination -> route entry.
/// Every destination other than the source has an entry, so an absent key
/// only ever means "outside the topology".
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RoutingTable {
    pub source: NodeIndex,
    pub routes: BTreeMap<NodeIndex, RouteEntry>,
}

impl RoutingTable {
    pub fn new(source: NodeIndex) -> Self {
        Self {
            source,
            routes: BTreeMap::new(),
        }
    }

    pub fn entry(&self, dest: NodeIndex) -> Option<&RouteEntry> {
        self.routes.get(&dest)
    }

    /// Next hop toward a destination, `None` when there is no route.
    pub fn next_hop(&self, dest: NodeIndex) -> Option<NodeIndex> {
        self.routes.get(&dest).and_then(|e| e.next_hop)
    }

    /// Computed cost toward a destination, when the strategy produced one.
    pub fn metric(&self, dest: NodeIndex) -> Option<Cost> {
        self.routes.get(&dest).and_then(|e| e.metric)
    }
}

/// One routing table per source device, produced wholesale by a single
/// engine call. A strategy switch builds a fresh set; nothing merges across
/// strategies, and no ambient copy is kept anywhere.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TableSet {
    tables: Vec<RoutingTable>,
}

impl TableSet {
    pub fn new(tables: Vec<RoutingTable>) -> Self {
        Self { tables }
    }

    /// Number of devices covered by the set.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table(&self, source: NodeIndex) -> Option<&RoutingTable> {
        self.tables.get(source)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoutingTable> {
        self.tables.iter()
    }
}
