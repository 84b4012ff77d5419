use serde::{Deserialize, Serialize};

use crate::feedback::TopologyError;
use crate::framework::NodeIndex;

/// Cost of traversing a single link. Lower is better.
pub type Cost = u32;

/// Immutable symmetric cost matrix over device indices.
///
/// `None` marks the absence of a direct link; the diagonal is always
/// `Some(0)`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Topology {
    costs: Vec<Vec<Option<Cost>>>,
}

impl Topology {
    /// Validates and wraps a cost matrix. The engine assumes the square,
    /// symmetry and zero-diagonal invariants from here on, so a violation
    /// is fatal rather than a recoverable outcome.
    pub fn from_matrix(costs: Vec<Vec<Option<Cost>>>) -> Result<Self, TopologyError> {
        let n = costs.len();
        for (i, row) in costs.iter().enumerate() {
            if row.len() != n {
                return Err(TopologyError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
        }
        for i in 0..n {
            if costs[i][i] != Some(0) {
                return Err(TopologyError::NonZeroDiagonal { index: i });
            }
            for j in i + 1..n {
                if costs[i][j] != costs[j][i] {
                    return Err(TopologyError::Asymmetric { i, j });
                }
            }
        }
        Ok(Self { costs })
    }

    /// Builds an N-device topology from an undirected edge list. Pairs
    /// without an edge stay unlinked.
    pub fn from_edges(
        n: usize,
        edges: &[(NodeIndex, NodeIndex, Cost)],
    ) -> Result<Self, TopologyError> {
        let mut costs = vec![vec![None; n]; n];
        for (i, row) in costs.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        for &(a, b, w) in edges {
            if a >= n || b >= n {
                return Err(TopologyError::EdgeOutOfRange { a, b });
            }
            costs[a][b] = Some(w);
            costs[b][a] = Some(w);
        }
        Self::from_matrix(costs)
    }

    /// Number of devices in the topology.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Link cost between two devices: `Some(0)` for a device to itself,
    /// `None` if there is no direct link.
    pub fn cost(&self, i: NodeIndex, j: NodeIndex) -> Option<Cost> {
        self.costs[i][j]
    }
}
