use educe::Educe;
use thiserror::Error;

use crate::delivery::ResolvedHop;
use crate::framework::{NetworkSystem, NodeIndex};

/// Fatal construction errors. The routing engine assumes these invariants
/// once a `Topology` exists, so a matrix violating them aborts the whole
/// computation instead of becoming a per-request outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("cost matrix row {row} has length {len}, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cost matrix diagonal must be zero at index {index}")]
    NonZeroDiagonal { index: usize },
    #[error("cost matrix is not symmetric at ({i}, {j})")]
    Asymmetric { i: usize, j: usize },
    #[error("edge ({a}, {b}) references a device outside the topology")]
    EdgeOutOfRange { a: usize, b: usize },
}

/// An unrecognized routing-strategy identifier. Selection must fail loudly;
/// it never silently falls back to a default strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown routing strategy {0:?}")]
pub struct InvalidStrategy(pub String);

/// Non-fatal delivery outcomes. These are ordinary result values: each
/// aborts a single delivery attempt and leaves computed tables intact.
#[derive(Error, Educe)]
#[educe(Debug)]
pub enum DeliveryError<T: NetworkSystem + ?Sized> {
    /// The supplied network address matches no device.
    #[error("network address matches no device")]
    UnknownDevice { addr: T::NetworkAddress },
    /// The destination cannot be reached over the routing tables.
    /// (`from`, not `source`: thiserror reserves that field name for an
    /// underlying error cause.)
    #[error("no route from device {from} to device {dest}")]
    NoRoute { from: NodeIndex, dest: NodeIndex },
    /// A hop's network address is not in the resolution cache. Hops
    /// resolved before the miss are carried along.
    #[error("address resolution miss at hop {hop}")]
    ResolutionMiss {
        hop: usize,
        addr: T::NetworkAddress,
        resolved: Vec<ResolvedHop<T>>,
    },
}
