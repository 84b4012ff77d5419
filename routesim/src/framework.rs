use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// The address families of a simulated network. The core is generic over
/// this trait: a simulation picks concrete network-layer and link-layer
/// address types, and the engine itself only ever handles device indices.
pub trait NetworkSystem {
    /// Network-layer address of a device, MUST be unique across the simulation
    type NetworkAddress: Ord + PartialOrd + Debug + SimData + SimKey;
    /// Link-layer address of a device, may not be unique
    type LinkAddress: Debug + SimData;
}

pub trait SimData: Clone + Serialize + DeserializeOwned + Sized {}
pub trait SimKey: Eq + PartialEq + Hash {}
impl<T: Eq + PartialEq + Hash> SimKey for T {}
impl<T: Clone + Serialize + DeserializeOwned + Sized> SimData for T {}

/// Dense device index, 0..N-1, stable for the lifetime of a simulation.
pub type NodeIndex = usize;
