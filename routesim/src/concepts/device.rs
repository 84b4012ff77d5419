use educe::Educe;
use serde::{Deserialize, Serialize};

use crate::framework::{NetworkSystem, NodeIndex};

/// A simulated host. Identity only: immutable once created, and referenced
/// by `id` everywhere inside the engine (tables and paths never embed the
/// record itself).
#[derive(Serialize, Deserialize, Educe)]
#[educe(Clone(bound()))]
#[serde(bound = "")]
pub struct Device<T: NetworkSystem + ?Sized> {
    /// dense id; the device list is indexed by it
    pub id: NodeIndex,
    pub net_addr: T::NetworkAddress,
    pub subnet_mask: String,
    pub link_addr: T::LinkAddress,
}
