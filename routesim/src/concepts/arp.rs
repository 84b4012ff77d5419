use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::concepts::device::Device;
use crate::framework::NetworkSystem;

/// Static network-to-link address mappings, the simulation's stand-in for
/// ARP. Populated once from the device list; lookups never mutate it and
/// nothing is learned during a run.
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ArpCache<T: NetworkSystem + ?Sized> {
    #[serde_as(as = "Vec<(_, _)>")]
    entries: HashMap<T::NetworkAddress, T::LinkAddress>,
}

impl<T: NetworkSystem + ?Sized> ArpCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Builds the cache from a device list, one entry per device.
    pub fn from_devices(devices: &[Device<T>]) -> Self {
        let mut cache = Self::new();
        for dev in devices {
            cache.insert(dev.net_addr.clone(), dev.link_addr.clone());
        }
        cache
    }

    pub fn insert(&mut self, net_addr: T::NetworkAddress, link_addr: T::LinkAddress) {
        self.entries.insert(net_addr, link_addr);
    }

    /// Looks up the link address for a network address. A miss is an
    /// ordinary outcome, the analogue of an ARP timeout: it aborts the
    /// current delivery attempt, never the session.
    pub fn resolve(&self, net_addr: &T::NetworkAddress) -> Option<&T::LinkAddress> {
        self.entries.get(net_addr)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries, for display by presentation code.
    pub fn iter(&self) -> impl Iterator<Item = (&T::NetworkAddress, &T::LinkAddress)> {
        self.entries.iter()
    }
}

impl<T: NetworkSystem + ?Sized> Default for ArpCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
