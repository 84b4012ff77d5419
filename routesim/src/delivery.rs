use educe::Educe;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::concepts::arp::ArpCache;
use crate::concepts::device::Device;
use crate::concepts::table::TableSet;
use crate::feedback::DeliveryError;
use crate::framework::{NetworkSystem, NodeIndex};
use crate::path::resolve_path;

/// One hop of a successfully resolved delivery path.
#[derive(Serialize, Deserialize, Educe)]
#[educe(Debug, Clone(bound()))]
#[serde(bound = "")]
pub struct ResolvedHop<T: NetworkSystem + ?Sized> {
    pub device: NodeIndex,
    pub net_addr: T::NetworkAddress,
    pub link_addr: T::LinkAddress,
}

/// Walks a delivery end to end: endpoint lookup over the device list, path
/// resolution over a table set, then a link-address lookup for every device
/// on the path.
pub struct DeliverySimulator<'a, T: NetworkSystem> {
    devices: &'a [Device<T>],
    arp: &'a ArpCache<T>,
}

impl<'a, T: NetworkSystem> DeliverySimulator<'a, T> {
    /// `devices` must be indexed by device id.
    pub fn new(devices: &'a [Device<T>], arp: &'a ArpCache<T>) -> Self {
        Self { devices, arp }
    }

    fn find_device(&self, addr: &T::NetworkAddress) -> Option<&Device<T>> {
        self.devices.iter().find(|d| d.net_addr == *addr)
    }

    /// Resolves a delivery between two network addresses over the given
    /// routing tables. The first resolution miss aborts the remainder of
    /// the walk; hops resolved before it are carried inside the error so
    /// the caller can still surface them.
    pub fn deliver(
        &self,
        tables: &TableSet,
        src: &T::NetworkAddress,
        dst: &T::NetworkAddress,
    ) -> Result<Vec<ResolvedHop<T>>, DeliveryError<T>> {
        let src_dev = self
            .find_device(src)
            .ok_or_else(|| DeliveryError::UnknownDevice { addr: src.clone() })?;
        let dst_dev = self
            .find_device(dst)
            .ok_or_else(|| DeliveryError::UnknownDevice { addr: dst.clone() })?;

        let path = resolve_path(tables, src_dev.id, dst_dev.id).ok_or(DeliveryError::NoRoute {
            from: src_dev.id,
            dest: dst_dev.id,
        })?;

        let mut hops = Vec::with_capacity(path.len());
        for (i, &id) in path.iter().enumerate() {
            // a table pointing outside the device list is malformed;
            // treat the walk as unroutable instead of panicking
            let device = self.devices.get(id).ok_or(DeliveryError::NoRoute {
                from: src_dev.id,
                dest: dst_dev.id,
            })?;
            match self.arp.resolve(&device.net_addr) {
                Some(link_addr) => {
                    debug!(
                        "hop {}: {} -> {}",
                        i + 1,
                        json!(device.net_addr),
                        json!(link_addr)
                    );
                    hops.push(ResolvedHop {
                        device: id,
                        net_addr: device.net_addr.clone(),
                        link_addr: link_addr.clone(),
                    });
                }
                None => {
                    return Err(DeliveryError::ResolutionMiss {
                        hop: i,
                        addr: device.net_addr.clone(),
                        resolved: hops,
                    });
                }
            }
        }
        Ok(hops)
    }
}
