use routesim::concepts::arp::ArpCache;
use routesim::concepts::device::Device;
use routesim::concepts::topology::{Cost, Topology};
use routesim::framework::{NetworkSystem, NodeIndex};

/// A small in-memory network: devices with synthetic addresses, a topology
/// built from an edge list, and a fully populated resolution cache.
pub struct VirtualNetwork {
    pub devices: Vec<Device<VirtualNetwork>>,
    pub topology: Topology,
    pub arp: ArpCache<VirtualNetwork>,
}

impl NetworkSystem for VirtualNetwork {
    type NetworkAddress = String;
    type LinkAddress = String;
}

impl VirtualNetwork {
    pub fn create(n: usize, edges: &[(NodeIndex, NodeIndex, Cost)]) -> VirtualNetwork {
        let devices: Vec<Device<VirtualNetwork>> = (0..n)
            .map(|id| Device {
                id,
                net_addr: format!("10.0.0.{}", id + 1),
                subnet_mask: "255.255.255.0".to_string(),
                link_addr: format!("02:00:00:00:00:{:02x}", id + 1),
            })
            .collect();
        let arp = ArpCache::from_devices(&devices);
        let topology = Topology::from_edges(n, edges).expect("valid test topology");
        VirtualNetwork {
            devices,
            topology,
            arp,
        }
    }

    pub fn addr(&self, id: NodeIndex) -> String {
        self.devices[id].net_addr.clone()
    }
}
