use crate::common::virtual_network::VirtualNetwork;

/// the triangle: 0-1 cost 1, 0-2 cost 4, 1-2 cost 1
pub fn vnet_triangle() -> VirtualNetwork {
    VirtualNetwork::create(3, &[(0, 1, 1), (0, 2, 4), (1, 2, 1)])
}

/// five devices, weighted so that every shortest path is unique
pub fn vnet_simple_weighted() -> VirtualNetwork {
    VirtualNetwork::create(
        5,
        &[
            (0, 1, 2),
            (0, 2, 1),
            (1, 2, 4),
            (1, 3, 5),
            (2, 3, 100),
            (2, 4, 8),
            (3, 4, 1),
        ],
    )
}

/// device 3 has no link to anyone
pub fn vnet_with_isolated() -> VirtualNetwork {
    VirtualNetwork::create(4, &[(0, 1, 1), (1, 2, 2)])
}
