use anyhow::Result;
use rand::Rng;
use routesim::concepts::topology::{Cost, Topology};

/// chance (out of 10) that any device pair gets a direct link
const LINK_CHANCE: u32 = 7;

/// Converts a prefix length (e.g. 24) to a dotted-quad subnet mask.
/// Lengths above 32 are clamped.
pub fn prefix_to_mask(prefix: u32) -> String {
    let prefix = prefix.min(32);
    let mask: u32 = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - prefix)
    };
    format!(
        "{}.{}.{}.{}",
        mask >> 24 & 0xff,
        mask >> 16 & 0xff,
        mask >> 8 & 0xff,
        mask & 0xff
    )
}

/// Random 192.168.x.y address with a host part that fits the prefix.
pub fn random_ip(rng: &mut impl Rng, prefix: u32) -> String {
    let third: u32 = rng.gen_range(0..256);
    let fourth: u32 = if prefix <= 16 {
        rng.gen_range(0..256)
    } else if prefix <= 23 {
        let host_bits = 32 - prefix;
        let max_host = ((1u32 << host_bits) - 2).min(254);
        rng.gen_range(1..=max_host)
    } else {
        rng.gen_range(1..255)
    };
    format!("192.168.{third}.{fourth}")
}

/// Random locally-administered unicast MAC address.
pub fn random_mac(rng: &mut impl Rng) -> String {
    let mut bytes = [0u8; 6];
    rng.fill(&mut bytes[..]);
    bytes[0] = (bytes[0] & 0xfe) | 0x02;
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Random symmetric topology: each device pair gets a direct link with
/// cost 1..=9 about 70% of the time, and no link otherwise.
pub fn random_topology(rng: &mut impl Rng, n: usize) -> Result<Topology> {
    let mut costs: Vec<Vec<Option<Cost>>> = vec![vec![None; n]; n];
    for i in 0..n {
        costs[i][i] = Some(0);
        for j in i + 1..n {
            if rng.gen_range(0..10) < LINK_CHANCE {
                let w: Cost = rng.gen_range(1..=9);
                costs[i][j] = Some(w);
                costs[j][i] = Some(w);
            }
        }
    }
    Ok(Topology::from_matrix(costs)?)
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use super::*;

    #[test]
    fn masks_for_common_prefixes() {
        assert_eq!(prefix_to_mask(0), "0.0.0.0");
        assert_eq!(prefix_to_mask(16), "255.255.0.0");
        assert_eq!(prefix_to_mask(24), "255.255.255.0");
        assert_eq!(prefix_to_mask(32), "255.255.255.255");
    }

    #[test]
    fn oversized_prefix_is_clamped() {
        assert_eq!(prefix_to_mask(40), "255.255.255.255");
    }

    #[test]
    fn generated_macs_are_locally_administered() {
        let mut rng = thread_rng();
        for _ in 0..20 {
            let mac = random_mac(&mut rng);
            assert_eq!(mac.len(), 17);
            let first = u8::from_str_radix(&mac[0..2], 16).unwrap();
            assert_eq!(first & 0x01, 0); // unicast
            assert_eq!(first & 0x02, 0x02); // locally administered
        }
    }

    #[test]
    fn generated_topology_is_valid() {
        let mut rng = thread_rng();
        let topo = random_topology(&mut rng, 8).unwrap();
        assert_eq!(topo.len(), 8);
        for i in 0..8 {
            assert_eq!(topo.cost(i, i), Some(0));
            for j in 0..8 {
                assert_eq!(topo.cost(i, j), topo.cost(j, i));
            }
        }
    }
}
