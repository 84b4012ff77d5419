mod gen;

use std::str::FromStr;

use anyhow::Result;
use inquire::validator::Validation;
use inquire::{CustomType, Select, Text};
use log::{error, info};
use rand::thread_rng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use routesim::concepts::arp::ArpCache;
use routesim::concepts::device::Device;
use routesim::concepts::table::TableSet;
use routesim::delivery::DeliverySimulator;
use routesim::feedback::DeliveryError;
use routesim::framework::NetworkSystem;
use routesim::router::{compute_tables, Strategy};

/// Concrete address families for the console simulation: dotted-quad IPv4
/// strings and colon-separated MAC strings.
struct ConsoleNet;

impl NetworkSystem for ConsoleNet {
    type NetworkAddress = String;
    type LinkAddress = String;
}

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let n: usize = CustomType::new("Number of devices:")
        .with_default(6)
        .prompt()?;
    let prefix: u32 = CustomType::new("Subnet prefix length (e.g. 24):")
        .with_default(24)
        .with_validator(|p: &u32| {
            if *p > 32 {
                Ok(Validation::Invalid("prefix length must be at most 32".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()?;
    let mask = gen::prefix_to_mask(prefix);

    let mut rng = thread_rng();
    let devices: Vec<Device<ConsoleNet>> = (0..n)
        .map(|id| Device {
            id,
            net_addr: gen::random_ip(&mut rng, prefix),
            subnet_mask: mask.clone(),
            link_addr: gen::random_mac(&mut rng),
        })
        .collect();

    info!("Generated devices:");
    for d in &devices {
        info!("ID:{} IP: {}/{}, MAC: {}", d.id, d.net_addr, d.subnet_mask, d.link_addr);
    }

    let arp = ArpCache::from_devices(&devices);
    let topology = gen::random_topology(&mut rng, n)?;

    let choice = Select::new("Routing type:", vec!["Static Routing", "Dynamic Routing"]).prompt()?;
    let strategy = if choice == "Static Routing" {
        Strategy::Static
    } else {
        let proto = Select::new("Protocol:", vec!["RIP (Bellman-Ford)", "OSPF (Dijkstra)"]).prompt()?;
        if proto.starts_with("RIP") {
            Strategy::from_str("rip")?
        } else {
            Strategy::from_str("ospf")?
        }
    };

    let tables = compute_tables(strategy, &topology);
    print_tables(&devices, &tables);
    print_arp(&arp);

    let src = Text::new("Source device IP:").prompt()?;
    let dst = Text::new("Destination device IP:").prompt()?;

    let sim = DeliverySimulator::new(&devices, &arp);
    match sim.deliver(&tables, &src, &dst) {
        Ok(hops) => {
            info!("Delivery path (with ARP lookups):");
            for (i, hop) in hops.iter().enumerate() {
                info!("Hop {}: IP: {} -> MAC: {}", i + 1, hop.net_addr, hop.link_addr);
            }
            info!("Data successfully delivered.");
        }
        Err(DeliveryError::UnknownDevice { addr }) => {
            error!("No device has address {addr}");
        }
        Err(DeliveryError::NoRoute { .. }) => {
            error!("No path found from source to destination!");
        }
        Err(DeliveryError::ResolutionMiss { addr, resolved, .. }) => {
            for (i, hop) in resolved.iter().enumerate() {
                info!("Hop {}: IP: {} -> MAC: {}", i + 1, hop.net_addr, hop.link_addr);
            }
            error!("ARP request for {addr} failed. Cannot deliver data.");
        }
    }
    Ok(())
}

fn print_tables(devices: &[Device<ConsoleNet>], tables: &TableSet) {
    for table in tables.iter() {
        info!("Routing table for device {}", devices[table.source].net_addr);
        for (dest, entry) in &table.routes {
            let via = entry
                .next_hop
                .map_or("N/A".to_string(), |h| devices[h].net_addr.clone());
            match entry.metric {
                Some(cost) => info!(
                    "Dest: {}, Cost: {}, NextHop: {}",
                    devices[*dest].net_addr, cost, via
                ),
                None => info!("Route to {} via {}", devices[*dest].net_addr, via),
            }
        }
    }
}

fn print_arp(arp: &ArpCache<ConsoleNet>) {
    info!("ARP Cache:");
    for (ip, mac) in arp.iter() {
        info!("IP: {ip} -> MAC: {mac}");
    }
}
