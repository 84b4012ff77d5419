pub mod arp;
pub mod device;
pub mod table;
pub mod topology;
