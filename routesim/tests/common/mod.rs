pub mod graphs;
pub mod virtual_network;
