//! routesim computes routing tables over a synthetic weighted topology and
//! resolves delivery paths between device addresses, without performing any
//! I/O itself.

pub mod concepts;
pub mod delivery;
pub mod feedback;
pub mod framework;
pub mod path;
pub mod router;
pub mod util;
