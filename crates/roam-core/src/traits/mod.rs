//! Seams between the client and the outside world.

mod transport;

pub use transport::*;
