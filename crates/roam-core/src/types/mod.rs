//! Wire records exchanged with the Roam service.

mod hook;
mod notification;
mod point;

pub use hook::*;
pub use notification::*;
pub use point::*;
