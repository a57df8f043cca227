//! Engine state and the services that query it.

pub mod clock;
pub mod services;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use store::{LoadStatus, Store};
