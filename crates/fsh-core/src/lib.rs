//! fsh core: shared types, configuration, clock, and the session log.

pub mod clock;
pub mod config;
pub mod log;
pub mod types;
pub mod utils;

pub use clock::{Clock, SystemClock};
pub use log::SessionLog;
pub use types::Severity;
