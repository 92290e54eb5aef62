pub mod bus;
pub mod machine;

pub use bus::{Bus, BusMaster, InterruptState};
pub use machine::Machine;
