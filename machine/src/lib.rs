pub mod rom_loader;
pub mod system;

pub use rom_loader::{RomError, SnapshotError, load_flat_rom};
pub use system::System;
