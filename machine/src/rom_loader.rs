//! Flat ROM image loading and snapshot save/restore. Both are named-only
//! interfaces in the spec; the hand-rolled error enum matches the shape the
//! rest of the workspace uses at I/O boundaries.

use std::fmt;

#[derive(Debug)]
pub enum RomError {
    TooLarge { len: usize, max: usize },
    Empty,
}

impl fmt::Display for RomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomError::TooLarge { len, max } => {
                write!(f, "ROM image is {len} bytes, exceeds the {max}-byte banked window")
            }
            RomError::Empty => write!(f, "ROM image is empty"),
        }
    }
}

impl std::error::Error for RomError {}

/// Loads a flat binary image into the banked-ROM window (16 KiB per bank),
/// zero-padding the final partial bank.
pub fn load_flat_rom(data: &[u8], rom: &mut [u8]) -> Result<(), RomError> {
    if data.is_empty() {
        return Err(RomError::Empty);
    }
    if data.len() > rom.len() {
        return Err(RomError::TooLarge { len: data.len(), max: rom.len() });
    }
    rom[..data.len()].copy_from_slice(data);
    Ok(())
}

#[derive(Debug)]
pub enum SnapshotError {
    Truncated { expected: usize, got: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Truncated { expected, got } => {
                write!(f, "snapshot truncated: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}
