//! Binary Loader.
//!
//! This module prepares the two memories before the first cycle. It performs:
//! 1. **Binary loading:** Reads a raw program or data image from disk into a byte buffer.
//! 2. **Data memory setup:** Sizes data memory and copies a seed image to its start.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::SimError;

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read.
pub fn load_binary(path: &Path) -> Result<Vec<u8>, SimError> {
    let bytes = fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded binary");
    Ok(bytes)
}

/// Builds a zero-filled data memory of `size` bytes, seeded left-justified.
///
/// # Errors
///
/// Returns [`SimError::SeedTooLarge`] if `seed` does not fit.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::seed_data_memory;
///
/// let mem = seed_data_memory(8, Some(&[0, 0, 0, 5])).unwrap();
/// assert_eq!(mem, [0, 0, 0, 5, 0, 0, 0, 0]);
/// ```
pub fn seed_data_memory(size: usize, seed: Option<&[u8]>) -> Result<Vec<u8>, SimError> {
    let mut mem = vec![0u8; size];
    if let Some(seed) = seed {
        let dst = mem.get_mut(..seed.len()).ok_or(SimError::SeedTooLarge {
            seed: seed.len(),
            capacity: size,
        })?;
        dst.copy_from_slice(seed);
    }
    Ok(mem)
}
