//! This is a collection of useful utilities.

use std::fs::File;
use std::io::{Error, Write};

pub fn save_to_file(filename: &str, content: &str) -> Result<(), Error> {
    let mut f = File::create(filename)?;
    write!(f, "{}", content)?;
    #[cfg(feature = "log")]
    log::info!("Wrote {}", filename);
    Result::Ok(())
}

/// \returns the slot that \p index selects in a list of \p len elements.
/// Negative indices wrap around from the end. The list must not be empty.
pub(crate) fn wrap_index(index: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    index.rem_euclid(len as isize) as usize
}
