//! Fallible growth for the collections built during a parse.
//!
//! Every buffer the parser grows (decoded strings, the scanner's frame
//! stack, array and object children) reserves through [`grow`], so an
//! allocation failure surfaces as [`ErrorSource::OutOfMemory`] instead of
//! aborting, and unwinds like any other parse failure.

use alloc::vec::Vec;

use crate::error::ErrorSource;

pub(crate) fn grow<T>(vec: &mut Vec<T>, additional: usize) -> Result<(), ErrorSource> {
    #[cfg(test)]
    failpoint::charge()?;
    vec.try_reserve(additional)
        .map_err(|_| ErrorSource::OutOfMemory)
}
