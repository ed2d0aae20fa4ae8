//! Inclusive bit range extraction over any standard container width.
use crate::utils::numbers::{low_mask, Container};
use crate::utils::{CodecError, Result};

/// Extract bits `[high, low]` of `container` (bit 0 is the least significant)
/// and return them right-aligned.
///
/// Fails with [`CodecError::OutOfRange`] unless `low <= high < T::BITS`.
#[inline]
pub fn extract_bits<T: Container>(container: T, high: u32, low: u32) -> Result<T> {
    extract_bits_in(container.widen(), T::BITS, high, low).map(T::narrow)
}

/// Width-parameterised form of [`extract_bits`], for callers holding the
/// container as a widened `u64`.
#[inline]
pub fn extract_bits_in(container: u64, container_bits: u32, high: u32, low: u32) -> Result<u64> {
    if low > high || high >= container_bits || container_bits > u64::BITS {
        return Err(CodecError::OutOfRange {
            high,
            low,
            container_bits,
        });
    }
    Ok((container >> low) & low_mask(high - low + 1))
}
