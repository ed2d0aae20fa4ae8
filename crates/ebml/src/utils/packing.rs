//! Conversion between standard-width integers and their compact,
//! non-standard width representations.
//!
//! Padding widens a `width` bit pattern held in a standard container back to
//! the container's full width (zero extension for unsigned, two's-complement
//! sign extension for signed). Shrinking goes the other way: it checks the
//! value fits in `width` bits and produces the `width` bit pattern.
use crate::utils::bits::extract_bits;
use crate::utils::numbers::{low_mask, Container, Integer};
use crate::utils::{check_width, CodecError, Result};
use crate::codec_error;

/// Minimum number of bits holding `value` as an unsigned integer. Zero takes
/// one bit.
#[inline]
pub const fn compact_width_unsigned(value: u64) -> u32 {
    if value == 0 {
        1
    } else {
        u64::BITS - value.leading_zeros()
    }
}

/// Minimum width of a two's-complement field holding `value`: the sign bit
/// plus the magnitude bits.
///
/// Negative values are measured through their complement so that the most
/// negative value of a width still fits it (`-8` takes 4 bits, `-1` and `0`
/// take 1). Everywhere else this equals `compact_width_unsigned(|value|) + 1`.
#[inline]
pub const fn compact_width_signed(value: i64) -> u32 {
    let magnitude = (if value < 0 { !value } else { value }) as u64;
    (u64::BITS - magnitude.leading_zeros()) + 1
}

/// Zero-extend a `width` bit unsigned integer stored in `raw`.
#[inline]
pub fn pad_unsigned<T: Container>(raw: T, width: u32) -> Result<T> {
    check_width(width, T::BITS)?;
    extract_bits(raw, width - 1, 0)
}

/// Sign-extend a `width` bit two's-complement integer stored in `raw`.
///
/// Bit `width - 1` is the sign; when set the value is the magnitude held in
/// the remaining bits minus `2^(width-1)`. A width of 1 decodes to `0` or `-1`.
pub fn pad_signed<T: Container>(raw: T, width: u32) -> Result<T::Signed> {
    check_width(width, T::BITS)?;

    let sign = extract_bits(raw, width - 1, width - 1)?.widen() != 0;
    let magnitude = if width > 1 {
        extract_bits(raw, width - 2, 0)?.widen() as i64
    } else {
        0
    };

    let value = if sign {
        // width == 64 goes through i64::MIN
        magnitude.wrapping_sub(1i64.wrapping_shl(width - 1))
    } else {
        magnitude
    };
    Ok(T::narrow_signed(value))
}

/// Pack `value` into `width` bits. Unsigned packing leaves the bits as they
/// are once the value is known to fit.
pub fn shrink_unsigned(value: u64, width: u32) -> Result<u64> {
    check_width(width, u64::BITS)?;
    let compact = compact_width_unsigned(value);
    if compact > width {
        return Err(CodecError::DoesNotFit {
            value: value as i128,
            compact,
            width,
        });
    }
    Ok(value)
}

/// Pack `value` into a `width` bit two's-complement field.
pub fn shrink_signed(value: i64, width: u32) -> Result<u64> {
    check_width(width, u64::BITS)?;
    let compact = compact_width_signed(value);
    if compact > width {
        return Err(CodecError::DoesNotFit {
            value: value as i128,
            compact,
            width,
        });
    }

    if value >= 0 {
        return Ok(value as u64);
    }
    let sign_bit = 1u64 << (width - 1);
    Ok(sign_bit.wrapping_add(value as u64) | sign_bit)
}

/// An integer whose meaningful width is narrower than its storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonStandardInteger {
    raw_bits: u64,
    width: u32,
    signed: bool,
}

impl NonStandardInteger {
    /// Wrap an already packed bit pattern. Bits above `width` must be clear.
    pub fn from_raw(raw_bits: u64, width: u32, signed: bool) -> Result<Self> {
        check_width(width, u64::BITS)?;
        if raw_bits & !low_mask(width) != 0 {
            return Err(codec_error!(
                "raw bits {:#x} wider than {} bits",
                raw_bits,
                width
            ));
        }
        Ok(Self { raw_bits, width, signed })
    }

    pub fn shrink_unsigned(value: u64, width: u32) -> Result<Self> {
        Ok(Self {
            raw_bits: shrink_unsigned(value, width)?,
            width,
            signed: false,
        })
    }

    pub fn shrink_signed(value: i64, width: u32) -> Result<Self> {
        Ok(Self {
            raw_bits: shrink_signed(value, width)?,
            width,
            signed: true,
        })
    }

    #[inline]
    pub const fn raw_bits(&self) -> u64 {
        self.raw_bits
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Pad back to a 64 bit container.
    pub fn value(&self) -> Result<Integer> {
        if self.signed {
            pad_signed(self.raw_bits, self.width).map(Integer::from)
        } else {
            pad_unsigned(self.raw_bits, self.width).map(Integer::from)
        }
    }
}
