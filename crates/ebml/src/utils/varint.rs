//! varint.rs  –  EBML variable length integers, no allocation on the hot path
//!
//! The first byte of a vint carries a unary length marker in its high bits:
//! `n - 1` zero bits followed by a one bit, `n` being the encoded length in
//! bytes (1..=8). The bits after the marker, across all `n` bytes, hold the
//! value big-endian, giving `7 * n` payload bits.
use core::fmt::{self, Debug};
use itertools::Itertools;
use crate::config::{UnknownSize, VIntConfig};
use crate::utils::numbers::low_mask;
use crate::utils::packing::compact_width_unsigned;
use crate::utils::{CodecError, Result};
use crate::codec_error;

/// Longest encoding a single head byte can describe.
pub const MAX_LENGTH: u32 = 8;

/// Payload bits of the 8 byte class, the widest value a vint holds.
pub const MAX_PAYLOAD_BITS: u32 = MAX_LENGTH * 7;

/// Helper that prints a byte slice as `0x…` hex.
struct HexSlice<'a>(&'a [u8]);

impl Debug for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0.iter().format(""))
    }
}

/// Payload width in bits of the vint starting with `head`.
///
/// With `i` the index of the first set bit counted from the most significant
/// one, the encoding spans `i + 1` bytes, of which `i + 1` bits are marker,
/// leaving `(i + 1) * 7` payload bits.
#[inline]
pub fn calculate_width(head: u8) -> Result<u32> {
    let i = head.leading_zeros();
    if i >= u8::BITS {
        return Err(CodecError::InvalidEncoding { head });
    }
    Ok((i + 1) * 7)
}

/// Encoded length in bytes of the vint starting with `head`.
#[inline]
pub fn encoded_length(head: u8) -> Result<u32> {
    calculate_width(head).map(|bits| bits / 7)
}

#[inline]
const fn is_unknown(value: u64, length: u32, policy: UnknownSize) -> bool {
    let all_ones = value == low_mask(length * 7);
    match policy {
        UnknownSize::MaxLengthOnly => all_ones && length == MAX_LENGTH,
        UnknownSize::AnyLength => all_ones,
        UnknownSize::Never => false,
    }
}

/// A decoded, or ready to encode, variable length integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VInt {
    value: u64,
    length: u32,
    unknown: bool,
}

impl VInt {
    /// Decode the vint at the start of `bytes`. Trailing bytes are ignored.
    #[inline]
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_with(bytes, &VIntConfig::default())
    }

    pub fn decode_with(bytes: &[u8], config: &VIntConfig) -> Result<Self> {
        let Some(&head) = bytes.first() else {
            return Err(codec_error!("cannot decode a vint from empty input"));
        };

        let length = encoded_length(head)?;
        if length > config.max_length() {
            return Err(CodecError::WidthOverflow {
                length,
                max_length: config.max_length(),
            });
        }
        if bytes.len() < length as usize {
            return Err(CodecError::TruncatedInput {
                needed: length as usize,
                available: bytes.len(),
            });
        }

        // strip the marker, the rest of the head byte is the top of the value
        let mut value = u64::from(head) & (0xFF >> length);
        for &b in &bytes[1..length as usize] {
            value = (value << 8) | u64::from(b);
        }

        Ok(Self {
            value,
            length,
            unknown: is_unknown(value, length, config.unknown_size()),
        })
    }

    /// Build the shortest vint holding `value` whose encoding is at least
    /// `min_width` bits wide (0 for no minimum). The result is never the
    /// unknown size sentinel, use [`VInt::unknown`] for that.
    #[inline]
    pub fn from_value(value: u64, min_width: u32) -> Result<Self> {
        Self::from_value_with(value, min_width, &VIntConfig::default())
    }

    pub fn from_value_with(value: u64, min_width: u32, config: &VIntConfig) -> Result<Self> {
        let max_length = config.max_length();
        let min_length = min_width.div_ceil(8).max(1);
        if min_length > max_length {
            return Err(CodecError::WidthOverflow {
                length: min_length,
                max_length,
            });
        }

        let needed = compact_width_unsigned(value).div_ceil(7);
        if needed > max_length {
            return Err(CodecError::ValueTooLarge { value, max_length });
        }

        // an all-ones payload is reserved for the unknown size, a known value
        // moves up a class to avoid it
        let mut length = needed.max(min_length);
        while is_unknown(value, length, config.unknown_size()) {
            length += 1;
            if length > max_length {
                return Err(CodecError::ValueTooLarge { value, max_length });
            }
        }
        Ok(Self {
            value,
            length,
            unknown: false,
        })
    }

    /// The 8 byte unknown size sentinel, `01 FF FF FF FF FF FF FF`.
    pub const fn unknown() -> Self {
        Self {
            value: low_mask(MAX_PAYLOAD_BITS),
            length: MAX_LENGTH,
            unknown: true,
        }
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// The value with the marker bit kept, the customary form of element IDs.
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.value | (1u64 << (self.length * 7))
    }

    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.unknown
    }

    #[inline]
    pub const fn encoded_len(&self) -> usize {
        self.length as usize
    }

    /// Total bit length of the encoding, a multiple of 8.
    #[inline]
    pub const fn total_width(&self) -> u32 {
        self.length * 8
    }

    /// Bits taken by the length marker, one per encoded byte.
    #[inline]
    pub const fn marker_width(&self) -> u32 {
        self.length
    }

    #[inline]
    pub const fn payload_width(&self) -> u32 {
        self.total_width() - self.marker_width()
    }

    /// Encode into an 8-byte buffer; returns (buffer, length_used).
    #[inline]
    pub fn to_bytes(&self) -> ([u8; MAX_LENGTH as usize], usize) {
        let len = self.encoded_len();
        let be = self.raw().to_be_bytes();
        let mut buf = [0u8; MAX_LENGTH as usize];
        buf[..len].copy_from_slice(&be[be.len() - len..]);
        (buf, len)
    }
}

impl Debug for VInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (buf, len) = self.to_bytes();
        f.debug_struct("VInt")
            .field("value", &self.value)
            .field("bytes", &HexSlice(&buf[..len]))
            .field("unknown", &self.unknown)
            .finish()
    }
}

impl From<VInt> for u64 {
    fn from(v: VInt) -> Self {
        v.value
    }
}

/// Decode the vint at the start of `bytes`.
#[inline]
pub fn decode(bytes: &[u8]) -> Result<VInt> {
    VInt::decode(bytes)
}

/// Shortest encoding of `value` at least `min_width` bits wide.
pub fn encode(value: u64, min_width: u32) -> Result<Vec<u8>> {
    let (buf, len) = VInt::from_value(value, min_width)?.to_bytes();
    Ok(buf[..len].to_vec())
}
