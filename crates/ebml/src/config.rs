use crate::codec_error;
use crate::utils::varint::MAX_LENGTH;
use crate::utils::Result;

/// Which all-ones payloads a decoder reports as the unknown size sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSize {
    /// Only the 8 byte class with every payload bit set.
    #[default]
    MaxLengthOnly,
    /// Any length class with every payload bit set (element data sizes).
    AnyLength,
    /// Never, all-ones is an ordinary value (element IDs).
    Never,
}

/// Limits applied when reading or writing vints, mirroring the
/// `EBMLMaxIDLength` / `EBMLMaxSizeLength` document header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VIntConfig {
    max_length: u32,
    unknown_size: UnknownSize,
}

impl VIntConfig {
    pub fn new(max_length: u32, unknown_size: UnknownSize) -> Result<Self> {
        if max_length == 0 || max_length > MAX_LENGTH {
            return Err(codec_error!(
                "max vint length {} outside 1..={}",
                max_length,
                MAX_LENGTH
            ));
        }
        Ok(Self {
            max_length,
            unknown_size,
        })
    }

    /// Config for element IDs: at most 4 bytes, no unknown sentinel.
    pub const fn element_id() -> Self {
        Self {
            max_length: 4,
            unknown_size: UnknownSize::Never,
        }
    }

    /// Config for element data sizes as RFC 8794 defines them.
    pub const fn element_size() -> Self {
        Self {
            max_length: MAX_LENGTH,
            unknown_size: UnknownSize::AnyLength,
        }
    }

    #[inline]
    pub const fn max_length(&self) -> u32 {
        self.max_length
    }

    #[inline]
    pub const fn unknown_size(&self) -> UnknownSize {
        self.unknown_size
    }
}

impl Default for VIntConfig {
    fn default() -> Self {
        Self {
            max_length: MAX_LENGTH,
            unknown_size: UnknownSize::default(),
        }
    }
}
