pub mod bits;
pub mod numbers;
pub mod packing;
pub mod varint;

#[macro_export]
#[cfg(feature = "debug")]
macro_rules! debug_log {
    ($($args:tt)*) => {{
        println!("{}", format_args!($($args)*));
    }};
}

#[macro_export]
#[cfg(not(feature = "debug"))]
macro_rules! debug_log {
    ($($args:tt)*) => {{}};
}

/// Every failure the codec can report. None of them are retryable, a failed
/// call never yields a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("bit range [{high}, {low}] out of range for a {container_bits} bit container")]
    OutOfRange {
        high: u32,
        low: u32,
        container_bits: u32,
    },

    #[error("invalid vint head byte 0x{head:02x}: no length marker set")]
    InvalidEncoding { head: u8 },

    #[error("truncated input: need {needed} bytes, only {available} available")]
    TruncatedInput { needed: usize, available: usize },

    #[error("vint of {length} bytes exceeds the maximum of {max_length}")]
    WidthOverflow { length: u32, max_length: u32 },

    #[error("value {value} does not fit any vint length class up to {max_length} bytes")]
    ValueTooLarge { value: u64, max_length: u32 },

    #[error("compact width of {value} is {compact} bits, only {width} available")]
    DoesNotFit {
        value: i128,
        compact: u32,
        width: u32,
    },
}

pub type Result<T> = core::result::Result<T, CodecError>;

#[macro_export]
macro_rules! codec_error {
    ($($arg:tt)*) => {
        $crate::utils::CodecError::InvalidArgument(format!($($arg)*))
    };
}

/// Rejects widths outside `1..=max`, the range every non-standard integer
/// must live in.
#[inline]
pub(crate) fn check_width(width: u32, max: u32) -> Result<()> {
    if width == 0 || width > max {
        return Err(codec_error!("width {} outside 1..={}", width, max));
    }
    Ok(())
}
