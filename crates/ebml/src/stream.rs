use crate::{
    config::VIntConfig,
    debug_log,
    utils::{
        packing::{compact_width_signed, compact_width_unsigned, pad_signed, shrink_signed, shrink_unsigned},
        varint::VInt,
        CodecError,
        Result,
    },
    codec_error,
};

/// Largest integer element body, in bytes.
pub const MAX_INT_LEN: usize = 8;

macro_rules! streamlog {
    ($bp:expr, $op:expr, $($args:tt)*) => {
        debug_log!("bp({:6}) | {:12} | {}", $bp, $op, format_args!($($args)*))
    };
}

/// Forward-only cursor over an EBML byte buffer.
pub struct ByteReader<'a> {
    pub(crate) bp: usize,
    pub(crate) buffer: &'a [u8],
    pub(crate) config: VIntConfig,
}

impl<'a> ByteReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_config(buffer, VIntConfig::default())
    }

    pub fn with_config(buffer: &'a [u8], config: VIntConfig) -> Self {
        Self {
            bp: 0,
            buffer,
            config,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.bp
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.bp
    }

    /// Take the next `count` bytes, or nothing if fewer are left.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(CodecError::TruncatedInput {
                needed: count,
                available: self.remaining(),
            });
        }
        let start = self.bp;
        self.bp += count;
        streamlog!(start, "read_bytes", "({})", count);
        Ok(&self.buffer[start..start + count])
    }

    pub fn read_vint(&mut self) -> Result<VInt> {
        if self.remaining() == 0 {
            return Err(CodecError::TruncatedInput {
                needed: 1,
                available: 0,
            });
        }
        let vint = VInt::decode_with(&self.buffer[self.bp..], &self.config)?;
        streamlog!(self.bp, "read_vint", "{:?}", vint);
        self.bp += vint.encoded_len();
        Ok(vint)
    }

    /// Big-endian unsigned integer body of `len` bytes. A zero length body
    /// reads as 0.
    pub fn read_uint(&mut self, len: usize) -> Result<u64> {
        if len > MAX_INT_LEN {
            return Err(codec_error!("integer body of {} bytes, max {}", len, MAX_INT_LEN));
        }
        let value = self
            .read_bytes(len)?
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        streamlog!(self.bp, "read_uint", "({}) = {}", len, value);
        Ok(value)
    }

    /// Big-endian two's-complement integer body of `len` bytes, sign-extended
    /// to 64 bits.
    pub fn read_sint(&mut self, len: usize) -> Result<i64> {
        let raw = self.read_uint(len)?;
        let value = if len == 0 {
            0
        } else {
            pad_signed(raw, (len * 8) as u32)?
        };
        streamlog!(self.bp, "read_sint", "({}) = {}", len, value);
        Ok(value)
    }
}

/// Growable EBML output buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    pub(crate) buffer: Vec<u8>,
    pub(crate) config: VIntConfig,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VIntConfig) -> Self {
        Self {
            buffer: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        streamlog!(self.buffer.len(), "write_bytes", "({})", bytes.len());
        self.buffer.extend_from_slice(bytes);
    }

    pub fn write_vint(&mut self, value: u64, min_width: u32) -> Result<VInt> {
        let vint = VInt::from_value_with(value, min_width, &self.config)?;
        streamlog!(self.buffer.len(), "write_vint", "{:?}", vint);
        let (buf, len) = vint.to_bytes();
        self.buffer.extend_from_slice(&buf[..len]);
        Ok(vint)
    }

    /// Write `value` as the shortest big-endian body, returning its length.
    pub fn write_uint(&mut self, value: u64) -> Result<usize> {
        let len = compact_width_unsigned(value).div_ceil(8) as usize;
        let raw = shrink_unsigned(value, (len * 8) as u32)?;
        streamlog!(self.buffer.len(), "write_uint", "{} ({})", value, len);
        self.buffer.extend_from_slice(&raw.to_be_bytes()[MAX_INT_LEN - len..]);
        Ok(len)
    }

    /// Write `value` as the shortest big-endian two's-complement body,
    /// returning its length.
    pub fn write_sint(&mut self, value: i64) -> Result<usize> {
        let len = compact_width_signed(value).div_ceil(8) as usize;
        let raw = shrink_signed(value, (len * 8) as u32)?;
        streamlog!(self.buffer.len(), "write_sint", "{} ({})", value, len);
        self.buffer.extend_from_slice(&raw.to_be_bytes()[MAX_INT_LEN - len..]);
        Ok(len)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
