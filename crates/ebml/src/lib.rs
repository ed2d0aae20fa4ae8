pub mod utils;
pub mod config;
pub mod stream;

pub use utils::{
    CodecError,
    Result,
    bits::extract_bits,
    numbers::{Container, Integer},
    packing::{
        compact_width_signed,
        compact_width_unsigned,
        pad_signed,
        pad_unsigned,
        shrink_signed,
        shrink_unsigned,
        NonStandardInteger
    },
    varint::{calculate_width, decode, encode, VInt}
};

pub use config::{UnknownSize, VIntConfig};

pub use stream::{
    ByteReader,
    ByteWriter
};
