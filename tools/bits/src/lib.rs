mod error;
mod lanes;
mod utils;

pub use error::CodecError;
pub use lanes::{bits_from_u64, bits_to_u64s, u64_from_bits, u64s_to_bits};
pub use utils::{bits_to_byte, bits_to_bytes, byte_to_bits, bytes_to_bits, format_bits};
