use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Bit length {len} is not a multiple of {align}")]
    UnalignedLength { len: usize, align: usize },
}
