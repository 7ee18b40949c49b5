use std::fmt;

use bit_codec::{bits_from_u64, u64_from_bits};

use crate::{KeccakError, BITRATE, LANES, LANE_BITS, STATE_BITS};

/// One rate-sized slice of a padded message
pub type Block = [bool; BITRATE];

/// Checks that a bit slice holds exactly one block
pub fn block_from_bits(bits: &[bool]) -> Result<Block, KeccakError> {
    bits.try_into().map_err(|_| KeccakError::InvalidLength {
        what: "block",
        expected: BITRATE,
        actual: bits.len(),
    })
}

/// Calculates the linear position of a bit in the Keccak state.
///
/// The Keccak state is organized as a 3-dimensional array:
/// - x: 0..4 (5 lanes)
/// - y: 0..4 (5 lanes)
/// - z: 0..63 (64 bits per lane)
///
/// Bit `z` of lane `(x, y)` lives at `64 * (5 * y + x) + z`.
pub const fn bit_position(x: usize, y: usize, z: usize) -> usize {
    assert!(x < 5, "x coordinate must be 0-4");
    assert!(y < 5, "y coordinate must be 0-4");
    assert!(z < 64, "z coordinate must be 0-63");

    64 * x + 320 * y + z
}

/// Inverse of [`bit_position`]
pub const fn bit_coordinates(pos: usize) -> (usize, usize, usize) {
    assert!(pos < STATE_BITS, "position must be 0-1599");

    let x = (pos / 64) % 5;
    let y = pos / 320;
    let z = pos % 64;
    (x, y, z)
}

/// The 1600-bit Keccak-f state, one boolean per bit.
///
/// The state is a plain value: every step of the permutation reads a state by reference
/// and builds a new one, so a state is never modified once it has been produced.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeccakState {
    bits: [bool; STATE_BITS],
}

impl KeccakState {
    /// The all-zero state
    pub const fn new() -> Self {
        Self { bits: [false; STATE_BITS] }
    }

    pub const fn from_bits(bits: [bool; STATE_BITS]) -> Self {
        Self { bits }
    }

    pub fn try_from_bits(bits: &[bool]) -> Result<Self, KeccakError> {
        let bits: [bool; STATE_BITS] = bits.try_into().map_err(|_| KeccakError::InvalidLength {
            what: "state",
            expected: STATE_BITS,
            actual: bits.len(),
        })?;
        Ok(Self { bits })
    }

    /// Builds a state by evaluating `f(x, y, z)` for every bit
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> bool,
    {
        let mut bits = [false; STATE_BITS];
        for y in 0..5 {
            for x in 0..5 {
                for z in 0..LANE_BITS {
                    bits[bit_position(x, y, z)] = f(x, y, z);
                }
            }
        }
        Self { bits }
    }

    /// Lane `(x, y)` sits at word index `x + 5 * y`, bit `z` at significance `z`
    pub fn from_lanes(lanes: &[u64; LANES]) -> Self {
        let mut bits = [false; STATE_BITS];
        for (word, chunk) in lanes.iter().zip(bits.chunks_exact_mut(LANE_BITS)) {
            chunk.copy_from_slice(&bits_from_u64(*word));
        }
        Self { bits }
    }

    pub fn try_from_lanes(lanes: &[u64]) -> Result<Self, KeccakError> {
        let lanes: &[u64; LANES] = lanes.try_into().map_err(|_| KeccakError::InvalidLength {
            what: "lane array",
            expected: LANES,
            actual: lanes.len(),
        })?;
        Ok(Self::from_lanes(lanes))
    }

    pub fn to_lanes(&self) -> [u64; LANES] {
        let mut lanes = [0u64; LANES];
        for (word, chunk) in lanes.iter_mut().zip(self.bits.chunks_exact(LANE_BITS)) {
            *word = u64_from_bits(chunk);
        }
        lanes
    }

    #[inline]
    pub fn bit(&self, x: usize, y: usize, z: usize) -> bool {
        self.bits[bit_position(x, y, z)]
    }

    pub fn lane(&self, x: usize, y: usize) -> u64 {
        let first = bit_position(x, y, 0);
        u64_from_bits(&self.bits[first..first + LANE_BITS])
    }

    pub fn bits(&self) -> &[bool; STATE_BITS] {
        &self.bits
    }

    pub fn into_bits(self) -> [bool; STATE_BITS] {
        self.bits
    }

    /// The first `BITRATE` bits, the part of the state exposed to absorb and squeeze
    pub fn rate(&self) -> &[bool] {
        &self.bits[..BITRATE]
    }
}

impl Default for KeccakState {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[bool]> for KeccakState {
    type Error = KeccakError;

    fn try_from(bits: &[bool]) -> Result<Self, Self::Error> {
        Self::try_from_bits(bits)
    }
}

impl fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeccakState [")?;
        for (i, lane) in self.to_lanes().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:#018x}", lane)?;
        }
        write!(f, "]")
    }
}
