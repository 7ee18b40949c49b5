use bit_codec::bits_from_u64;

/// Bits in the Keccak-f[1600] state
pub const STATE_BITS: usize = 1600;

/// Bits per lane
pub const LANE_BITS: usize = 64;

/// Lanes in the state (5 x 5)
pub const LANES: usize = 25;

/// Rate of Keccak-256, in bits and in bytes
pub const BITRATE: usize = 1088;
pub const BYTERATE: usize = BITRATE / 8;

/// Capacity of Keccak-256
pub const CAPACITY_BITS: usize = STATE_BITS - BITRATE;

/// Digest size
pub const OUTPUT_BITS: usize = 256;
pub const OUTPUT_BYTES: usize = OUTPUT_BITS / 8;

/// Rounds of Keccak-f[1600]
pub const ROUNDS: usize = 24;

/// Round constants, most significant bit first notation
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808A,
    0x8000000080008000,
    0x000000000000808B,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008A,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000A,
    0x000000008000808B,
    0x800000000000008B,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800A,
    0x800000008000000A,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Round constants expanded to bits: `KECCAK_F_RC[round][z]` is the bit of significance `z`
pub const KECCAK_F_RC: [[bool; LANE_BITS]; ROUNDS] = expand_round_constants();

/// ρ rotation offsets, indexed `RHO_OFFSETS[x][y]`
#[rustfmt::skip]
pub const RHO_OFFSETS: [[u32; 5]; 5] = [
    [ 0, 36,  3, 41, 18],
    [ 1, 44, 10, 45,  2],
    [62,  6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39,  8, 14],
];

const fn expand_round_constants() -> [[bool; LANE_BITS]; ROUNDS] {
    let mut out = [[false; LANE_BITS]; ROUNDS];
    let mut i = 0;
    while i < ROUNDS {
        out[i] = bits_from_u64(ROUND_CONSTANTS[i]);
        i += 1;
    }
    out
}
