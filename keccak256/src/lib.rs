//! Keccak-256 (legacy Keccak padding, as used by Ethereum) computed over individual bits.
//!
//! Every step of the permutation works on a state of 1600 booleans instead of 64-bit
//! words, so the code maps one to one onto a network of boolean gates.

mod error;
mod keccak_constants;
mod keccak_f;
mod padding;
mod sponge;
mod state;

pub use error::KeccakError;
pub use keccak_constants::*;
pub use keccak_f::{
    keccak_f, keccak_f_chi, keccak_f_iota, keccak_f_pi, keccak_f_rho, keccak_f_round,
    keccak_f_rounds, keccak_f_theta, KeccakRoundIterator,
};
pub use padding::{pad, pad_bytes, padded_len};
pub use sponge::{absorb, absorb_all, squeeze, squeeze_256};
pub use state::{bit_coordinates, bit_position, block_from_bits, Block, KeccakState};

use bit_codec::{bits_to_byte, bytes_to_bits, format_bits};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

/// Keccak-256 over an arbitrary bit sequence.
/// The message length does not need to be a multiple of 8.
pub fn keccak256_bits(message: &[bool]) -> [bool; OUTPUT_BITS] {
    let blocks = pad(message);
    debug!("keccak256: {} message bits in {} blocks", message.len(), blocks.len());

    let state = absorb_all(&blocks);
    let digest = squeeze_256(&state);
    trace!("keccak256: digest = {}", format_bits(&digest));

    digest
}

// Main Keccak function
// Input is a buffer of any length, including 0
// Output is a 256 bits long buffer
pub fn keccak256(input: &[u8]) -> [u8; OUTPUT_BYTES] {
    let digest = keccak256_bits(&bytes_to_bits(input));

    let mut output = [0u8; OUTPUT_BYTES];
    for (byte, bits) in output.iter_mut().zip(digest.chunks_exact(8)) {
        *byte = bits_to_byte(bits);
    }
    output
}

/// Hashes independent messages in parallel. Each message gets its own state, and the
/// digests come back in input order.
#[cfg(feature = "parallel")]
pub fn keccak256_batch<T>(inputs: &[T]) -> Vec<[u8; OUTPUT_BYTES]>
where
    T: AsRef<[u8]> + Sync,
{
    debug!("keccak256_batch: {} messages", inputs.len());
    inputs.par_iter().map(|input| keccak256(input.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bit_codec::bits_to_bytes;
    use tiny_keccak::{Hasher, Keccak};

    fn reference_keccak256(input: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak::v256();
        hasher.update(input);
        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("keccak256_bits=trace"))
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_keccak_test_string() {
        let output = keccak256(b"test");

        // Expected Keccak-256 hash of "test"
        let expected_hash: [u8; 32] = [
            0x9c, 0x22, 0xff, 0x5f, 0x21, 0xf0, 0xb8, 0x1b, 0x11, 0x3e, 0x63, 0xf7, 0xdb, 0x6d,
            0xa9, 0x4f, 0xed, 0xef, 0x11, 0xb2, 0x11, 0x9b, 0x40, 0x88, 0xb8, 0x96, 0x64, 0xfb,
            0x9a, 0x3c, 0xb6, 0x58,
        ];
        assert_eq!(output, expected_hash);
        assert_eq!(output, reference_keccak256(b"test"));
    }

    #[test]
    fn test_keccak_32_zero_bytes() {
        let output = keccak256(&[0u8; 32]);

        let expected_hash: [u8; 32] = [
            0x29, 0x0d, 0xec, 0xd9, 0x54, 0x8b, 0x62, 0xa8, 0xd6, 0x03, 0x45, 0xa9, 0x88, 0x38,
            0x6f, 0xc8, 0x4b, 0xa6, 0xbc, 0x95, 0x48, 0x40, 0x08, 0xf6, 0x36, 0x2f, 0x93, 0x16,
            0x0e, 0xf3, 0xe5, 0x63,
        ];
        assert_eq!(output, expected_hash);
    }

    #[test]
    fn test_keccak_100_zero_bytes() {
        let output = keccak256(&[0u8; 100]);

        let expected_hash: [u8; 32] = [
            0x91, 0x3f, 0xb9, 0xe1, 0xf6, 0xf1, 0xc6, 0xd9, 0x10, 0xfd, 0x57, 0x4a, 0x5c, 0xad,
            0x88, 0x57, 0xaa, 0x43, 0xbf, 0xba, 0x24, 0xe4, 0x01, 0xad, 0xa4, 0xf5, 0x60, 0x90,
            0xd4, 0xd9, 0x97, 0xa7,
        ];
        assert_eq!(output, expected_hash);
    }

    #[test]
    fn test_empty_input() {
        let output = keccak256(b"");

        // Expected Keccak-256 hash of empty input
        let expected_hash: [u8; 32] = [
            0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7,
            0x03, 0xc0, 0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04,
            0x5d, 0x85, 0xa4, 0x70,
        ];
        assert_eq!(output, expected_hash);
    }

    #[test]
    fn test_keccak_short() {
        let output = keccak256(b"Hello, world!");

        // Expected Keccak-256 hash of "Hello, world!"
        let expected_hash: [u8; 32] = [
            0xb6, 0xe1, 0x6d, 0x27, 0xac, 0x5a, 0xb4, 0x27, 0xa7, 0xf6, 0x89, 0x00, 0xac, 0x55,
            0x59, 0xce, 0x27, 0x2d, 0xc6, 0xc3, 0x7c, 0x82, 0xb3, 0xe0, 0x52, 0x24, 0x6c, 0x82,
            0x24, 0x4c, 0x50, 0xe4,
        ];
        assert_eq!(output, expected_hash);
    }

    #[test]
    fn test_rate_boundaries_match_reference() {
        for len in [1, 31, 33, 64, 134, 135, 136, 137, 271, 272, 273, 408, 500] {
            let input: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
            assert_eq!(keccak256(&input), reference_keccak256(&input), "length {}", len);
        }
    }

    #[test]
    fn test_block_count_near_rate() {
        assert_eq!(pad(&bytes_to_bits(&[0u8; 100])).len(), 1);
        assert_eq!(pad(&bytes_to_bits(&[0u8; 135])).len(), 1);
        assert_eq!(pad(&bytes_to_bits(&[0u8; 136])).len(), 2);
        assert_eq!(pad(&bytes_to_bits(&[0u8; 137])).len(), 2);
        assert_eq!(pad(&bytes_to_bits(&[0u8; 272])).len(), 3);
    }

    #[test]
    fn test_keccak256_bits_matches_bytes() {
        let input = b"The quick brown fox jumps over the lazy dog";
        let digest = keccak256_bits(&bytes_to_bits(input));
        assert_eq!(bits_to_bytes(&digest), keccak256(input).to_vec());
    }

    #[test]
    fn test_keccak256_bits_unaligned_length() {
        // 7 and 9 bit messages are valid inputs and hash differently from 8 bits
        let seven = keccak256_bits(&[true; 7]);
        let eight = keccak256_bits(&[true; 8]);
        let nine = keccak256_bits(&[true; 9]);
        assert_ne!(seven, eight);
        assert_ne!(eight, nine);
        assert_eq!(bits_to_bytes(&eight), keccak256(&[0xFF]).to_vec());
    }

    #[test]
    fn test_keccak256_with_tracing() {
        init_tracing();
        assert_eq!(keccak256(&[0xAB; 200]), reference_keccak256(&[0xAB; 200]));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_keccak256_batch() {
        let inputs: Vec<Vec<u8>> = vec![vec![], b"test".to_vec(), vec![0u8; 32], vec![0u8; 100]];
        let digests = keccak256_batch(&inputs);

        assert_eq!(digests.len(), inputs.len());
        for (input, digest) in inputs.iter().zip(digests.iter()) {
            assert_eq!(*digest, keccak256(input));
        }
        assert!(keccak256_batch::<Vec<u8>>(&[]).is_empty());
    }
}
