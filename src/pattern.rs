//! Deterministic byte and coefficient patterns for tests, benches and demos.

use crate::compress::InputBlock;
use crate::hash::HashValue;
use crate::{INPUT_BLOCK_SIZE, N, P};

/// An array filled with the pattern `(index * multiplier + addend) mod 256`.
#[must_use]
pub fn patterned_bytes<const LEN: usize>(multiplier: u8, addend: u8) -> [u8; LEN] {
    let mut bytes = [0u8; LEN];
    fill_pattern(&mut bytes, multiplier, addend);
    bytes
}

/// Fill the provided buffer with the pattern `(index * multiplier + addend)
/// mod 256`.
pub fn fill_pattern(bytes: &mut [u8], multiplier: u8, addend: u8) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(multiplier).wrapping_add(addend);
    }
}

/// A whole patterned input block.
#[must_use]
pub fn patterned_block(multiplier: u8, addend: u8) -> InputBlock {
    InputBlock(patterned_bytes::<INPUT_BLOCK_SIZE>(multiplier, addend))
}

/// A hash value with canonical patterned coefficients.
#[must_use]
pub fn patterned_hash(multiplier: u8, addend: u8) -> HashValue {
    let mut h = HashValue::ZERO;
    let mut pattern = [0u8; N];
    fill_pattern(&mut pattern, multiplier, addend);
    for (coeff, &b) in h.0.iter_mut().zip(&pattern) {
        *coeff = i16::from(b) % P;
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterned_bytes_produces_expected_sequence() {
        let bytes = patterned_bytes::<8>(3, 5);
        assert_eq!(bytes, [5, 8, 11, 14, 17, 20, 23, 26]);
    }

    #[test]
    fn fill_pattern_wraps_on_overflow() {
        let mut buf = [0u8; 4];
        fill_pattern(&mut buf, 200, 200);
        assert_eq!(buf, [200, 144, 88, 32]);
    }

    #[test]
    fn patterned_block_matches_raw_pattern() {
        let block = patterned_block(9, 1);
        assert_eq!(block.0, patterned_bytes::<INPUT_BLOCK_SIZE>(9, 1));
    }

    #[test]
    fn patterned_hash_is_canonical() {
        let h = patterned_hash(255, 255);
        assert!(h.coefficients().iter().all(|&c| (0..P).contains(&c)));
    }
}
