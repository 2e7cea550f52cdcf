//! Naive reference implementations used to pin the vectorized paths.
//!
//! Everything here evaluates the transform straight from its definition
//! with canonical `FieldElement` arithmetic: no tables beyond ω powers, no
//! deferred reduction, one coefficient at a time (the scalar W = 1 view of
//! the lane ops).

use crate::field_element::FieldElement;
use crate::lane;
use crate::tables::{bit_reverse3, pi_key, OMEGA};
use crate::{INPUT_BLOCK_SIZE, N};

/// Fast modular exponentiation helper.
pub(crate) fn pow_mod(mut base: u32, mut exp: u32, modulus: u32) -> u16 {
    base %= modulus;
    let mut result: u32 = 1;
    while exp > 0 {
        if exp & 1 == 1 {
            result = (result * base) % modulus;
        }
        base = (base * base) % modulus;
        exp >>= 1;
    }
    result as u16
}

/// Canonicalize partially reduced transform output for comparisons.
pub(crate) fn canonicalize(values: &[i16]) -> Vec<u16> {
    values.iter().map(|&v| lane::mod_p(v) as u16).collect()
}

/// NTT of one octet straight from the definition:
/// `F_i = Σ_k x_k · ω^((2i+1)·k)` with bit `a` of byte `j` driving
/// coefficient `k = 8a + ρ(j)`, subtracted when the byte's sign bit is set.
pub(crate) fn naive_fft_octet(input: &[u8], sign: &[u8]) -> [u16; N] {
    assert_eq!(input.len(), 8);
    assert_eq!(sign.len(), 8);

    let mut out = [0u16; N];
    for (i, out_i) in out.iter_mut().enumerate() {
        let factor = 2 * (i as u32) + 1;
        let mut acc = FieldElement::ZERO;

        for (j, (&byte, &sgn)) in input.iter().zip(sign).enumerate() {
            for a in 0..8u32 {
                if (byte >> a) & 1 == 0 {
                    continue;
                }
                let k = 8 * a + bit_reverse3(j) as u32;
                let w = FieldElement::new(pow_mod(u32::from(OMEGA), factor * k, 257));
                if sgn & 1 == 1 {
                    acc -= w;
                } else {
                    acc += w;
                }
            }
        }

        *out_i = acc.value();
    }
    out
}

/// Whole-block hash straight from the definition: per-octet naive NTT,
/// folded against the public key with canonical arithmetic.
pub(crate) fn naive_compute(
    input: &[u8; INPUT_BLOCK_SIZE],
    sign: &[u8; INPUT_BLOCK_SIZE],
) -> [u16; N] {
    let key = pi_key();
    let mut out = [FieldElement::ZERO; N];

    for (octet, (ib, sb)) in input.chunks_exact(8).zip(sign.chunks_exact(8)).enumerate() {
        let f = naive_fft_octet(ib, sb);
        for (j, acc) in out.iter_mut().enumerate() {
            let k = FieldElement::from_i16(key[octet * N + j]);
            *acc += k * FieldElement::new(f[j]);
        }
    }

    out.map(FieldElement::value)
}
