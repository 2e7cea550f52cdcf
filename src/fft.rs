//! The two phases of the SWIFFT transform.
//!
//! The FFT phase turns every octet of 8 input bytes into 64 NTT
//! coefficients: eight table lookups twisted by the multiplier rows, three
//! butterfly layers with partial reductions in between, and a final
//! `q_reduce` sweep. The FFT-sum phase folds the coefficients of all octets
//! against a key vector into 64 canonical outputs.
//!
//! Both phases use the same natural interleave: coefficient `j` of octet
//! `i` lives at index `64·i + j`.

use crate::lane::{Z8, LANES};
use crate::tables::{FFT_TABLE, MULTIPLIERS};
use crate::{FFT_LEN, N};

/// Input bytes consumed per 64-coefficient octet.
const OCTET_BYTES: usize = 8;

/// FFT output for one whole input block.
pub type FftBuffer = [i16; FFT_LEN];

#[inline]
fn table_index(sign: u8, byte: u8) -> usize {
    (usize::from(sign & 1) << 8) | usize::from(byte)
}

#[inline]
fn butterfly(v: &mut [Z8; 8], i: usize, j: usize) {
    let (a, b) = Z8::add_sub(v[i], v[j]);
    v[i] = a;
    v[j] = b;
}

/// The FFT phase: expand `8·m` input bytes (with their sign bytes) into
/// `64·m` partially reduced coefficients.
///
/// Every output lies in `[-127, 383]` and is congruent mod 257 to the NTT
/// of the sign-adjusted bit expansion of the input. Only the low bit of
/// each sign byte is inspected.
///
/// # Panics
///
/// Panics if `input` and `sign` differ in length, if the length is not a
/// multiple of 8, or if `fftout` is not exactly 8 coefficients per input
/// byte.
pub fn fft(input: &[u8], sign: &[u8], fftout: &mut [i16]) {
    assert_eq!(input.len(), sign.len(), "input and sign must pair up");
    assert_eq!(input.len() % OCTET_BYTES, 0, "input must be whole octets");
    assert_eq!(fftout.len(), input.len() * LANES, "output must hold N coefficients per octet");

    for ((inp, sgn), out) in input
        .chunks_exact(OCTET_BYTES)
        .zip(sign.chunks_exact(OCTET_BYTES))
        .zip(fftout.chunks_exact_mut(N))
    {
        fft_octet(inp, sgn, out);
    }
}

fn fft_octet(input: &[u8], sign: &[u8], out: &mut [i16]) {
    // Load: the table entry already is the 8-point sub-NTT of the byte's
    // bits; the multiplier row twists it for its position in the 64-point
    // transform. Row 0 is the identity. The twist products never reach the
    // i16 edge (tabulated in the tests below), so a plain multiply is safe.
    let mut v: [Z8; 8] = core::array::from_fn(|k| {
        let entry = Z8(FFT_TABLE[table_index(sign[k], input[k])]);
        if k == 0 {
            entry
        } else {
            entry * Z8(MULTIPLIERS[k])
        }
    });

    butterfly(&mut v, 0, 1);
    butterfly(&mut v, 2, 3);
    butterfly(&mut v, 4, 5);
    butterfly(&mut v, 6, 7);

    v[2] = v[2].q_reduce();
    v[3] = v[3].shift(4);
    v[6] = v[6].q_reduce();
    v[7] = v[7].shift(4);

    butterfly(&mut v, 0, 2);
    butterfly(&mut v, 1, 3);
    butterfly(&mut v, 4, 6);
    butterfly(&mut v, 5, 7);

    v[4] = v[4].q_reduce();
    v[5] = v[5].shift(2);
    v[6] = v[6].shift(4);
    v[7] = v[7].shift(6);

    butterfly(&mut v, 0, 4);
    butterfly(&mut v, 1, 5);
    butterfly(&mut v, 2, 6);
    butterfly(&mut v, 3, 7);

    for (k, vk) in v.iter().enumerate() {
        out[LANES * k..LANES * (k + 1)].copy_from_slice(&vk.q_reduce().0);
    }
}

/// The FFT-sum phase: `out[j] = (Σ_i fftout[64·i + j] · key[64·i + j]) mod p`.
///
/// `key` holds centered coefficients in the same interleave the FFT phase
/// wrote; `fftout` holds its partially reduced output. Every result
/// coefficient is canonical in `[0, 257)`. The accumulator bound holds for
/// up to 32 octets, the whole-block case.
///
/// # Panics
///
/// Panics if `key` and `fftout` differ in length or the length is not a
/// multiple of 64.
pub fn fftsum(key: &[i16], fftout: &[i16], out: &mut [i16; N]) {
    assert_eq!(key.len(), fftout.len(), "key and fftout must pair up");
    assert_eq!(key.len() % N, 0, "key must be whole octet rows");

    let mut acc = [Z8::ZERO; N / LANES];
    for (krow, frow) in key.chunks_exact(N).zip(fftout.chunks_exact(N)) {
        for ((a, kc), fc) in acc
            .iter_mut()
            .zip(krow.chunks_exact(LANES))
            .zip(frow.chunks_exact(LANES))
        {
            let prod = Z8::from_slice(fc).safe_mult(Z8::from_slice(kc));
            *a = *a + prod.q_reduce();
        }
    }

    for (j, a) in acc.iter().enumerate() {
        out[LANES * j..LANES * (j + 1)].copy_from_slice(&a.mod_p().0);
    }
}
