#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::all, clippy::pedantic))]
#![cfg_attr(
    not(test),
    allow(
        clippy::module_name_repetitions,
        clippy::missing_panics_doc,
        clippy::inline_always,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )
)]
//! Vectorized SWIFFT compression function.
//!
//! SWIFFT maps a 2048-bit input block (optionally accompanied by per-byte
//! sign selectors) to a 1024-bit output over `Z_257[x]/(x^64 + 1)`. The
//! output is a sequence of 64 coefficients and is additively composable:
//! hashes of bit-disjoint inputs add coefficient-wise mod 257.
//!
//! The transform runs in two phases. The FFT phase expands every octet of
//! 8 input bytes into 64 number-theoretic-transform coefficients through a
//! 512-entry (sign, byte) lookup table and three butterfly layers with
//! deferred reductions. The FFT-sum phase folds all `N * M` coefficients
//! against the fixed public key into 64 canonical output coefficients.
//!
//! ```
//! use swifft_core::{compute, InputBlock};
//!
//! let block = InputBlock([0u8; swifft_core::INPUT_BLOCK_SIZE]);
//! let hash = compute(&block);
//! assert!(hash.coefficients().iter().all(|&c| (0..257i16).contains(&c)));
//! ```

/// Polynomial dimension: coefficients per output hash.
pub const N: usize = 64;
/// Octets per input block; the FFT buffer holds `N * M` coefficients.
pub const M: usize = 32;
/// The SWIFFT prime.
pub const P: i16 = 257;
/// Bytes per input (and sign) block: one bit per coefficient.
pub const INPUT_BLOCK_SIZE: usize = N * M / 8;
/// Bytes per composable hash value: 64 little-endian `i16` coefficients.
pub const OUTPUT_BLOCK_SIZE: usize = N * 2;
/// Coefficients produced by the FFT phase for a whole block.
pub const FFT_LEN: usize = N * M;

pub mod batch;
pub mod compress;
pub mod fft;
pub mod field_element;
pub mod hash;
pub(crate) mod lane;
pub mod pattern;
pub(crate) mod tables;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::batch::{
    add_multiple, compute_multiple, compute_multiple_signed, const_add_multiple,
    const_mul_multiple, const_set_multiple, const_sub_multiple, fft_multiple, fftsum_multiple,
    mul_multiple, parallelization_threshold, set_multiple, sub_multiple,
    DEFAULT_PARALLELIZATION_THRESHOLD,
};
pub use crate::compress::{compute, compute_signed, InputBlock, SignBlock, SIGN0};
pub use crate::fft::{fft, fftsum, FftBuffer};
pub use crate::field_element::FieldElement;
pub use crate::hash::HashValue;
pub use crate::tables::pi_key;
