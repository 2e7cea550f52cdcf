//! Multi-block drivers.
//!
//! Every single-block operation has a `*_multiple` form over slices of
//! independent blocks. Above the parallelization threshold the blocks are
//! fanned out on the rayon pool (`parallel` feature, on by default);
//! otherwise, and always without the feature, they run serially. Each block
//! writes only its own output slot, so the batched result is bit-identical
//! to the sequential one.

use crate::compress::{compute, compute_signed, InputBlock, SignBlock};
use crate::fft::{fft, fftsum, FftBuffer};
use crate::hash::HashValue;
use crate::tables::pi_key;
use crate::N;
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch size above which `*_multiple` fans out to worker threads.
pub const DEFAULT_PARALLELIZATION_THRESHOLD: usize = 8;

/// The effective parallelization threshold.
///
/// Read once per process from `SWIFFT_BLOCKS_PARALLELIZATION_THRESHOLD`,
/// falling back to [`DEFAULT_PARALLELIZATION_THRESHOLD`].
#[must_use]
pub fn parallelization_threshold() -> usize {
    static THRESHOLD: OnceLock<usize> = OnceLock::new();
    *THRESHOLD.get_or_init(|| {
        std::env::var("SWIFFT_BLOCKS_PARALLELIZATION_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PARALLELIZATION_THRESHOLD)
    })
}

#[cfg(feature = "parallel")]
fn for_each_block<T, F>(outputs: &mut [T], op: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Send + Sync,
{
    if outputs.len() > parallelization_threshold() {
        outputs
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, out)| op(i, out));
    } else {
        for (i, out) in outputs.iter_mut().enumerate() {
            op(i, out);
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn for_each_block<T, F>(outputs: &mut [T], op: F)
where
    F: Fn(usize, &mut T),
{
    for (i, out) in outputs.iter_mut().enumerate() {
        op(i, out);
    }
}

/// Hash independent blocks with the fixed key.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn compute_multiple(inputs: &[InputBlock], outputs: &mut [HashValue]) {
    assert_eq!(inputs.len(), outputs.len(), "one output per block");
    for_each_block(outputs, |i, out| *out = compute(&inputs[i]));
}

/// Hash independent blocks with per-block sign selectors.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn compute_multiple_signed(
    inputs: &[InputBlock],
    signs: &[SignBlock],
    outputs: &mut [HashValue],
) {
    assert_eq!(inputs.len(), outputs.len(), "one output per block");
    assert_eq!(inputs.len(), signs.len(), "one sign block per block");
    for_each_block(outputs, |i, out| *out = compute_signed(&inputs[i], &signs[i]));
}

/// Run the FFT phase over independent blocks.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn fft_multiple(inputs: &[InputBlock], signs: &[SignBlock], fftouts: &mut [FftBuffer]) {
    assert_eq!(inputs.len(), fftouts.len(), "one FFT buffer per block");
    assert_eq!(inputs.len(), signs.len(), "one sign block per block");
    for_each_block(fftouts, |i, out| fft(&inputs[i].0, &signs[i].0, out));
}

/// Fold FFT buffers of independent blocks against the public key.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn fftsum_multiple(fftouts: &[FftBuffer], outputs: &mut [HashValue]) {
    assert_eq!(fftouts.len(), outputs.len(), "one output per FFT buffer");
    for_each_block(outputs, |i, out| {
        let mut coeffs = [0i16; N];
        fftsum(pi_key(), &fftouts[i], &mut coeffs);
        *out = HashValue::from_coefficients(coeffs);
    });
}

/// Element-wise copy, per block.
pub fn set_multiple(outputs: &mut [HashValue], operands: &[HashValue]) {
    assert_eq!(outputs.len(), operands.len(), "one operand per block");
    for_each_block(outputs, |i, out| out.set(&operands[i]));
}

/// Element-wise addition, per block.
pub fn add_multiple(outputs: &mut [HashValue], operands: &[HashValue]) {
    assert_eq!(outputs.len(), operands.len(), "one operand per block");
    for_each_block(outputs, |i, out| *out += &operands[i]);
}

/// Element-wise subtraction, per block.
pub fn sub_multiple(outputs: &mut [HashValue], operands: &[HashValue]) {
    assert_eq!(outputs.len(), operands.len(), "one operand per block");
    for_each_block(outputs, |i, out| *out -= &operands[i]);
}

/// Element-wise multiplication, per block.
pub fn mul_multiple(outputs: &mut [HashValue], operands: &[HashValue]) {
    assert_eq!(outputs.len(), operands.len(), "one operand per block");
    for_each_block(outputs, |i, out| *out *= &operands[i]);
}

/// Constant set, one scalar per block.
pub fn const_set_multiple(outputs: &mut [HashValue], operands: &[i16]) {
    assert_eq!(outputs.len(), operands.len(), "one operand per block");
    for_each_block(outputs, |i, out| *out = HashValue::splat(operands[i]));
}

/// Constant addition, one scalar per block.
pub fn const_add_multiple(outputs: &mut [HashValue], operands: &[i16]) {
    assert_eq!(outputs.len(), operands.len(), "one operand per block");
    for_each_block(outputs, |i, out| *out += operands[i]);
}

/// Constant subtraction, one scalar per block.
pub fn const_sub_multiple(outputs: &mut [HashValue], operands: &[i16]) {
    assert_eq!(outputs.len(), operands.len(), "one operand per block");
    for_each_block(outputs, |i, out| *out -= operands[i]);
}

/// Constant multiplication, one scalar per block.
pub fn const_mul_multiple(outputs: &mut [HashValue], operands: &[i16]) {
    assert_eq!(outputs.len(), operands.len(), "one operand per block");
    for_each_block(outputs, |i, out| *out *= operands[i]);
}
