//! Input blocks and the single-block compute paths.
//!
//! A block is 256 bytes = 2048 bits, one bit per NTT coefficient: bit `a`
//! of byte `j` within an octet drives coefficient `8a + ρ(j)` (ρ = 3-bit
//! reversal, fixed by the multiplier table). The optional sign block pairs
//! byte-for-byte with the input; the low bit of a sign byte negates the
//! contribution of its input byte's eight coefficients.

use crate::fft::{fft, fftsum};
use crate::hash::HashValue;
use crate::tables::pi_key;
use crate::{FFT_LEN, INPUT_BLOCK_SIZE, N};
use core::convert::TryFrom;

/// 256-byte input block: 32 octets of 8 bytes, one bit per coefficient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputBlock(pub [u8; INPUT_BLOCK_SIZE]);

impl InputBlock {
    /// Borrow the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; INPUT_BLOCK_SIZE] {
        &self.0
    }

    /// Consume and return the inner array.
    #[must_use]
    pub const fn into_inner(self) -> [u8; INPUT_BLOCK_SIZE] {
        self.0
    }
}

impl Default for InputBlock {
    fn default() -> Self {
        Self([0u8; INPUT_BLOCK_SIZE])
    }
}

impl From<[u8; INPUT_BLOCK_SIZE]> for InputBlock {
    fn from(bytes: [u8; INPUT_BLOCK_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for InputBlock {
    type Error = core::array::TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        value.try_into().map(Self)
    }
}

/// Per-byte negation selectors for a signed compute; same shape as the
/// input block. Only the low bit of each byte is inspected, so both 0x01
/// and 0xFF select negation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignBlock(pub [u8; INPUT_BLOCK_SIZE]);

impl SignBlock {
    /// Borrow the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; INPUT_BLOCK_SIZE] {
        &self.0
    }

    /// Consume and return the inner array.
    #[must_use]
    pub const fn into_inner(self) -> [u8; INPUT_BLOCK_SIZE] {
        self.0
    }
}

impl Default for SignBlock {
    fn default() -> Self {
        Self([0u8; INPUT_BLOCK_SIZE])
    }
}

impl From<[u8; INPUT_BLOCK_SIZE]> for SignBlock {
    fn from(bytes: [u8; INPUT_BLOCK_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for SignBlock {
    type Error = core::array::TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        value.try_into().map(Self)
    }
}

/// The all-zero sign block: the unsigned compute path.
pub static SIGN0: SignBlock = SignBlock([0u8; INPUT_BLOCK_SIZE]);

/// Hash one block with the fixed public key.
///
/// Equivalent to [`compute_signed`] with [`SIGN0`].
#[must_use]
pub fn compute(input: &InputBlock) -> HashValue {
    compute_signed(input, &SIGN0)
}

/// Hash one block with per-byte sign selectors.
///
/// Runs the FFT phase into a stack scratch buffer, then folds it against
/// the public key. No heap traffic; the result is canonical.
#[must_use]
pub fn compute_signed(input: &InputBlock, sign: &SignBlock) -> HashValue {
    let mut fftout = [0i16; FFT_LEN];
    fft(&input.0, &sign.0, &mut fftout);

    let mut out = [0i16; N];
    fftsum(pi_key(), &fftout, &mut out);
    HashValue::from_coefficients(out)
}
