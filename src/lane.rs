//! 8-lane `i16` arithmetic over `Z_257` with deferred reduction.
//!
//! The transform works on groups of 8 coefficients, the natural brick of the
//! 512×8 lookup table. All operations are plain safe Rust over `[i16; 8]`;
//! the loops are shaped so the optimizer turns them into vector code.
//!
//! Reduction is deliberately partial: `q_reduce` only folds the high byte
//! into the low byte (256 ≡ -1 mod 257), which keeps values small enough for
//! two full butterfly layers without touching every lane. Callers of the
//! unreduced `+`/`-`/`*` operators own the magnitude bounds; the bounds for
//! the transform pipeline are tabulated by a test against the actual table
//! maxima.

use crate::P;
use core::array;
use core::ops::{Add, Mul, Sub};

pub(crate) const LANES: usize = 8;

/// One lane group of 8 coefficients.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Z8(pub [i16; LANES]);

impl Z8 {
    pub const ZERO: Self = Self([0; LANES]);

    pub fn from_slice(s: &[i16]) -> Self {
        Self(array::from_fn(|r| s[r]))
    }

    /// The butterfly primitive: `(a, b) → (a + b, a - b)`, lane-wise.
    #[inline]
    pub fn add_sub(a: Self, b: Self) -> (Self, Self) {
        (a + b, a - b)
    }

    #[inline]
    pub fn q_reduce(self) -> Self {
        Self(self.0.map(q_reduce))
    }

    #[inline]
    pub fn mod_p(self) -> Self {
        Self(self.0.map(mod_p))
    }

    /// Lane-wise multiplication by `2^s` ≡ ω^(8s).
    #[inline]
    pub fn shift(self, s: u32) -> Self {
        Self(self.0.map(|v| shift(v, s)))
    }

    /// Widening lane-wise multiply, folded back to a small representative.
    #[inline]
    pub fn safe_mult(self, rhs: Self) -> Self {
        Self(array::from_fn(|r| safe_mult(self.0[r], rhs.0[r])))
    }
}

impl Add for Z8 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(array::from_fn(|r| self.0[r] + rhs.0[r]))
    }
}

impl Sub for Z8 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(array::from_fn(|r| self.0[r] - rhs.0[r]))
    }
}

impl Mul for Z8 {
    type Output = Self;

    /// Plain lane multiply; products must fit `i16`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(array::from_fn(|r| self.0[r] * rhs.0[r]))
    }
}

/// Partial reduction: fold the high byte into the low byte using 256 ≡ -1.
///
/// Maps any `i16` into `[-127, 383]`. Not idempotent and not canonical; it
/// only buys headroom for the next butterfly layer.
#[inline]
pub(crate) fn q_reduce(v: i16) -> i16 {
    (v & 255) - (v >> 8)
}

/// Full reduction to the canonical range `[0, 257)`.
#[inline]
pub(crate) fn mod_p(v: i16) -> i16 {
    let r = q_reduce(q_reduce(v));
    if r < 0 {
        r + P
    } else {
        r
    }
}

/// Multiply by `2^s` mod 257: reduce, bit-shift, fold the wrapped bits back
/// negated (2^8 ≡ -1). Only s ∈ {2, 4, 6} occur in the transform.
#[inline]
pub(crate) fn shift(v: i16, s: u32) -> i16 {
    q_reduce(q_reduce(v) << s)
}

/// Multiply with a 32-bit intermediate, then fold back down.
///
/// Three folds bring any `i16 × i16` product into `[-64, 320]`; the extra
/// headroom over a 16-bit lane is what makes the multiply safe for the
/// partially reduced operands of the FFT-sum phase.
#[inline]
pub(crate) fn safe_mult(a: i16, b: i16) -> i16 {
    let t = i32::from(a) * i32::from(b);
    let t = (t & 255) - (t >> 8);
    let t = (t & 255) - (t >> 8);
    let t = (t & 255) - (t >> 8);
    t as i16
}
