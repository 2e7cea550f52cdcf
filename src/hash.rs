//! Element-wise mod-p algebra on hash values.
//!
//! A [`HashValue`] is the composable 1024-bit form of a SWIFFT output: 64
//! coefficients, each canonical in `[0, 257)`. Addition and subtraction are
//! the homomorphic operations — hashes of bit-disjoint inputs add
//! coefficient-wise. The compacted 512-bit digest form is produced by an
//! external collaborator and is deliberately not representable here, so it
//! can never be fed back into the algebra by accident.

use crate::field_element::FieldElement;
use crate::lane;
use crate::{N, OUTPUT_BLOCK_SIZE};
use core::ops::{AddAssign, MulAssign, SubAssign};

/// A composable 64-coefficient hash value.
///
/// Invariant: every coefficient is canonical in `[0, 257)`. All constructors
/// and operators preserve it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashValue(pub(crate) [i16; N]);

impl HashValue {
    pub const ZERO: Self = Self([0; N]);

    /// Every coefficient set to `c mod p` (the constant-set operation).
    /// Operands of p, 2p or −p are equivalent to zero.
    #[must_use]
    pub fn splat(c: i16) -> Self {
        Self([lane::mod_p(c); N])
    }

    /// Element-wise copy from another hash value.
    pub fn set(&mut self, other: &Self) {
        self.0 = other.0;
    }

    #[must_use]
    pub const fn coefficients(&self) -> &[i16; N] {
        &self.0
    }

    /// Wire form: 64 little-endian `i16` coefficients, 128 bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; OUTPUT_BLOCK_SIZE] {
        let mut bytes = [0u8; OUTPUT_BLOCK_SIZE];
        for (chunk, coeff) in bytes.chunks_exact_mut(2).zip(&self.0) {
            chunk.copy_from_slice(&coeff.to_le_bytes());
        }
        bytes
    }

    /// Decode the wire form, canonicalizing each coefficient mod p.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; OUTPUT_BLOCK_SIZE]) -> Self {
        let mut coeffs = [0i16; N];
        for (coeff, chunk) in coeffs.iter_mut().zip(bytes.chunks_exact(2)) {
            *coeff = lane::mod_p(i16::from_le_bytes([chunk[0], chunk[1]]));
        }
        Self(coeffs)
    }

    pub(crate) const fn from_coefficients(coeffs: [i16; N]) -> Self {
        Self(coeffs)
    }

    #[inline]
    fn zip_with(&mut self, rhs: &Self, op: impl Fn(FieldElement, FieldElement) -> FieldElement) {
        for (a, b) in self.0.iter_mut().zip(&rhs.0) {
            *a = op(fe(*a), fe(*b)).value() as i16;
        }
    }

    #[inline]
    fn for_each_with(&mut self, c: i16, op: impl Fn(FieldElement, FieldElement) -> FieldElement) {
        let operand = FieldElement::from_i16(c);
        for a in &mut self.0 {
            *a = op(fe(*a), operand).value() as i16;
        }
    }
}

impl Default for HashValue {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Canonical-coefficient view; cheap because the invariant guarantees the
/// value already is a field element.
#[inline]
fn fe(v: i16) -> FieldElement {
    debug_assert!((0..=256).contains(&v));
    FieldElement(v as u16)
}

impl AddAssign<&HashValue> for HashValue {
    fn add_assign(&mut self, rhs: &HashValue) {
        self.zip_with(rhs, |a, b| a + b);
    }
}

impl SubAssign<&HashValue> for HashValue {
    fn sub_assign(&mut self, rhs: &HashValue) {
        self.zip_with(rhs, |a, b| a - b);
    }
}

impl MulAssign<&HashValue> for HashValue {
    /// Element-wise product; widens through the field multiply, so canonical
    /// operands can never overflow a lane.
    fn mul_assign(&mut self, rhs: &HashValue) {
        self.zip_with(rhs, |a, b| a * b);
    }
}

impl AddAssign<i16> for HashValue {
    fn add_assign(&mut self, c: i16) {
        self.for_each_with(c, |a, b| a + b);
    }
}

impl SubAssign<i16> for HashValue {
    fn sub_assign(&mut self, c: i16) {
        self.for_each_with(c, |a, b| a - b);
    }
}

impl MulAssign<i16> for HashValue {
    fn mul_assign(&mut self, c: i16) {
        self.for_each_with(c, |a, b| a * b);
    }
}
