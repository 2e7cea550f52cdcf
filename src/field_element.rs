use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Prime modulus p.
pub(crate) const P: u16 = 257;

/// Lightweight field element wrapper for `F_257`.
///
/// Canonical representatives in `[0, 257)`. The table builder and the hash
/// algebra go through this type; the transform kernels use partially reduced
/// `i16` lanes instead and only meet `FieldElement` at their boundaries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldElement(pub u16);

impl FieldElement {
    pub const P: u16 = P;
    /// R = 2^16 for Montgomery reduction. Note R ≡ 1 (mod 257), so Montgomery
    /// form coincides with the canonical form.
    const R_BITS: u32 = 16;
    const R_MASK: u32 = (1u32 << Self::R_BITS) - 1;
    /// -P^{-1} mod R for P = 257, R = 2^16.
    const N_PRIME: u16 = 255;
    pub const BYTES: usize = 2;
    pub const MAX: u16 = P - 1;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    #[inline]
    #[must_use]
    pub const fn new(v: u16) -> Self {
        Self(v % P)
    }

    /// Canonicalize an arbitrary signed value, e.g. a centered table entry
    /// or a partially reduced transform coefficient.
    #[inline]
    #[must_use]
    pub fn from_i16(v: i16) -> Self {
        Self(i32::from(v).rem_euclid(i32::from(P)) as u16)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Centered representative in `(-p/2, p/2]`, the form the transform
    /// tables are stored in.
    #[inline]
    #[must_use]
    pub const fn centered(self) -> i16 {
        if self.0 > 128 {
            self.0 as i16 - P as i16
        } else {
            self.0 as i16
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_canonical(v: u16) -> bool {
        v < P
    }

    #[inline]
    #[must_use]
    pub const fn from_canonical(v: u16) -> Option<Self> {
        if Self::is_canonical(v) {
            Some(Self(v))
        } else {
            None
        }
    }

    #[must_use]
    pub fn pow(self, mut exp: u16) -> Self {
        let mut base = self;
        let mut acc = FieldElement::ONE;

        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base *= base;
            exp >>= 1;
        }
        acc
    }

    #[must_use]
    pub fn inv(self) -> Self {
        // Fermat's little theorem: a^(p-2) mod p for prime p.
        self.pow(P - 2)
    }

    /// Montgomery reduction for 16-bit modulus P = 257 with R = 2^16.
    #[inline]
    #[must_use]
    pub const fn montyred(x: u32) -> u16 {
        // m = (x * n') mod R
        let m = (x.wrapping_mul(Self::N_PRIME as u32)) & Self::R_MASK;

        // t = (x + m * P) / R
        let t = (x.wrapping_add(m * (Self::P as u32))) >> Self::R_BITS;
        let t16 = t as u16;

        if t16 >= Self::P {
            t16 - Self::P
        } else {
            t16
        }
    }
}

impl From<u16> for FieldElement {
    #[inline]
    fn from(v: u16) -> Self {
        FieldElement::new(v)
    }
}

impl From<FieldElement> for u16 {
    #[inline]
    fn from(fe: FieldElement) -> Self {
        fe.0
    }
}

impl Add for FieldElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let sum = self.0 + rhs.0;
        if sum >= Self::P {
            FieldElement(sum - P)
        } else {
            FieldElement(sum)
        }
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let prod = FieldElement::montyred(u32::from(self.0) * u32::from(rhs.0));
        FieldElement(prod)
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sub for FieldElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        if self.0 >= rhs.0 {
            FieldElement(self.0 - rhs.0)
        } else {
            FieldElement(self.0 + P - rhs.0)
        }
    }
}

impl SubAssign for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for FieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            FieldElement::ZERO
        } else {
            FieldElement(P - self.0)
        }
    }
}

// Optional arkworks-backed helpers for benchmarking and experimentation.
// The transform kernels do not rely on these; they provide a well-tested
// NTT over F_257 when the `ark-ntt` feature is enabled.
#[cfg(feature = "ark-ntt")]
mod ark_fft {
    use ark_ff::{fields::Fp64, MontBackend, MontConfig, PrimeField};
    use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};

    #[derive(MontConfig)]
    #[modulus = "257"]
    #[generator = "3"] // generator of order 256 in F_257
    pub struct F257Config;

    pub type F257 = Fp64<MontBackend<F257Config, 1>>;

    /// Two-adicity for F_257 (257 - 1 = 2^8).
    pub const TWO_ADICITY: u64 = 8;

    /// In-place forward NTT using arkworks domains (requires power-of-two len ≤ 256).
    pub fn ntt_in_place(values: &mut [F257]) {
        let domain = GeneralEvaluationDomain::<F257>::new(values.len())
            .expect("NTT length must be compatible with two-adicity 8");
        let transformed = domain.fft(values);
        values.copy_from_slice(&transformed);
    }

    /// In-place inverse NTT using arkworks domains (requires power-of-two len ≤ 256).
    pub fn intt_in_place(values: &mut [F257]) {
        let domain = GeneralEvaluationDomain::<F257>::new(values.len())
            .expect("NTT length must be compatible with two-adicity 8");
        let transformed = domain.ifft(values);
        values.copy_from_slice(&transformed);
    }

    /// Convert a coefficient (0..=256) into the F_257 element type.
    #[inline]
    pub fn coeff_to_field(c: u16) -> F257 {
        F257::from(u64::from(c))
    }

    /// Convert an F_257 element back into a coefficient (0..=256).
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn field_to_coeff(f: &F257) -> u16 {
        // into_bigint is canonical; still mask to be safe.
        let limbs = f.into_bigint().0;
        (limbs[0] % (super::P as u64)) as u16
    }
}

#[cfg(feature = "ark-ntt")]
pub use ark_fft::{
    coeff_to_field, field_to_coeff, intt_in_place, ntt_in_place, F257, F257Config, TWO_ADICITY,
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ops_wrap_at_the_modulus() {
        let a = FieldElement::new(250);
        let b = FieldElement::new(14);
        assert_eq!((a + b).value(), 7); // 264 mod 257
        assert_eq!((a - b).value(), 236);
        assert_eq!((b - a).value(), 21);
        assert_eq!((-b).value(), 243);
        assert_eq!((a * b).value(), 250 * 14 % 257);
    }

    #[test]
    fn centered_matches_definition() {
        assert_eq!(FieldElement::new(0).centered(), 0);
        assert_eq!(FieldElement::new(128).centered(), 128);
        assert_eq!(FieldElement::new(129).centered(), -128);
        assert_eq!(FieldElement::new(256).centered(), -1);
    }

    #[test]
    fn from_i16_canonicalizes_negatives() {
        assert_eq!(FieldElement::from_i16(-1).value(), 256);
        assert_eq!(FieldElement::from_i16(-257).value(), 0);
        assert_eq!(FieldElement::from_i16(257).value(), 0);
        assert_eq!(FieldElement::from_i16(383).value(), 126);
    }

    #[test]
    fn montyred_is_a_plain_mod_at_this_radix() {
        // R = 2^16 ≡ 1 (mod 257), so Montgomery reduction collapses to an
        // ordinary reduction: the radix itself maps to 1.
        assert_eq!(FieldElement::montyred(0), 0);
        assert_eq!(FieldElement::montyred(1 << 16), 1);
        assert_eq!(FieldElement::montyred(257 * 513), 0);
    }

    #[test]
    fn fermat_exponent_fixes_every_element() {
        // a^(p-1) = 1 and a^p = a for every nonzero a; together they walk
        // the whole square-and-multiply ladder.
        for v in 1..=256u16 {
            let a = FieldElement::new(v);
            assert_eq!(a.pow(P - 1), FieldElement::ONE, "v = {v}");
            assert_eq!(a.pow(P), a, "v = {v}");
        }
        assert_eq!(FieldElement::ZERO.pow(5), FieldElement::ZERO);
    }

    proptest! {
        #[test]
        fn mul_reduces_the_wide_product(a in 0u16..=256, b in 0u16..=256) {
            let prod = FieldElement::new(a) * FieldElement::new(b);
            prop_assert!(prod.value() < P);
            prop_assert_eq!(u32::from(prod.value()), u32::from(a) * u32::from(b) % 257);
        }

        #[test]
        fn centered_sums_canonicalize_like_field_adds(a in 0u16..=256, b in 0u16..=256) {
            // Adding centered representatives and canonicalizing must agree
            // with the field addition; this is what lets the transform defer
            // its reductions.
            let (fa, fb) = (FieldElement::new(a), FieldElement::new(b));
            let centered_sum = i32::from(fa.centered()) + i32::from(fb.centered());
            prop_assert_eq!(FieldElement::from_i16(centered_sum as i16), fa + fb);
        }

        #[test]
        fn centered_round_trips(a in 0u16..=256) {
            let fe = FieldElement::new(a);
            prop_assert_eq!(FieldElement::from_i16(fe.centered()), fe);
            prop_assert!(fe.centered() > -129 && fe.centered() <= 128);
        }

        #[test]
        fn inv_divides_out_and_neg_cancels(a in 1u16..=256, b in 1u16..=256) {
            let (fa, fb) = (FieldElement::new(a), FieldElement::new(b));
            prop_assert_eq!(fa * fb * fb.inv(), fa);
            prop_assert_eq!(fa + (-fa), FieldElement::ZERO);
        }
    }
}
