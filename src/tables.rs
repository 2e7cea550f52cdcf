//! Precomputed constant tables for the transform.
//!
//! Everything algebraic is fixed at compile time from the 128th root of
//! unity ω = 42 (ω⁸ = 2, ω¹⁶ = 4 mod 257). The public key is materialized
//! once per process from the fractional decimal digits of π.
//!
//! Table entries use centered representatives in `(-p/2, p/2]` so that the
//! load-time lane products of the FFT phase stay well inside `i16`.

use crate::field_element::FieldElement;
use crate::FFT_LEN;
use std::sync::OnceLock;

/// 128th root of unity mod 257 (order exactly 128).
pub(crate) const OMEGA: u16 = 42;

/// Twist rows for the butterfly layers: `MULTIPLIERS[k][r]` is the centered
/// value of ω^((2r+1)·ρ(k)) with ρ the 3-bit reversal. Row 0 is the
/// identity. The bit reversal makes the natural-order butterfly sequence
/// produce transform coefficients in natural order.
pub(crate) const MULTIPLIERS: [[i16; 8]; 8] = build_multipliers();

/// `FFT_TABLE[(s << 8) | b]` is the 8-point sub-NTT of the LSB-first bit
/// expansion of byte `b`, negated mod p when the sign bit `s` is set.
pub(crate) const FFT_TABLE: [[i16; 8]; 512] = build_fft_table();

/// 3-bit reversal: 0↔0, 1↔4, 2↔2, 3↔6, 5↔5, 7↔7.
pub(crate) const fn bit_reverse3(k: usize) -> usize {
    ((k & 1) << 2) | (k & 2) | ((k >> 2) & 1)
}

const fn mul_mod(a: u16, b: u16) -> u16 {
    ((a as u32 * b as u32) % 257) as u16
}

const fn pow_omega(exp: u32) -> u16 {
    let mut e = exp & 127;
    let mut result: u16 = 1;
    let mut base: u16 = OMEGA;

    while e > 0 {
        if (e & 1) != 0 {
            result = mul_mod(result, base);
        }
        base = mul_mod(base, base);
        e >>= 1;
    }

    result
}

const fn build_multipliers() -> [[i16; 8]; 8] {
    let mut table = [[0i16; 8]; 8];
    let mut k = 0;
    while k < 8 {
        let col = bit_reverse3(k) as u32;
        let mut r = 0;
        while r < 8 {
            table[k][r] = FieldElement::new(pow_omega((2 * r as u32 + 1) * col)).centered();
            r += 1;
        }
        k += 1;
    }
    table
}

const fn build_fft_table() -> [[i16; 8]; 512] {
    let mut table = [[0i16; 8]; 512];
    let mut b: usize = 0;
    while b < 256 {
        let mut r: usize = 0;
        while r < 8 {
            // T[b]_r = Σ_a bit_a(b) · ω^(8·(2r+1)·a); ω⁸ = 2, so the terms
            // are signed powers of two.
            let mut acc: u16 = 0;
            let mut a: usize = 0;
            while a < 8 {
                if (b >> a) & 1 == 1 {
                    acc = (acc + pow_omega((8 * (2 * r + 1) * a) as u32)) % 257;
                }
                a += 1;
            }
            table[b][r] = FieldElement::new(acc).centered();
            table[256 + b][r] = FieldElement::new((257 - acc) % 257).centered();
            r += 1;
        }
        b += 1;
    }
    table
}

static PI_KEY: OnceLock<[i16; FFT_LEN]> = OnceLock::new();

/// The fixed public key: `N·M` centered coefficients drawn from the
/// fractional decimal digits of π, four digits per coefficient, mod 257.
///
/// Computed once per process; every compute path goes through this
/// accessor, so the key can never be observed uninitialized.
#[must_use]
pub fn pi_key() -> &'static [i16; FFT_LEN] {
    PI_KEY.get_or_init(|| {
        let digits = pi_decimal_digits(1 + 4 * FFT_LEN);
        let mut key = [0i16; FFT_LEN];
        for (i, coeff) in key.iter_mut().enumerate() {
            // Skip the leading 3; group the fraction in blocks of four.
            let d = &digits[1 + 4 * i..5 + 4 * i];
            let v = (u16::from(d[0]) * 1000
                + u16::from(d[1]) * 100
                + u16::from(d[2]) * 10
                + u16::from(d[3]))
                % 257;
            *coeff = FieldElement::new(v).centered();
        }
        key
    })
}

/// First `count` decimal digits of π (including the leading 3), via an
/// integer fixed-point evaluation of
/// `π = 2 + 1/3·(2 + 2/5·(2 + 3/7·(2 + …)))`
/// with guard digits absorbing the truncation error.
pub(crate) fn pi_decimal_digits(count: usize) -> Vec<u8> {
    const GUARD: usize = 12;
    let scaled = count + GUARD;
    // log2(10) ≈ 3.322; one extra limb of headroom for the ×k step.
    let limbs = (scaled * 3322 / 1000 + 64) / 64 + 1;
    // The truncated tail contributes less than Π i/(2i+1) < 2^-terms.
    let terms = (scaled * 3322 / 1000 + 16) as u64;

    // two_s = 2·10^scaled
    let mut two_s = vec![0u64; limbs];
    two_s[0] = 2;
    for _ in 0..scaled {
        mul_small(&mut two_s, 10);
    }

    // h_k = 2 + k/(2k+1)·h_{k+1}, evaluated inward-out at fixed point.
    let mut h = two_s.clone();
    for k in (1..=terms).rev() {
        mul_small(&mut h, k);
        div_small(&mut h, 2 * k + 1);
        add_assign(&mut h, &two_s);
    }

    // h ≈ π·10^scaled; peel decimal digits least-significant first.
    let mut digits = Vec::with_capacity(scaled + 1);
    while h.iter().any(|&limb| limb != 0) {
        digits.push(div_small(&mut h, 10) as u8);
    }
    digits.reverse();
    digits.truncate(count);
    digits
}

fn mul_small(x: &mut [u64], m: u64) {
    let mut carry: u128 = 0;
    for limb in x.iter_mut() {
        let cur = u128::from(*limb) * u128::from(m) + carry;
        *limb = cur as u64;
        carry = cur >> 64;
    }
    debug_assert_eq!(carry, 0, "limb headroom exhausted");
}

fn div_small(x: &mut [u64], d: u64) -> u64 {
    let mut rem: u64 = 0;
    for limb in x.iter_mut().rev() {
        let cur = (u128::from(rem) << 64) | u128::from(*limb);
        *limb = (cur / u128::from(d)) as u64;
        rem = (cur % u128::from(d)) as u64;
    }
    rem
}

fn add_assign(x: &mut [u64], y: &[u64]) {
    let mut carry = false;
    for (a, b) in x.iter_mut().zip(y) {
        let (s1, c1) = a.overflowing_add(*b);
        let (s2, c2) = s1.overflowing_add(u64::from(carry));
        *a = s2;
        carry = c1 || c2;
    }
    debug_assert!(!carry, "limb headroom exhausted");
}
