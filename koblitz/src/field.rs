// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{256} - 2\^{32} - 977\\).
//!
//! The `field` module provides `koblitz::field::FieldElement`, which
//! wraps the 64-bit backend
//! `FieldElement5x52` together with a _magnitude_: an upper bound on how
//! far each limb has grown past its reduced width.
//!
//! Reduction is lazy.  Additions, negations and small multiples raise
//! the magnitude instead of carrying, and the caller decides when to pay
//! for a reduction:
//!
//! * multiplication and squaring require both operands to have
//!   magnitude at most 8, and return magnitude 1;
//! * `negate(m)` must be told a bound `m` on the input's magnitude, and
//!   returns magnitude `m + 1`;
//! * equality and byte serialization are only defined on _normalized_
//!   elements, i.e. after `normalize()`.
//!
//! The magnitude and the normalized flag are carried in the value, and
//! every operation checks its precondition with a `debug_assert!`, so a
//! formula with a miscounted magnitude fails loudly in test builds
//! instead of silently producing a wrong point.

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use crate::backend::serial::u64::field::FieldElement5x52;
use crate::errors::Error;

/// Largest magnitude any `FieldElement` may reach before it must be
/// reduced.
pub const MAX_MAGNITUDE: u32 = 32;

/// Largest operand magnitude accepted by multiplication and squaring.
pub const MAX_MUL_MAGNITUDE: u32 = 8;

/// An element of \\(\mathbb Z / p\\) in lazily reduced form.
#[derive(Copy, Clone)]
pub struct FieldElement {
    value: FieldElement5x52,
    magnitude: u32,
    normalized: bool,
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "FieldElement{{ value: {}, magnitude: {}, normalized: {} }}",
            hex::encode(self.value.normalize().to_bytes()),
            self.magnitude,
            self.normalized
        )
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality between two `FieldElement`s.  Both must be
    /// normalized.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        debug_assert!(
            self.normalized && other.normalized,
            "field elements must be normalized before comparison"
        );
        self.value.ct_eq(&other.value)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &FieldElement, b: &FieldElement, choice: Choice) -> FieldElement {
        FieldElement {
            value: FieldElement5x52::conditional_select(&a.value, &b.value, choice),
            magnitude: a.magnitude.max(b.magnitude),
            normalized: a.normalized && b.normalized,
        }
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.value.0.zeroize();
        self.magnitude = 1;
        self.normalized = true;
    }
}

impl Default for FieldElement {
    fn default() -> FieldElement {
        FieldElement::ZERO
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> FieldElement {
        FieldElement::reduced(FieldElement5x52::from_u64(value))
    }
}

impl FieldElement {
    /// The additive identity.
    pub const ZERO: FieldElement = FieldElement::reduced(FieldElement5x52::ZERO);

    /// The multiplicative identity.
    pub const ONE: FieldElement = FieldElement::reduced(FieldElement5x52::ONE);

    const fn reduced(value: FieldElement5x52) -> FieldElement {
        FieldElement {
            value,
            magnitude: 1,
            normalized: true,
        }
    }

    const fn unreduced(value: FieldElement5x52, magnitude: u32) -> FieldElement {
        FieldElement {
            value,
            magnitude,
            normalized: false,
        }
    }

    /// Parse 32 big-endian bytes, rejecting values that are not less
    /// than \\(p\\).
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<FieldElement> {
        let value = FieldElement5x52::from_bytes(bytes);
        let overflow = value.get_overflow();
        CtOption::new(FieldElement::reduced(value), !overflow)
    }

    /// Interpret a big-endian byte slice as a field element.
    ///
    /// Only the 32 least significant bytes are used; longer inputs are
    /// truncated.  The result has magnitude 1 but is not normalized,
    /// since the integer may lie in \\([p, 2\^{256})\\).
    pub fn from_be_slice(bytes: &[u8]) -> FieldElement {
        let tail = &bytes[bytes.len().saturating_sub(32)..];
        let mut buf = [0u8; 32];
        buf[32 - tail.len()..].copy_from_slice(tail);
        FieldElement::unreduced(FieldElement5x52::from_bytes(&buf), 1)
    }

    /// Parse a big-endian hexadecimal string of at most 64 digits.  An
    /// odd number of digits is accepted as if left-padded with `0`.
    pub fn from_hex(hex_str: &str) -> Result<FieldElement, Error> {
        let bytes = if hex_str.len() % 2 == 1 {
            hex::decode(format!("0{}", hex_str))?
        } else {
            hex::decode(hex_str)?
        };
        if bytes.len() > 32 {
            return Err(Error::FieldElementTooLong {
                length: bytes.len(),
            });
        }
        Ok(FieldElement::from_be_slice(&bytes))
    }

    /// Serialize to 32 big-endian bytes.  The element must be
    /// normalized.
    pub fn to_bytes(&self) -> [u8; 32] {
        debug_assert!(
            self.normalized,
            "field elements must be normalized before serialization"
        );
        self.value.to_bytes()
    }

    /// The current bound on limb growth.
    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// Whether the element is in canonical form.
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Fully reduce into \\([0, p)\\).
    pub fn normalize(&self) -> FieldElement {
        FieldElement::reduced(self.value.normalize())
    }

    /// Reduce to magnitude 1 without producing a canonical value.
    pub fn normalize_weak(&self) -> FieldElement {
        FieldElement {
            value: self.value.normalize_weak(),
            magnitude: 1,
            normalized: self.normalized,
        }
    }

    /// Whether the element is congruent to zero.  Valid at any legal
    /// magnitude.
    pub fn is_zero(&self) -> bool {
        self.value.normalizes_to_zero().into()
    }

    /// Compute \\(-x\\), where `magnitude` bounds the magnitude of
    /// `self`.  The result has magnitude `magnitude + 1`.
    pub fn negate(&self, magnitude: u32) -> FieldElement {
        debug_assert!(
            self.magnitude <= magnitude,
            "negate: claimed magnitude {} below actual {}",
            magnitude,
            self.magnitude
        );
        debug_assert!(magnitude < MAX_MAGNITUDE);
        FieldElement::unreduced(self.value.negate(magnitude), magnitude + 1)
    }

    /// Multiply by a small integer, scaling the magnitude by `k`.
    pub fn mul_int(&self, k: u32) -> FieldElement {
        let magnitude = self.magnitude * k;
        debug_assert!(magnitude <= MAX_MAGNITUDE);
        FieldElement::unreduced(self.value.mul_single(k), magnitude)
    }

    /// Compute \\(x\^2\\).
    pub fn square(&self) -> FieldElement {
        debug_assert!(self.magnitude <= MAX_MUL_MAGNITUDE);
        FieldElement::unreduced(self.value.square(), 1)
    }

    /// Compute \\(x\^{2\^k}\\) by repeated squaring.
    pub fn pow2k(&self, k: usize) -> FieldElement {
        let mut x = *self;
        for _ in 0..k {
            x = x.square();
        }
        x
    }

    /// Compute \\(x\^{-1} = x\^{p-2}\\).  Zero maps to zero.
    pub fn invert(&self) -> FieldElement {
        // The binary representation of p - 2 is made of blocks of ones
        // of lengths 223, 22, 1, 2 and 1.  Build x^(2^n - 1) for
        // n = 1, 2, 3, 6, 9, 11, 22, 44, 88, 176, 220, 223, then slide
        // through the blocks.
        let x2 = &self.square() * self;
        let x3 = &x2.square() * self;
        let x6 = &x3.pow2k(3) * &x3;
        let x9 = &x6.pow2k(3) * &x3;
        let x11 = &x9.pow2k(2) * &x2;
        let x22 = &x11.pow2k(11) * &x11;
        let x44 = &x22.pow2k(22) * &x22;
        let x88 = &x44.pow2k(44) * &x44;
        let x176 = &x88.pow2k(88) * &x88;
        let x220 = &x176.pow2k(44) * &x44;
        let x223 = &x220.pow2k(3) * &x3;

        let t = &x223.pow2k(23) * &x22;
        let t = &t.pow2k(5) * self;
        let t = &t.pow2k(3) * &x2;
        &t.pow2k(2) * self
    }

    /// Invert every element of `inputs` in place with a single field
    /// inversion (Montgomery's trick).
    ///
    /// All inputs must be nonzero and have magnitude at most 8.  The
    /// outputs have magnitude 1 and are not normalized.
    pub fn batch_invert(inputs: &mut [FieldElement]) {
        let mut scratch = vec![FieldElement::ONE; inputs.len()];

        // Keep an accumulator of all of the previous products.
        let mut acc = FieldElement::ONE;
        for (input, prefix) in inputs.iter().zip(scratch.iter_mut()) {
            *prefix = acc;
            acc = &acc * input;
        }

        debug_assert!(!acc.is_zero(), "batch_invert: zero input");

        // acc is now 1 / (x_0 * ... * x_{n-1}); peel the inputs off in
        // reverse.
        acc = acc.invert();
        for (input, prefix) in inputs.iter_mut().rev().zip(scratch.into_iter().rev()) {
            let tmp = &acc * &*input;
            *input = &acc * &prefix;
            acc = tmp;
        }
    }
}

// ------------------------------------------------------------------------
// Arithmetic
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    /// Magnitudes add.
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        let magnitude = self.magnitude + rhs.magnitude;
        debug_assert!(magnitude <= MAX_MAGNITUDE);
        FieldElement::unreduced(self.value.add(&rhs.value), magnitude)
    }
}

define_add_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    /// Computed as `self + (-rhs)`; the result has magnitude
    /// `self.magnitude() + rhs.magnitude() + 1`.
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        self + &rhs.negate(rhs.magnitude)
    }
}

define_sub_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        debug_assert!(
            self.magnitude <= MAX_MUL_MAGNITUDE && rhs.magnitude <= MAX_MUL_MAGNITUDE,
            "mul: operand magnitudes {} and {} exceed {}",
            self.magnitude,
            rhs.magnitude,
            MAX_MUL_MAGNITUDE
        );
        FieldElement::unreduced(self.value.mul(&rhs.value), 1)
    }
}

define_mul_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);

impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;

    /// Negate using the tracked magnitude as the bound.
    fn neg(self) -> FieldElement {
        self.negate(self.magnitude)
    }
}

define_neg_variant!(Type = FieldElement);
