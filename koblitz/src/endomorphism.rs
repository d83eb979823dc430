// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! The GLV endomorphism of secp256k1.
//!
//! Because \\(p \equiv 1 \pmod 3\\), the field has a primitive cube root
//! of unity \\(\beta\\), and the map
//! $$
//!     \phi(x, y) = (\beta x, y)
//! $$
//! sends curve points to curve points.  On the prime-order group it acts
//! as multiplication by a cube root of unity \\(\lambda\\) modulo
//! \\(n\\): \\(\phi(P) = \lambda P\\).  Evaluating \\(\phi\\) costs one
//! field multiplication.
//!
//! Given a scalar \\(k\\), [`Endomorphism::split`] finds
//! \\(k\_1, k\_2\\) of about 128 bits with
//! \\(k \equiv k\_1 + k\_2 \lambda \pmod n\\), so that
//! \\(kP = k\_1 P + k\_2 \phi(P)\\) can be computed with a single
//! 128-step double-and-add loop over both halves at once.
//!
//! # The split
//!
//! The lattice \\(\\{(x, y) : x + y\lambda \equiv 0 \pmod n\\}\\) has the
//! short basis \\(v\_1 = (a\_1, b\_1)\\), \\(v\_2 = (a\_2, b\_2)\\) found with
//! the extended Euclidean algorithm (Guide to Elliptic Curve
//! Cryptography, Algorithm 3.74).  Writing \\((k, 0)\\) in that basis
//! and rounding the coefficients,
//! $$
//!     c\_1 = \left\lfloor \frac{b\_2 k}{n} \right\rceil, \qquad
//!     c\_2 = \left\lfloor \frac{-b\_1 k}{n} \right\rceil,
//! $$
//! gives the closest lattice vector \\(c\_1 v\_1 + c\_2 v\_2\\), and the
//! difference
//! $$
//!     k\_1 = k - c\_1 a\_1 - c\_2 a\_2, \qquad
//!     k\_2 = -c\_1 b\_1 - c\_2 b\_2
//! $$
//! is short: \\(|k\_i| \le (|v\_1| + |v\_2|)/2 < 2\^{128}\\).  Either half
//! may be negative; the sign is applied to the point instead.

use num_bigint::{BigInt, BigUint, Sign};

use crate::constants;
use crate::field::FieldElement;
use crate::jacobian::JacobianPoint;

/// The decomposition \\(k \equiv k\_1 + k\_2 \lambda \pmod n\\).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndomorphismSplit {
    pub k1: BigInt,
    pub k2: BigInt,
}

impl EndomorphismSplit {
    /// \\(|k\_1|\\) as big-endian bytes.
    pub fn k1_magnitude(&self) -> Vec<u8> {
        self.k1.magnitude().to_bytes_be()
    }

    /// \\(|k\_2|\\) as big-endian bytes.
    pub fn k2_magnitude(&self) -> Vec<u8> {
        self.k2.magnitude().to_bytes_be()
    }

    /// Whether \\(k\_1 < 0\\).
    pub fn k1_is_negative(&self) -> bool {
        self.k1.sign() == Sign::Minus
    }

    /// Whether \\(k\_2 < 0\\).
    pub fn k2_is_negative(&self) -> bool {
        self.k2.sign() == Sign::Minus
    }
}

/// The constants of the GLV endomorphism: \\(\beta\\) on the field side,
/// \\(\lambda\\) and the reduced lattice basis on the scalar side.
///
/// \\(b\_1\\) is negative for secp256k1, so its absolute value is held.
#[derive(Clone, Debug)]
pub struct Endomorphism {
    order: BigUint,
    lambda: BigUint,
    beta: FieldElement,
    a1: BigUint,
    minus_b1: BigUint,
    a2: BigUint,
    b2: BigUint,
}

impl Endomorphism {
    /// The secp256k1 endomorphism.
    pub fn secp256k1() -> Endomorphism {
        Endomorphism {
            order: BigUint::from_bytes_be(&constants::N),
            lambda: BigUint::from_bytes_be(&constants::LAMBDA),
            beta: FieldElement::from_be_slice(&constants::BETA).normalize(),
            a1: BigUint::from_bytes_be(&constants::A1),
            minus_b1: BigUint::from_bytes_be(&constants::MINUS_B1),
            a2: BigUint::from_bytes_be(&constants::A2),
            b2: BigUint::from_bytes_be(&constants::B2),
        }
    }

    pub fn lambda(&self) -> &BigUint {
        &self.lambda
    }

    pub fn beta(&self) -> &FieldElement {
        &self.beta
    }

    /// Check that \\(\lambda\\) and \\(\beta\\) are nontrivial cube roots
    /// of unity and that both basis vectors lie in the lattice.
    pub fn is_consistent(&self) -> bool {
        let one = BigUint::from(1u8);
        let lambda_ok =
            self.lambda != one && self.lambda.modpow(&BigUint::from(3u8), &self.order) == one;

        let beta_ok = self.beta != FieldElement::ONE
            && (&self.beta.square() * &self.beta).normalize() == FieldElement::ONE;

        // a1 + b1*lambda = a1 - |b1|*lambda and a2 + b2*lambda, mod n.
        let n = &self.order;
        let v1 = (&self.a1 + n - (&self.minus_b1 * &self.lambda) % n) % n;
        let v2 = (&self.a2 + &self.b2 * &self.lambda) % n;

        lambda_ok && beta_ok && v1 == BigUint::default() && v2 == BigUint::default()
    }

    /// Split a scalar, which must already be reduced modulo \\(n\\).
    pub fn split(&self, k: &BigUint) -> EndomorphismSplit {
        debug_assert!(k < &self.order);

        let c1 = div_round(&(&self.b2 * k), &self.order);
        let c2 = div_round(&(&self.minus_b1 * k), &self.order);

        let k1 = BigInt::from(k.clone())
            - BigInt::from(&c1 * &self.a1)
            - BigInt::from(&c2 * &self.a2);
        let k2 = BigInt::from(&c1 * &self.minus_b1) - BigInt::from(&c2 * &self.b2);

        EndomorphismSplit { k1, k2 }
    }

    /// Compute \\(\phi(P) = (\beta X : Y : Z)\\).
    pub fn apply(&self, point: &JacobianPoint) -> JacobianPoint {
        JacobianPoint {
            X: (&point.X * &self.beta).normalize(),
            Y: point.Y,
            Z: point.Z,
        }
    }
}

/// \\(\lfloor a / b \rceil\\), rounding halves up.
fn div_round(a: &BigUint, b: &BigUint) -> BigUint {
    ((a << 1u32) + b) / (b << 1u32)
}
