// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.
#![allow(non_snake_case)]

use core::cmp::Ordering;

use num_bigint::BigUint;

use crate::endomorphism::Endomorphism;
use crate::jacobian::JacobianPoint;
use crate::scalar::{modulo_reduce, naf};
use crate::traits::Identity;

/// Compute \\(kP\\) in variable time, for a big-endian scalar \\(k\\) of
/// any length.
///
/// The point is not checked to be on the curve.
pub fn mul(
    endomorphism: &Endomorphism,
    point: &JacobianPoint,
    k: &[u8],
    order: &BigUint,
) -> JacobianPoint {
    let k = BigUint::from_bytes_be(&modulo_reduce(k, order));

    // k = k1 + k2*lambda, so kP = k1*P + k2*phi(P).
    let split = endomorphism.split(&k);

    let P1 = *point;
    let P2 = endomorphism.apply(point);

    // A negative half is handled by swapping the roles of P and -P.
    let (P1, minus_P1) = if split.k1_is_negative() {
        (-&P1, P1)
    } else {
        (P1, -&P1)
    };
    let (P2, minus_P2) = if split.k2_is_negative() {
        (-&P2, P2)
    } else {
        (P2, -&P2)
    };

    let k1_naf = naf(&split.k1_magnitude());
    let k2_naf = naf(&split.k2_magnitude());
    let m = k1_naf.len().max(k2_naf.len());
    let k1_naf = k1_naf.padded(m);
    let k2_naf = k2_naf.padded(m);

    let mut Q = JacobianPoint::identity();
    for (d1, d2) in k1_naf.digits().zip(k2_naf.digits()) {
        Q = Q.double();

        match d1.cmp(&0) {
            Ordering::Greater => Q += &P1,
            Ordering::Less => Q += &minus_P1,
            Ordering::Equal => {}
        }

        match d2.cmp(&0) {
            Ordering::Greater => Q += &P2,
            Ordering::Less => Q += &minus_P2,
            Ordering::Equal => {}
        }
    }

    Q
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::constants;
    use crate::traits::IsIdentity;

    fn order() -> BigUint {
        BigUint::from_bytes_be(&constants::N)
    }

    /// Reference double-and-add without the endomorphism.
    fn binary_mul(point: &JacobianPoint, k: &BigUint) -> JacobianPoint {
        let mut Q = JacobianPoint::identity();
        for i in (0..k.bits()).rev() {
            Q = Q.double();
            if k.bit(i) {
                Q += point;
            }
        }
        Q
    }

    #[test]
    fn small_multiples() {
        let endo = Endomorphism::secp256k1();
        let G = JacobianPoint::generator();
        let n = order();

        assert!(mul(&endo, &G, &[0], &n).is_identity());
        assert!(mul(&endo, &G, &[], &n).is_identity());
        assert_eq!(mul(&endo, &G, &[1], &n), G);
        assert_eq!(mul(&endo, &G, &[2], &n), G.double());
        assert_eq!(mul(&endo, &G, &[3], &n), &G.double() + &G);
    }

    #[test]
    fn agrees_with_binary_ladder() {
        let endo = Endomorphism::secp256k1();
        let n = order();
        let P = mul(&endo, &JacobianPoint::generator(), &[0x42; 7], &n);

        let scalars: [&[u8]; 4] = [
            &[0xff; 32],
            &[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef],
            &constants::LAMBDA,
            &[0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        ];
        for k in scalars.iter() {
            let expected = binary_mul(&P, &(BigUint::from_bytes_be(k) % &n));
            assert_eq!(mul(&endo, &P, k, &n), expected);
        }
    }

    #[test]
    fn order_and_order_minus_one() {
        let endo = Endomorphism::secp256k1();
        let G = JacobianPoint::generator();
        let n = order();

        assert!(mul(&endo, &G, &constants::N, &n).is_identity());

        let n_minus_one = (&n - 1u32).to_bytes_be();
        assert_eq!(mul(&endo, &G, &n_minus_one, &n), -&G);
    }

    #[test]
    fn identity_stays_identity() {
        let endo = Endomorphism::secp256k1();
        let O = JacobianPoint::identity();
        assert!(mul(&endo, &O, &[0xde, 0xad, 0xbe, 0xef], &order()).is_identity());
    }
}
