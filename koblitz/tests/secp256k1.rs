// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! Integration tests for the secp256k1 curve object.

mod common;

use koblitz::scalar::{modulo_reduce, random_scalar};
use koblitz::{secp256k1, AffinePoint, Curve, Identity, IsIdentity};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::{generator, hex_point, random_bytes, Reference};

fn two_g() -> AffinePoint {
    hex_point(
        "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
    )
}

fn three_g() -> AffinePoint {
    hex_point(
        "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
        "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
    )
}

fn order() -> BigUint {
    secp256k1().params().n.clone()
}

#[test]
fn known_multiples_of_g() {
    let curve = secp256k1();
    let g = generator();

    assert!(curve.is_on_curve(&g));
    assert!(curve.is_on_curve(&two_g()));
    assert!(curve.is_on_curve(&three_g()));

    assert_eq!(curve.double(&g), two_g());
    assert_eq!(curve.add(&g, &g), two_g());
    assert_eq!(curve.add(&g, &two_g()), three_g());
    assert_eq!(curve.add(&two_g(), &g), three_g());

    assert_eq!(curve.scalar_base_mult(&[1]), g);
    assert_eq!(curve.scalar_base_mult(&[2]), two_g());
    assert_eq!(curve.scalar_base_mult(&[3]), three_g());
    assert_eq!(curve.scalar_mult(&g, &[3]), three_g());

    // (n - 1)G = -G = (Gx, p - Gy)
    let n_minus_one = (order() - 1u32).to_bytes_be();
    let minus_g = AffinePoint::new(g.x.clone(), &curve.params().p - &g.y);
    assert_eq!(curve.scalar_base_mult(&n_minus_one), minus_g);
    assert_eq!(curve.scalar_mult(&g, &n_minus_one), minus_g);
}

#[test]
fn order_multiplies_to_identity() {
    let curve = secp256k1();
    let n = order().to_bytes_be();

    assert!(curve.scalar_base_mult(&n).is_identity());
    assert!(curve.scalar_mult(&generator(), &n).is_identity());
    assert!(curve.scalar_mult(&three_g(), &n).is_identity());
    assert!(curve.scalar_base_mult(&[]).is_identity());
}

#[test]
fn base_mult_agrees_with_variable_base() {
    let curve = secp256k1();
    let g = generator();
    let mut rng = StdRng::seed_from_u64(0x6b6f626c);

    let mut scalars: Vec<Vec<u8>> = vec![
        vec![0],
        vec![1],
        order().to_bytes_be(),
        (order() - 1u32).to_bytes_be(),
        vec![0xff; 32],
    ];
    for _ in 0..16 {
        scalars.push(random_scalar(&mut rng).to_vec());
    }

    for k in scalars.iter() {
        assert_eq!(curve.scalar_base_mult(k), curve.scalar_mult(&g, k));
    }
}

#[test]
fn matches_reference_model() {
    let curve = secp256k1();
    let reference = Reference::new();
    let mut rng = StdRng::seed_from_u64(0xdecafbad);
    let n = order();

    let p = curve.scalar_base_mult(&random_scalar(&mut rng));
    for _ in 0..8 {
        let k = random_scalar(&mut rng);
        let expected = reference.mul(&p, &(BigUint::from_bytes_be(&k) % &n));
        assert_eq!(curve.scalar_mult(&p, &k), expected);

        let q = curve.scalar_base_mult(&k);
        assert_eq!(curve.add(&p, &q), reference.add(&p, &q));
        assert_eq!(curve.double(&q), reference.add(&q, &q));
    }
}

#[test]
fn scalar_mult_is_linear() {
    let curve = secp256k1();
    let mut rng = StdRng::seed_from_u64(7);
    let n = order();

    let p = curve.scalar_base_mult(&random_scalar(&mut rng));
    for _ in 0..8 {
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);
        let sum = (BigUint::from_bytes_be(&a) + BigUint::from_bytes_be(&b)) % &n;

        assert_eq!(
            curve.scalar_mult(&p, &sum.to_bytes_be()),
            curve.add(&curve.scalar_mult(&p, &a), &curve.scalar_mult(&p, &b))
        );
        assert_eq!(
            curve.scalar_base_mult(&sum.to_bytes_be()),
            curve.add(&curve.scalar_base_mult(&a), &curve.scalar_base_mult(&b))
        );
    }
}

#[test]
fn group_law() {
    let curve = secp256k1();
    let mut rng = StdRng::seed_from_u64(0x47726f7570);
    let o = AffinePoint::identity();

    for _ in 0..8 {
        let p = curve.scalar_base_mult(&random_scalar(&mut rng));
        let q = curve.scalar_base_mult(&random_scalar(&mut rng));
        let r = curve.scalar_base_mult(&random_scalar(&mut rng));

        // associativity
        assert_eq!(
            curve.add(&curve.add(&p, &q), &r),
            curve.add(&p, &curve.add(&q, &r))
        );
        // commutativity
        assert_eq!(curve.add(&p, &q), curve.add(&q, &p));
        // identity and inverse
        assert_eq!(curve.add(&p, &o), p);
        assert_eq!(curve.add(&o, &p), p);
        assert!(curve.add(&p, &curve.negate(&p)).is_identity());
        // doubling
        assert_eq!(curve.double(&p), curve.add(&p, &p));
        assert!(curve.is_on_curve(&curve.add(&p, &q)));
    }
}

#[test]
fn off_curve_points_are_rejected() {
    let curve = secp256k1();
    let g = generator();

    assert!(!curve.is_on_curve(&AffinePoint::new(g.x.clone(), &g.y + 1u32)));
    assert!(!curve.is_on_curve(&AffinePoint::new(&g.x + 1u32, g.y.clone())));
    assert!(!curve.is_on_curve(&AffinePoint::identity()));
}

#[test]
fn long_scalars_are_reduced() {
    let curve = secp256k1();
    let g = generator();
    let mut rng = StdRng::seed_from_u64(0x4c6f6e67);
    let n = order();

    for len in [33usize, 40, 64, 100].iter() {
        let k = random_bytes(&mut rng, *len);
        let reduced = modulo_reduce(&k, &n);

        assert_eq!(curve.scalar_base_mult(&k), curve.scalar_base_mult(&reduced));
        assert_eq!(curve.scalar_mult(&g, &k), curve.scalar_mult(&g, &reduced));
    }

    // k + n selects the same point as k.
    let k = random_scalar(&mut rng);
    let k_plus_n = (BigUint::from_bytes_be(&k) + &n).to_bytes_be();
    assert_eq!(curve.scalar_base_mult(&k_plus_n), curve.scalar_base_mult(&k));
}

#[test]
fn identity_input_to_scalar_mult() {
    let curve = secp256k1();
    assert!(curve
        .scalar_mult(&AffinePoint::identity(), &[0x12, 0x34])
        .is_identity());
    assert!(curve.scalar_mult(&generator(), &[0]).is_identity());
}

#[cfg(feature = "serde")]
#[test]
fn serde_bincode_affine_point_roundtrip() {
    let encoded = bincode::serialize(&three_g()).unwrap();
    let decoded: AffinePoint = bincode::deserialize(&encoded).unwrap();
    assert_eq!(decoded, three_g());

    let encoded = bincode::serialize(&AffinePoint::identity()).unwrap();
    let decoded: AffinePoint = bincode::deserialize(&encoded).unwrap();
    assert!(decoded.is_identity());
}
