// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! A slow affine model of secp256k1 over big integers, used as an
//! independent reference.

#![allow(dead_code)]

use koblitz::{AffinePoint, Curve, Identity, IsIdentity};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::RngCore;

pub struct Reference {
    p: BigUint,
}

impl Reference {
    pub fn new() -> Reference {
        Reference {
            p: koblitz::secp256k1().params().p.clone(),
        }
    }

    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + &self.p - b % &self.p) % &self.p
    }

    fn inv(&self, a: &BigUint) -> BigUint {
        a.modpow(&(&self.p - 2u32), &self.p)
    }

    pub fn add(&self, p1: &AffinePoint, p2: &AffinePoint) -> AffinePoint {
        if p1.is_identity() {
            return p2.clone();
        }
        if p2.is_identity() {
            return p1.clone();
        }
        let slope = if p1.x == p2.x {
            if ((&p1.y + &p2.y) % &self.p).is_zero() {
                return AffinePoint::identity();
            }
            // 3x^2 / 2y
            let num = (BigUint::from(3u8) * &p1.x * &p1.x) % &self.p;
            num * self.inv(&((&p1.y << 1u32) % &self.p)) % &self.p
        } else {
            self.sub(&p2.y, &p1.y) * self.inv(&self.sub(&p2.x, &p1.x)) % &self.p
        };
        let x3 = self.sub(&self.sub(&(&slope * &slope % &self.p), &p1.x), &p2.x);
        let y3 = self.sub(&(&slope * self.sub(&p1.x, &x3) % &self.p), &p1.y);
        AffinePoint::new(x3, y3)
    }

    pub fn mul(&self, point: &AffinePoint, k: &BigUint) -> AffinePoint {
        let mut acc = AffinePoint::identity();
        for i in (0..k.bits()).rev() {
            acc = self.add(&acc, &acc);
            if k.bit(i) {
                acc = self.add(&acc, point);
            }
        }
        acc
    }
}

pub fn generator() -> AffinePoint {
    let params = koblitz::secp256k1().params();
    AffinePoint::new(params.gx.clone(), params.gy.clone())
}

pub fn random_bytes(rng: &mut StdRng, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

pub fn hex_point(x: &str, y: &str) -> AffinePoint {
    AffinePoint::new(
        BigUint::parse_bytes(x.as_bytes(), 16).unwrap(),
        BigUint::parse_bytes(y.as_bytes(), 16).unwrap(),
    )
}
