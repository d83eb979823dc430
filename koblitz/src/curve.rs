// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! The secp256k1 curve object.
//!
//! [`secp256k1()`] returns a process-wide [`KoblitzCurve`], built on first
//! use behind a [`OnceCell`].  Construction derives the big-integer
//! parameters, checks the endomorphism constants and, with the
//! `precomputed-tables` feature, generates and validates the byte-point
//! table.  A failure there is a bug in the crate's constants, and panics.
//!
//! All methods take and return [`AffinePoint`]s; the arithmetic runs in
//! Jacobian coordinates over [`FieldElement`]s.

use num_bigint::BigUint;
use once_cell::sync::OnceCell;

use crate::affine::AffinePoint;
use crate::constants;
use crate::endomorphism::Endomorphism;
use crate::field::FieldElement;
use crate::scalar_mul::variable_base;
use crate::traits::{Curve, Identity, IsIdentity};

#[cfg(feature = "precomputed-tables")]
use crate::scalar_mul::fixed_base;
#[cfg(feature = "precomputed-tables")]
use crate::table::BytePointTable;

#[cfg(not(feature = "precomputed-tables"))]
use crate::jacobian::JacobianPoint;

/// Domain parameters of a short Weierstrass curve \\(y\^2 = x\^3 + b\\)
/// over \\(\mathbb F\_p\\).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// The field prime \\(p\\).
    pub p: BigUint,
    /// The order \\(n\\) of the base point.
    pub n: BigUint,
    /// The constant \\(b\\) of the curve equation.
    pub b: BigUint,
    /// \\(x\\)-coordinate of the base point.
    pub gx: BigUint,
    /// \\(y\\)-coordinate of the base point.
    pub gy: BigUint,
    /// Size of the field in bits.
    pub bit_size: usize,
    /// Canonical name of the curve.
    pub name: &'static str,
}

/// secp256k1, with everything needed to multiply quickly.
#[derive(Debug)]
pub struct KoblitzCurve {
    params: CurveParams,
    cofactor: u64,
    q: BigUint,
    half_order: BigUint,
    byte_size: usize,
    endomorphism: Endomorphism,
    #[cfg(feature = "precomputed-tables")]
    byte_points: BytePointTable,
}

static SECP256K1: OnceCell<KoblitzCurve> = OnceCell::new();

/// The secp256k1 curve.  The first call initializes it; later calls
/// return the same instance.
///
/// # Panics
///
/// If the built-in constants are inconsistent.
pub fn secp256k1() -> &'static KoblitzCurve {
    SECP256K1.get_or_init(KoblitzCurve::init_secp256k1)
}

impl KoblitzCurve {
    fn init_secp256k1() -> KoblitzCurve {
        let params = CurveParams {
            p: BigUint::from_bytes_be(&constants::P),
            n: BigUint::from_bytes_be(&constants::N),
            b: BigUint::from(constants::B),
            gx: BigUint::from_bytes_be(&constants::GX),
            gy: BigUint::from_bytes_be(&constants::GY),
            bit_size: constants::BIT_SIZE,
            name: "secp256k1",
        };

        let q = (&params.p + 1u32) >> 2u32;
        let half_order = &params.n >> 1u32;
        let byte_size = params.bit_size / 8;

        let endomorphism = Endomorphism::secp256k1();
        if !endomorphism.is_consistent() {
            log::error!("secp256k1 endomorphism constants are inconsistent");
            panic!("secp256k1: endomorphism constants are inconsistent");
        }

        #[cfg(feature = "precomputed-tables")]
        let byte_points = {
            let table = BytePointTable::generate();
            if let Err(e) = table.validate() {
                log::error!("secp256k1 byte-point table failed validation: {}", e);
                panic!("secp256k1: {}", e);
            }
            table
        };

        log::info!("Initialized {}", params.name);

        KoblitzCurve {
            params,
            cofactor: constants::COFACTOR,
            q,
            half_order,
            byte_size,
            endomorphism,
            #[cfg(feature = "precomputed-tables")]
            byte_points,
        }
    }

    /// The cofactor \\(h = 1\\): every curve point lies in the subgroup
    /// generated by \\(G\\).
    pub fn cofactor(&self) -> u64 {
        self.cofactor
    }

    /// \\((p + 1) / 4\\).  Since \\(p \equiv 3 \pmod 4\\), raising a
    /// square to this power gives one of its square roots.
    pub fn q_plus_1_div_4(&self) -> &BigUint {
        &self.q
    }

    /// \\(\lfloor n / 2 \rfloor\\), the bound for low-\\(s\\) signatures.
    pub fn half_order(&self) -> &BigUint {
        &self.half_order
    }

    /// Size of a field element or scalar in bytes.
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// The GLV endomorphism used by [`Curve::scalar_mult`].
    pub fn endomorphism(&self) -> &Endomorphism {
        &self.endomorphism
    }

    /// The table of \\(b \cdot 256\^w \cdot G\\) behind
    /// [`Curve::scalar_base_mult`].
    #[cfg(feature = "precomputed-tables")]
    pub fn byte_point_table(&self) -> &BytePointTable {
        &self.byte_points
    }

    /// Compute \\(-P = (x, p - y)\\).  The point at infinity is its own
    /// negation.
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        (-&point.to_jacobian()).to_affine()
    }
}

impl Curve for KoblitzCurve {
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn is_on_curve(&self, point: &AffinePoint) -> bool {
        if point.x >= self.params.p || point.y >= self.params.p {
            return false;
        }
        let x = FieldElement::from_be_slice(&point.x.to_bytes_be()).normalize();
        let y = FieldElement::from_be_slice(&point.y.to_bytes_be()).normalize();

        // y^2 = x^3 + 7
        let lhs = y.square().normalize();
        let rhs = (&(&x.square() * &x) + &FieldElement::from(constants::B)).normalize();
        lhs == rhs
    }

    fn add(&self, p1: &AffinePoint, p2: &AffinePoint) -> AffinePoint {
        if p1.is_identity() {
            return p2.clone();
        }
        if p2.is_identity() {
            return p1.clone();
        }
        (p1.to_jacobian() + p2.to_jacobian()).to_affine()
    }

    fn double(&self, point: &AffinePoint) -> AffinePoint {
        if point.is_identity() {
            return AffinePoint::identity();
        }
        point.to_jacobian().double().to_affine()
    }

    fn scalar_mult(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint {
        let point = point.to_jacobian();
        variable_base::mul(&self.endomorphism, &point, k, &self.params.n).to_affine()
    }

    #[cfg(feature = "precomputed-tables")]
    fn scalar_base_mult(&self, k: &[u8]) -> AffinePoint {
        fixed_base::mul(&self.byte_points, k, &self.params.n).to_affine()
    }

    #[cfg(not(feature = "precomputed-tables"))]
    fn scalar_base_mult(&self, k: &[u8]) -> AffinePoint {
        let generator = JacobianPoint::generator();
        variable_base::mul(&self.endomorphism, &generator, k, &self.params.n).to_affine()
    }
}
