// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! Group operations in Jacobian coordinates.
//!
//! # Curve representation
//!
//! A Jacobian point \\((X : Y : Z)\\) with \\(Z \ne 0\\) stands for the
//! affine point \\((X/Z\^2, Y/Z\^3)\\) on
//! $$
//!     y\^2 = x\^3 + 7.
//! $$
//! Every \\(Z \ne 0\\) gives a valid representative, and \\(Z = 0\\) is
//! the point at infinity.  Working projectively removes the field
//! inversion from every addition; a single inversion is paid when the
//! result is lowered back to affine form.
//!
//! # Formulas
//!
//! Addition dispatches on the \\(Z\\)-coordinates:
//!
//! * equal \\(Z\\) (including \\(Z\_1 = Z\_2 = 1\\)): the co-Z formula of
//!   Meloni, 5M + 2S;
//! * \\(Z\_2 = 1\\): mixed addition `madd-2007-bl`, 7M + 4S;
//! * otherwise: `add-2007-bl`, 11M + 5S.
//!
//! Doubling uses `dbl-2009-l` (specialized for \\(a = 0\\)), with a
//! cheaper variant when \\(Z\_1 = 1\\).  The formulas are taken from the
//! [Explicit-Formulas Database][efd].
//!
//! None of the formulas are complete.  Each addition path detects the
//! two exceptional cases explicitly, after normalizing: equal points
//! fall back to doubling, and opposite points yield infinity.
//!
//! # Magnitudes
//!
//! Each line of the formulas is annotated with the magnitude of the
//! value it produces.  On entry every coordinate has magnitude at most
//! 1, and every operation restores that on exit.
//!
//! [efd]: https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html

// Jacobian coordinates are written as the capitalised affine ones.
#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Neg};

use crate::affine::AffinePoint;
use crate::constants;
use crate::field::FieldElement;
use crate::traits::{Identity, IsIdentity, ValidityCheck};

/// A point on secp256k1 in Jacobian coordinates.
#[derive(Copy, Clone)]
pub struct JacobianPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
}

impl Debug for JacobianPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "JacobianPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?}\n}}",
            &self.X, &self.Y, &self.Z
        )
    }
}

impl Identity for JacobianPoint {
    fn identity() -> JacobianPoint {
        JacobianPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ZERO,
            Z: FieldElement::ZERO,
        }
    }
}

impl IsIdentity for JacobianPoint {
    fn is_identity(&self) -> bool {
        self.Z.is_zero()
    }
}

impl Default for JacobianPoint {
    fn default() -> JacobianPoint {
        JacobianPoint::identity()
    }
}

impl PartialEq for JacobianPoint {
    /// Compare the affine images without inverting:
    /// \\(X\_1 Z\_2\^2 = X\_2 Z\_1\^2\\) and \\(Y\_1 Z\_2\^3 = Y\_2 Z\_1\^3\\).
    fn eq(&self, other: &JacobianPoint) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }

        let Z1Z1 = self.Z.square();
        let Z2Z2 = other.Z.square();
        let x_eq = (&self.X * &Z2Z2).normalize() == (&other.X * &Z1Z1).normalize();
        let y_eq = (&(&self.Y * &Z2Z2) * &other.Z).normalize()
            == (&(&other.Y * &Z1Z1) * &self.Z).normalize();
        x_eq && y_eq
    }
}

impl Eq for JacobianPoint {}

impl ValidityCheck for JacobianPoint {
    /// Check \\(Y\^2 = X\^3 + 7 Z\^6\\).  The identity is valid.
    fn is_valid(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        let ZZ = self.Z.square();
        let Z6 = &ZZ.square() * &ZZ;
        let lhs = self.Y.square().normalize();
        let rhs = (&(&self.X.square() * &self.X) + &Z6.mul_int(constants::B as u32)).normalize();
        lhs == rhs
    }
}

impl JacobianPoint {
    /// Build a point with \\(Z = 1\\) from affine field coordinates.
    pub fn from_affine_coordinates(x: FieldElement, y: FieldElement) -> JacobianPoint {
        JacobianPoint {
            X: x.normalize(),
            Y: y.normalize(),
            Z: FieldElement::ONE,
        }
    }

    /// The base point \\(G\\).
    pub fn generator() -> JacobianPoint {
        JacobianPoint::from_affine_coordinates(
            FieldElement::from_be_slice(&constants::GX),
            FieldElement::from_be_slice(&constants::GY),
        )
    }

    /// Lower to affine coordinates with one field inversion.
    pub fn to_affine(&self) -> AffinePoint {
        match self.affine_coordinates() {
            Some((x, y)) => AffinePoint::from_field_elements(&x, &y),
            None => AffinePoint::identity(),
        }
    }

    /// Normalized \\((X/Z\^2, Y/Z\^3)\\), or `None` at infinity.
    pub(crate) fn affine_coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        if self.is_identity() {
            return None;
        }
        Some(self.scale_by_inverse(&self.Z.invert()))
    }

    fn scale_by_inverse(&self, zinv: &FieldElement) -> (FieldElement, FieldElement) {
        let zinv2 = zinv.square();
        let zinv3 = &zinv2 * zinv;
        let x = (&self.X * &zinv2).normalize();
        let y = (&self.Y * &zinv3).normalize();
        (x, y)
    }

    /// Rewrite every point with \\(Z = 1\\), sharing one inversion
    /// across the whole slice.  Points at infinity are left as they are.
    pub fn batch_normalize(points: &[JacobianPoint]) -> Vec<JacobianPoint> {
        let mut zs: Vec<FieldElement> = points
            .iter()
            .filter(|P| !P.is_identity())
            .map(|P| P.Z)
            .collect();
        FieldElement::batch_invert(&mut zs);

        let mut zinvs = zs.iter();
        points
            .iter()
            .map(|P| {
                if P.is_identity() {
                    return JacobianPoint::identity();
                }
                // One inverse was produced per finite point, in order.
                let zinv = zinvs.next().copied().unwrap_or(FieldElement::ZERO);
                let (x, y) = P.scale_by_inverse(&zinv);
                JacobianPoint::from_affine_coordinates(x, y)
            })
            .collect()
    }

    /// Compute \\(2P\\).
    pub fn double(&self) -> JacobianPoint {
        // Points with Y = 0 have order two.
        if self.Y.is_zero() || self.Z.is_zero() {
            return JacobianPoint::identity();
        }
        if self.Z.normalize() == FieldElement::ONE {
            self.double_z1_equals_one()
        } else {
            self.double_generic()
        }
    }

    /// Doubling with \\(Z\_1 = 1\\), 1M + 5S.
    fn double_z1_equals_one(&self) -> JacobianPoint {
        let Z3 = self.Y.mul_int(2); // Z3 = 2*Y1 (mag: 2)
        self.double_with_z(Z3)
    }

    /// Doubling for arbitrary \\(Z\_1\\), 2M + 5S.
    fn double_generic(&self) -> JacobianPoint {
        let Z3 = (&self.Y * &self.Z).mul_int(2); // Z3 = 2*Y1*Z1 (mag: 2)
        self.double_with_z(Z3)
    }

    /// The shared part of `dbl-2009-l`:
    ///
    /// A = X1^2, B = Y1^2, C = B^2, D = 2*((X1+B)^2-A-C),
    /// E = 3*A, F = E^2, X3 = F-2*D, Y3 = E*(D-X3)-8*C.
    fn double_with_z(&self, Z3: FieldElement) -> JacobianPoint {
        let X1 = &self.X;
        let Y1 = &self.Y;

        let A = X1.square(); //                             A = X1^2 (mag: 1)
        let B = Y1.square(); //                             B = Y1^2 (mag: 1)
        let C = B.square(); //                              C = B^2 (mag: 1)
        let B = (&B + X1).square(); //                      B = (X1+B)^2 (mag: 1)
        let D = (&A + &C).negate(2); //                     D = -(A+C) (mag: 3)
        let D = (&D + &B).mul_int(2); //                    D = 2*(B+D) (mag: 8)
        let E = A.mul_int(3); //                            E = 3*A (mag: 3)
        let F = E.square(); //                              F = E^2 (mag: 1)
        let X3 = &D.mul_int(2).negate(16) + &F; //          X3 = F-2*D (mag: 18)
        let F = (&X3.negate(18) + &D).normalize(); //       F = D-X3 (mag: 1)
        let Y3 = &C.mul_int(8).negate(8) + &(&F * &E); //   Y3 = E*F-8*C (mag: 10)

        JacobianPoint {
            X: X3.normalize(),
            Y: Y3.normalize(),
            Z: Z3.normalize(),
        }
    }

    /// Addition of two points sharing the same \\(Z\\), 5M + 2S:
    ///
    /// A = X2-X1, B = A^2, C = Y2-Y1, D = C^2, E = X1*B, F = X2*B,
    /// X3 = D-E-F, Y3 = C*(E-X3)-Y1*(F-E), Z3 = Z1*A.
    ///
    /// Both points must have equal, nonzero \\(Z\\).
    pub(crate) fn add_z1_equals_z2(&self, other: &JacobianPoint) -> JacobianPoint {
        debug_assert!(self.Z.normalize() == other.Z.normalize());

        let X1 = self.X.normalize();
        let Y1 = self.Y.normalize();
        let X2 = other.X.normalize();
        let Y2 = other.Y.normalize();

        if X1 == X2 {
            if Y1 == Y2 {
                return self.double();
            }
            return JacobianPoint::identity();
        }

        let A = &X2 + &X1.negate(1); //                     A = X2-X1 (mag: 3)
        let B = A.square(); //                              B = A^2 (mag: 1)
        let C = &Y2 + &Y1.negate(1); //                     C = Y2-Y1 (mag: 3)
        let D = C.square(); //                              D = C^2 (mag: 1)
        let E = &X1 * &B; //                                E = X1*B (mag: 1)
        let F = &X2 * &B; //                                F = X2*B (mag: 1)
        let X3 = &(&E + &F).negate(2) + &D; //              X3 = D-E-F (mag: 4)
        let negX3 = X3.negate(4).normalize(); //            negX3 = -X3 (mag: 1)
        let T = &Y1 * &(&F + &E.negate(1)); //              T = Y1*(F-E) (mag: 1)
        let W = &(&E + &negX3) * &C; //                     W = C*(E-X3) (mag: 1)
        let Y3 = &W + &T.negate(1); //                      Y3 = W-T (mag: 3)
        let Z3 = &self.Z * &A; //                           Z3 = Z1*A (mag: 1)

        JacobianPoint {
            X: X3.normalize(),
            Y: Y3.normalize(),
            Z: Z3.normalize(),
        }
    }

    /// Mixed addition, \\(Z\_2 = 1\\):
    ///
    /// Z1Z1 = Z1^2, U2 = X2*Z1Z1, S2 = Y2*Z1*Z1Z1, H = U2-X1, HH = H^2,
    /// I = 4*HH, J = H*I, r = 2*(S2-Y1), V = X1*I,
    /// X3 = r^2-J-2*V, Y3 = r*(V-X3)-2*Y1*J, Z3 = (Z1+H)^2-Z1Z1-HH.
    fn add_z2_equals_one(&self, other: &JacobianPoint) -> JacobianPoint {
        let X1 = self.X.normalize();
        let Y1 = self.Y.normalize();
        let Z1 = &self.Z;

        let Z1Z1 = Z1.square(); //                          Z1Z1 = Z1^2 (mag: 1)
        let U2 = (&other.X * &Z1Z1).normalize(); //         U2 = X2*Z1Z1 (mag: 1)
        let S2 = (&(&other.Y * Z1) * &Z1Z1).normalize(); // S2 = Y2*Z1*Z1Z1 (mag: 1)

        if X1 == U2 {
            if Y1 == S2 {
                return self.double();
            }
            return JacobianPoint::identity();
        }

        let H = &U2 + &X1.negate(1); //                     H = U2-X1 (mag: 3)
        let HH = H.square(); //                             HH = H^2 (mag: 1)
        let I = HH.mul_int(4); //                           I = 4*HH (mag: 4)
        let J = &H * &I; //                                 J = H*I (mag: 1)
        let r = (&S2 + &Y1.negate(1)).mul_int(2); //        r = 2*(S2-Y1) (mag: 6)
        let rr = r.square(); //                             rr = r^2 (mag: 1)
        let V = &X1 * &I; //                                V = X1*I (mag: 1)
        let X3 = &(&V.mul_int(2) + &J).negate(3) + &rr; //  X3 = r^2-J-2*V (mag: 5)
        let W = &(&V + &X3.negate(5)) * &r; //              W = r*(V-X3) (mag: 1)
        let Y3 = &(&Y1 * &J).mul_int(2).negate(2) + &W; //  Y3 = W-2*Y1*J (mag: 4)
        let Z3 = &(Z1 + &H).square() + &(&Z1Z1 + &HH).negate(2); // (mag: 4)

        JacobianPoint {
            X: X3.normalize(),
            Y: Y3.normalize(),
            Z: Z3.normalize(),
        }
    }

    /// General addition:
    ///
    /// Z1Z1 = Z1^2, Z2Z2 = Z2^2, U1 = X1*Z2Z2, U2 = X2*Z1Z1,
    /// S1 = Y1*Z2*Z2Z2, S2 = Y2*Z1*Z1Z1, H = U2-U1, I = (2*H)^2, J = H*I,
    /// r = 2*(S2-S1), V = U1*I,
    /// X3 = r^2-J-2*V, Y3 = r*(V-X3)-2*S1*J, Z3 = ((Z1+Z2)^2-Z1Z1-Z2Z2)*H.
    fn add_generic(&self, other: &JacobianPoint) -> JacobianPoint {
        let Z1 = &self.Z;
        let Z2 = &other.Z;

        let Z1Z1 = Z1.square(); //                          Z1Z1 = Z1^2 (mag: 1)
        let Z2Z2 = Z2.square(); //                          Z2Z2 = Z2^2 (mag: 1)
        let U1 = (&self.X * &Z2Z2).normalize(); //          U1 = X1*Z2Z2 (mag: 1)
        let U2 = (&other.X * &Z1Z1).normalize(); //         U2 = X2*Z1Z1 (mag: 1)
        let S1 = (&(&self.Y * &Z2Z2) * Z2).normalize(); //  S1 = Y1*Z2*Z2Z2 (mag: 1)
        let S2 = (&(&other.Y * &Z1Z1) * Z1).normalize(); // S2 = Y2*Z1*Z1Z1 (mag: 1)

        if U1 == U2 {
            if S1 == S2 {
                return self.double();
            }
            return JacobianPoint::identity();
        }

        let H = &U2 + &U1.negate(1); //                     H = U2-U1 (mag: 3)
        let I = H.mul_int(2).square(); //                   I = (2*H)^2 (mag: 1)
        let J = &H * &I; //                                 J = H*I (mag: 1)
        let r = (&S2 + &S1.negate(1)).mul_int(2); //        r = 2*(S2-S1) (mag: 6)
        let rr = r.square(); //                             rr = r^2 (mag: 1)
        let V = &U1 * &I; //                                V = U1*I (mag: 1)
        let X3 = &(&V.mul_int(2) + &J).negate(3) + &rr; //  X3 = r^2-J-2*V (mag: 5)
        let W = &(&V + &X3.negate(5)) * &r; //              W = r*(V-X3) (mag: 1)
        let Y3 = &(&S1 * &J).mul_int(2).negate(2) + &W; //  Y3 = W-2*S1*J (mag: 4)
        let Z3 = &(Z1 + Z2).square() + &(&Z1Z1 + &Z2Z2).negate(2); // (mag: 4)
        let Z3 = &Z3 * &H; //                               Z3 = Z3*H (mag: 1)

        JacobianPoint {
            X: X3.normalize(),
            Y: Y3.normalize(),
            Z: Z3.normalize(),
        }
    }
}

// ------------------------------------------------------------------------
// Addition and Negation
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b JacobianPoint> for &'a JacobianPoint {
    type Output = JacobianPoint;

    fn add(self, other: &'b JacobianPoint) -> JacobianPoint {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }

        let Z1 = self.Z.normalize();
        let Z2 = other.Z.normalize();
        let Z1_is_one = Z1 == FieldElement::ONE;
        let Z2_is_one = Z2 == FieldElement::ONE;

        if Z1 == Z2 {
            self.add_z1_equals_z2(other)
        } else if Z2_is_one {
            self.add_z2_equals_one(other)
        } else if Z1_is_one {
            other.add_z2_equals_one(self)
        } else {
            self.add_generic(other)
        }
    }
}

define_add_variants!(LHS = JacobianPoint, RHS = JacobianPoint, Output = JacobianPoint);

impl<'b> AddAssign<&'b JacobianPoint> for JacobianPoint {
    fn add_assign(&mut self, rhs: &'b JacobianPoint) {
        *self = &*self + rhs;
    }
}

define_add_assign_variants!(LHS = JacobianPoint, RHS = JacobianPoint);

impl<'a> Neg for &'a JacobianPoint {
    type Output = JacobianPoint;

    fn neg(self) -> JacobianPoint {
        JacobianPoint {
            X: self.X,
            Y: self.Y.negate(1).normalize(),
            Z: self.Z,
        }
    }
}

define_neg_variant!(Type = JacobianPoint);
