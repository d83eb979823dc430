// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! Points in affine coordinates, as exchanged with callers.

use num_bigint::BigUint;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::FieldElement;
use crate::jacobian::JacobianPoint;
use crate::traits::{Identity, IsIdentity};

/// A point \\((x, y)\\) given by arbitrary-precision integers.
///
/// The point at infinity is \\((0, 0)\\), which does not satisfy the
/// curve equation and therefore cannot collide with a real point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AffinePoint {
    pub x: BigUint,
    pub y: BigUint,
}

impl Identity for AffinePoint {
    fn identity() -> AffinePoint {
        AffinePoint {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }
}

impl IsIdentity for AffinePoint {
    fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl Default for AffinePoint {
    fn default() -> AffinePoint {
        AffinePoint::identity()
    }
}

impl AffinePoint {
    /// The point \\((x, y)\\).  Nothing is checked; use
    /// [`Curve::is_on_curve`](crate::traits::Curve::is_on_curve) for that.
    pub fn new(x: BigUint, y: BigUint) -> AffinePoint {
        AffinePoint { x, y }
    }

    /// Lift to Jacobian coordinates with \\(Z = 1\\).  The identity
    /// lifts to \\(Z = 0\\).
    ///
    /// Coordinates wider than 256 bits are truncated to their low 32
    /// bytes; coordinates in \\([p, 2\^{256})\\) are reduced.
    pub fn to_jacobian(&self) -> JacobianPoint {
        if self.is_identity() {
            return JacobianPoint::identity();
        }
        let x = FieldElement::from_be_slice(&self.x.to_bytes_be()).normalize();
        let y = FieldElement::from_be_slice(&self.y.to_bytes_be()).normalize();
        JacobianPoint::from_affine_coordinates(x, y)
    }

    /// Build from normalized field elements.
    pub(crate) fn from_field_elements(x: &FieldElement, y: &FieldElement) -> AffinePoint {
        AffinePoint {
            x: BigUint::from_bytes_be(&x.to_bytes()),
            y: BigUint::from_bytes_be(&y.to_bytes()),
        }
    }
}
