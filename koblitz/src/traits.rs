// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! Module for common traits.

use crate::affine::AffinePoint;
use crate::curve::CurveParams;

// ------------------------------------------------------------------------
// Public Traits
// ------------------------------------------------------------------------

/// Trait for getting the identity element of a point type.
pub trait Identity {
    /// Returns the identity element of the curve.
    /// Can be used as a constructor.
    fn identity() -> Self;
}

/// Trait for testing if a curve point is equivalent to the identity point.
pub trait IsIdentity {
    /// Return true if this element is the identity element of the curve.
    fn is_identity(&self) -> bool;
}

/// The operations a short Weierstrass curve offers on affine points.
///
/// Points are exchanged as pairs of big integers, with the point at
/// infinity encoded as \\((0, 0)\\).  None of the arithmetic methods
/// validate their inputs; callers holding untrusted points must check
/// them with [`Curve::is_on_curve`] first.
pub trait Curve {
    /// The curve's domain parameters.
    fn params(&self) -> &CurveParams;

    /// Is \\((x, y)\\) a point of the curve?  The point at infinity is
    /// not, and neither is any point with a coordinate outside
    /// \\([0, p)\\).
    fn is_on_curve(&self, point: &AffinePoint) -> bool;

    /// Compute \\(P\_1 + P\_2\\).
    fn add(&self, p1: &AffinePoint, p2: &AffinePoint) -> AffinePoint;

    /// Compute \\(2P\\).
    fn double(&self, point: &AffinePoint) -> AffinePoint;

    /// Compute \\(kP\\) for a big-endian scalar \\(k\\) of any length.
    fn scalar_mult(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint;

    /// Compute \\(kG\\) for a big-endian scalar \\(k\\) of any length.
    fn scalar_base_mult(&self, k: &[u8]) -> AffinePoint;
}

// ------------------------------------------------------------------------
// Private Traits
// ------------------------------------------------------------------------

/// Trait for checking whether a point is on the curve.
///
/// The multipliers never call this on their inputs; it guards the
/// precomputed table and is used by tests.
pub(crate) trait ValidityCheck {
    /// Checks whether the point is on the curve. Not CT.
    fn is_valid(&self) -> bool;
}
