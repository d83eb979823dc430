// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, rust_2018_idioms)]
#![doc(html_root_url = "https://docs.rs/koblitz/0.1.0")]

//! # koblitz
//!
//! Point arithmetic on secp256k1, the Koblitz curve
//! \\(y\^2 = x\^3 + 7\\) over \\(\mathbb F\_p\\),
//! \\(p = 2\^{256} - 2\^{32} - 977\\).
//!
//! ```
//! use koblitz::{secp256k1, Curve};
//!
//! let curve = secp256k1();
//! let p = curve.scalar_base_mult(&[0x2a]);
//! assert!(curve.is_on_curve(&p));
//! assert_eq!(curve.scalar_mult(&p, &[2]), curve.double(&p));
//! ```
//!
//! Points cross the API as [`AffinePoint`]s with arbitrary-precision
//! coordinates, the point at infinity written \\((0, 0)\\).  Internally
//! the arithmetic is done in Jacobian coordinates over a lazily reduced
//! field representation.  Variable-base multiplication combines the GLV
//! endomorphism with NAF recoding; fixed-base multiplication adds one
//! precomputed point per scalar byte.
//!
//! # Warning
//!
//! Nothing in this crate is constant time.  The scalar recoding and the
//! addition formulas branch on secret data, so it is only suitable where
//! timing side channels are not a concern.
//!
//! # Features
//!
//! * `precomputed-tables` (default): build the byte-point table on first
//!   use and multiply the base point with it.  Without it,
//!   [`Curve::scalar_base_mult`] uses the variable-base path.
//! * `serde`: `Serialize` and `Deserialize` for [`AffinePoint`].

//------------------------------------------------------------------------
// Internal macros. Must come first!
//------------------------------------------------------------------------

#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// koblitz public modules
//------------------------------------------------------------------------

// Affine points, as exchanged with callers
pub mod affine;

// Jacobian points and the group law
pub mod jacobian;

// Finite field arithmetic mod p = 2^256 - 2^32 - 977
pub mod field;

// Scalar reduction mod n and NAF recoding
pub mod scalar;

// The GLV endomorphism and scalar splitting
pub mod endomorphism;

// The secp256k1 curve object
pub mod curve;

// Useful constants, like the secp256k1 basepoint
pub mod constants;

// External (and internal) traits.
pub mod traits;

// Errors
pub mod errors;

// The precomputed byte-point table
#[cfg(feature = "precomputed-tables")]
pub mod table;

//------------------------------------------------------------------------
// koblitz internal modules
//------------------------------------------------------------------------

// Arithmetic backends live here
pub(crate) mod backend;

// Scalar multiplication algorithms
pub(crate) mod scalar_mul;

pub use crate::affine::AffinePoint;
pub use crate::curve::{secp256k1, CurveParams, KoblitzCurve};
pub use crate::errors::Error;
pub use crate::traits::{Curve, Identity, IsIdentity};
