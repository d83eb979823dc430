// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! Various constants, such as the secp256k1 domain parameters and the
//! endomorphism basis.
//!
//! All values are big-endian byte strings.  They are lifted into
//! `BigUint`s and `FieldElement`s once, when the curve singleton is
//! initialized; see `crate::curve`.

use hex_literal::hex;

/// The field prime \\(p = 2\^{256} - 2\^{32} - 977\\).
pub const P: [u8; 32] = hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

/// The order \\(n\\) of the base point.
pub const N: [u8; 32] = hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// The constant \\(b\\) in \\(y\^2 = x\^3 + b\\).
pub const B: u64 = 7;

/// Affine \\(x\\)-coordinate of the base point \\(G\\).
pub const GX: [u8; 32] = hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");

/// Affine \\(y\\)-coordinate of the base point \\(G\\).
pub const GY: [u8; 32] = hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

/// The curve's bit size.
pub const BIT_SIZE: usize = 256;

/// The cofactor.
pub const COFACTOR: u64 = 1;

/// A primitive cube root of unity \\(\lambda\\) modulo \\(n\\).
pub const LAMBDA: [u8; 32] =
    hex!("5363ad4cc05c30e0a5261c028812645a122e22ea20816678df02967c1b23bd72");

/// A primitive cube root of unity \\(\beta\\) modulo \\(p\\), paired with
/// \\(\lambda\\) so that \\(\lambda (x, y) = (\beta x, y)\\).
pub const BETA: [u8; 32] = hex!("7ae96a2b657c07106e64479eac3434e99cf0497512f58995c1396c28719501ee");

/// First basis vector \\((a\_1, b\_1)\\) of the lattice
/// \\(\\{ (x, y) : x + y \lambda \equiv 0 \pmod n \\}\\).  \\(b\_1\\) is
/// negative; its absolute value is stored.
pub const A1: [u8; 16] = hex!("3086d221a7d46bcde86c90e49284eb15");
pub const MINUS_B1: [u8; 16] = hex!("e4437ed6010e88286f547fa90abfe4c3");

/// Second basis vector \\((a\_2, b\_2)\\), with \\(b\_2 = a\_1\\).
pub const A2: [u8; 17] = hex!("0114ca50f7a8e2f3f657c1108d9d44cfd8");
pub const B2: [u8; 16] = hex!("3086d221a7d46bcde86c90e49284eb15");

/// Number of byte windows in the base point table.
pub const TABLE_WINDOWS: usize = 32;

/// Number of entries per window in the base point table.
pub const TABLE_ENTRIES: usize = 256;
