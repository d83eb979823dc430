// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.
#![allow(non_snake_case)]

use num_bigint::BigUint;

use crate::constants::TABLE_WINDOWS;
use crate::jacobian::JacobianPoint;
use crate::scalar::modulo_reduce;
use crate::table::BytePointTable;
use crate::traits::Identity;

/// Compute \\(kG\\) by summing one table entry per byte of the reduced
/// scalar.
///
/// Writing \\(k = \sum\_w k\_w 256\^w\\) with bytes \\(k\_w\\), the
/// result is \\(\sum\_w T[w][k\_w]\\): 32 additions, no doublings.
pub fn mul(table: &BytePointTable, k: &[u8], order: &BigUint) -> JacobianPoint {
    let k = modulo_reduce(k, order);

    let mut Q = JacobianPoint::identity();
    for (i, &byte) in k.iter().enumerate() {
        // Byte 0 is the most significant.
        Q += table.entry(TABLE_WINDOWS - 1 - i, byte);
    }
    Q
}
