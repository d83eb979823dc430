// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! The byte-point table for fixed-base multiplication.
//!
//! Window \\(w\\) holds \\(b \cdot 256\^w G\\) for every byte value
//! \\(b\\), so a scalar's 32 bytes select 32 points whose sum is
//! \\(kG\\).  Entry \\(b = 0\\) of each window is the point at infinity;
//! every other entry is stored with \\(Z = 1\\), which keeps the
//! additions in the fixed-base loop on the mixed path.

#![allow(non_snake_case)]

use crate::constants::{TABLE_ENTRIES, TABLE_WINDOWS};
use crate::errors::Error;
use crate::field::FieldElement;
use crate::jacobian::JacobianPoint;
use crate::traits::{Identity, IsIdentity, ValidityCheck};

/// Bytes of one serialized entry: \\(x \Vert y\\).
const ENTRY_BYTES: usize = 64;

/// Size of a serialized table.  Entry 0 of each window is implicit.
pub const SERIALIZED_TABLE_BYTES: usize = TABLE_WINDOWS * (TABLE_ENTRIES - 1) * ENTRY_BYTES;

/// The \\(32 \times 256\\) table of multiples of the base point, stored
/// window-major.
#[derive(Clone)]
pub struct BytePointTable {
    points: Vec<JacobianPoint>,
}

impl core::fmt::Debug for BytePointTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BytePointTable({} windows)", TABLE_WINDOWS)
    }
}

impl BytePointTable {
    /// Compute the table from the base point.
    pub fn generate() -> BytePointTable {
        log::info!("Generating the secp256k1 byte-point table...");

        let mut points = Vec::with_capacity(TABLE_WINDOWS * TABLE_ENTRIES);
        // 256^w * G
        let mut base = JacobianPoint::generator();
        for w in 0..TABLE_WINDOWS {
            let mut acc = JacobianPoint::identity();
            points.push(acc);
            for _ in 1..TABLE_ENTRIES {
                acc += &base;
                points.push(acc);
            }
            base = &acc + &base;
            log::debug!("[{}/{}]", w + 1, TABLE_WINDOWS);
        }

        let table = BytePointTable {
            points: JacobianPoint::batch_normalize(&points),
        };
        log::info!("Done :)");
        table
    }

    /// The point \\(b \cdot 256\^w G\\).
    ///
    /// # Panics
    ///
    /// If `window` is not less than 32.
    pub fn entry(&self, window: usize, byte: u8) -> &JacobianPoint {
        &self.points[window * TABLE_ENTRIES + byte as usize]
    }

    /// Check the structure of the table:
    ///
    /// * entry 0 of every window is the point at infinity;
    /// * every other entry has \\(Z = 1\\) and lies on the curve;
    /// * entry \\([0][1]\\) is \\(G\\);
    /// * consecutive entries of a window differ by entry 1, and entry 255
    ///   plus entry 1 is entry 1 of the next window.
    ///
    /// Together these pin every entry to \\(b \cdot 256\^w G\\).
    pub fn validate(&self) -> Result<(), Error> {
        if self.points.len() != TABLE_WINDOWS * TABLE_ENTRIES {
            return Err(Error::TableLength {
                expected: TABLE_WINDOWS * TABLE_ENTRIES,
                actual: self.points.len(),
            });
        }

        let malformed = |window, byte| Error::MalformedTable { window, byte };

        if *self.entry(0, 1) != JacobianPoint::generator() {
            return Err(malformed(0, 1));
        }

        for w in 0..TABLE_WINDOWS {
            if !self.entry(w, 0).is_identity() {
                return Err(malformed(w, 0));
            }

            let step = self.entry(w, 1);
            for b in 1..TABLE_ENTRIES {
                let P = self.entry(w, b as u8);
                if P.is_identity() || P.Z.normalize() != FieldElement::ONE || !P.is_valid() {
                    return Err(malformed(w, b));
                }
                if b > 1 && self.entry(w, (b - 1) as u8) + step != *P {
                    return Err(malformed(w, b));
                }
            }

            if w + 1 < TABLE_WINDOWS && self.entry(w, 255) + step != *self.entry(w + 1, 1) {
                return Err(malformed(w + 1, 1));
            }
        }

        log::debug!("Byte-point table is well formed");
        Ok(())
    }

    /// Serialize the table as \\(x \Vert y\\) for every window and every
    /// byte value from 1 to 255, each coordinate 32 bytes big-endian.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SERIALIZED_TABLE_BYTES);
        for w in 0..TABLE_WINDOWS {
            for b in 1..TABLE_ENTRIES {
                let P = self.entry(w, b as u8);
                out.extend_from_slice(&P.X.normalize().to_bytes());
                out.extend_from_slice(&P.Y.normalize().to_bytes());
            }
        }
        out
    }

    /// Load a table written by [`BytePointTable::to_bytes`], and
    /// [`validate`](BytePointTable::validate) it.
    pub fn from_bytes(bytes: &[u8]) -> Result<BytePointTable, Error> {
        if bytes.len() != SERIALIZED_TABLE_BYTES {
            return Err(Error::TableLength {
                expected: SERIALIZED_TABLE_BYTES,
                actual: bytes.len(),
            });
        }

        let mut points = Vec::with_capacity(TABLE_WINDOWS * TABLE_ENTRIES);
        for window in bytes.chunks_exact(ENTRY_BYTES * (TABLE_ENTRIES - 1)) {
            points.push(JacobianPoint::identity());
            for entry in window.chunks_exact(ENTRY_BYTES) {
                let x = decode_coordinate(&entry[..32])?;
                let y = decode_coordinate(&entry[32..])?;
                points.push(JacobianPoint::from_affine_coordinates(x, y));
            }
        }

        let table = BytePointTable { points };
        table.validate()?;
        Ok(table)
    }
}

fn decode_coordinate(bytes: &[u8]) -> Result<FieldElement, Error> {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(bytes);
    Option::from(FieldElement::from_bytes(&buf)).ok_or(Error::NonCanonicalFieldElement)
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::constants;
    use crate::curve::secp256k1;

    #[test]
    fn generated_table_is_valid() {
        let table = secp256k1().byte_point_table();
        assert!(table.validate().is_ok());
    }

    #[test]
    fn entries_are_multiples_of_g() {
        let table = secp256k1().byte_point_table();
        let G = JacobianPoint::generator();

        assert!(table.entry(0, 0).is_identity());
        assert_eq!(*table.entry(0, 1), G);
        assert_eq!(*table.entry(0, 2), G.double());
        assert_eq!(*table.entry(0, 3), &G.double() + &G);

        // 256 * G, by doubling eight times.
        let mut P = G;
        for _ in 0..8 {
            P = P.double();
        }
        assert_eq!(*table.entry(1, 1), P);
        assert_eq!(table.entry(1, 1).Z, FieldElement::ONE);
    }

    #[test]
    fn serialization_round_trips() {
        let table = secp256k1().byte_point_table();
        let bytes = table.to_bytes();
        assert_eq!(bytes.len(), SERIALIZED_TABLE_BYTES);
        assert_eq!(&bytes[..32], &constants::GX[..]);
        assert_eq!(&bytes[32..64], &constants::GY[..]);

        let loaded = BytePointTable::from_bytes(&bytes).unwrap();
        assert_eq!(loaded.points, table.points);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let table = secp256k1().byte_point_table();
        let mut bytes = table.to_bytes();
        bytes.pop();
        assert_eq!(
            BytePointTable::from_bytes(&bytes).unwrap_err(),
            Error::TableLength {
                expected: SERIALIZED_TABLE_BYTES,
                actual: SERIALIZED_TABLE_BYTES - 1,
            }
        );
    }

    #[test]
    fn non_canonical_coordinate_is_rejected() {
        let table = secp256k1().byte_point_table();
        let mut bytes = table.to_bytes();
        bytes[64 * 10..64 * 10 + 32].copy_from_slice(&constants::P);
        assert_eq!(
            BytePointTable::from_bytes(&bytes).unwrap_err(),
            Error::NonCanonicalFieldElement
        );
    }

    #[test]
    fn tampered_entries_are_rejected() {
        let table = secp256k1().byte_point_table();

        // Off the curve.
        let mut bytes = table.to_bytes();
        bytes[64 * 20 + 63] ^= 1;
        assert_eq!(
            BytePointTable::from_bytes(&bytes).unwrap_err(),
            Error::MalformedTable { window: 0, byte: 21 }
        );

        // On the curve, but in the wrong place: entries [3][4] and [3][5]
        // swapped.
        let mut bytes = table.to_bytes();
        let at = |b: usize| (3 * 255 + b - 1) * 64;
        let (four, five) = (at(4), at(5));
        let entry4 = bytes[four..four + 64].to_vec();
        bytes.copy_within(five..five + 64, four);
        bytes[five..five + 64].copy_from_slice(&entry4);
        assert_eq!(
            BytePointTable::from_bytes(&bytes).unwrap_err(),
            Error::MalformedTable { window: 3, byte: 4 }
        );
    }
}
