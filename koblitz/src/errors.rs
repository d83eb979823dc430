// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! Errors which may occur when parsing field elements or loading the
//! base point table.
//!
//! Point arithmetic itself never fails: degenerate inputs resolve to the
//! point at infinity inside the group law.

use core::fmt;
use core::fmt::Display;

/// Errors which may occur while decoding field elements or a
/// serialized byte-point table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The input to `FieldElement::from_hex` was not valid hexadecimal.
    InvalidHex,
    /// A field element was given more than 32 bytes of input.
    FieldElementTooLong {
        /// Number of bytes supplied.
        length: usize,
    },
    /// A serialized coordinate was not less than the field prime.
    NonCanonicalFieldElement,
    /// A serialized byte-point table had the wrong size.
    TableLength {
        /// Size in bytes of a complete table.
        expected: usize,
        /// Size in bytes of what was supplied.
        actual: usize,
    },
    /// A table entry is not `byte * 256^window * G` in Jacobian form with
    /// `Z = 1`.
    MalformedTable {
        /// Window index of the offending entry.
        window: usize,
        /// Byte index of the offending entry.
        byte: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidHex => write!(f, "Field element is not valid hexadecimal"),
            Error::FieldElementTooLong { length } => write!(
                f,
                "Field element must be at most 32 bytes in length, got {}",
                length
            ),
            Error::NonCanonicalFieldElement => {
                write!(f, "Field element is not reduced modulo p")
            }
            Error::TableLength { expected, actual } => write!(
                f,
                "Byte-point table must be {} bytes in length, got {}",
                expected, actual
            ),
            Error::MalformedTable { window, byte } => {
                write!(f, "Byte-point table entry [{}][{}] is malformed", window, byte)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(_: hex::FromHexError) -> Error {
        Error::InvalidHex
    }
}
