// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! **INTERNALS:** Limb-level implementations of the secp256k1 base field.
//!
//! Only a serial 64-bit backend exists.  The point arithmetic lives in
//! `crate::jacobian` and is written against the magnitude-tracking
//! wrapper in `crate::field`, never against the limbs directly.

pub mod serial;
