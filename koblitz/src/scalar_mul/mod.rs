// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! Implementations of scalar multiplication.

pub mod variable_base;

#[cfg(feature = "precomputed-tables")]
pub mod fixed_base;
