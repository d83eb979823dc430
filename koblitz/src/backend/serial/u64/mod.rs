// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! The `u64` backend uses `u64`s and a `(u64, u64) -> u128` multiplier.

pub mod field;
