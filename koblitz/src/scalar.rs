// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! Scalars: reduction modulo the group order and non-adjacent form.
//!
//! Scalars are handled as big-endian byte strings of any length, the way
//! callers hand them in.  Before any multiplication they are reduced
//! modulo \\(n\\) into a fixed 32-byte form.
//!
//! # Non-adjacent form
//!
//! The NAF of an integer \\(k\\) is the unique signed-binary expansion
//! $$
//!     k = \sum\_i k\_i 2\^i, \qquad k\_i \in \\{-1, 0, 1\\},
//! $$
//! in which no two consecutive digits are nonzero.  On average only a
//! third of the digits are nonzero, against half for plain binary, which
//! saves additions in a double-and-add loop.  Since negating a curve
//! point is nearly free, the \\(-1\\) digits cost the same as the
//! \\(+1\\) digits.
//!
//! [`naf`] returns the digits as two bit masks in the same big-endian
//! byte layout as the input, one for the \\(+1\\) digits and one for the
//! \\(-1\\) digits.  The recoding branches on the scalar's bits.

use core::cmp::Ordering;

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants;

/// Reduce a big-endian scalar of any length modulo `order`, returning it
/// as 32 big-endian bytes.
///
/// `order` must fit in 256 bits.
pub fn modulo_reduce(k: &[u8], order: &BigUint) -> [u8; 32] {
    debug_assert!(order.bits() <= 256);

    let reduced = (BigUint::from_bytes_be(k) % order).to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - reduced.len()..].copy_from_slice(&reduced);
    out
}

/// Sample a scalar uniformly from \\([0, n)\\) by rejection.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; 32] {
    loop {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        // Big-endian arrays compare numerically.
        if bytes < constants::N {
            return bytes;
        }
    }
}

/// The non-adjacent form of a scalar, as a pair of big-endian bit masks.
///
/// Bit \\(i\\) of `positive` (counting from the least significant bit of
/// the last byte) is set when digit \\(k\_i = 1\\), and bit \\(i\\) of
/// `negative` when \\(k\_i = -1\\).  Both masks have the same length,
/// which is the input length, or one more when the recoding carries
/// past the input's top bit.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Naf {
    positive: Vec<u8>,
    negative: Vec<u8>,
}

impl Naf {
    /// The mask of \\(+1\\) digits.
    pub fn positive(&self) -> &[u8] {
        &self.positive
    }

    /// The mask of \\(-1\\) digits.
    pub fn negative(&self) -> &[u8] {
        &self.negative
    }

    /// Length of each mask, in bytes.
    pub fn len(&self) -> usize {
        self.positive.len()
    }

    /// Whether the masks are zero bytes long.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty()
    }

    /// Left-pad both masks with zero bytes up to `len` bytes.
    pub fn padded(&self, len: usize) -> Naf {
        let pad = len.saturating_sub(self.len());
        let extend = |mask: &[u8]| {
            let mut out = vec![0u8; pad];
            out.extend_from_slice(mask);
            out
        };
        Naf {
            positive: extend(&self.positive),
            negative: extend(&self.negative),
        }
    }

    /// The digits \\(k\_i \in \\{-1, 0, 1\\}\\), most significant first.
    pub fn digits(&self) -> impl Iterator<Item = i8> + '_ {
        self.positive
            .iter()
            .zip(self.negative.iter())
            .flat_map(|(&pos, &neg)| {
                (0..8).rev().map(move |j| {
                    let p = (pos >> j) & 1;
                    let n = (neg >> j) & 1;
                    match p.cmp(&n) {
                        Ordering::Greater => 1,
                        Ordering::Less => -1,
                        Ordering::Equal => 0,
                    }
                })
            })
    }
}

/// Compute the non-adjacent form of the big-endian integer `k`.
///
/// The scan runs from the least significant bit upwards with a carry.
/// A run of two or more ones becomes a \\(-1\\) at its low end and a
/// carry, using \\(2\^{n+1} - 2\^m = 2\^n + \cdots + 2\^m\\); an isolated
/// one is kept as \\(+1\\).  A carry arriving at a zero bit is settled
/// as \\(+1\\), unless another run starts right above it, in which case
/// that bit opens the new run as \\(-1\\) and the carry continues.
pub fn naf(k: &[u8]) -> Naf {
    let mut positive = vec![0u8; k.len() + 1];
    let mut negative = vec![0u8; k.len() + 1];
    let mut carry = false;

    for i in (0..k.len()).rev() {
        let mut byte = k[i];
        for j in 0..8 {
            let cur_is_one = byte & 1 == 1;
            let next_is_one = if j == 7 {
                i > 0 && k[i - 1] & 1 == 1
            } else {
                byte & 2 == 2
            };

            if carry {
                // A one under a carry stays a zero digit.
                if !cur_is_one {
                    if next_is_one {
                        negative[i + 1] |= 1 << j;
                    } else {
                        positive[i + 1] |= 1 << j;
                        carry = false;
                    }
                }
            } else if cur_is_one {
                if next_is_one {
                    negative[i + 1] |= 1 << j;
                    carry = true;
                } else {
                    positive[i + 1] |= 1 << j;
                }
            }

            byte >>= 1;
        }
    }

    if carry {
        positive[0] = 1;
    } else {
        positive.remove(0);
        negative.remove(0);
    }

    Naf { positive, negative }
}

#[cfg(test)]
mod test {
    use super::*;

    use num_bigint::{BigInt, Sign};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn naf_value(naf: &Naf) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, naf.positive())
            - BigInt::from_bytes_be(Sign::Plus, naf.negative())
    }

    fn assert_is_naf(k: &[u8]) {
        let naf = naf(k);
        assert_eq!(naf.positive().len(), naf.negative().len());
        assert!(naf.len() == k.len() || naf.len() == k.len() + 1);

        assert_eq!(naf_value(&naf), BigInt::from_bytes_be(Sign::Plus, k));

        let pos = BigUint::from_bytes_be(naf.positive());
        let neg = BigUint::from_bytes_be(naf.negative());
        assert_eq!(&pos & &neg, BigUint::default(), "digit both +1 and -1");

        let nonzero = &pos | &neg;
        let shifted = &nonzero >> 1u32;
        assert_eq!(&nonzero & &shifted, BigUint::default(), "adjacent digits");
    }

    #[test]
    fn seven() {
        // 7 = 8 - 1
        let naf = naf(&[0x07]);
        assert_eq!(naf.positive(), &[0x08]);
        assert_eq!(naf.negative(), &[0x01]);
    }

    #[test]
    fn all_ones_carries_into_new_byte() {
        // 255 = 256 - 1
        let naf = naf(&[0xff]);
        assert_eq!(naf.positive(), &[0x01, 0x00]);
        assert_eq!(naf.negative(), &[0x00, 0x01]);

        let digits: Vec<i8> = naf.digits().collect();
        assert_eq!(digits.len(), 16);
        assert_eq!(digits[7], 1);
        assert_eq!(digits[15], -1);
        assert_eq!(digits.iter().filter(|&&d| d != 0).count(), 2);
    }

    #[test]
    fn carry_across_byte_boundary() {
        assert_is_naf(&[0x01, 0x80]);
        assert_is_naf(&[0x7f, 0xff, 0xff]);
        assert_is_naf(&[0x55, 0x55]);
        assert_is_naf(&[0xaa, 0xaa]);
        assert_is_naf(&[0x6d, 0xb6, 0xdb]);
    }

    #[test]
    fn empty_and_zero() {
        assert!(naf(&[]).is_empty());
        let zero = naf(&[0, 0]);
        assert_eq!(zero.len(), 2);
        assert!(zero.digits().all(|d| d == 0));
    }

    #[test]
    fn padding_keeps_value() {
        let naf = naf(&[0xff]);
        let padded = naf.padded(4);
        assert_eq!(padded.len(), 4);
        assert_eq!(naf_value(&padded), naf_value(&naf));
        assert_eq!(padded.digits().count(), 32);
        assert_eq!(naf.padded(1), naf);
    }

    #[test]
    fn modulo_reduce_wraps_order() {
        let n = BigUint::from_bytes_be(&constants::N);

        assert_eq!(modulo_reduce(&constants::N, &n), [0u8; 32]);

        let n_plus_one = &n + 1u32;
        let mut one = [0u8; 32];
        one[31] = 1;
        assert_eq!(modulo_reduce(&n_plus_one.to_bytes_be(), &n), one);

        // 33-byte input: 2^256 mod n.
        let mut big = vec![1u8];
        big.extend_from_slice(&[0u8; 32]);
        let expected = (BigUint::from(1u8) << 256u32) % &n;
        assert_eq!(
            BigUint::from_bytes_be(&modulo_reduce(&big, &n)),
            expected
        );

        let short = modulo_reduce(&[0x12, 0x34], &n);
        assert_eq!(&short[30..], &[0x12, 0x34]);
        assert!(short[..30].iter().all(|&b| b == 0));

        assert_eq!(modulo_reduce(&[], &n), [0u8; 32]);
    }

    #[test]
    fn random_scalars_are_below_order() {
        let mut rng = StdRng::seed_from_u64(0xc0ffee);
        let n = BigUint::from_bytes_be(&constants::N);
        for _ in 0..64 {
            let k = random_scalar(&mut rng);
            assert!(BigUint::from_bytes_be(&k) < n);
        }
    }

    proptest! {
        #[test]
        fn naf_is_non_adjacent_and_exact(k in proptest::collection::vec(any::<u8>(), 0..40)) {
            assert_is_naf(&k);
        }
    }
}
