// -*- mode: rust; -*-
//
// This file is part of koblitz.
// Copyright (c) 2026 The koblitz developers
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{256} - 2\^{32} - 977\\), using
//! \\(64\\)-bit limbs with \\(128\\)-bit products.
//!
//! The element is stored as five limbs in radix \\(2\^{52}\\), the top
//! limb holding \\(48\\) bits.  Every limb keeps at least twelve spare
//! bits, so sums and small multiples can be accumulated without a carry
//! pass; how far a value has drifted from its reduced form is its
//! _magnitude_, which the wrapper in `crate::field` keeps track of.

use core::fmt::Debug;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

const LOW_52_BIT_MASK: u64 = (1u64 << 52) - 1;
const LOW_48_BIT_MASK: u64 = (1u64 << 48) - 1;

/// Low limb of \\(p\\); the three middle limbs of \\(p\\) are all ones.
const P0: u64 = 0xFFFFEFFFFFC2F;

/// \\(2\^{256} - p\\).
const R: u64 = 0x1000003D1;

/// A `FieldElement5x52` represents an element of the field
/// \\( \mathbb Z / (2\^{256} - 2\^{32} - 977)\\).
///
/// In the 64-bit implementation, a `FieldElement` is represented in
/// radix \\(2\^{52}\\) as five `u64`s; the coefficients are allowed to
/// grow up to \\(2\^{56}\\) between reductions.
///
/// # Note
///
/// `koblitz::field::FieldElement` wraps this type and tracks the
/// magnitude of the limbs; this type should not be used directly.
#[derive(Copy, Clone)]
pub struct FieldElement5x52(pub(crate) [u64; 5]);

impl Debug for FieldElement5x52 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement5x52({:?})", &self.0[..])
    }
}

impl ConstantTimeEq for FieldElement5x52 {
    /// Limb-wise comparison.  Only meaningful when both sides are
    /// fully normalized.
    fn ct_eq(&self, other: &FieldElement5x52) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
            & self.0[4].ct_eq(&other.0[4])
    }
}

impl ConditionallySelectable for FieldElement5x52 {
    fn conditional_select(
        a: &FieldElement5x52,
        b: &FieldElement5x52,
        choice: Choice,
    ) -> FieldElement5x52 {
        FieldElement5x52([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}

impl FieldElement5x52 {
    pub(crate) const ZERO: FieldElement5x52 = FieldElement5x52([0, 0, 0, 0, 0]);
    pub(crate) const ONE: FieldElement5x52 = FieldElement5x52([1, 0, 0, 0, 0]);

    pub(crate) const fn from_u64(value: u64) -> FieldElement5x52 {
        FieldElement5x52([value & LOW_52_BIT_MASK, value >> 52, 0, 0, 0])
    }

    /// Load a big-endian 256-bit integer.  The value is not reduced, so
    /// anything in \\([p, 2\^{256})\\) comes back unnormalized.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> FieldElement5x52 {
        // Little-endian 64-bit words of the integer.
        let mut w = [0u64; 4];
        for (i, chunk) in bytes.rchunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            w[i] = u64::from_be_bytes(word);
        }

        FieldElement5x52([
            w[0] & LOW_52_BIT_MASK,
            ((w[0] >> 52) | (w[1] << 12)) & LOW_52_BIT_MASK,
            ((w[1] >> 40) | (w[2] << 24)) & LOW_52_BIT_MASK,
            ((w[2] >> 28) | (w[3] << 36)) & LOW_52_BIT_MASK,
            w[3] >> 16,
        ])
    }

    /// Serialize to big-endian bytes.  The limbs must be fully
    /// normalized.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let l = &self.0;
        let w = [
            l[0] | (l[1] << 52),
            (l[1] >> 12) | (l[2] << 40),
            (l[2] >> 24) | (l[3] << 28),
            (l[3] >> 36) | (l[4] << 16),
        ];

        let mut bytes = [0u8; 32];
        for (i, chunk) in bytes.rchunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&w[i].to_be_bytes());
        }
        bytes
    }

    /// Add `x * (2^256 - p)` to the low limb and carry once through.
    fn add_modulus_correction(&self, x: u64) -> FieldElement5x52 {
        let t0 = self.0[0] + x * R;

        let t1 = self.0[1] + (t0 >> 52);
        let t0 = t0 & LOW_52_BIT_MASK;

        let t2 = self.0[2] + (t1 >> 52);
        let t1 = t1 & LOW_52_BIT_MASK;

        let t3 = self.0[3] + (t2 >> 52);
        let t2 = t2 & LOW_52_BIT_MASK;

        let t4 = self.0[4] + (t3 >> 52);
        let t3 = t3 & LOW_52_BIT_MASK;

        FieldElement5x52([t0, t1, t2, t3, t4])
    }

    /// Strip the multiple of \\(2\^{256}\\) held above bit 48 of the top
    /// limb, returning it separately.
    fn split_overflow(&self) -> (FieldElement5x52, u64) {
        let x = self.0[4] >> 48;
        let t4 = self.0[4] & LOW_48_BIT_MASK;
        (FieldElement5x52([self.0[0], self.0[1], self.0[2], self.0[3], t4]), x)
    }

    /// Is the (carried) value at least \\(p\\)?
    pub(crate) fn get_overflow(&self) -> Choice {
        let m = self.0[1] & self.0[2] & self.0[3];
        let x = (self.0[4] >> 48 != 0)
            | ((self.0[4] == LOW_48_BIT_MASK) & (m == LOW_52_BIT_MASK) & (self.0[0] >= P0));
        Choice::from(x as u8)
    }

    /// Reduce to magnitude 1 without guaranteeing a canonical value.
    pub(crate) fn normalize_weak(&self) -> FieldElement5x52 {
        let (t, x) = self.split_overflow();
        let res = t.add_modulus_correction(x);

        // At most one carry into bit 256 remains.
        debug_assert!(res.0[4] >> 49 == 0);

        res
    }

    /// Fully reduce into \\([0, p)\\) with every limb in range.
    pub(crate) fn normalize(&self) -> FieldElement5x52 {
        let res = self.normalize_weak();
        let overflow = res.get_overflow();

        // Always compute the corrected value, then select.
        let (corrected, x) = res.add_modulus_correction(1).split_overflow();
        debug_assert!(x == (overflow.unwrap_u8() as u64));

        FieldElement5x52::conditional_select(&res, &corrected, overflow)
    }

    /// Would this value normalize to zero?  Raw zero and raw \\(p\\) are
    /// the two possibilities after a weak reduction.
    pub(crate) fn normalizes_to_zero(&self) -> Choice {
        let t = self.normalize_weak().0;

        let z0 = t[0] | t[1] | t[2] | t[3] | t[4];
        let z1 = (t[0] ^ 0x1000003D0) & t[1] & t[2] & t[3] & (t[4] ^ 0xF000000000000);

        Choice::from(((z0 == 0) | (z1 == LOW_52_BIT_MASK)) as u8)
    }

    /// Compute \\(-x\\) for an input of magnitude at most `magnitude`,
    /// yielding magnitude `magnitude + 1`.
    pub(crate) const fn negate(&self, magnitude: u32) -> FieldElement5x52 {
        let m = 2 * (magnitude as u64 + 1);
        FieldElement5x52([
            P0 * m - self.0[0],
            LOW_52_BIT_MASK * m - self.0[1],
            LOW_52_BIT_MASK * m - self.0[2],
            LOW_52_BIT_MASK * m - self.0[3],
            LOW_48_BIT_MASK * m - self.0[4],
        ])
    }

    pub(crate) const fn add(&self, rhs: &FieldElement5x52) -> FieldElement5x52 {
        FieldElement5x52([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
            self.0[4] + rhs.0[4],
        ])
    }

    pub(crate) const fn mul_single(&self, rhs: u32) -> FieldElement5x52 {
        let k = rhs as u64;
        FieldElement5x52([
            self.0[0] * k,
            self.0[1] * k,
            self.0[2] * k,
            self.0[3] * k,
            self.0[4] * k,
        ])
    }

    /// Adapted from the `secp256k1` crate of RustCrypto's
    /// `elliptic-curves`, itself a port of libsecp256k1's
    /// `secp256k1_fe_mul_inner`.
    ///
    /// Schoolbook multiplication with interleaved reduction by
    /// \\(2\^{260} \equiv 16 (2\^{256} - p)\\).  Inputs must have magnitude
    /// at most 8; the output has magnitude 1.
    #[inline(always)]
    fn mul_inner(&self, rhs: &FieldElement5x52) -> FieldElement5x52 {
        let a0 = self.0[0] as u128;
        let a1 = self.0[1] as u128;
        let a2 = self.0[2] as u128;
        let a3 = self.0[3] as u128;
        let a4 = self.0[4] as u128;
        let b0 = rhs.0[0] as u128;
        let b1 = rhs.0[1] as u128;
        let b2 = rhs.0[2] as u128;
        let b3 = rhs.0[3] as u128;
        let b4 = rhs.0[4] as u128;
        let m = 0xFFFFFFFFFFFFFu128;
        let r = 0x1000003D10u128;

        debug_assert!(a0 >> 56 == 0);
        debug_assert!(a1 >> 56 == 0);
        debug_assert!(a2 >> 56 == 0);
        debug_assert!(a3 >> 56 == 0);
        debug_assert!(a4 >> 52 == 0);

        debug_assert!(b0 >> 56 == 0);
        debug_assert!(b1 >> 56 == 0);
        debug_assert!(b2 >> 56 == 0);
        debug_assert!(b3 >> 56 == 0);
        debug_assert!(b4 >> 52 == 0);

        // [... a b c] is a shorthand for ... + a<<104 + b<<52 + c<<0 mod n.
        // for 0 <= x <= 4, px is a shorthand for sum(a[i]*b[x-i], i=0..x).
        // for 4 <= x <= 8, px is a shorthand for sum(a[i]*b[x-i], i=(x-4)..4)
        // Note that [x 0 0 0 0 0] = [x*r].

        let mut d = a0 * b3 + a1 * b2 + a2 * b1 + a3 * b0;
        debug_assert!(d >> 114 == 0);
        // [d 0 0 0] = [p3 0 0 0]
        let mut c = a4 * b4;
        debug_assert!(c >> 112 == 0);
        // [c 0 0 0 0 d 0 0 0] = [p8 0 0 0 0 p3 0 0 0]
        d += (c & m) * r;
        c >>= 52;
        debug_assert!(d >> 115 == 0);
        debug_assert!(c >> 60 == 0);
        let c64 = c as u64;
        // [c 0 0 0 0 0 d 0 0 0] = [p8 0 0 0 0 p3 0 0 0]
        let t3 = (d & m) as u64;
        d >>= 52;
        debug_assert!(t3 >> 52 == 0);
        debug_assert!(d >> 63 == 0);
        let d64 = d as u64;
        // [c 0 0 0 0 d t3 0 0 0] = [p8 0 0 0 0 p3 0 0 0]

        d = d64 as u128 + a0 * b4 + a1 * b3 + a2 * b2 + a3 * b1 + a4 * b0;
        debug_assert!(d >> 115 == 0);
        // [c 0 0 0 0 d t3 0 0 0] = [p8 0 0 0 p4 p3 0 0 0]
        d += c64 as u128 * r;
        debug_assert!(d >> 116 == 0);
        // [d t3 0 0 0] = [p8 0 0 0 p4 p3 0 0 0]
        let t4 = (d & m) as u64;
        d >>= 52;
        debug_assert!(t4 >> 52 == 0);
        debug_assert!(d >> 64 == 0);
        let d64 = d as u64;
        // [d t4 t3 0 0 0] = [p8 0 0 0 p4 p3 0 0 0]
        let tx = t4 >> 48;
        let t4 = t4 & ((m as u64) >> 4);
        debug_assert!(tx >> 4 == 0);
        debug_assert!(t4 >> 48 == 0);
        // [d t4+(tx<<48) t3 0 0 0] = [p8 0 0 0 p4 p3 0 0 0]

        c = a0 * b0;
        debug_assert!(c >> 112 == 0);
        // [d t4+(tx<<48) t3 0 0 c] = [p8 0 0 0 p4 p3 0 0 p0]
        d = d64 as u128 + a1 * b4 + a2 * b3 + a3 * b2 + a4 * b1;
        debug_assert!(d >> 115 == 0);
        // [d t4+(tx<<48) t3 0 0 c] = [p8 0 0 p5 p4 p3 0 0 p0]
        let u0 = (d & m) as u64;
        d >>= 52;
        debug_assert!(u0 >> 52 == 0);
        debug_assert!(d >> 63 == 0);
        let d64 = d as u64;
        // [d u0 t4+(tx<<48) t3 0 0 c] = [p8 0 0 p5 p4 p3 0 0 p0]
        // [d 0 t4+(tx<<48)+(u0<<52) t3 0 0 c] = [p8 0 0 p5 p4 p3 0 0 p0]
        let u0 = (u0 << 4) | tx;
        debug_assert!(u0 >> 56 == 0);
        // [d 0 t4+(u0<<48) t3 0 0 c] = [p8 0 0 p5 p4 p3 0 0 p0]
        c += u0 as u128 * ((r as u64) >> 4) as u128;
        debug_assert!(c >> 115 == 0);
        // [d 0 t4 t3 0 0 c] = [p8 0 0 p5 p4 p3 0 0 p0]
        let r0 = (c & m) as u64;
        c >>= 52;
        debug_assert!(r0 >> 52 == 0);
        debug_assert!(c >> 61 == 0);
        let c64 = c as u64;
        // [d 0 t4 t3 0 c r0] = [p8 0 0 p5 p4 p3 0 0 p0]

        c = c64 as u128 + a0 * b1 + a1 * b0;
        debug_assert!(c >> 114 == 0);
        // [d 0 t4 t3 0 c r0] = [p8 0 0 p5 p4 p3 0 p1 p0]
        d = d64 as u128 + a2 * b4 + a3 * b3 + a4 * b2;
        debug_assert!(d >> 114 == 0);
        // [d 0 t4 t3 0 c r0] = [p8 0 p6 p5 p4 p3 0 p1 p0]
        c += (d & m) * r;
        d >>= 52;
        debug_assert!(c >> 115 == 0);
        debug_assert!(d >> 62 == 0);
        let d64 = d as u64;
        // [d 0 0 t4 t3 0 c r0] = [p8 0 p6 p5 p4 p3 0 p1 p0]
        let r1 = (c & m) as u64;
        c >>= 52;
        debug_assert!(r1 >> 52 == 0);
        debug_assert!(c >> 63 == 0);
        let c64 = c as u64;
        // [d 0 0 t4 t3 c r1 r0] = [p8 0 p6 p5 p4 p3 0 p1 p0]

        c = c64 as u128 + a0 * b2 + a1 * b1 + a2 * b0;
        debug_assert!(c >> 114 == 0);
        // [d 0 0 t4 t3 c r1 r0] = [p8 0 p6 p5 p4 p3 p2 p1 p0]
        d = d64 as u128 + a3 * b4 + a4 * b3;
        debug_assert!(d >> 114 == 0);
        // [d 0 0 t4 t3 c t1 r0] = [p8 p7 p6 p5 p4 p3 p2 p1 p0]
        c += (d & m) * r;
        d >>= 52;
        debug_assert!(c >> 115 == 0);
        debug_assert!(d >> 62 == 0);
        let d64 = d as u64;
        // [d 0 0 0 t4 t3 c r1 r0] = [p8 p7 p6 p5 p4 p3 p2 p1 p0]

        // [d 0 0 0 t4 t3 c r1 r0] = [p8 p7 p6 p5 p4 p3 p2 p1 p0]
        let r2 = (c & m) as u64;
        c >>= 52;
        debug_assert!(r2 >> 52 == 0);
        debug_assert!(c >> 63 == 0);
        let c64 = c as u64;
        // [d 0 0 0 t4 t3+c r2 r1 r0] = [p8 p7 p6 p5 p4 p3 p2 p1 p0]
        c = c64 as u128 + (d64 as u128) * r + t3 as u128;
        debug_assert!(c >> 100 == 0);
        // [t4 c r2 r1 r0] = [p8 p7 p6 p5 p4 p3 p2 p1 p0]
        let r3 = (c & m) as u64;
        c >>= 52;
        debug_assert!(r3 >> 52 == 0);
        debug_assert!(c >> 48 == 0);
        let c64 = c as u64;
        // [t4+c r3 r2 r1 r0] = [p8 p7 p6 p5 p4 p3 p2 p1 p0]
        c = c64 as u128 + t4 as u128;
        debug_assert!(c >> 49 == 0);
        // [c r3 r2 r1 r0] = [p8 p7 p6 p5 p4 p3 p2 p1 p0]
        let r4 = c as u64;
        debug_assert!(r4 >> 49 == 0);
        // [r4 r3 r2 r1 r0] = [p8 p7 p6 p5 p4 p3 p2 p1 p0]

        FieldElement5x52([r0, r1, r2, r3, r4])
    }

    pub(crate) fn mul(&self, rhs: &FieldElement5x52) -> FieldElement5x52 {
        self.mul_inner(rhs)
    }

    pub(crate) fn square(&self) -> FieldElement5x52 {
        self.mul_inner(self)
    }
}
