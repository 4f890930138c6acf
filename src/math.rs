//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `[0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Nothing in here allocates. Callers hand in destination buffers already
//! sized for the worst case, and every routine reports the number of active
//! limbs it leaves behind.

use crate::lib::{mem, Ordering};

// ALIASES
// -------

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base10, except it stores a 32-bit
/// number instead.
pub type Limb = u32;

/// Type for the product of two limbs.
///
/// Must be at least twice as wide as [`Limb`]: every limb-by-limb product,
/// plus an accumulator limb and a carry limb, is computed in this type
/// without overflowing.
pub type Wide = u64;

/// Number of bits in a limb.
pub(crate) const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

/// Powers of 10 that fit in a single limb.
pub(crate) const POW10_LIMB: [Limb; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Number of decimal digits that can always be folded into one limb step.
pub(crate) const DIGITS_PER_LIMB: usize = POW10_LIMB.len() - 1;

/// Cast to limb type, keeping the low bits.
#[inline(always)]
fn as_limb(x: Wide) -> Limb {
    x as Limb
}

/// Cast to wide type.
#[inline(always)]
fn as_wide(x: Limb) -> Wide {
    Wide::from(x)
}

// SPLIT
// -----

/// Split u64 into limbs, in little-endian order.
#[inline]
pub(crate) fn split_u64(x: u64) -> [Limb; 2] {
    [as_limb(x), as_limb(x >> LIMB_BITS)]
}

/// Split u128 into limbs, in little-endian order.
#[inline]
pub(crate) fn split_u128(x: u128) -> [Limb; 4] {
    let [a, b] = split_u64(x as u64);
    let [c, d] = split_u64((x >> 64) as u64);
    [a, b, c, d]
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two limbs and an incoming carry, returning the sum and the
    /// outgoing carry.
    #[inline]
    pub fn add(x: Limb, y: Limb, carry: bool) -> (Limb, bool) {
        // Only one of the two additions can overflow, since at most we add
        // `Limb::MAX + Limb::MAX + 1`.
        let (v, c1) = x.overflowing_add(y);
        let (v, c2) = v.overflowing_add(Limb::from(carry));
        (v, c1 | c2)
    }

    // SUBTRACTION

    /// Subtract a limb and an incoming borrow, returning the difference and
    /// the outgoing borrow.
    #[inline]
    pub fn sub(x: Limb, y: Limb, borrow: bool) -> (Limb, bool) {
        let (v, b1) = x.overflowing_sub(y);
        let (v, b2) = v.overflowing_sub(Limb::from(borrow));
        (v, b1 | b2)
    }

    // MULTIPLICATION

    /// Multiply two limbs and add an accumulator and a carry.
    ///
    /// Returns the (low, high) components.
    #[inline]
    pub fn mul_add(x: Limb, y: Limb, acc: Limb, carry: Limb) -> (Limb, Limb) {
        // Cannot overflow, as long as wide is 2x as wide. This is because
        // the following is always true:
        // `Wide::MAX - (Limb::MAX * Limb::MAX) >= 2 * Limb::MAX`
        let z: Wide = as_wide(x) * as_wide(y) + as_wide(acc) + as_wide(carry);
        (as_limb(z), as_limb(z >> LIMB_BITS))
    }

    // DIVISION

    /// Divide the two-limb value `(rem, x)` by `y`.
    ///
    /// Requires `rem < y`, so the quotient fits in a single limb. Returns the
    /// (quotient, remainder) components.
    #[inline]
    pub fn div(x: Limb, y: Limb, rem: Limb) -> (Limb, Limb) {
        debug_assert!(rem < y);
        let z = (as_wide(rem) << LIMB_BITS) | as_wide(x);
        let y = as_wide(y);
        (as_limb(z / y), as_limb(z % y))
    }
} // scalar

// SMALL
// -----

// Large-to-small operations, to modify a big integer by a native scalar.

pub(crate) mod small {
    use super::*;

    // NORMALIZE

    /// Number of active limbs once leading zeros are dropped.
    ///
    /// A buffer of all zeros keeps a single limb, which is how zero is
    /// stored. An empty buffer stays empty.
    #[inline]
    pub fn normalized_len(x: &[Limb]) -> usize {
        let mut len = x.len();
        while len > 1 && x[len - 1] == 0 {
            len -= 1;
        }
        len
    }

    // MULTIPLICATION

    /// Fused `x = x * y + z` by small integers.
    ///
    /// The addend rides in as the initial carry, so a single pass both
    /// scales and increments. Returns the limb that overflowed past the most
    /// significant one.
    #[inline]
    pub fn imul_add(x: &mut [Limb], y: Limb, z: Limb) -> Limb {
        let mut carry = z;
        for xi in x.iter_mut() {
            let (lo, hi) = scalar::mul_add(*xi, y, 0, carry);
            *xi = lo;
            carry = hi;
        }
        carry
    }

    // DIVISION

    /// DivAssign bigint by small integer, returning the remainder.
    ///
    /// Short division: walks from the most significant limb down, carrying
    /// each limb's remainder into the next lower one. The quotient may have
    /// a leading zero limb; re-normalize afterwards.
    #[inline]
    pub fn idiv(x: &mut [Limb], y: Limb) -> Limb {
        debug_assert!(y != 0);
        let mut rem = 0;
        for xi in x.iter_mut().rev() {
            let (q, r) = scalar::div(*xi, y, rem);
            *xi = q;
            rem = r;
        }
        rem
    }
} // small

// LARGE
// -----

// Large-to-large operations, to modify a big integer by another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// Both sides must be normalized, so that the longer one is always the
    /// larger one.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> Ordering {
        if x.len() > y.len() {
            Ordering::Greater
        } else if x.len() < y.len() {
            Ordering::Less
        } else {
            let iter = x.iter().rev().zip(y.iter().rev());
            for (&xi, &yi) in iter {
                if xi > yi {
                    return Ordering::Greater;
                } else if xi < yi {
                    return Ordering::Less;
                }
            }
            // Equal case.
            Ordering::Equal
        }
    }

    /// Check if x is greater than or equal to y.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) != Ordering::Less
    }

    // ADDITION

    /// AddAssign bigint to bigint.
    ///
    /// `x` is the whole buffer, of which the first `xlen` limbs are active.
    /// It must have room for `max(xlen, y.len()) + 1` limbs so a final carry
    /// always fits. Returns the new active length.
    pub fn iadd(x: &mut [Limb], xlen: usize, y: &[Limb]) -> usize {
        let len = xlen.max(y.len());
        assert!(x.len() > len, "addition buffer too small for carry");

        // Limbs past the active length are stale, clear the ones we extend into.
        for xi in &mut x[xlen..len] {
            *xi = 0;
        }

        let mut carry = false;
        for (xi, &yi) in x[..y.len()].iter_mut().zip(y) {
            let (v, c) = scalar::add(*xi, yi, carry);
            *xi = v;
            carry = c;
        }
        let mut index = y.len();
        while carry && index < len {
            let (v, c) = scalar::add(x[index], 0, true);
            x[index] = v;
            carry = c;
            index += 1;
        }

        // Overflow from the previous limb.
        if carry {
            x[len] = 1;
            len + 1
        } else {
            len
        }
    }

    // SUBTRACTION

    /// SubAssign bigint to bigint, `x -= y`.
    ///
    /// Requires `|x| >= |y|` over the first `xlen` limbs of `x`, and panics
    /// otherwise. Returns the normalized active length.
    pub fn isub(x: &mut [Limb], xlen: usize, y: &[Limb]) -> usize {
        assert!(
            greater_equal(&x[..xlen], y),
            "magnitude subtraction would underflow"
        );

        let mut borrow = false;
        for (xi, &yi) in x[..y.len()].iter_mut().zip(y) {
            let (v, b) = scalar::sub(*xi, yi, borrow);
            *xi = v;
            borrow = b;
        }
        let mut index = y.len();
        while borrow && index < xlen {
            let (v, b) = scalar::sub(x[index], 0, true);
            x[index] = v;
            borrow = b;
            index += 1;
        }

        small::normalized_len(&x[..xlen])
    }

    /// Reverse SubAssign bigint to bigint, `x = y - x`.
    ///
    /// Used when the subtrahend lives in the destination buffer. Requires
    /// `|y| >= |x|` over the first `xlen` limbs of `x`, and room for
    /// `y.len()` limbs in `x`. Returns the normalized active length.
    pub fn rsub(x: &mut [Limb], xlen: usize, y: &[Limb]) -> usize {
        assert!(
            greater_equal(y, &x[..xlen]),
            "magnitude subtraction would underflow"
        );

        let len = y.len();
        for xi in &mut x[xlen..len] {
            *xi = 0;
        }

        let mut borrow = false;
        for (xi, &yi) in x[..len].iter_mut().zip(y) {
            let (v, b) = scalar::sub(yi, *xi, borrow);
            *xi = v;
            borrow = b;
        }
        debug_assert!(!borrow);

        small::normalized_len(&x[..len])
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm, `z = x * y`.
    ///
    /// For every limb pair `(i, j)` the wide product `x[i] * y[j]` is
    /// accumulated into `z[i + j]`, and its high half carried into
    /// `z[i + j + 1]`. Runs in `O(n*m)` time. `z` must not overlap the
    /// inputs and must have room for `x.len() + y.len()` limbs. Returns the
    /// normalized active length.
    pub fn mul(z: &mut [Limb], x: &[Limb], y: &[Limb]) -> usize {
        let len = x.len() + y.len();
        let z = &mut z[..len];
        for zi in z.iter_mut() {
            *zi = 0;
        }

        for (i, &xi) in x.iter().enumerate() {
            let mut carry = 0;
            for (j, &yj) in y.iter().enumerate() {
                let (lo, hi) = scalar::mul_add(xi, yj, z[i + j], carry);
                z[i + j] = lo;
                carry = hi;
            }
            z[i + y.len()] = carry;
        }

        small::normalized_len(z)
    }
} // large

// TESTS
// -----
