//! The big integer type and its lifecycle.

use crate::error::{Error, Result};
use crate::lib::*;
use crate::math::{small, split_u64, Limb};
use crate::sign::Sign;
use crate::store::{self, LimbStore};

/// Limbs a released value reads as.
static ZERO: [Limb; 1] = [0];

/// An arbitrary-precision signed integer.
///
/// The magnitude is kept as a little-endian run of 32-bit [`Limb`]s with a
/// separate [`Sign`]. The value is always normalized: there is no leading
/// zero limb, and zero is a single `0` limb with a positive sign.
///
/// ```edition2021
/// use bigint_core::{BigInt, Sign};
///
/// # fn main() -> bigint_core::Result<()> {
/// let mut x = BigInt::new();
/// x.set_u64(u64::MAX, Sign::Negative)?;
/// assert_eq!(x.limbs(), [u32::MAX, u32::MAX]);
/// assert_eq!(x.to_string(), "-18446744073709551615");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BigInt {
    store: LimbStore,
    len: usize,
    sign: Sign,
}

impl BigInt {
    /// Fewest limbs a value is ever allocated with. Smaller requested
    /// capacities, including 0, are rounded up to this.
    pub const MIN_CAPACITY: usize = store::MIN_CAPACITY;

    /// Size in bytes of a `BigInt` handle, not counting its heap buffer.
    pub const FOOTPRINT: usize = mem::size_of::<BigInt>();

    /// Zero, with the minimum capacity.
    pub fn new() -> Self {
        BigInt::from_parts(&[0], Sign::Positive)
    }

    /// Zero, with room for at least `capacity` limbs.
    ///
    /// # Errors
    ///
    /// Fails if the buffer cannot be allocated, or if `capacity` limbs would
    /// not fit in the address space.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(BigInt {
            store: LimbStore::zeroed(capacity)?,
            len: 1,
            sign: Sign::Positive,
        })
    }

    /// Value with the given magnitude limbs (least significant first) and
    /// sign, normalized.
    pub(crate) fn from_parts(limbs: &[Limb], sign: Sign) -> Self {
        let mut x = BigInt {
            store: LimbStore::from_limbs(limbs),
            len: limbs.len().max(1),
            sign,
        };
        x.normalize();
        x
    }

    /// Frees the limb buffer.
    ///
    /// Afterwards the value has no storage: arithmetic that reads it reports
    /// [`Category::Null`](crate::error::Category::Null), while formatting and
    /// comparison treat it as zero. Assigning a new value with
    /// [`set_u64`](Self::set_u64), [`set_str`](Self::set_str) or
    /// [`copy_from`](Self::copy_from) allocates again. Releasing twice is
    /// harmless.
    pub fn release(&mut self) {
        self.store.release();
        self.len = 0;
        self.sign = Sign::Positive;
    }

    /// Returns true if the buffer has been released.
    #[inline]
    pub fn is_released(&self) -> bool {
        self.store.is_released()
    }

    /// Number of active limbs. Zero has one; a released value has none.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated limb slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Heap bytes held by the limb buffer.
    #[inline]
    pub fn heap_size(&self) -> usize {
        self.capacity() * mem::size_of::<Limb>()
    }

    /// Sign of the value; `Positive` for zero.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The active limbs of the magnitude, least significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.store.as_slice()[..self.len]
    }

    /// Returns true for zero, and for a released value.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude() == ZERO
    }

    /// Returns true if the value is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Active limbs, with a released value reading as zero.
    #[inline]
    pub(crate) fn magnitude(&self) -> &[Limb] {
        if self.len == 0 {
            &ZERO
        } else {
            self.limbs()
        }
    }

    #[inline]
    pub(crate) fn check_live(&self) -> Result<()> {
        if self.is_released() {
            Err(Error::released())
        } else {
            Ok(())
        }
    }

    /// Buffer for an operation producing up to `len` limbs.
    ///
    /// Grows the buffer if needed. When this fails nothing has been written
    /// yet, so the value is left as it was.
    #[inline]
    pub(crate) fn buffer_for(&mut self, len: usize) -> Result<&mut [Limb]> {
        self.store.reserve(len)?;
        Ok(self.store.as_mut_slice())
    }

    #[inline]
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
    }

    #[inline]
    pub(crate) fn set_sign(&mut self, sign: Sign) {
        self.sign = sign;
    }

    /// Drops leading zero limbs and gives zero a positive sign.
    ///
    /// Every operation already leaves its result normalized, so calling this
    /// again never changes anything.
    pub fn normalize(&mut self) {
        let len = small::normalized_len(self.limbs());
        self.len = len;
        if self.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    /// Sets the value to zero, keeping the buffer.
    pub(crate) fn set_zero(&mut self) {
        if let Some(limb) = self.store.as_mut_slice().first_mut() {
            *limb = 0;
            self.len = 1;
        }
        self.sign = Sign::Positive;
    }

    /// Overwrites the value with `limbs` and `sign`.
    ///
    /// A released value gets a fresh buffer. The existing capacity is kept
    /// when it is already large enough.
    pub(crate) fn assign(&mut self, limbs: &[Limb], sign: Sign) -> Result<()> {
        let len = small::normalized_len(limbs);
        if len == 0 {
            self.buffer_for(1)?;
            self.set_zero();
            return Ok(());
        }
        let buf = self.buffer_for(len)?;
        buf[..len].copy_from_slice(&limbs[..len]);
        self.len = len;
        self.sign = sign;
        self.normalize();
        Ok(())
    }

    /// Sets the value to `magnitude` with the given sign.
    ///
    /// The sign is passed separately so that the whole `u64` range is
    /// available in either direction. A zero magnitude is always stored
    /// positive.
    ///
    /// # Errors
    ///
    /// Only fails if the value was released and a new buffer cannot be
    /// allocated.
    pub fn set_u64(&mut self, magnitude: u64, sign: Sign) -> Result<()> {
        self.assign(&split_u64(magnitude), sign)
    }

    /// Makes `self` a deep copy of `src`.
    ///
    /// The buffer grows if `src` does not fit, and is never shrunk.
    ///
    /// # Errors
    ///
    /// Fails if `src` was released, or if growing the buffer fails; in both
    /// cases `self` is unchanged.
    pub fn copy_from(&mut self, src: &BigInt) -> Result<()> {
        src.check_live()?;
        self.assign(src.limbs(), src.sign)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::new()
    }
}

impl Debug for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "BigInt({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_canonical_zero() {
        let x = BigInt::new();
        assert_eq!(x.len(), 1);
        assert_eq!(x.capacity(), BigInt::MIN_CAPACITY);
        assert_eq!(x.sign(), Sign::Positive);
        assert!(x.is_zero());
    }

    #[test]
    fn with_capacity_clamps() {
        let x = BigInt::with_capacity(0).unwrap();
        assert_eq!(x.capacity(), BigInt::MIN_CAPACITY);
        let x = BigInt::with_capacity(10).unwrap();
        assert_eq!(x.capacity(), 10);
        assert_eq!(x.limbs(), [0]);
    }

    #[test]
    fn from_parts_normalizes() {
        let x = BigInt::from_parts(&[0, 0, 0], Sign::Negative);
        assert_eq!(x.len(), 1);
        assert_eq!(x.sign(), Sign::Positive);

        let x = BigInt::from_parts(&[5, 0, 0], Sign::Negative);
        assert_eq!(x.limbs(), [5]);
        assert_eq!(x.sign(), Sign::Negative);
    }

    #[test]
    fn set_u64_splits() {
        let mut x = BigInt::new();
        x.set_u64(0x1_0000_0002, Sign::Positive).unwrap();
        assert_eq!(x.limbs(), [2, 1]);
        x.set_u64(7, Sign::Negative).unwrap();
        assert_eq!(x.limbs(), [7]);
        assert!(x.is_negative());
        x.set_u64(0, Sign::Negative).unwrap();
        assert!(x.is_zero());
        assert_eq!(x.sign(), Sign::Positive);
    }

    #[test]
    fn copy_keeps_capacity() {
        let mut dst = BigInt::with_capacity(16).unwrap();
        let src = BigInt::from_parts(&[1, 2, 3], Sign::Negative);
        dst.copy_from(&src).unwrap();
        assert_eq!(dst.limbs(), [1, 2, 3]);
        assert_eq!(dst.sign(), Sign::Negative);
        assert_eq!(dst.capacity(), 16);

        let mut small = BigInt::new();
        small.copy_from(&src).unwrap();
        assert_eq!(small.limbs(), [1, 2, 3]);
        assert_eq!(small.capacity(), 4);
    }

    #[test]
    fn release_twice() {
        let mut x = BigInt::from_parts(&[1, 2], Sign::Negative);
        x.release();
        x.release();
        assert!(x.is_released());
        assert_eq!(x.len(), 0);
        assert_eq!(x.capacity(), 0);
        assert_eq!(x.sign(), Sign::Positive);
        assert!(x.is_zero());
    }

    #[test]
    fn with_capacity_allocation_failure() {
        let err = BigInt::with_capacity(store::MAX_CAPACITY).unwrap_err();
        assert!(err.is_allocation());
        assert!(!err.is_size());
    }

    #[test]
    fn failed_growth_leaves_value() {
        let mut x = BigInt::from_parts(&[7, 1], Sign::Negative);
        assert!(x.buffer_for(store::MAX_CAPACITY).unwrap_err().is_allocation());
        assert_eq!(x.limbs(), [7, 1]);
        assert!(x.is_negative());
        assert_eq!(x.capacity(), BigInt::MIN_CAPACITY);
    }

    #[test]
    fn copy_from_released() {
        let mut src = BigInt::from_parts(&[1], Sign::Positive);
        src.release();
        let mut dst = BigInt::from_parts(&[9], Sign::Negative);
        let err = dst.copy_from(&src).unwrap_err();
        assert!(err.is_null());
        assert_eq!(dst.limbs(), [9]);
        assert!(dst.is_negative());
    }

    #[test]
    fn assign_into_released() {
        let mut x = BigInt::new();
        x.release();
        x.set_u64(42, Sign::Positive).unwrap();
        assert_eq!(x.limbs(), [42]);
        assert_eq!(x.capacity(), BigInt::MIN_CAPACITY);
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut x = BigInt::from_parts(&[3, 4], Sign::Negative);
        x.normalize();
        x.normalize();
        assert_eq!(x.limbs(), [3, 4]);
        assert!(x.is_negative());
    }
}
