//! Owned, growable limb buffer.

use crate::error::{Error, Result};
use crate::lib::*;
use crate::math::Limb;

/// Fewest limbs a live buffer is ever allocated with.
pub(crate) const MIN_CAPACITY: usize = 2;

/// Most limbs a buffer can address without its byte size overflowing `isize`.
pub(crate) const MAX_CAPACITY: usize = isize::MAX as usize / mem::size_of::<Limb>();

/// Storage for the limbs of a big integer, in little-endian order.
///
/// Every allocated slot is initialized, so the capacity is simply the length
/// of the inner vector. Slots past a value's active length hold stale limbs
/// and are cleared by whoever extends into them. The buffer only ever grows;
/// it is given back to the allocator by [`LimbStore::release`] or on drop.
#[derive(Clone)]
pub(crate) struct LimbStore {
    buf: Vec<Limb>,
}

impl LimbStore {
    /// Store with no buffer at all.
    pub(crate) const fn released() -> Self {
        LimbStore { buf: Vec::new() }
    }

    /// Store holding `limbs` exactly, padded with zeros up to the minimum
    /// capacity.
    ///
    /// For the handful of limbs a native integer splits into. Goes through
    /// the infallible allocator path, like any other small `Vec`.
    pub(crate) fn from_limbs(limbs: &[Limb]) -> Self {
        let capacity = limbs.len().max(MIN_CAPACITY);
        let mut buf = Vec::with_capacity(capacity);
        buf.extend_from_slice(limbs);
        buf.resize(capacity, 0);
        LimbStore { buf }
    }

    /// Store of `capacity` zeroed limbs, clamped up to the minimum capacity.
    pub(crate) fn zeroed(capacity: usize) -> Result<Self> {
        let mut store = LimbStore::released();
        store.grow_to(capacity.max(MIN_CAPACITY))?;
        Ok(store)
    }

    /// Number of allocated limb slots.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn is_released(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Limb] {
        &self.buf
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Limb] {
        &mut self.buf
    }

    /// Make sure at least `required` limb slots are allocated.
    ///
    /// Growth doubles the current capacity, or jumps straight to `required`
    /// when doubling is not enough. On failure the existing limbs are left
    /// untouched.
    pub(crate) fn reserve(&mut self, required: usize) -> Result<()> {
        let capacity = self.capacity();
        if required <= capacity {
            return Ok(());
        }
        if required > MAX_CAPACITY {
            return Err(Error::capacity_overflow(required));
        }
        let target = capacity
            .saturating_mul(2)
            .clamp(required.max(MIN_CAPACITY), MAX_CAPACITY);
        self.grow_to(target)
    }

    fn grow_to(&mut self, capacity: usize) -> Result<()> {
        if capacity > MAX_CAPACITY {
            return Err(Error::capacity_overflow(capacity));
        }
        let additional = capacity - self.buf.len();
        if let Err(err) = self.buf.try_reserve_exact(additional) {
            tracing::debug!(
                from = self.buf.len(),
                to = capacity,
                "limb buffer allocation failed"
            );
            return Err(Error::alloc(err));
        }
        tracing::trace!(from = self.buf.len(), to = capacity, "growing limb buffer");
        self.buf.resize(capacity, 0);
        Ok(())
    }

    /// Hand the buffer back to the allocator. Safe to call more than once.
    pub(crate) fn release(&mut self) {
        self.buf = Vec::new();
    }
}
