//! Home of Slatck, a mutex-locked wrapper of Slate.

use crate::{AllocError, Allocation, Slate, StorageReport};

/// Slate lock, contains a mutex-locked [`Slate`].
///
/// Slate itself is single-owner; this wrapper serializes access from
/// multiple owners behind any [`lock_api`] mutex.
///
/// # Example
/// ```rust
/// # use slate::Slate;
/// let mut buffer = vec![0u8; Slate::required_bytes(128)];
/// let slate = Slate::new(1 << 20, 128, &mut buffer);
/// let slatck = slate.lock::<spin::Mutex<()>>();
///
/// let a = slatck.allocate(4096).unwrap();
/// assert_eq!(a.offset, 0);
/// slatck.free(a);
/// ```
#[derive(Debug)]
pub struct Slatck<'a, R: lock_api::RawMutex> {
    mutex: lock_api::Mutex<R, Slate<'a>>,
}

impl<'a, R: lock_api::RawMutex> Slatck<'a, R> {
    /// Create a new `Slatck`.
    pub const fn new(slate: Slate<'a>) -> Self {
        Self { mutex: lock_api::Mutex::new(slate) }
    }

    /// Lock the mutex and access the inner `Slate`.
    pub fn lock(&self) -> lock_api::MutexGuard<'_, R, Slate<'a>> {
        self.mutex.lock()
    }

    /// Try to lock the mutex and access the inner `Slate`.
    pub fn try_lock(&self) -> Option<lock_api::MutexGuard<'_, R, Slate<'a>>> {
        self.mutex.try_lock()
    }

    /// Retrieve the inner `Slate`.
    pub fn into_inner(self) -> Slate<'a> {
        self.mutex.into_inner()
    }

    /// Lock and allocate. See [`Slate::allocate`].
    pub fn allocate(&self, size: u32) -> Result<Allocation, AllocError> {
        self.lock().allocate(size)
    }

    /// Lock and free. See [`Slate::free`].
    pub fn free(&self, allocation: Allocation) {
        self.lock().free(allocation)
    }

    /// Lock and snapshot the free pool. See [`Slate::storage_report`].
    pub fn storage_report(&self) -> StorageReport {
        self.lock().storage_report()
    }
}

impl<'a> Slate<'a> {
    /// Wrap in [`Slatck`], a mutex-locked wrapper struct using [`lock_api`].
    ///
    /// # Examples
    /// ```
    /// # use slate::Slate;
    /// use spin::Mutex;
    /// let mut buffer = vec![0u8; Slate::required_bytes(16)];
    /// let slate = Slate::new(65536, 16, &mut buffer);
    /// let slatck = slate.lock::<Mutex<()>>();
    /// ```
    pub const fn lock<R: lock_api::RawMutex>(self) -> Slatck<'a, R> {
        Slatck::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_round_trip() {
        let mut buffer = vec![0u8; Slate::required_bytes(16)];
        let slatck = Slate::new(1 << 16, 16, &mut buffer).lock::<spin::Mutex<()>>();

        let a = slatck.allocate(1234).unwrap();
        assert!(a.offset == 0);
        assert!(slatck.try_lock().is_some());
        slatck.free(a);

        assert!(slatck.storage_report().total_free_space == 1 << 16);

        let mut slate = slatck.into_inner();
        let whole = slate.allocate(1 << 16).unwrap();
        assert!(whole.offset == 0);
    }

    #[test]
    fn assume_unlockable_on_one_thread() {
        let mut buffer = vec![0u8; Slate::required_bytes(8)];
        let slatck = Slate::new(4096, 8, &mut buffer).lock::<crate::locking::AssumeUnlockable>();

        let a = slatck.allocate(64).unwrap();
        assert!(a.offset == 0);
        slatck.free(a);
    }
}
