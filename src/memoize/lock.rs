//! Scoped exclusive access to a cache store.
//!
//! [`ScopedLock`] runs a closure with exclusive access to the guarded value
//! and releases that access when the closure returns, returns early, or
//! unwinds. The guard is dropped on every exit path, so callers never release
//! anything by hand.
//!
//! Two implementations back the memoization policies:
//!
//! | Type                      | Exclusion       | Used by                        |
//! |---------------------------|-----------------|--------------------------------|
//! | [`parking_lot::Mutex`]    | across threads  | `Racy`, `Atomic`               |
//! | [`std::cell::RefCell`]    | single thread   | `Unsynchronized`               |
//!
//! `parking_lot::Mutex` does not poison: a panic inside the closure releases
//! the lock and leaves the store as it was before the closure's last write.

use std::cell::RefCell;

/// Exclusive, scoped access to a value.
pub trait ScopedLock<T> {
    /// Places `value` under this lock.
    fn from_inner(value: T) -> Self;

    /// Runs `body` with exclusive access to the guarded value.
    ///
    /// Access is released when `body` finishes, whether it returns normally
    /// or unwinds.
    fn with_lock<R>(&self, body: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> ScopedLock<T> for parking_lot::Mutex<T> {
    #[inline]
    fn from_inner(value: T) -> Self {
        Self::new(value)
    }

    #[inline]
    fn with_lock<R>(&self, body: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.lock();
        body(&mut guard)
    }
}

/// Single-threaded scoped access.
///
/// `RefCell` is `!Sync`, so anything holding one cannot be shared between
/// threads. Nested calls to `with_lock` on the same cell panic.
impl<T> ScopedLock<T> for RefCell<T> {
    #[inline]
    fn from_inner(value: T) -> Self {
        Self::new(value)
    }

    #[inline]
    fn with_lock<R>(&self, body: impl FnOnce(&mut T) -> R) -> R {
        body(&mut self.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use rstest::rstest;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn test_mutex_with_lock_mutates_value() {
        let lock: Mutex<Vec<i32>> = ScopedLock::from_inner(Vec::new());
        lock.with_lock(|values| values.push(1));
        lock.with_lock(|values| values.push(2));

        assert_eq!(lock.with_lock(|values| values.clone()), vec![1, 2]);
    }

    #[rstest]
    fn test_mutex_released_after_error_return() {
        let lock: Mutex<i32> = ScopedLock::from_inner(0);
        let result: Result<(), &str> = lock.with_lock(|value| {
            *value += 1;
            Err("failed")
        });

        assert_eq!(result, Err("failed"));
        assert!(lock.try_lock().is_some());
    }

    #[rstest]
    fn test_mutex_released_after_panic() {
        let lock: Mutex<i32> = ScopedLock::from_inner(0);
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            lock.with_lock(|_| panic!("boom"));
        }));

        assert!(outcome.is_err());
        assert!(lock.try_lock().is_some());
    }

    #[rstest]
    fn test_refcell_released_after_body() {
        let cell: RefCell<i32> = ScopedLock::from_inner(5);
        let doubled = cell.with_lock(|value| {
            *value *= 2;
            *value
        });

        assert_eq!(doubled, 10);
        assert!(cell.try_borrow_mut().is_ok());
    }
}
