//! Run-once thunks.

use std::sync::LazyLock;

/// Wraps `function` so that it runs on the first call only.
///
/// Every call returns a clone of the first result. The returned closure is
/// thread-safe when `function` and `T` are `Send`: concurrent first calls
/// block until one of them has run `function`, which therefore runs exactly
/// once.
///
/// If `function` panics, the thunk is poisoned and every later call panics
/// as well.
///
/// # Examples
///
/// ```
/// use functional_primitives::compose::once;
/// use std::cell::Cell;
///
/// let loads = Cell::new(0);
/// let config = once(|| {
///     loads.set(loads.get() + 1);
///     vec!["alpha", "beta"]
/// });
///
/// assert_eq!(config(), vec!["alpha", "beta"]);
/// assert_eq!(config(), vec!["alpha", "beta"]);
/// assert_eq!(loads.get(), 1);
/// ```
pub fn once<T, F>(function: F) -> impl Fn() -> T
where
    T: Clone,
    F: FnOnce() -> T,
{
    let cell = LazyLock::new(function);
    move || T::clone(&cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_once_runs_function_once_across_threads() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let answer = Arc::new(once(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            42
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let answer = Arc::clone(&answer);
                thread::spawn(move || answer())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
