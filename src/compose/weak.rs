//! Callbacks that hold their target weakly.
//!
//! A callback registered with a long-lived owner (an event bus, a timer, a
//! subscriber list) must not keep its target alive. [`weakify`] binds an
//! action to a [`Weak`](std::sync::Weak) reference instead: each call upgrades
//! it, runs the action while the target is alive and does nothing once the
//! target has been dropped.

use std::rc::{self, Rc};
use std::sync::{self, Arc};

/// Binds `action` to a weak reference to `target`.
///
/// # Examples
///
/// ```
/// use functional_primitives::compose::weakify;
/// use std::sync::{Arc, Mutex};
///
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let record = weakify(&log, |log: &Mutex<Vec<String>>, line: &str| {
///     log.lock().unwrap().push(line.to_string());
/// });
///
/// record("first");
/// assert_eq!(log.lock().unwrap().len(), 1);
///
/// drop(log);
/// record("ignored");
/// ```
pub fn weakify<T, A, F>(target: &Arc<T>, action: F) -> impl Fn(A) + use<T, A, F>
where
    T: ?Sized,
    F: Fn(&T, A),
{
    let target: sync::Weak<T> = Arc::downgrade(target);
    move |argument| {
        if let Some(target) = target.upgrade() {
            action(&target, argument);
        }
    }
}

/// Binds a failable `action` to a weak reference to `target`.
///
/// While the target is alive the action's result is returned unchanged.
/// Once it has been dropped every call returns `Ok(())`.
///
/// # Errors
///
/// Returns the error produced by `action`.
pub fn try_weakify<T, A, E, F>(
    target: &Arc<T>,
    action: F,
) -> impl Fn(A) -> Result<(), E> + use<T, A, E, F>
where
    T: ?Sized,
    F: Fn(&T, A) -> Result<(), E>,
{
    let target: sync::Weak<T> = Arc::downgrade(target);
    move |argument| {
        target
            .upgrade()
            .map_or(Ok(()), |target| action(&target, argument))
    }
}

/// Single-threaded [`weakify`] over [`Rc`].
pub fn weakify_local<T, A, F>(target: &Rc<T>, action: F) -> impl Fn(A) + use<T, A, F>
where
    T: ?Sized,
    F: Fn(&T, A),
{
    let target: rc::Weak<T> = Rc::downgrade(target);
    move |argument| {
        if let Some(target) = target.upgrade() {
            action(&target, argument);
        }
    }
}
