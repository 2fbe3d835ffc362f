//! Change-observable values.

use crate::Subscription;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Observer<T> = Rc<RefCell<dyn FnMut(&T)>>;

/// Observer registry shared between a publisher and its subscriptions.
pub(crate) struct Observers<T> {
    next_id: u64,
    entries: Vec<(u64, Observer<T>)>,
}

impl<T> Observers<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    fn insert(&mut self, observer: Observer<T>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry, _)| *entry != id);
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }
}

/// A value whose every change is pushed to its observers.
///
/// Observers registered with [`sink`](Self::sink) receive the current value
/// at once and then each new value after every [`modify`](Self::modify), in
/// subscription order. An observer cancelled during a notification pass is
/// skipped for the rest of that pass; one added during a pass is first
/// called on the next one.
pub struct Published<T> {
    value: T,
    observers: Rc<RefCell<Observers<T>>>,
}

impl<T> Published<T> {
    /// Create a publisher holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            observers: Rc::new(RefCell::new(Observers::new())),
        }
    }

    /// The current value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutate the value in place, then notify observers.
    ///
    /// Observers are notified even if `f` leaves the value unchanged.
    pub fn modify<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let output = f(&mut self.value);
        self.notify();
        output
    }

    /// Replace the value, then notify observers.
    pub fn set(&mut self, value: T) {
        self.modify(|current| *current = value);
    }

    /// Number of live observers.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().entries.len()
    }

    fn notify(&self) {
        let snapshot = self.observers.borrow().entries.clone();
        tracing::trace!(observers = snapshot.len(), "publishing change");

        for (id, observer) in snapshot {
            if !self.observers.borrow().contains(id) {
                continue;
            }
            (&mut *observer.borrow_mut())(&self.value);
        }
    }
}

impl<T: 'static> Published<T> {
    /// Observe the value: `observer` runs now with the current value and
    /// again after every change until the returned handle is dropped or
    /// cancelled.
    #[must_use = "dropping the subscription cancels it immediately"]
    pub fn sink<F>(&self, mut observer: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        observer(&self.value);

        let observer: Observer<T> = Rc::new(RefCell::new(observer));
        let id = self.observers.borrow_mut().insert(observer);
        let registry = Rc::downgrade(&self.observers);

        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().remove(id);
            }
        })
    }
}

impl<T: Default> Default for Published<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Published<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Published")
            .field("value", &self.value)
            .field("observers", &self.observer_count())
            .finish()
    }
}
