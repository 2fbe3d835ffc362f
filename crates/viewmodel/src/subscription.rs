//! Cancellation handles for observers.

use std::fmt;

/// Handle to a live observer.
///
/// Dropping or [`cancel`](Self::cancel)ling the handle stops delivery and
/// releases the observer closure. [`detach`](Self::detach) keeps the
/// observer registered for the lifetime of its publisher.
#[must_use = "dropping the subscription cancels it immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop delivery now.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    /// Keep the observer for as long as the publisher lives.
    pub fn detach(mut self) {
        self.cancel = None;
    }

    /// Move the handle into `bag`, tying its lifetime to the bag's.
    pub fn store_in(self, bag: &mut Cancellables) {
        bag.store(self);
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Subscriptions owned by one holder (a screen, a controller, ...).
///
/// Keep it as a plain field next to the store: when the holder is dropped,
/// the bag drops and every subscription in it is cancelled.
#[derive(Debug, Default)]
pub struct Cancellables {
    subscriptions: Vec<Subscription>,
}

impl Cancellables {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `subscription`.
    pub fn store(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Cancel every held subscription.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    /// Number of held subscriptions.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// `true` when the bag holds no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl Extend<Subscription> for Cancellables {
    fn extend<I: IntoIterator<Item = Subscription>>(&mut self, iter: I) {
        self.subscriptions.extend(iter);
    }
}
