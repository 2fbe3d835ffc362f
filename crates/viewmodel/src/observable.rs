//! The `ObservableObject` capability.

use crate::{Published, Subscription};

/// A type whose state changes can be subscribed to.
///
/// `#[view_model]` implements this for every generated store.
pub trait ObservableObject {
    /// The observed value.
    type Output;

    /// The publisher backing this object.
    fn published(&self) -> &Published<Self::Output>;

    /// Subscribe to state changes. `observer` runs immediately with the
    /// current value, then after every change.
    #[must_use = "dropping the subscription cancels it immediately"]
    fn observe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(&Self::Output) + 'static,
        Self::Output: 'static,
    {
        self.published().sink(observer)
    }
}
