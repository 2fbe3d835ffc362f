//! View-model stores built around a `State` / `Action` / `reduce` triple.
//!
//! Write the three pieces in an inline module and mark it with
//! [`view_model`]. The macro checks that they are present and adds a store
//! type that owns a [`Published`] state, applies actions through `reduce`
//! with `send`, and implements [`ObservableObject`].
//!
//! # Example
//!
//! ```ignore
//! use viewmodel::{view_model, Cancellables, ObservableObject};
//!
//! #[view_model(name = "Counter")]
//! mod counter {
//!     #[derive(Default)]
//!     pub struct State {
//!         pub count: i64,
//!     }
//!
//!     pub enum Action {
//!         Increment,
//!         Decrement,
//!     }
//!
//!     pub fn reduce(state: &mut State, action: Action) {
//!         match action {
//!             Action::Increment => state.count += 1,
//!             Action::Decrement => state.count -= 1,
//!         }
//!     }
//! }
//!
//! let mut store = counter::Counter::new();
//! let mut bag = Cancellables::new();
//! store
//!     .observe(|state| println!("count = {}", state.count))
//!     .store_in(&mut bag);
//!
//! store.send(counter::Action::Increment);
//! assert_eq!(*store.lookup(|s| &s.count), 1);
//! ```
//!
//! # Threading
//!
//! Stores are `!Send`: state mutation and observer delivery stay on the
//! thread that created the store, so observers see changes in order.

mod observable;
mod published;
mod subscription;

pub use observable::ObservableObject;
pub use published::Published;
pub use subscription::{Cancellables, Subscription};
pub use viewmodel_derive::view_model;
