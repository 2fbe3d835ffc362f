//! Member synthesis for a validated view-model declaration.
//!
//! The output is a fixed template. It names `State`, `Action` and `reduce`
//! but never looks inside them, so the store works for any field set.

use proc_macro2::{Ident, TokenStream};
use quote::quote;

/// Store type name used when `#[view_model]` is given no `name`.
pub const DEFAULT_STORE_NAME: &str = "ViewModel";

/// Generated fragments for one declaration.
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// State storage, `send`, and `lookup`, in that order.
    pub members: Vec<TokenStream>,
    /// The `ObservableObject` conformance.
    pub conformances: Vec<TokenStream>,
}

/// Generate the store members and conformance for `store`.
///
/// Only call this once validation has passed; the fragments refer to
/// `State`, `Action` and `reduce` unqualified.
pub fn synthesize(store: &Ident) -> Synthesis {
    Synthesis {
        members: vec![
            state_storage(store),
            send_method(store),
            lookup_accessor(store),
        ],
        conformances: vec![observable_conformance(store)],
    }
}

fn state_storage(store: &Ident) -> TokenStream {
    quote! {
        /// View-model store: owns the published `State` and applies actions through `reduce`.
        pub struct #store {
            state: ::viewmodel::Published<State>,
        }

        impl #store {
            /// Create a store holding `State::default()`.
            pub fn new() -> Self {
                Self {
                    state: ::viewmodel::Published::new(<State as ::core::default::Default>::default()),
                }
            }

            /// Current state. Mutate it with `send`.
            pub fn state(&self) -> &State {
                self.state.get()
            }
        }

        impl ::core::default::Default for #store {
            fn default() -> Self {
                Self::new()
            }
        }
    }
}

fn send_method(store: &Ident) -> TokenStream {
    quote! {
        impl #store {
            /// Apply `action` with `reduce`, then notify observers.
            pub fn send(&mut self, action: Action) {
                self.state.modify(|state| reduce(state, action));
            }
        }
    }
}

fn lookup_accessor(store: &Ident) -> TokenStream {
    quote! {
        impl #store {
            /// Read a state field through a key path, e.g. `store.lookup(|s| &s.count)`.
            pub fn lookup<T: ?Sized>(&self, key_path: impl ::core::ops::FnOnce(&State) -> &T) -> &T {
                key_path(self.state.get())
            }
        }
    }
}

fn observable_conformance(store: &Ident) -> TokenStream {
    quote! {
        impl ::viewmodel::ObservableObject for #store {
            type Output = State;

            fn published(&self) -> &::viewmodel::Published<State> {
                &self.state
            }
        }
    }
}
