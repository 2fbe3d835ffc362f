//! Attribute macro for viewmodel stores.
//!
//! `#[view_model]` goes on an inline module declaring `State`, `Action` and
//! `reduce`. It generates, inside that module:
//! - `{Name}`: a store struct holding a `Published<State>`
//! - `{Name}::send(action)`: runs `reduce` on the state, then notifies observers
//! - `{Name}::lookup(|s| &s.field)`: key-path read access to state fields
//! - `impl ObservableObject for {Name}`
//!
//! # Usage
//!
//! ```ignore
//! use viewmodel::view_model;
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
//!     }
//!
//!     pub fn reduce(state: &mut State, action: Action) {
//!         match action {
//!             Action::Increment => state.count += 1,
//!         }
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, Item};

mod codegen;
mod parse;

/// Validate a view-model module and add its store.
///
/// # Arguments
///
/// - `name = "Ident"`: name of the generated store struct (default `ViewModel`)
///
/// # Errors
///
/// One compile error per missing piece, each with the line to insert:
///
/// - `Missing required struct 'State'`
/// - `Missing required enum 'Action'`
/// - `Missing required function 'reduce(state:action:)'`
///
/// `reduce` must take exactly `(state: &mut State, action: _)`. When any
/// error is reported, the module is left as written and no store is
/// generated.
#[proc_macro_attribute]
pub fn view_model(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as Item);

    match codegen::expand(args.into(), item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
