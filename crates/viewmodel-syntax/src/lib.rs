//! Validation and member synthesis for `#[view_model]` modules.
//!
//! A view-model module is an inline `mod` that declares three pieces:
//!
//! - `struct State`: the observable state value
//! - `enum Action`: the messages the view model accepts
//! - `fn reduce(state: &mut State, action: Action)`: the state transition
//!
//! [`validate`] checks that all three are present and reports one
//! [`Diagnostic`] (with a [`FixIt`]) per missing piece. When nothing is
//! missing, [`synthesize`] produces the store type, its `send` dispatcher,
//! the `lookup` accessor and the `ObservableObject` conformance.
//!
//! Nothing here depends on running inside a proc-macro, so the same logic
//! backs both `#[view_model]` and the `viewmodel-lint` tool.
//!
//! # Usage
//!
//! ```ignore
//! use viewmodel_syntax::{expand, TypeDeclaration};
//!
//! let item: syn::ItemMod = syn::parse_quote! {
//!     mod counter {
//!         #[derive(Default)]
//!         pub struct State { pub count: i64 }
//!         pub enum Action { Increment }
//!         pub fn reduce(state: &mut State, action: Action) {
//!             match action { Action::Increment => state.count += 1 }
//!         }
//!     }
//! };
//!
//! let decl = TypeDeclaration::from_item_mod(&item)?;
//! let expansion = expand(&decl, &quote::format_ident!("Counter"));
//! assert!(expansion.diagnostics.is_empty());
//! ```

mod diagnostic;
mod error;
mod expand;
pub mod fixit;
mod model;
mod synthesize;
mod validate;

pub use diagnostic::{Diagnostic, DiagnosticSink, FixIt, Requirement, Severity};
pub use error::{Error, Result};
pub use expand::{expand, Expansion};
pub use model::{Member, Parameter, TypeDeclaration};
pub use synthesize::{synthesize, Synthesis, DEFAULT_STORE_NAME};
pub use validate::{validate, ValidationResult};
