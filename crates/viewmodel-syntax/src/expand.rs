//! Validation plus synthesis for one attachment site.

use crate::{synthesize, validate, Diagnostic, Synthesis, TypeDeclaration, ValidationResult};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::ItemMod;

/// Everything produced for one declaration.
#[derive(Debug, Clone)]
pub struct Expansion {
    pub result: ValidationResult,
    /// Diagnostics in State, Action, reduce order.
    pub diagnostics: Vec<Diagnostic>,
    /// Present iff `result.is_valid()`.
    pub synthesis: Option<Synthesis>,
}

/// Validate `decl` and, if it is complete, synthesize the `store` type.
pub fn expand(decl: &TypeDeclaration, store: &Ident) -> Expansion {
    let mut diagnostics = Vec::new();
    let result = validate(decl, &mut diagnostics);
    let synthesis = result.is_valid().then(|| synthesize(store));

    Expansion {
        result,
        diagnostics,
        synthesis,
    }
}

impl Expansion {
    /// Merge the expansion back into the module it was computed from.
    ///
    /// With a synthesis, the members and the conformance are appended to the
    /// module body. Otherwise the module is emitted unchanged, followed by
    /// one `compile_error!` per diagnostic.
    pub fn into_tokens(self, item: ItemMod) -> TokenStream {
        let Some(synthesis) = self.synthesis else {
            let errors = self
                .diagnostics
                .iter()
                .map(|diagnostic| diagnostic.to_syn_error().to_compile_error());
            return quote! {
                #item
                #(#errors)*
            };
        };

        let ItemMod {
            attrs,
            vis,
            unsafety,
            mod_token,
            ident,
            content,
            semi,
        } = item;
        let Some((_, items)) = content else {
            return quote! { #(#attrs)* #vis #unsafety #mod_token #ident #semi };
        };
        let members = synthesis.members;
        let conformances = synthesis.conformances;

        quote! {
            #(#attrs)*
            #vis #unsafety #mod_token #ident {
                #(#items)*
                #(#members)*
                #(#conformances)*
            }
        }
    }
}
