//! Code generation for the `#[view_model]` attribute.

use crate::parse::ViewModelArgs;
use proc_macro2::TokenStream;
use syn::Item;
use viewmodel_syntax::TypeDeclaration;

/// Main entry point for code generation.
pub fn expand(args: TokenStream, item: Item) -> syn::Result<TokenStream> {
    let args = ViewModelArgs::parse(args)?;

    let Item::Mod(item) = item else {
        return Err(syn::Error::new_spanned(
            item,
            "#[view_model] can only be applied to an inline module \
             declaring `State`, `Action` and `reduce`",
        ));
    };

    let decl =
        TypeDeclaration::from_item_mod(&item).map_err(|e| syn::Error::new_spanned(&item, e))?;

    Ok(viewmodel_syntax::expand(&decl, &args.store_ident()).into_tokens(item))
}
