//! Parsing of `#[view_model(...)]` arguments.

use darling::ast::NestedMeta;
use darling::FromMeta;
use proc_macro2::{Span, TokenStream};
use syn::Ident;
use viewmodel_syntax::DEFAULT_STORE_NAME;

/// Parsed attribute arguments.
#[derive(Debug, Default, FromMeta)]
pub struct ViewModelArgs {
    /// Name of the generated store struct.
    #[darling(default)]
    pub name: Option<Ident>,
}

impl ViewModelArgs {
    /// Parse the token stream between the attribute's parentheses.
    pub fn parse(args: TokenStream) -> syn::Result<Self> {
        if args.is_empty() {
            return Ok(Self::default());
        }
        let metas = NestedMeta::parse_meta_list(args)?;
        Self::from_list(&metas).map_err(|e| syn::Error::new(e.span(), e.to_string()))
    }

    /// The store identifier to generate.
    pub fn store_ident(&self) -> Ident {
        self.name
            .clone()
            .unwrap_or_else(|| Ident::new(DEFAULT_STORE_NAME, Span::call_site()))
    }
}
