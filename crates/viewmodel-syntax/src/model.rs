//! Declaration model inspected by the validator.
//!
//! The model records only what validation needs: member kinds, names, and
//! the parameter shape of functions. It can be built from a `syn::ItemMod`
//! or assembled by hand.

use crate::{Error, Result};
use proc_macro2::Span;
use quote::ToTokens;
use syn::spanned::Spanned;
use syn::{FnArg, Item, ItemMod, Pat, Type};

/// A view-model attachment site: an inline module and its direct members.
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    /// Module identifier.
    pub name: String,
    /// Span of the whole declaration; diagnostics attach here.
    pub span: Span,
    /// Span of the opening `{`; fix-its insert after it.
    pub open_brace: Span,
    /// Direct members, in source order.
    pub members: Vec<Member>,
}

impl TypeDeclaration {
    /// Create a declaration with no members and call-site spans.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: Span::call_site(),
            open_brace: Span::call_site(),
            members: Vec::new(),
        }
    }

    /// Append a member (builder style).
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Read a declaration from an inline module.
    ///
    /// Only the module's direct items are recorded; items nested in function
    /// bodies or inner modules are not.
    pub fn from_item_mod(item: &ItemMod) -> Result<Self> {
        let (brace, items) = item
            .content
            .as_ref()
            .ok_or_else(|| Error::not_inline(item.ident.to_string()))?;

        Ok(Self {
            name: item.ident.to_string(),
            span: item.span(),
            open_brace: brace.span.open(),
            members: items.iter().map(Member::from_item).collect(),
        })
    }
}

/// A direct member of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// `struct Name { .. }`
    Struct { name: String },
    /// `enum Name { .. }`
    Enum { name: String },
    /// `fn name(params..)`
    Function { name: String, params: Vec<Parameter> },
    /// Anything else (constants, impls, uses, macros, ...).
    Other,
}

impl Member {
    /// Create a struct member.
    pub fn structure(name: impl Into<String>) -> Self {
        Member::Struct { name: name.into() }
    }

    /// Create an enum member.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Member::Enum { name: name.into() }
    }

    /// Create a function member.
    pub fn function(name: impl Into<String>, params: Vec<Parameter>) -> Self {
        Member::Function {
            name: name.into(),
            params,
        }
    }

    /// Classify a syn item.
    pub fn from_item(item: &Item) -> Self {
        match item {
            Item::Struct(s) => Member::structure(s.ident.to_string()),
            Item::Enum(e) => Member::enumeration(e.ident.to_string()),
            Item::Fn(f) => Member::function(
                f.sig.ident.to_string(),
                f.sig.inputs.iter().map(Parameter::from_fn_arg).collect(),
            ),
            _ => Member::Other,
        }
    }

    /// The member's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Struct { name } | Member::Enum { name } | Member::Function { name, .. } => {
                Some(name)
            }
            Member::Other => None,
        }
    }
}

/// A function parameter as seen by the `reduce` check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Binding name, or `_` for destructuring patterns.
    pub label: String,
    /// Type text with the outer reference stripped and whitespace removed.
    pub ty: String,
    /// `true` iff the parameter is passed as `&mut T`.
    pub by_mutable_ref: bool,
}

impl Parameter {
    /// Create a by-value parameter.
    pub fn new(label: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ty: ty.into(),
            by_mutable_ref: false,
        }
    }

    /// Create a `&mut` parameter.
    pub fn mutable_ref(label: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            by_mutable_ref: true,
            ..Self::new(label, ty)
        }
    }

    /// Read a parameter from a function signature.
    pub fn from_fn_arg(arg: &FnArg) -> Self {
        match arg {
            FnArg::Receiver(receiver) => Self {
                label: "self".to_string(),
                ty: "Self".to_string(),
                by_mutable_ref: receiver.reference.is_some() && receiver.mutability.is_some(),
            },
            FnArg::Typed(typed) => {
                let label = match &*typed.pat {
                    Pat::Ident(ident) => ident.ident.to_string(),
                    _ => "_".to_string(),
                };
                let (ty, by_mutable_ref) = match &*typed.ty {
                    Type::Reference(reference) => {
                        (type_text(&reference.elem), reference.mutability.is_some())
                    }
                    other => (type_text(other), false),
                };
                Self {
                    label,
                    ty,
                    by_mutable_ref,
                }
            }
        }
    }
}

/// Render a type as compact text (`self :: State` becomes `self::State`).
fn type_text(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .split_whitespace()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_from_item_mod_records_direct_members() {
        let item: ItemMod = parse_quote! {
            mod counter {
                pub struct State { pub count: i64 }
                pub enum Action { Increment }
                pub fn reduce(state: &mut State, action: Action) {
                    struct Nested;
                }
                const LIMIT: i64 = 10;
            }
        };

        let decl = TypeDeclaration::from_item_mod(&item).unwrap();
        assert_eq!(decl.name, "counter");
        assert_eq!(decl.members.len(), 4);
        assert_eq!(decl.members[0], Member::structure("State"));
        assert_eq!(decl.members[1], Member::enumeration("Action"));
        assert_eq!(
            decl.members[2],
            Member::function(
                "reduce",
                vec![
                    Parameter::mutable_ref("state", "State"),
                    Parameter::new("action", "Action"),
                ]
            )
        );
        assert_eq!(decl.members[3], Member::Other);
    }

    #[test]
    fn test_from_item_mod_rejects_external_module() {
        let item: ItemMod = parse_quote! { mod counter; };
        let err = TypeDeclaration::from_item_mod(&item).unwrap_err();
        assert!(matches!(err, Error::NotInline { ref name } if name == "counter"));
    }

    #[test]
    fn test_parameter_shapes() {
        let item: syn::ItemFn = parse_quote! {
            fn reduce(state: &State, action: &mut self::Action, (a, b): (i32, i32), mut n: u8) {}
        };
        let params: Vec<_> = item.sig.inputs.iter().map(Parameter::from_fn_arg).collect();

        assert_eq!(params[0], Parameter::new("state", "State"));
        assert_eq!(params[1], Parameter::mutable_ref("action", "self::Action"));
        assert_eq!(params[2], Parameter::new("_", "(i32,i32)"));
        assert_eq!(params[3], Parameter::new("n", "u8"));
    }

    #[test]
    fn test_receiver_parameter() {
        let item: syn::ItemFn = parse_quote! { fn reduce(&mut self, action: Action) {} };
        let receiver = Parameter::from_fn_arg(&item.sig.inputs[0]);
        assert_eq!(receiver.label, "self");
        assert!(receiver.by_mutable_ref);
    }

    #[test]
    fn test_member_name() {
        assert_eq!(Member::structure("State").name(), Some("State"));
        assert_eq!(Member::function("reduce", vec![]).name(), Some("reduce"));
        assert_eq!(Member::Other.name(), None);
    }
}
