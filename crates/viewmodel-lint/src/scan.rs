//! Finding and validating view-model modules in one source file.

use serde::Serialize;
use syn::visit::Visit;
use syn::ItemMod;
use viewmodel_syntax::{validate, Diagnostic, FixIt, TypeDeclaration};

/// Validation outcome for one `#[view_model]` module.
#[derive(Debug, Serialize)]
pub struct DeclarationReport {
    pub name: String,
    /// 1-based position of the declaration.
    pub line: usize,
    pub column: usize,
    pub has_state: bool,
    pub has_action: bool,
    pub has_reduce: bool,
    pub diagnostics: Vec<DiagnosticReport>,
    /// Fix-its of all diagnostics, in report order.
    #[serde(skip)]
    pub fix_its: Vec<FixIt>,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub code: &'static str,
    pub severity: &'static str,
    pub message: String,
    pub fix_its: Vec<FixItReport>,
}

#[derive(Debug, Serialize)]
pub struct FixItReport {
    pub message: String,
    /// 1-based position right after the anchor token.
    pub line: usize,
    pub column: usize,
    pub insertion: String,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            code: diagnostic.code(),
            severity: diagnostic.severity.as_str(),
            message: diagnostic.message.clone(),
            fix_its: diagnostic
                .fix_its
                .iter()
                .map(|fix_it| {
                    let end = fix_it.anchor.end();
                    FixItReport {
                        message: fix_it.message.clone(),
                        line: end.line,
                        column: end.column + 1,
                        insertion: fix_it.insertion(),
                    }
                })
                .collect(),
        }
    }
}

impl DeclarationReport {
    fn new(decl: &TypeDeclaration) -> Self {
        let mut diagnostics = Vec::new();
        let result = validate(decl, &mut diagnostics);
        let start = decl.span.start();

        Self {
            name: decl.name.clone(),
            line: start.line,
            column: start.column + 1,
            has_state: result.has_state,
            has_action: result.has_action,
            has_reduce: result.has_reduce,
            diagnostics: diagnostics.iter().map(DiagnosticReport::from).collect(),
            fix_its: diagnostics.into_iter().flat_map(|d| d.fix_its).collect(),
        }
    }
}

/// Validate every module in `source` marked with `#[attribute]` or
/// `#[path::to::attribute]`, at any nesting depth.
///
/// A marked `mod name;` without an inline body is an error, as it is for
/// the attribute macro.
pub fn scan_source(source: &str, attribute: &str) -> syn::Result<Vec<DeclarationReport>> {
    let file = syn::parse_file(source)?;
    let mut finder = Finder {
        attribute,
        found: Vec::new(),
    };
    finder.visit_file(&file);

    finder
        .found
        .iter()
        .map(|item| {
            TypeDeclaration::from_item_mod(item)
                .map(|decl| DeclarationReport::new(&decl))
                .map_err(|err| syn::Error::new_spanned(item, err))
        })
        .collect()
}

struct Finder<'a> {
    attribute: &'a str,
    found: Vec<ItemMod>,
}

impl<'ast> Visit<'ast> for Finder<'_> {
    fn visit_item_mod(&mut self, item: &'ast ItemMod) {
        let marked = item.attrs.iter().any(|attr| {
            attr.path()
                .segments
                .last()
                .is_some_and(|segment| segment.ident == self.attribute)
        });
        if marked {
            self.found.push(item.clone());
        }
        syn::visit::visit_item_mod(self, item);
    }
}
