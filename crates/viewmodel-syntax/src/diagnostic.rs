//! Diagnostics and fix-it suggestions.

use crate::TypeDeclaration;
use proc_macro2::Span;

/// Indentation placed before an inserted fix-it line.
const FIX_IT_INDENT: &str = "    ";

/// Diagnostic severity. Every missing requirement is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
}

impl Severity {
    /// Lowercase label used in rendered output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
        }
    }
}

/// One of the three structural requirements of a view-model module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// `struct State`
    State,
    /// `enum Action`
    Action,
    /// `fn reduce(state: &mut State, action: _)`
    Reduce,
}

impl Requirement {
    /// All requirements, in reporting order.
    pub const ALL: [Requirement; 3] = [Requirement::State, Requirement::Action, Requirement::Reduce];

    /// Diagnostic message for a missing requirement.
    pub fn message(self) -> &'static str {
        match self {
            Requirement::State => "Missing required struct 'State'",
            Requirement::Action => "Missing required enum 'Action'",
            Requirement::Reduce => "Missing required function 'reduce(state:action:)'",
        }
    }

    /// Human-readable description of the fix-it.
    pub fn fix_it_message(self) -> &'static str {
        match self {
            Requirement::State => "Insert struct State {}",
            Requirement::Action => "Insert enum Action {}",
            Requirement::Reduce => "Insert reduce function",
        }
    }

    /// Line the fix-it inserts.
    pub fn placeholder(self) -> &'static str {
        match self {
            Requirement::State => "struct State { }",
            Requirement::Action => "enum Action { }",
            Requirement::Reduce => "fn reduce(state: &mut State, action: Action) { }",
        }
    }

    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            Requirement::State => "view_model::missing_state",
            Requirement::Action => "view_model::missing_action",
            Requirement::Reduce => "view_model::missing_reduce",
        }
    }
}

/// A suggested, never auto-applied, source insertion.
#[derive(Debug, Clone)]
pub struct FixIt {
    /// What the edit does.
    pub message: String,
    /// Token after which the edit is inserted.
    pub anchor: Span,
    /// The line being inserted.
    pub text: String,
}

impl FixIt {
    /// Create a fix-it inserting `text` as its own line after `anchor`.
    pub fn insert_line(message: impl Into<String>, anchor: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            anchor,
            text: text.into(),
        }
    }

    /// Exact text spliced after the anchor and its trailing trivia.
    pub fn insertion(&self) -> String {
        self.insertion_with("\n")
    }

    /// [`insertion`](Self::insertion) using `line_ending` instead of `\n`.
    pub fn insertion_with(&self, line_ending: &str) -> String {
        format!("{line_ending}{FIX_IT_INDENT}{}{line_ending}", self.text)
    }
}

/// A problem found on a declaration.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The requirement that is not met.
    pub requirement: Requirement,
    pub message: String,
    /// The declaration the diagnostic is attached to.
    pub span: Span,
    pub fix_its: Vec<FixIt>,
}

impl Diagnostic {
    /// Diagnostic for a requirement missing from `decl`.
    pub fn missing(requirement: Requirement, decl: &TypeDeclaration) -> Self {
        Self {
            severity: Severity::Error,
            requirement,
            message: requirement.message().to_string(),
            span: decl.span,
            fix_its: vec![FixIt::insert_line(
                requirement.fix_it_message(),
                decl.open_brace,
                requirement.placeholder(),
            )],
        }
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        self.requirement.code()
    }

    /// Render as a compiler error at the declaration span.
    ///
    /// Fix-its cannot be attached to proc-macro errors, so each one is
    /// rendered as a `help:` line under the message.
    pub fn to_syn_error(&self) -> syn::Error {
        let mut text = self.message.clone();
        for fix_it in &self.fix_its {
            text.push_str(&format!("\n\nhelp: {}: `{}`", fix_it.message, fix_it.text));
        }
        syn::Error::new(self.span, text)
    }
}

/// Receiver for diagnostics emitted during validation.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn diagnose(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn diagnose(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
