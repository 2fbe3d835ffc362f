//! Structural validation of a view-model declaration.

use crate::{Diagnostic, DiagnosticSink, Member, Parameter, Requirement, TypeDeclaration};

const STATE: &str = "State";
const ACTION: &str = "Action";
const REDUCE: &str = "reduce";

/// Which requirements a declaration satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub has_state: bool,
    pub has_action: bool,
    pub has_reduce: bool,
}

impl ValidationResult {
    /// `true` when all three requirements hold and synthesis may run.
    pub fn is_valid(&self) -> bool {
        self.has_state && self.has_action && self.has_reduce
    }

    /// Whether a single requirement holds.
    pub fn satisfies(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::State => self.has_state,
            Requirement::Action => self.has_action,
            Requirement::Reduce => self.has_reduce,
        }
    }
}

/// Check `decl` for `State`, `Action` and `reduce`.
///
/// Every check runs regardless of the others. Each failing check emits one
/// diagnostic into `sink`, in the order State, Action, reduce. The computed
/// result is always returned.
///
/// Matching is by exact name. A struct called `State` passes whatever its
/// fields are; `self::State` in the `reduce` signature does not count as
/// `State`.
pub fn validate<S>(decl: &TypeDeclaration, sink: &mut S) -> ValidationResult
where
    S: DiagnosticSink + ?Sized,
{
    let mut result = ValidationResult::default();

    for member in &decl.members {
        match member {
            Member::Struct { name } if name == STATE => result.has_state = true,
            Member::Enum { name } if name == ACTION => result.has_action = true,
            Member::Function { name, params } if name == REDUCE => {
                if is_reduce_signature(params) {
                    result.has_reduce = true;
                }
            }
            _ => {}
        }
    }

    for requirement in Requirement::ALL {
        if !result.satisfies(requirement) {
            sink.diagnose(Diagnostic::missing(requirement, decl));
        }
    }

    tracing::debug!(
        declaration = %decl.name,
        has_state = result.has_state,
        has_action = result.has_action,
        has_reduce = result.has_reduce,
        "validated view-model declaration"
    );

    result
}

/// `(state: &mut State, action: _)`.
///
/// The action parameter's type is not checked, only its name.
fn is_reduce_signature(params: &[Parameter]) -> bool {
    match params {
        [state, action] => {
            state.label == "state"
                && state.by_mutable_ref
                && state.ty == STATE
                && action.label == "action"
        }
        _ => false,
    }
}
