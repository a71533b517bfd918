use vbcs_syntax::{Span, VbSyntaxKind};

/// Internal-invariant violations raised by the nullable rewriters.
///
/// Ineligible operators and non-nullable operands are not errors; they pass
/// through unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    /// The operator passed the eligibility check but has no relational
    /// helper. The classifier and the helper table disagree.
    #[error("operator `{kind}` at {span} has no null-safe relational helper")]
    UnsupportedOperator { kind: VbSyntaxKind, span: Span },
}
