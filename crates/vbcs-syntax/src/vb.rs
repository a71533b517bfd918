//! Visual Basic source node handles.
//!
//! The translator does not need the full Visual Basic tree here. Passes only
//! look at the kind of the original node (to pick a rewrite rule) and its span
//! (for diagnostics and trace output).

use crate::span::Span;
use std::fmt;

/// Kinds of Visual Basic binary and conversion expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VbSyntaxKind {
    // =========================================================================
    // Arithmetic
    // =========================================================================
    AddExpression,
    SubtractExpression,
    MultiplyExpression,
    DivideExpression,
    IntegerDivideExpression,
    ModuloExpression,
    ExponentiateExpression,
    LeftShiftExpression,
    RightShiftExpression,

    /// String concatenation: `a & b`
    ConcatenateExpression,

    // =========================================================================
    // Relational
    // =========================================================================
    EqualsExpression,
    NotEqualsExpression,
    LessThanExpression,
    LessThanOrEqualExpression,
    GreaterThanExpression,
    GreaterThanOrEqualExpression,

    /// Reference identity: `a Is b`
    IsExpression,
    /// Reference non-identity: `a IsNot b`
    IsNotExpression,
    /// Pattern match: `a Like "x*"`
    LikeExpression,

    // =========================================================================
    // Logical
    // =========================================================================
    /// Non-short-circuit `And` (bitwise on integers)
    AndExpression,
    /// Non-short-circuit `Or` (bitwise on integers)
    OrExpression,
    ExclusiveOrExpression,
    /// Short-circuit `AndAlso`
    AndAlsoExpression,
    /// Short-circuit `OrElse`
    OrElseExpression,

    // =========================================================================
    // Conversions
    // =========================================================================
    CTypeExpression,
    DirectCastExpression,
    TryCastExpression,
    /// `CInt(x)`, `CDbl(x)`, ...
    PredefinedCastExpression,
}

impl VbSyntaxKind {
    /// Source operator text, as written in Visual Basic.
    pub const fn operator_text(self) -> &'static str {
        match self {
            VbSyntaxKind::AddExpression => "+",
            VbSyntaxKind::SubtractExpression => "-",
            VbSyntaxKind::MultiplyExpression => "*",
            VbSyntaxKind::DivideExpression => "/",
            VbSyntaxKind::IntegerDivideExpression => "\\",
            VbSyntaxKind::ModuloExpression => "Mod",
            VbSyntaxKind::ExponentiateExpression => "^",
            VbSyntaxKind::LeftShiftExpression => "<<",
            VbSyntaxKind::RightShiftExpression => ">>",
            VbSyntaxKind::ConcatenateExpression => "&",
            VbSyntaxKind::EqualsExpression => "=",
            VbSyntaxKind::NotEqualsExpression => "<>",
            VbSyntaxKind::LessThanExpression => "<",
            VbSyntaxKind::LessThanOrEqualExpression => "<=",
            VbSyntaxKind::GreaterThanExpression => ">",
            VbSyntaxKind::GreaterThanOrEqualExpression => ">=",
            VbSyntaxKind::IsExpression => "Is",
            VbSyntaxKind::IsNotExpression => "IsNot",
            VbSyntaxKind::LikeExpression => "Like",
            VbSyntaxKind::AndExpression => "And",
            VbSyntaxKind::OrExpression => "Or",
            VbSyntaxKind::ExclusiveOrExpression => "Xor",
            VbSyntaxKind::AndAlsoExpression => "AndAlso",
            VbSyntaxKind::OrElseExpression => "OrElse",
            VbSyntaxKind::CTypeExpression => "CType",
            VbSyntaxKind::DirectCastExpression => "DirectCast",
            VbSyntaxKind::TryCastExpression => "TryCast",
            VbSyntaxKind::PredefinedCastExpression => "CInt/CDbl/...",
        }
    }
}

impl fmt::Display for VbSyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator_text())
    }
}

/// Handle to an original Visual Basic node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VbNode {
    pub kind: VbSyntaxKind,
    pub span: Span,
}

impl VbNode {
    pub const fn new(kind: VbSyntaxKind, span: Span) -> Self {
        VbNode { kind, span }
    }

    /// Node without a source location (tests, synthesized code).
    pub const fn synthetic(kind: VbSyntaxKind) -> Self {
        VbNode {
            kind,
            span: Span::dummy(),
        }
    }

    pub fn is_kind(&self, kind: VbSyntaxKind) -> bool {
        self.kind == kind
    }
}
