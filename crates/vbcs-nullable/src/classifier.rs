//! Operator eligibility.
//!
//! Only the relational operators and the short-circuit logical operators have
//! null-propagation rules that differ between Visual Basic and C#. Everything
//! else is translated by the plain operator mapping and never reaches the
//! nullable rewriters.

use vbcs_syntax::VbSyntaxKind;

/// Short-circuit logical operators with a `ToBool` rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    AndAlso,
    OrElse,
}

/// Relational operators with a dedicated compatibility helper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationalOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl RelationalOperator {
    pub const fn from_kind(kind: VbSyntaxKind) -> Option<Self> {
        match classify(kind) {
            OperatorClass::Relational(op) => Some(op),
            OperatorClass::Logical(_) | OperatorClass::Ineligible => None,
        }
    }
}

/// How the nullable rewriter treats a source operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Logical(LogicalOperator),
    Relational(RelationalOperator),
    Ineligible,
}

pub const fn classify(kind: VbSyntaxKind) -> OperatorClass {
    match kind {
        VbSyntaxKind::EqualsExpression => OperatorClass::Relational(RelationalOperator::Equals),
        VbSyntaxKind::NotEqualsExpression => {
            OperatorClass::Relational(RelationalOperator::NotEquals)
        }
        VbSyntaxKind::GreaterThanExpression => {
            OperatorClass::Relational(RelationalOperator::GreaterThan)
        }
        VbSyntaxKind::GreaterThanOrEqualExpression => {
            OperatorClass::Relational(RelationalOperator::GreaterThanOrEqual)
        }
        VbSyntaxKind::LessThanExpression => OperatorClass::Relational(RelationalOperator::LessThan),
        VbSyntaxKind::LessThanOrEqualExpression => {
            OperatorClass::Relational(RelationalOperator::LessThanOrEqual)
        }
        VbSyntaxKind::AndAlsoExpression => OperatorClass::Logical(LogicalOperator::AndAlso),
        VbSyntaxKind::OrElseExpression => OperatorClass::Logical(LogicalOperator::OrElse),

        VbSyntaxKind::AddExpression
        | VbSyntaxKind::SubtractExpression
        | VbSyntaxKind::MultiplyExpression
        | VbSyntaxKind::DivideExpression
        | VbSyntaxKind::IntegerDivideExpression
        | VbSyntaxKind::ModuloExpression
        | VbSyntaxKind::ExponentiateExpression
        | VbSyntaxKind::LeftShiftExpression
        | VbSyntaxKind::RightShiftExpression
        | VbSyntaxKind::ConcatenateExpression
        | VbSyntaxKind::IsExpression
        | VbSyntaxKind::IsNotExpression
        | VbSyntaxKind::LikeExpression
        | VbSyntaxKind::AndExpression
        | VbSyntaxKind::OrExpression
        | VbSyntaxKind::ExclusiveOrExpression
        | VbSyntaxKind::CTypeExpression
        | VbSyntaxKind::DirectCastExpression
        | VbSyntaxKind::TryCastExpression
        | VbSyntaxKind::PredefinedCastExpression => OperatorClass::Ineligible,
    }
}

/// Whether `kind` is rewritten when its operands are nullable value types.
pub const fn is_eligible(kind: VbSyntaxKind) -> bool {
    !matches!(classify(kind), OperatorClass::Ineligible)
}
