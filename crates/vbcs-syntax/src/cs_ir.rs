//! C# expression IR
//!
//! This module defines the tree-structured IR that translation passes produce
//! for C# expressions. Nodes are immutable values: a pass builds a new node
//! from the nodes it was given and hands it to its parent.
//!
//! # Provenance
//!
//! Every `CsExpr` carries a `Provenance` next to its kind. A pass that proves
//! an expression can never evaluate to `null` marks it with
//! `Provenance::NonNull`, and later passes consult the mark instead of
//! re-analyzing the expression.
//!
//! - Marking is non-destructive: `mark_non_null` consumes the node and returns a
//!   marked copy.
//! - `add_parens` wrappers inherit the mark of the expression they wrap.
//! - Any other builder produces an unmarked parent, so the mark never leaks to
//!   ancestors.

use std::fmt;

/// What is known about the null state of an expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Nothing is known; consult the static type.
    #[default]
    Unknown,
    /// Proven by a rewrite pass never to evaluate to `null`.
    NonNull,
}

impl Provenance {
    pub const fn is_non_null(self) -> bool {
        matches!(self, Provenance::NonNull)
    }
}

/// C# binary operators (other than the short-circuit logical ones).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CsBinaryOperator {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    BitwiseAnd,
    BitwiseOr,
    ExclusiveOr,
    LeftShift,
    RightShift,
}

impl CsBinaryOperator {
    pub const fn text(self) -> &'static str {
        match self {
            CsBinaryOperator::Equals => "==",
            CsBinaryOperator::NotEquals => "!=",
            CsBinaryOperator::LessThan => "<",
            CsBinaryOperator::LessThanOrEqual => "<=",
            CsBinaryOperator::GreaterThan => ">",
            CsBinaryOperator::GreaterThanOrEqual => ">=",
            CsBinaryOperator::Add => "+",
            CsBinaryOperator::Subtract => "-",
            CsBinaryOperator::Multiply => "*",
            CsBinaryOperator::Divide => "/",
            CsBinaryOperator::Modulo => "%",
            CsBinaryOperator::BitwiseAnd => "&",
            CsBinaryOperator::BitwiseOr => "|",
            CsBinaryOperator::ExclusiveOr => "^",
            CsBinaryOperator::LeftShift => "<<",
            CsBinaryOperator::RightShift => ">>",
        }
    }
}

/// C# prefix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CsPrefixOperator {
    /// `!x`
    LogicalNot,
    /// `-x`
    Negate,
    /// `~x`
    BitwiseNot,
}

impl CsPrefixOperator {
    pub const fn text(self) -> &'static str {
        match self {
            CsPrefixOperator::LogicalNot => "!",
            CsPrefixOperator::Negate => "-",
            CsPrefixOperator::BitwiseNot => "~",
        }
    }
}

/// C# type syntax, as used in casts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CsType {
    /// Keyword type: `int`, `bool`, `decimal`
    Predefined(String),
    /// Named or qualified type: `System.DateTime`
    Named(String),
    /// `T?`
    Nullable(Box<CsType>),
}

impl CsType {
    pub fn predefined(keyword: impl Into<String>) -> Self {
        CsType::Predefined(keyword.into())
    }

    pub fn named(name: impl Into<String>) -> Self {
        CsType::Named(name.into())
    }

    /// Wrap in `?`
    pub fn nullable(self) -> Self {
        CsType::Nullable(Box::new(self))
    }
}

impl fmt::Display for CsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsType::Predefined(name) | CsType::Named(name) => f.write_str(name),
            CsType::Nullable(inner) => write!(f, "{inner}?"),
        }
    }
}

/// C# expression node kinds
#[derive(Clone, Debug, PartialEq)]
pub enum CsExprKind {
    // =========================================================================
    // Literals
    // =========================================================================
    /// Numeric literal: `42`, `3.14m`
    NumericLiteral(String),

    /// String literal: `"hello"`
    StringLiteral(String),

    /// Boolean literal: `true`, `false`
    BooleanLiteral(bool),

    /// Null literal: `null`
    NullLiteral,

    // =========================================================================
    // Names and access
    // =========================================================================
    /// Identifier: `foo`
    Identifier(String),

    /// Member access: `object.Member`
    MemberAccess { object: Box<CsExpr>, member: String },

    /// Invocation: `callee(args)`
    Invocation {
        callee: Box<CsExpr>,
        arguments: Vec<CsExpr>,
    },

    // =========================================================================
    // Operators
    // =========================================================================
    /// Binary expression: `left op right`
    Binary {
        left: Box<CsExpr>,
        operator: CsBinaryOperator,
        right: Box<CsExpr>,
    },

    /// Short-circuit AND: `left && right`
    LogicalAnd {
        left: Box<CsExpr>,
        right: Box<CsExpr>,
    },

    /// Short-circuit OR: `left || right`
    LogicalOr {
        left: Box<CsExpr>,
        right: Box<CsExpr>,
    },

    /// Prefix unary expression: `!x`, `-x`
    PrefixUnary {
        operator: CsPrefixOperator,
        operand: Box<CsExpr>,
    },

    /// Cast: `(T)expr`
    Cast { ty: CsType, expression: Box<CsExpr> },

    /// Conditional: `cond ? whenTrue : whenFalse`
    Conditional {
        condition: Box<CsExpr>,
        when_true: Box<CsExpr>,
        when_false: Box<CsExpr>,
    },

    /// Parenthesized expression: `(expr)`
    Parenthesized(Box<CsExpr>),
}

/// A C# expression together with its null provenance.
#[derive(Clone, Debug, PartialEq)]
pub struct CsExpr {
    kind: CsExprKind,
    provenance: Provenance,
}

impl From<CsExprKind> for CsExpr {
    fn from(kind: CsExprKind) -> Self {
        CsExpr::new(kind)
    }
}

// =========================================================================
// Builder helpers for IR construction
// =========================================================================

impl CsExpr {
    /// Unmarked node of the given kind
    pub const fn new(kind: CsExprKind) -> Self {
        CsExpr {
            kind,
            provenance: Provenance::Unknown,
        }
    }

    /// Create an identifier node
    pub fn id(name: impl Into<String>) -> Self {
        Self::new(CsExprKind::Identifier(name.into()))
    }

    /// Create a numeric literal
    pub fn number(n: impl Into<String>) -> Self {
        Self::new(CsExprKind::NumericLiteral(n.into()))
    }

    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::new(CsExprKind::StringLiteral(s.into()))
    }

    pub const fn boolean(value: bool) -> Self {
        Self::new(CsExprKind::BooleanLiteral(value))
    }

    /// Create `null`
    pub const fn null() -> Self {
        Self::new(CsExprKind::NullLiteral)
    }

    /// Create a member access: `self.member`
    pub fn member(self, member: impl Into<String>) -> Self {
        Self::new(CsExprKind::MemberAccess {
            object: Box::new(self),
            member: member.into(),
        })
    }

    /// Create an invocation: `self(args)`
    pub fn invoke(self, arguments: Vec<CsExpr>) -> Self {
        Self::new(CsExprKind::Invocation {
            callee: Box::new(self),
            arguments,
        })
    }

    /// Create a binary expression
    pub fn binary(left: Self, operator: CsBinaryOperator, right: Self) -> Self {
        Self::new(CsExprKind::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Create a logical AND expression: `left && right`
    pub fn logical_and(left: Self, right: Self) -> Self {
        Self::new(CsExprKind::LogicalAnd {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Create a logical OR expression: `left || right`
    pub fn logical_or(left: Self, right: Self) -> Self {
        Self::new(CsExprKind::LogicalOr {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn prefix(operator: CsPrefixOperator, operand: Self) -> Self {
        Self::new(CsExprKind::PrefixUnary {
            operator,
            operand: Box::new(operand),
        })
    }

    /// Create a cast: `(ty)expression`
    pub fn cast(ty: CsType, expression: Self) -> Self {
        Self::new(CsExprKind::Cast {
            ty,
            expression: Box::new(expression),
        })
    }

    /// Create a conditional: `condition ? when_true : when_false`
    pub fn conditional(condition: Self, when_true: Self, when_false: Self) -> Self {
        Self::new(CsExprKind::Conditional {
            condition: Box::new(condition),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
        })
    }

    /// Wrap in parentheses unconditionally. The wrapper starts unmarked.
    pub fn parenthesized(self) -> Self {
        Self::new(CsExprKind::Parenthesized(Box::new(self)))
    }

    /// Wrap in parentheses unless the expression is already primary
    /// (see [`CsExpr::is_primary`]).
    ///
    /// The wrapper inherits the provenance of the wrapped expression.
    pub fn add_parens(self) -> Self {
        if self.is_primary() {
            return self;
        }
        let provenance = self.provenance;
        CsExpr {
            kind: CsExprKind::Parenthesized(Box::new(self)),
            provenance,
        }
    }

    /// Attach the non-null mark.
    pub fn mark_non_null(self) -> Self {
        CsExpr {
            kind: self.kind,
            provenance: Provenance::NonNull,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub const fn kind(&self) -> &CsExprKind {
        &self.kind
    }

    pub const fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub const fn is_marked_non_null(&self) -> bool {
        self.provenance.is_non_null()
    }

    pub const fn is_parenthesized(&self) -> bool {
        matches!(self.kind, CsExprKind::Parenthesized(_))
    }

    /// The expression directly inside one layer of parentheses.
    pub fn parenthesized_inner(&self) -> Option<&CsExpr> {
        match &self.kind {
            CsExprKind::Parenthesized(inner) => Some(inner),
            _ => None,
        }
    }

    /// Expressions that never need parentheses as a receiver or cast operand.
    ///
    /// A negative numeric literal is a prefix expression in C# source
    /// (`-1.EqualTo(b)` binds as `-(1.EqualTo(b))`), so it is not primary.
    pub fn is_primary(&self) -> bool {
        match &self.kind {
            CsExprKind::NumericLiteral(text) => !text.starts_with('-'),
            CsExprKind::StringLiteral(_)
            | CsExprKind::BooleanLiteral(_)
            | CsExprKind::NullLiteral
            | CsExprKind::Identifier(_)
            | CsExprKind::MemberAccess { .. }
            | CsExprKind::Invocation { .. }
            | CsExprKind::Parenthesized(_) => true,
            CsExprKind::Binary { .. }
            | CsExprKind::LogicalAnd { .. }
            | CsExprKind::LogicalOr { .. }
            | CsExprKind::PrefixUnary { .. }
            | CsExprKind::Cast { .. }
            | CsExprKind::Conditional { .. } => false,
        }
    }
}

#[cfg(test)]
#[path = "../tests/cs_ir.rs"]
mod tests;
