//! `AndAlso` / `OrElse` over nullable operands.
//!
//! ```text
//! x AndAlso y     (x: Boolean?, y: Boolean)   ->  x.ToBool() && y
//! x OrElse y      (both Boolean?)             ->  x.ToBool() || y.ToBool()
//! ```
//!
//! Each nullable operand is forced to `bool` before the native operator is
//! applied. Visual Basic's `False AndAlso Nothing` / `True OrElse Nothing`
//! short-circuit rows therefore hold, but a null left operand is treated as
//! `False` instead of propagating `Nothing`.

use crate::classifier::LogicalOperator;
use crate::context::RewriteContext;
use crate::dialect::{CompatibilityDialect, HelperMethod};
use crate::helper_call::build_call;
use vbcs_syntax::CsExpr;

fn to_boolean_operand(
    ctx: &mut RewriteContext,
    dialect: &CompatibilityDialect,
    operand: CsExpr,
    is_nullable: bool,
) -> CsExpr {
    if is_nullable {
        build_call(ctx, dialect, HelperMethod::ToBool, operand, None)
    } else {
        operand
    }
}

/// `lhs && rhs` with nullable sides converted through `ToBool`.
pub fn rewrite_and_also(
    ctx: &mut RewriteContext,
    dialect: &CompatibilityDialect,
    lhs: CsExpr,
    rhs: CsExpr,
    is_lhs_nullable: bool,
    is_rhs_nullable: bool,
) -> CsExpr {
    let left = to_boolean_operand(ctx, dialect, lhs, is_lhs_nullable);
    let right = to_boolean_operand(ctx, dialect, rhs, is_rhs_nullable);
    CsExpr::logical_and(left, right).mark_non_null()
}

/// `lhs || rhs` with nullable sides converted through `ToBool`.
pub fn rewrite_or_else(
    ctx: &mut RewriteContext,
    dialect: &CompatibilityDialect,
    lhs: CsExpr,
    rhs: CsExpr,
    is_lhs_nullable: bool,
    is_rhs_nullable: bool,
) -> CsExpr {
    let left = to_boolean_operand(ctx, dialect, lhs, is_lhs_nullable);
    let right = to_boolean_operand(ctx, dialect, rhs, is_rhs_nullable);
    CsExpr::logical_or(left, right).mark_non_null()
}

pub fn rewrite_logical(
    ctx: &mut RewriteContext,
    dialect: &CompatibilityDialect,
    op: LogicalOperator,
    lhs: CsExpr,
    rhs: CsExpr,
    is_lhs_nullable: bool,
    is_rhs_nullable: bool,
) -> CsExpr {
    match op {
        LogicalOperator::AndAlso => {
            rewrite_and_also(ctx, dialect, lhs, rhs, is_lhs_nullable, is_rhs_nullable)
        }
        LogicalOperator::OrElse => {
            rewrite_or_else(ctx, dialect, lhs, rhs, is_lhs_nullable, is_rhs_nullable)
        }
    }
}
