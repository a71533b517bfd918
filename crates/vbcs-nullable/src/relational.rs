//! Relational operators over nullable operands.
//!
//! | Visual Basic | C#                    |
//! |--------------|-----------------------|
//! | `a = b`      | `a.EqualTo(b)`        |
//! | `a <> b`     | `a.NotEqualTo(b)`     |
//! | `a > b`      | `a.GreaterThan(b)`    |
//! | `a >= b`     | `a.GreaterOrEqualTo(b)` |
//! | `a < b`      | `a.LesserThan(b)`     |
//! | `a <= b`     | `a.LesserOrEqualTo(b)` |

use crate::classifier::RelationalOperator;
use crate::context::RewriteContext;
use crate::dialect::{CompatibilityDialect, HelperMethod};
use crate::error::RewriteError;
use crate::helper_call::build_call;
use vbcs_syntax::{CsExpr, VbNode};

/// Helper for the relational operator of `vb_node`.
pub fn relational_helper(vb_node: &VbNode) -> Result<HelperMethod, RewriteError> {
    RelationalOperator::from_kind(vb_node.kind)
        .map(HelperMethod::for_relational)
        .ok_or(RewriteError::UnsupportedOperator {
            kind: vb_node.kind,
            span: vb_node.span,
        })
}

/// Rewrite a comparison with at least one nullable operand into a helper call
/// on the left operand.
///
/// With no nullable operand the original comparison is returned, marked.
pub fn rewrite_relational(
    ctx: &mut RewriteContext,
    dialect: &CompatibilityDialect,
    vb_node: &VbNode,
    cs_bin_expr: CsExpr,
    lhs: CsExpr,
    rhs: CsExpr,
    is_lhs_nullable: bool,
    is_rhs_nullable: bool,
) -> Result<CsExpr, RewriteError> {
    if !is_lhs_nullable && !is_rhs_nullable {
        return Ok(cs_bin_expr.mark_non_null());
    }

    let method = relational_helper(vb_node)?;
    Ok(build_call(ctx, dialect, method, lhs, Some(rhs)).mark_non_null())
}
