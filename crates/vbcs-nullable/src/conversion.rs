//! Explicit conversions of nullable values.
//!
//! Visual Basic propagates `Nothing` through `CType`/`CInt`/... on a nullable
//! source. The translated conversion call only runs when the source has a
//! value:
//!
//! ```text
//! CInt(n)    ->  (n.HasValue ? (int?)Conversions.ToInteger(n.Value) : null)
//! ```

use vbcs_syntax::{CsExpr, CsType, VbNode};

/// `HasValue` check and `Value` extraction for a nullable expression.
#[derive(Clone, Debug, PartialEq)]
pub struct NullableSplit {
    pub has_value: CsExpr,
    pub value: CsExpr,
}

pub fn split_nullable(expr: CsExpr) -> NullableSplit {
    let receiver = expr.add_parens();
    NullableSplit {
        has_value: receiver.clone().member("HasValue"),
        value: receiver.member("Value"),
    }
}

/// Apply `conversion_member` to the value of `converted_expr` only when it
/// has one; otherwise the whole expression is `null`.
///
/// The result can be `null`, so it is left unmarked.
pub fn wrap_conversion(
    vb_node: &VbNode,
    converted_expr: CsExpr,
    conversion_member: CsExpr,
    target_type: CsType,
) -> CsExpr {
    tracing::trace!(
        kind = %vb_node.kind,
        span = %vb_node.span,
        target = %target_type,
        "[nullable] conversion of nullable source"
    );

    let NullableSplit { has_value, value } = split_nullable(converted_expr);
    let invocation = conversion_member.invoke(vec![value]);
    let cast = CsExpr::cast(target_type, invocation.add_parens());

    CsExpr::conditional(has_value, cast, CsExpr::null()).add_parens()
}
