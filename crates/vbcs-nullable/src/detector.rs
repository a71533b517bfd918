//! Per-operand nullability at a rewrite site.

use crate::provenance::has_provenance_marker;
use vbcs_syntax::{CsExpr, TypeInfo};

/// An operand must be treated as nullable when its natural type is a
/// nullable value type and no inner rewrite has proven it non-null.
pub fn is_nullable(expr: &CsExpr, ty: &TypeInfo) -> bool {
    ty.type_is_nullable() && !has_provenance_marker(expr)
}
