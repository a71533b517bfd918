//! Non-null provenance queries.
//!
//! The mark itself lives on `CsExpr` (see `vbcs_syntax::cs_ir`). A query
//! answers for the node it is given and, when that node is a parenthesized
//! expression, for the node directly inside it. Ancestors are never
//! consulted.

use vbcs_syntax::CsExpr;

pub fn has_provenance_marker(expr: &CsExpr) -> bool {
    expr.is_marked_non_null()
        || expr
            .parenthesized_inner()
            .is_some_and(CsExpr::is_marked_non_null)
}
