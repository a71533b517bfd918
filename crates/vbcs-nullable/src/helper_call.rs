//! Calls into the compatibility library.

use crate::context::RewriteContext;
use crate::dialect::{CompatibilityDialect, HelperMethod};
use vbcs_syntax::CsExpr;

/// Build `(receiver).Method()` or `(receiver).Method(argument)` and record
/// the dialect's namespace as an import requirement.
///
/// The receiver is only parenthesized when it is not already a primary
/// expression.
pub fn build_call(
    ctx: &mut RewriteContext,
    dialect: &CompatibilityDialect,
    method: HelperMethod,
    receiver: CsExpr,
    argument: Option<CsExpr>,
) -> CsExpr {
    if ctx.imports_mut().register(&dialect.namespace) {
        tracing::debug!(namespace = %dialect.namespace, "[nullable] compatibility import required");
    }

    let name = dialect.method_name(method);
    tracing::trace!(method = name, "[nullable] helper call");
    receiver
        .add_parens()
        .member(name)
        .invoke(argument.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vbcs_syntax::CsExprKind;

    #[test]
    fn test_zero_argument_call() {
        let mut ctx = RewriteContext::new();
        let dialect = CompatibilityDialect::default();
        let receiver = CsExpr::id("x");
        let call = build_call(&mut ctx, &dialect, HelperMethod::ToBool, receiver, None);
        assert_eq!(call.to_string(), "x.ToBool()");
        assert!(ctx.imports().contains("VBtoCSharp.Compatiblity"));
    }

    #[test]
    fn test_single_argument_call_parenthesizes_receiver() {
        let mut ctx = RewriteContext::new();
        let dialect = CompatibilityDialect::default();
        let receiver = CsExpr::conditional(CsExpr::id("c"), CsExpr::id("a"), CsExpr::null());
        let call = build_call(
            &mut ctx,
            &dialect,
            HelperMethod::GreaterThan,
            receiver,
            Some(CsExpr::id("b")),
        );
        assert_eq!(call.to_string(), "(c ? a : null).GreaterThan(b)");
        match call.kind() {
            CsExprKind::Invocation { arguments, .. } => assert_eq!(arguments.len(), 1),
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_import_registered_once() {
        let mut ctx = RewriteContext::new();
        let dialect = CompatibilityDialect::default();
        for _ in 0..3 {
            let (a, b) = (CsExpr::id("a"), CsExpr::id("b"));
            build_call(&mut ctx, &dialect, HelperMethod::EqualTo, a, Some(b));
        }
        assert_eq!(ctx.imports().len(), 1);
    }

    #[test]
    fn test_call_is_unmarked() {
        let mut ctx = RewriteContext::new();
        let dialect = CompatibilityDialect::default();
        let call = build_call(
            &mut ctx,
            &dialect,
            HelperMethod::ToBool,
            CsExpr::id("x").mark_non_null(),
            None,
        );
        assert!(!call.is_marked_non_null());
    }
}
