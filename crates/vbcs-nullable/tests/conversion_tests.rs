//! Tests for explicit conversions of nullable sources.

use vbcs_nullable::conversion::{split_nullable, wrap_conversion};
use vbcs_nullable::{NullableRewriteStrategy, RewriteContext, VisualBasicNullableRewriter};
use vbcs_syntax::{
    CsBinaryOperator, CsExpr, CsExprKind, CsType, ResolvedType, TypeInfo, VbNode, VbSyntaxKind,
};

fn to_integer() -> CsExpr {
    CsExpr::id("Conversions").member("ToInteger")
}

fn int_nullable() -> CsType {
    CsType::predefined("int").nullable()
}

#[test]
fn test_split_nullable_identifier() {
    let split = split_nullable(CsExpr::id("n"));
    assert_eq!(split.has_value.to_string(), "n.HasValue");
    assert_eq!(split.value.to_string(), "n.Value");
}

#[test]
fn test_split_nullable_compound_expression() {
    let sum = CsExpr::binary(CsExpr::id("a"), CsBinaryOperator::Add, CsExpr::id("b"));
    let split = split_nullable(sum);
    assert_eq!(split.has_value.to_string(), "(a + b).HasValue");
    assert_eq!(split.value.to_string(), "(a + b).Value");
}

#[test]
fn test_wrap_conversion_shape() {
    let node = VbNode::synthetic(VbSyntaxKind::PredefinedCastExpression);
    let out = wrap_conversion(&node, CsExpr::id("n"), to_integer(), int_nullable());
    assert_eq!(
        out.to_string(),
        "(n.HasValue ? (int?)Conversions.ToInteger(n.Value) : null)"
    );
    assert!(
        !out.is_marked_non_null(),
        "a conversion result can still be null"
    );
}

#[test]
fn test_wrap_conversion_branches() {
    let node = VbNode::synthetic(VbSyntaxKind::CTypeExpression);
    let out = wrap_conversion(&node, CsExpr::id("n"), to_integer(), int_nullable());

    let CsExprKind::Parenthesized(inner) = out.kind() else {
        panic!("expected parenthesized conditional, got {out}");
    };
    let CsExprKind::Conditional {
        condition,
        when_true,
        when_false,
    } = inner.kind()
    else {
        panic!("expected conditional, got {inner}");
    };

    // No value: the null literal
    assert_eq!(condition.to_string(), "n.HasValue");
    assert_eq!(when_false.kind(), &CsExprKind::NullLiteral);

    // Has value: the cast conversion call
    let CsExprKind::Cast { ty, expression } = when_true.kind() else {
        panic!("expected cast, got {when_true}");
    };
    assert_eq!(ty, &int_nullable());
    assert_eq!(expression.to_string(), "Conversions.ToInteger(n.Value)");
}

#[test]
fn test_wrapped_conversion_stays_nullable_for_enclosing_rewrite() {
    // CInt(d) = i, with d: Double? and i: Integer?
    let rewriter = VisualBasicNullableRewriter::new();
    let node = VbNode::synthetic(VbSyntaxKind::PredefinedCastExpression);
    let converted = rewriter.wrap_conversion(&node, CsExpr::id("d"), to_integer(), int_nullable());

    let mut ctx = RewriteContext::new();
    let ty = TypeInfo::of(ResolvedType::nullable("Integer"));
    let cs_bin_expr = CsExpr::binary(converted.clone(), CsBinaryOperator::Equals, CsExpr::id("i"));
    let out = rewriter
        .rewrite_binary(
            &mut ctx,
            &VbNode::synthetic(VbSyntaxKind::EqualsExpression),
            &ty,
            &ty,
            cs_bin_expr,
            converted,
            CsExpr::id("i"),
        )
        .unwrap();
    assert_eq!(
        out.to_string(),
        "(d.HasValue ? (int?)Conversions.ToInteger(d.Value) : null).EqualTo(i)"
    );
}

#[test]
fn test_rewrite_conversion_non_nullable_source_passes_through() {
    let rewriter = VisualBasicNullableRewriter::new();
    let node = VbNode::synthetic(VbSyntaxKind::PredefinedCastExpression);
    let plain = to_integer().invoke(vec![CsExpr::id("d")]);
    let out = rewriter.rewrite_conversion(
        &node,
        &TypeInfo::of(ResolvedType::value("Double")),
        plain.clone(),
        CsExpr::id("d"),
        to_integer(),
        CsType::predefined("int"),
    );
    assert_eq!(out, plain);
}

#[test]
fn test_rewrite_conversion_nullable_source() {
    let rewriter = VisualBasicNullableRewriter::new();
    let node = VbNode::synthetic(VbSyntaxKind::PredefinedCastExpression);
    let out = rewriter.rewrite_conversion(
        &node,
        &TypeInfo::of(ResolvedType::nullable("Double")),
        to_integer().invoke(vec![CsExpr::id("d")]),
        CsExpr::id("d"),
        to_integer(),
        int_nullable(),
    );
    assert_eq!(
        out.to_string(),
        "(d.HasValue ? (int?)Conversions.ToInteger(d.Value) : null)"
    );
}

#[test]
fn test_rewrite_conversion_proven_source_passes_through() {
    let rewriter = VisualBasicNullableRewriter::new();
    let node = VbNode::synthetic(VbSyntaxKind::PredefinedCastExpression);
    let source_type = TypeInfo::of(ResolvedType::nullable("Double"));

    let proven = CsExpr::id("d").member("Coalesced").mark_non_null();
    let sources = [proven.clone(), proven.parenthesized()];
    for source in sources {
        let plain = to_integer().invoke(vec![source.clone()]);
        let out = rewriter.rewrite_conversion(
            &node,
            &source_type,
            plain.clone(),
            source,
            to_integer(),
            int_nullable(),
        );
        assert_eq!(out, plain);
    }
}
