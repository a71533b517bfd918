//! Nullable rewrite strategy
//!
//! The expression translator calls into a `NullableRewriteStrategy` after it
//! has translated both operands of a binary expression:
//!
//! 1. Ineligible operator, or either converted type not a nullable value type:
//!    the translated expression is returned as-is.
//! 2. Neither operand nullable at this site (both proven by inner rewrites):
//!    the translated expression is returned marked non-null.
//! 3. Otherwise the operands are parenthesized and the logical or relational
//!    rewriter builds the helper-call form, which is parenthesized in turn.
//!
//! Every method has a default implementation. A translator for another
//! compatibility library only provides `dialect()`, or overrides single steps.

use crate::classifier::{LogicalOperator, OperatorClass, classify};
use crate::context::RewriteContext;
use crate::conversion;
use crate::detector;
use crate::dialect::{CompatibilityDialect, DialectError};
use crate::error::RewriteError;
use crate::logical;
use crate::relational;
use vbcs_syntax::{CsExpr, CsType, TypeInfo, VbNode};

pub trait NullableRewriteStrategy {
    fn dialect(&self) -> &CompatibilityDialect;

    fn is_eligible(&self, vb_node: &VbNode) -> bool {
        crate::classifier::is_eligible(vb_node.kind)
    }

    fn is_nullable(&self, expr: &CsExpr, ty: &TypeInfo) -> bool {
        detector::is_nullable(expr, ty)
    }

    /// `AndAlso` / `OrElse` with at least one nullable operand.
    fn rewrite_logical(
        &self,
        ctx: &mut RewriteContext,
        op: LogicalOperator,
        lhs: CsExpr,
        rhs: CsExpr,
        is_lhs_nullable: bool,
        is_rhs_nullable: bool,
    ) -> CsExpr {
        logical::rewrite_logical(
            ctx,
            self.dialect(),
            op,
            lhs,
            rhs,
            is_lhs_nullable,
            is_rhs_nullable,
        )
    }

    fn rewrite_relational(
        &self,
        ctx: &mut RewriteContext,
        vb_node: &VbNode,
        cs_bin_expr: CsExpr,
        lhs: CsExpr,
        rhs: CsExpr,
        is_lhs_nullable: bool,
        is_rhs_nullable: bool,
    ) -> Result<CsExpr, RewriteError> {
        relational::rewrite_relational(
            ctx,
            self.dialect(),
            vb_node,
            cs_bin_expr,
            lhs,
            rhs,
            is_lhs_nullable,
            is_rhs_nullable,
        )
    }

    fn wrap_conversion(
        &self,
        vb_node: &VbNode,
        converted_expr: CsExpr,
        conversion_member: CsExpr,
        target_type: CsType,
    ) -> CsExpr {
        conversion::wrap_conversion(vb_node, converted_expr, conversion_member, target_type)
    }

    /// Entry point for translated binary expressions.
    fn rewrite_binary(
        &self,
        ctx: &mut RewriteContext,
        vb_node: &VbNode,
        lhs_type: &TypeInfo,
        rhs_type: &TypeInfo,
        cs_bin_expr: CsExpr,
        lhs: CsExpr,
        rhs: CsExpr,
    ) -> Result<CsExpr, RewriteError> {
        if !self.is_eligible(vb_node)
            || !lhs_type.converted_type_is_nullable()
            || !rhs_type.converted_type_is_nullable()
        {
            tracing::trace!(kind = %vb_node.kind, span = %vb_node.span, "[nullable] pass-through");
            return Ok(cs_bin_expr);
        }

        let is_lhs_nullable = self.is_nullable(&lhs, lhs_type);
        let is_rhs_nullable = self.is_nullable(&rhs, rhs_type);
        if !is_lhs_nullable && !is_rhs_nullable {
            tracing::trace!(
                kind = %vb_node.kind,
                span = %vb_node.span,
                "[nullable] operands proven non-null"
            );
            return Ok(cs_bin_expr.mark_non_null());
        }

        tracing::debug!(
            kind = %vb_node.kind,
            span = %vb_node.span,
            is_lhs_nullable,
            is_rhs_nullable,
            "[nullable] rewriting binary expression"
        );

        let lhs = lhs.add_parens();
        let rhs = rhs.add_parens();

        let rewritten = match classify(vb_node.kind) {
            OperatorClass::Logical(op) => {
                self.rewrite_logical(ctx, op, lhs, rhs, is_lhs_nullable, is_rhs_nullable)
            }
            OperatorClass::Relational(_) | OperatorClass::Ineligible => self.rewrite_relational(
                ctx,
                vb_node,
                cs_bin_expr,
                lhs,
                rhs,
                is_lhs_nullable,
                is_rhs_nullable,
            )?,
        };
        Ok(rewritten.add_parens())
    }

    /// Entry point for explicit conversions.
    ///
    /// Non-nullable sources return `cs_conversion` (the plain translated
    /// conversion) unchanged.
    fn rewrite_conversion(
        &self,
        vb_node: &VbNode,
        source_type: &TypeInfo,
        cs_conversion: CsExpr,
        converted_expr: CsExpr,
        conversion_member: CsExpr,
        target_type: CsType,
    ) -> CsExpr {
        if !self.is_nullable(&converted_expr, source_type) {
            return cs_conversion;
        }
        self.wrap_conversion(vb_node, converted_expr, conversion_member, target_type)
    }
}

/// Rewrites against the Visual Basic compatibility library.
#[derive(Clone, Debug, Default)]
pub struct VisualBasicNullableRewriter {
    dialect: CompatibilityDialect,
}

impl VisualBasicNullableRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewriter for a custom compatibility library.
    pub fn with_dialect(dialect: CompatibilityDialect) -> Result<Self, DialectError> {
        dialect.validate()?;
        Ok(VisualBasicNullableRewriter { dialect })
    }
}

impl NullableRewriteStrategy for VisualBasicNullableRewriter {
    fn dialect(&self) -> &CompatibilityDialect {
        &self.dialect
    }
}
