//! vbcs: Visual Basic to C# translation passes.
//!
//! This package re-exports the workspace crates behind one dependency:
//! - `syntax` - source node handles, resolved types and the C# expression IR
//! - `nullable` - null-safe rewriting of three-valued operators
//!
//! plus `tracing_config` for subscriber setup in translator binaries.

pub use vbcs_nullable as nullable;
pub use vbcs_syntax as syntax;

pub use vbcs_nullable::{
    CompatibilityDialect, NullableRewriteStrategy, RewriteContext, RewriteError,
    VisualBasicNullableRewriter,
};
pub use vbcs_syntax::{CsExpr, CsType, TypeInfo, VbNode, VbSyntaxKind};

// Tracing subscriber configuration (VBCS_LOG / VBCS_LOG_FORMAT)
pub mod tracing_config;
