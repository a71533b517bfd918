//! Syntax types shared by the vbcs translation passes.
//!
//! This crate provides the data the rewrite passes operate on:
//! - Source-side node handles (`VbSyntaxKind`, `VbNode`, `Span`)
//! - Resolved static types as reported by semantic analysis (`ResolvedType`, `TypeInfo`)
//! - The C# expression IR produced by the passes (`CsExpr`, `CsExprKind`, `CsType`)
//! - A small expression renderer used for trace output and tests (`CsPrinter`)

// Byte-offset source spans
pub mod span;
pub use span::Span;

// Visual Basic node kinds and handles
pub mod vb;
pub use vb::{VbNode, VbSyntaxKind};

// Resolved types and the nullable value type oracle
pub mod types;
pub use types::{ResolvedType, TypeInfo};

// C# expression IR
pub mod cs_ir;
pub use cs_ir::{CsBinaryOperator, CsExpr, CsExprKind, CsPrefixOperator, CsType, Provenance};

// C# expression rendering
pub mod cs_printer;
pub use cs_printer::CsPrinter;
