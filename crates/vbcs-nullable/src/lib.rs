//! Nullable-expression rewriting for Visual Basic to C# translation.
//!
//! Visual Basic evaluates `=`, `<>`, `<`, `<=`, `>`, `>=`, `AndAlso` and
//! `OrElse` over nullable value types with three-valued logic. C# lifts the
//! same operators differently, so the translated expression can change
//! meaning. This crate rewrites such expressions into calls against the
//! companion compatibility library:
//!
//! ```text
//! a = b                  ->  a.EqualTo(b)
//! x AndAlso y            ->  (x.ToBool() && y)
//! CInt(n)                ->  (n.HasValue ? (int?)Conversions.ToInteger(n.Value) : null)
//! ```
//!
//! Expressions proven non-null by an inner rewrite carry
//! `Provenance::NonNull`, so enclosing rewrites never wrap them a second
//! time. Every helper call records the compatibility namespace in the
//! translation unit's `RewriteContext`.

pub mod classifier;
pub use classifier::{LogicalOperator, OperatorClass, RelationalOperator, is_eligible};

pub mod provenance;
pub use provenance::has_provenance_marker;

pub mod detector;
pub use detector::is_nullable;

pub mod context;
pub use context::{ImportRequirements, RewriteContext};

pub mod dialect;
pub use dialect::{CompatibilityDialect, DialectError, HelperMethod, HelperNames};

pub mod error;
pub use error::RewriteError;

pub mod helper_call;
pub use helper_call::build_call;

pub mod logical;
pub mod relational;
pub mod conversion;

pub mod strategy;
pub use strategy::{NullableRewriteStrategy, VisualBasicNullableRewriter};
