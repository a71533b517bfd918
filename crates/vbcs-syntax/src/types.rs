//! Resolved static types.
//!
//! Semantic analysis is performed elsewhere; the rewrite passes only receive
//! the resolved type of each operand and ask whether it is a nullable value
//! type (`Nullable(Of T)` / `T?` where `T` is a structure).

use std::fmt;

/// A resolved Visual Basic type, reduced to what the passes need to know.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedType {
    /// Structure or primitive value type: `Integer`, `Boolean`, `Date`
    Value(String),
    /// Class, interface, array, delegate or `String`
    Reference(String),
    /// `Nullable(Of T)`
    Nullable(Box<ResolvedType>),
}

impl ResolvedType {
    pub fn value(name: impl Into<String>) -> Self {
        ResolvedType::Value(name.into())
    }

    pub fn reference(name: impl Into<String>) -> Self {
        ResolvedType::Reference(name.into())
    }

    /// `T?` for the value type `name`.
    pub fn nullable(name: impl Into<String>) -> Self {
        ResolvedType::Nullable(Box::new(ResolvedType::Value(name.into())))
    }

    /// True for `Nullable(Of T)` with a value-type `T`.
    pub fn is_nullable_value_type(&self) -> bool {
        match self {
            ResolvedType::Nullable(inner) => matches!(**inner, ResolvedType::Value(_)),
            ResolvedType::Value(_) | ResolvedType::Reference(_) => false,
        }
    }

    /// The `T` of `Nullable(Of T)`, or the type itself.
    pub fn underlying(&self) -> &ResolvedType {
        match self {
            ResolvedType::Nullable(inner) => inner,
            other => other,
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedType::Value(name) | ResolvedType::Reference(name) => f.write_str(name),
            ResolvedType::Nullable(inner) => write!(f, "{inner}?"),
        }
    }
}

/// Static type information for one operand.
///
/// `ty` is the natural type of the expression; `converted_type` is the type
/// after any implicit conversion the binder applied at this site. Either can
/// be missing when binding failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeInfo {
    pub ty: Option<ResolvedType>,
    pub converted_type: Option<ResolvedType>,
}

impl TypeInfo {
    /// Operand whose natural and converted types agree.
    pub fn of(ty: ResolvedType) -> Self {
        TypeInfo {
            ty: Some(ty.clone()),
            converted_type: Some(ty),
        }
    }

    pub fn converted(ty: ResolvedType, converted_type: ResolvedType) -> Self {
        TypeInfo {
            ty: Some(ty),
            converted_type: Some(converted_type),
        }
    }

    /// Binding failed or the expression has no type.
    pub const fn unknown() -> Self {
        TypeInfo {
            ty: None,
            converted_type: None,
        }
    }

    pub fn type_is_nullable(&self) -> bool {
        self.ty
            .as_ref()
            .is_some_and(ResolvedType::is_nullable_value_type)
    }

    pub fn converted_type_is_nullable(&self) -> bool {
        self.converted_type
            .as_ref()
            .is_some_and(ResolvedType::is_nullable_value_type)
    }
}
