//! Compatibility library dialect.
//!
//! Names the namespace and extension methods of the runtime library that
//! implements Visual Basic null semantics for C#. The defaults match the
//! published library, including the spelling of its namespace. A translator
//! targeting a different library loads its own table:
//!
//! ```json
//! {
//!   "namespace": "Acme.VbRuntime",
//!   "helpers": { "toBool": "AsBoolean" }
//! }
//! ```
//!
//! Missing fields fall back to the defaults.

use crate::classifier::RelationalOperator;
use serde::{Deserialize, Serialize};

/// Namespace of the companion compatibility library.
pub const DEFAULT_COMPATIBILITY_NAMESPACE: &str = "VBtoCSharp.Compatiblity";

/// Extension methods provided by the compatibility library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HelperMethod {
    /// `x.ToBool()`: `Boolean?` to `bool`, null is `false`
    ToBool,
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterOrEqualTo,
    LesserThan,
    LesserOrEqualTo,
}

impl HelperMethod {
    pub const fn for_relational(op: RelationalOperator) -> Self {
        match op {
            RelationalOperator::Equals => HelperMethod::EqualTo,
            RelationalOperator::NotEquals => HelperMethod::NotEqualTo,
            RelationalOperator::GreaterThan => HelperMethod::GreaterThan,
            RelationalOperator::GreaterThanOrEqual => HelperMethod::GreaterOrEqualTo,
            RelationalOperator::LessThan => HelperMethod::LesserThan,
            RelationalOperator::LessThanOrEqual => HelperMethod::LesserOrEqualTo,
        }
    }
}

/// Method names for each `HelperMethod`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelperNames {
    pub to_bool: String,
    pub equal_to: String,
    pub not_equal_to: String,
    pub greater_than: String,
    pub greater_or_equal_to: String,
    pub lesser_than: String,
    pub lesser_or_equal_to: String,
}

impl Default for HelperNames {
    fn default() -> Self {
        HelperNames {
            to_bool: "ToBool".to_string(),
            equal_to: "EqualTo".to_string(),
            not_equal_to: "NotEqualTo".to_string(),
            greater_than: "GreaterThan".to_string(),
            greater_or_equal_to: "GreaterOrEqualTo".to_string(),
            lesser_than: "LesserThan".to_string(),
            lesser_or_equal_to: "LesserOrEqualTo".to_string(),
        }
    }
}

impl HelperNames {
    pub fn get(&self, method: HelperMethod) -> &str {
        match method {
            HelperMethod::ToBool => &self.to_bool,
            HelperMethod::EqualTo => &self.equal_to,
            HelperMethod::NotEqualTo => &self.not_equal_to,
            HelperMethod::GreaterThan => &self.greater_than,
            HelperMethod::GreaterOrEqualTo => &self.greater_or_equal_to,
            HelperMethod::LesserThan => &self.lesser_than,
            HelperMethod::LesserOrEqualTo => &self.lesser_or_equal_to,
        }
    }

    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("helpers.toBool", self.to_bool.as_str()),
            ("helpers.equalTo", self.equal_to.as_str()),
            ("helpers.notEqualTo", self.not_equal_to.as_str()),
            ("helpers.greaterThan", self.greater_than.as_str()),
            ("helpers.greaterOrEqualTo", self.greater_or_equal_to.as_str()),
            ("helpers.lesserThan", self.lesser_than.as_str()),
            ("helpers.lesserOrEqualTo", self.lesser_or_equal_to.as_str()),
        ]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    #[error("invalid compatibility dialect: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("compatibility dialect field `{field}` must not be empty")]
    EmptyName { field: &'static str },
}

/// Namespace and helper names of a compatibility library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompatibilityDialect {
    pub namespace: String,
    pub helpers: HelperNames,
}

impl Default for CompatibilityDialect {
    fn default() -> Self {
        CompatibilityDialect {
            namespace: DEFAULT_COMPATIBILITY_NAMESPACE.to_string(),
            helpers: HelperNames::default(),
        }
    }
}

impl CompatibilityDialect {
    /// Parse a dialect table from JSON and validate it.
    pub fn from_json(text: &str) -> Result<Self, DialectError> {
        let dialect: CompatibilityDialect = serde_json::from_str(text)?;
        dialect.validate()?;
        Ok(dialect)
    }

    pub fn validate(&self) -> Result<(), DialectError> {
        if self.namespace.trim().is_empty() {
            return Err(DialectError::EmptyName { field: "namespace" });
        }
        for (field, name) in self.helpers.fields() {
            if name.trim().is_empty() {
                return Err(DialectError::EmptyName { field });
            }
        }
        Ok(())
    }

    pub fn method_name(&self, method: HelperMethod) -> &str {
        self.helpers.get(method)
    }
}
