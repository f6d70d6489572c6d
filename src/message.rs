//! Error message templates
//!
//! Messages are built from templates containing `{Placeholder}` tokens.
//! Comparison validators supply these arguments:
//!
//! | Placeholder            | Value                                         |
//! |------------------------|-----------------------------------------------|
//! | `{PropertyName}`       | name of the member under validation           |
//! | `{PropertyValue}`      | the candidate value                           |
//! | `{ComparisonValue}`    | the resolved target value                     |
//! | `{ComparisonProperty}` | name of the target member, empty for constants |
//!
//! Unknown placeholders are left in place.
//!
//! # Example
//!
//! ```rust
//! use likewise::message::{MessageFormatter, NOT_EQUAL_TEMPLATE};
//!
//! let message = MessageFormatter::new()
//!     .with_property_name(Some("Forename"))
//!     .with_argument("ComparisonValue", "Foo")
//!     .build(NOT_EQUAL_TEMPLATE);
//!
//! assert_eq!(message, "'Forename' should not be equal to 'Foo'.");
//! ```

use std::collections::BTreeMap;

/// Placeholder for the validated member's name.
pub const PROPERTY_NAME: &str = "PropertyName";
/// Placeholder for the candidate value.
pub const PROPERTY_VALUE: &str = "PropertyValue";
/// Placeholder for the comparison target's value.
pub const COMPARISON_VALUE: &str = "ComparisonValue";
/// Placeholder for the comparison target's member name.
pub const COMPARISON_PROPERTY: &str = "ComparisonProperty";

/// Default message for a failed not-equal comparison.
pub const NOT_EQUAL_TEMPLATE: &str = "'{PropertyName}' should not be equal to '{ComparisonValue}'.";
/// Default message for a failed equal comparison.
pub const EQUAL_TEMPLATE: &str = "'{PropertyName}' should be equal to '{ComparisonValue}'.";

const NAMELESS_PREFIX: &str = "'{PropertyName}' ";

/// Collects placeholder arguments and renders templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFormatter {
    property_name: Option<String>,
    arguments: BTreeMap<String, String>,
}

impl MessageFormatter {
    /// Create a formatter with no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validated member's name.
    ///
    /// When no name is given, a leading `'{PropertyName}' ` is dropped from
    /// the template rather than rendered as empty quotes.
    pub fn with_property_name(mut self, name: Option<&str>) -> Self {
        self.property_name = name.map(str::to_string);
        self
    }

    /// Add a placeholder argument.
    pub fn with_argument(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.arguments.insert(key.into(), value.to_string());
        self
    }

    /// Render `template`.
    pub fn build(&self, template: &str) -> String {
        let template = match &self.property_name {
            Some(_) => template,
            None => template.strip_prefix(NAMELESS_PREFIX).unwrap_or(template),
        };

        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match self.lookup(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        if key == PROPERTY_NAME {
            return Some(self.property_name.as_deref().unwrap_or(""));
        }
        self.arguments.get(key).map(String::as_str)
    }
}
