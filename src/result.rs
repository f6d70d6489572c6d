//! Outcome of a single validation call
//!
//! A [`ValidationResult`] is either valid with no message, or invalid with a
//! formatted message. There is no way to build any other combination.
//!
//! # Example
//!
//! ```rust
//! use likewise::ValidationResult;
//!
//! let ok = ValidationResult::success();
//! assert!(ok.is_valid());
//! assert_eq!(ok.error(), None);
//!
//! let bad = ValidationResult::failure("'Forename' should not be equal to 'Foo'.");
//! assert!(bad.is_invalid());
//! assert_eq!(bad.error(), Some("'Forename' should not be equal to 'Foo'."));
//! assert_eq!(bad.into_result(), Err("'Forename' should not be equal to 'Foo'.".to_string()));
//! ```

use std::fmt;

/// Validity flag plus an error message that is present exactly when invalid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    message: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn success() -> Self {
        ValidationResult { message: None }
    }

    /// A failing result carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        ValidationResult {
            message: Some(message.into()),
        }
    }

    /// Whether the validated value satisfied the rule.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.message.is_none()
    }

    /// Whether the validated value violated the rule.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.message.is_some()
    }

    /// The error message of a failing result.
    pub fn error(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Alias for [`error`](Self::error).
    pub fn message(&self) -> Option<&str> {
        self.error()
    }

    /// Convert to a `Result`, yielding the message as the error.
    pub fn into_result(self) -> Result<(), String> {
        match self.message {
            None => Ok(()),
            Some(message) => Err(message),
        }
    }
}

impl From<ValidationResult> for Result<(), String> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            None => write!(f, "valid"),
            Some(message) => write!(f, "{}", message),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};
    use serde::{Deserialize, Serialize};
    use std::fmt;

    use super::ValidationResult;

    const FIELDS: &[&str] = &["is_valid", "message"];

    impl Serialize for ValidationResult {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("ValidationResult", 2)?;
            state.serialize_field("is_valid", &self.is_valid())?;
            state.serialize_field("message", &self.message)?;
            state.end()
        }
    }

    impl<'de> Deserialize<'de> for ValidationResult {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_struct("ValidationResult", FIELDS, ResultVisitor)
        }
    }

    struct ResultVisitor;

    impl<'de> Visitor<'de> for ResultVisitor {
        type Value = ValidationResult;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a validation result with `is_valid` and `message`")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut is_valid: Option<bool> = None;
            let mut message: Option<Option<String>> = None;

            while let Some(key) = map.next_key::<String>()? {
                match key.as_str() {
                    "is_valid" => is_valid = Some(map.next_value()?),
                    "message" => message = Some(map.next_value()?),
                    other => return Err(de::Error::unknown_field(other, FIELDS)),
                }
            }

            let is_valid = is_valid.ok_or_else(|| de::Error::missing_field("is_valid"))?;
            match (is_valid, message.flatten()) {
                (true, None) => Ok(ValidationResult::success()),
                (false, Some(message)) => Ok(ValidationResult::failure(message)),
                (true, Some(_)) => Err(de::Error::custom("a valid result cannot carry a message")),
                (false, None) => Err(de::Error::custom("an invalid result requires a message")),
            }
        }
    }
}
