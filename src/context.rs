//! Per-call validation context
//!
//! A [`ValidationContext`] carries everything a validator needs for a single
//! evaluation: the candidate value, the object that owns it, the candidate's
//! member name for messages, and an optional comparer override.
//!
//! Contexts are built fresh for every call and never mutated afterwards.
//!
//! # Example
//!
//! ```rust
//! use likewise::ValidationContext;
//! use likewise::comparer::IgnoreCase;
//!
//! struct Person {
//!     surname: String,
//! }
//!
//! let person = Person { surname: "foo".to_string() };
//! let ctx = ValidationContext::new(&person, "FOO".to_string())
//!     .with_member_name("Surname")
//!     .with_comparer(&IgnoreCase)
//!     .with_culture("en-US");
//!
//! assert_eq!(ctx.member_name(), Some("Surname"));
//! assert_eq!(ctx.value(), "FOO");
//! assert!(ctx.instance().is_some());
//! assert_eq!(ctx.culture(), Some("en-US"));
//! ```

use std::fmt;

use crate::comparer::EqualityComparer;

/// Inputs for validating one candidate value of type `V` that belongs to a `T`.
pub struct ValidationContext<'a, T, V> {
    member_name: Option<String>,
    instance: Option<&'a T>,
    value: V,
    comparer: Option<&'a dyn EqualityComparer<V>>,
    culture: Option<String>,
}

impl<'a, T, V> ValidationContext<'a, T, V> {
    /// Create a context for `value`, owned by `instance`.
    pub fn new(instance: &'a T, value: V) -> Self {
        ValidationContext {
            member_name: None,
            instance: Some(instance),
            value,
            comparer: None,
            culture: None,
        }
    }

    /// Create a context with no owning instance.
    ///
    /// Validators that only compare against constants accept such contexts;
    /// validators that read a sibling member reject them with
    /// [`ValidatorError::MissingInstance`](crate::ValidatorError::MissingInstance).
    pub fn detached(value: V) -> Self {
        ValidationContext {
            member_name: None,
            instance: None,
            value,
            comparer: None,
            culture: None,
        }
    }

    /// Name the member the candidate value was extracted from.
    pub fn with_member_name(mut self, name: impl Into<String>) -> Self {
        self.member_name = Some(name.into());
        self
    }

    /// Override the validator's comparer for this call.
    pub fn with_comparer(mut self, comparer: &'a dyn EqualityComparer<V>) -> Self {
        self.comparer = Some(comparer);
        self
    }

    /// Attach a locale hint, e.g. `"en-US"`.
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    /// Name of the member under validation, if known.
    pub fn member_name(&self) -> Option<&str> {
        self.member_name.as_deref()
    }

    /// The object that owns the candidate value.
    pub fn instance(&self) -> Option<&'a T> {
        self.instance
    }

    /// The candidate value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The per-call comparer override, if any.
    pub fn comparer(&self) -> Option<&'a dyn EqualityComparer<V>> {
        self.comparer
    }

    /// Locale hint supplied by the caller.
    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }
}

impl<T, V: fmt::Debug> fmt::Debug for ValidationContext<'_, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("member_name", &self.member_name)
            .field("has_instance", &self.instance.is_some())
            .field("value", &self.value)
            .field("has_comparer", &self.comparer.is_some())
            .field("culture", &self.culture)
            .finish()
    }
}
