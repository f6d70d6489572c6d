//! Property validators
//!
//! A property validator checks one candidate value, extracted from some owning
//! object, and reports a [`ValidationResult`]. The only validator family in this
//! crate is the [`ComparisonValidator`], which checks equality or inequality
//! against a constant or against another member of the same object.
//!
//! # Example
//!
//! ```rust
//! use likewise::prelude::*;
//!
//! #[derive(Clone)]
//! struct Person {
//!     forename: String,
//!     surname: String,
//! }
//!
//! let validator = ComparisonValidator::not_equal_to_member(member!(Person, forename as "Forename"));
//! let person = Person { forename: "Foo".into(), surname: "Bar".into() };
//!
//! let ctx = ValidationContext::new(&person, person.surname.clone()).with_member_name("Surname");
//! assert!(validator.validate(&ctx).unwrap().is_valid());
//!
//! let ctx = ValidationContext::new(&person, "Foo".to_string()).with_member_name("Surname");
//! assert_eq!(
//!     validator.validate(&ctx).unwrap().error(),
//!     Some("'Surname' should not be equal to 'Foo'.")
//! );
//! ```

mod comparison;

use std::any::Any;
use std::fmt;

use crate::context::ValidationContext;
use crate::error::ValidatorError;
use crate::member::MemberInfo;
use crate::message::{EQUAL_TEMPLATE, NOT_EQUAL_TEMPLATE};
use crate::result::ValidationResult;

pub use comparison::{ComparisonTarget, ComparisonValidator};

/// Which relation a comparison validator requires between candidate and target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Candidate must equal the target.
    Equal,
    /// Candidate must differ from the target.
    NotEqual,
}

impl Comparison {
    /// Whether a comparison that found the values `equal` (or not) passes.
    ///
    /// ```rust
    /// use likewise::Comparison;
    ///
    /// assert!(Comparison::Equal.is_satisfied(true));
    /// assert!(!Comparison::NotEqual.is_satisfied(true));
    /// assert!(Comparison::NotEqual.is_satisfied(false));
    /// ```
    #[inline]
    pub fn is_satisfied(self, equal: bool) -> bool {
        match self {
            Comparison::Equal => equal,
            Comparison::NotEqual => !equal,
        }
    }

    /// The opposite relation.
    pub fn negate(self) -> Self {
        match self {
            Comparison::Equal => Comparison::NotEqual,
            Comparison::NotEqual => Comparison::Equal,
        }
    }

    /// Message template used when no custom message is configured.
    pub fn default_template(self) -> &'static str {
        match self {
            Comparison::Equal => EQUAL_TEMPLATE,
            Comparison::NotEqual => NOT_EQUAL_TEMPLATE,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Equal => write!(f, "Equal"),
            Comparison::NotEqual => write!(f, "NotEqual"),
        }
    }
}

/// Validates a candidate value of type `V` that belongs to a `T`.
pub trait PropertyValidator<T, V> {
    /// Evaluate the rule against `ctx`.
    ///
    /// Returns `Ok` with a valid or invalid result for every well-formed
    /// context. Returns `Err` only when the context violates the validator's
    /// contract.
    fn validate(&self, ctx: &ValidationContext<'_, T, V>) -> Result<ValidationResult, ValidatorError>;
}

/// Type-erased view of a comparison validator's configuration.
///
/// ```rust
/// use likewise::prelude::*;
///
/// struct Person;
///
/// let validator = ComparisonValidator::<Person, i32>::not_equal_to(2);
/// let info: &dyn ComparisonInfo = &validator;
///
/// assert_eq!(info.comparison(), Comparison::NotEqual);
/// assert_eq!(info.value_to_compare_any().and_then(|v| v.downcast_ref::<i32>()), Some(&2));
/// assert!(info.member_to_compare().is_none());
/// ```
pub trait ComparisonInfo {
    /// The required relation.
    fn comparison(&self) -> Comparison;

    /// The target member, when comparing against another member.
    fn member_to_compare(&self) -> Option<&MemberInfo>;

    /// The constant target, when comparing against a constant.
    fn value_to_compare_any(&self) -> Option<&dyn Any>;
}
