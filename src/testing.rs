//! Testing utilities
//!
//! Assertion macros for [`ValidationResult`](crate::ValidationResult) values and,
//! with the `proptest` feature, property-testing strategies.
//!
//! # Example
//!
//! ```rust
//! use likewise::{assert_invalid, assert_message, assert_valid, ValidationResult};
//!
//! assert_valid!(ValidationResult::success());
//! assert_invalid!(ValidationResult::failure("bad"));
//! assert_message!(ValidationResult::failure("bad"), "bad");
//! ```

/// Assert that a validation result is valid.
///
/// This macro will panic if the result carries an error message.
///
/// ```rust
/// use likewise::{assert_valid, ValidationResult};
///
/// assert_valid!(ValidationResult::success());
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {{
        let result: $crate::ValidationResult = $result;
        if let ::std::option::Option::Some(message) = result.error() {
            panic!("Expected valid result, got invalid: {:?}", message);
        }
    }};
}

/// Assert that a validation result is invalid.
///
/// ```rust
/// use likewise::{assert_invalid, ValidationResult};
///
/// assert_invalid!(ValidationResult::failure("bad"));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {{
        let result: $crate::ValidationResult = $result;
        if result.is_valid() {
            panic!("Expected invalid result, got valid");
        }
    }};
}

/// Assert that a validation result is invalid with a specific message.
///
/// ```rust
/// use likewise::{assert_message, ValidationResult};
///
/// assert_message!(ValidationResult::failure("bad"), "bad");
/// ```
#[macro_export]
macro_rules! assert_message {
    ($result:expr, $expected:expr) => {{
        let result: $crate::ValidationResult = $result;
        match result.error() {
            ::std::option::Option::Some(message) => assert_eq!(message, $expected),
            ::std::option::Option::None => {
                panic!("Expected invalid result with message {:?}, got valid", $expected)
            }
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Comparison, ValidationResult};

#[cfg(feature = "proptest")]
impl Arbitrary for Comparison {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Comparison::Equal), Just(Comparison::NotEqual)].boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationResult {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(ValidationResult::success()),
            ".+".prop_map(|message: String| ValidationResult::failure(message)),
        ]
        .boxed()
    }
}
