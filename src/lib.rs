//! # Likewise
//!
//! Equality and inequality validators for Rust.
//!
//! A [`ComparisonValidator`] checks that a value extracted from an object is
//! equal, or not equal, to a target. The target is either a constant or the
//! current value of another member of the same object. Equality is decided by
//! `PartialEq` unless a custom [`EqualityComparer`](comparer::EqualityComparer)
//! is supplied.
//!
//! ## Quick Example
//!
//! ```rust
//! use likewise::prelude::*;
//! use likewise::comparer::IgnoreCase;
//!
//! struct Person {
//!     forename: String,
//!     surname: String,
//! }
//!
//! // The surname must differ from the forename, ignoring case
//! let validator = ComparisonValidator::not_equal_to_member(member!(Person, forename as "Forename"))
//!     .with_comparer(IgnoreCase);
//!
//! let person = Person { forename: "Foo".into(), surname: "FOO".into() };
//! let ctx = ValidationContext::new(&person, person.surname.clone()).with_member_name("Surname");
//!
//! match validator.validate(&ctx) {
//!     Ok(result) if result.is_valid() => println!("ok"),
//!     Ok(result) => println!("invalid: {}", result),
//!     Err(err) => println!("could not validate: {}", err),
//! }
//! # assert_eq!(
//! #     validator.validate(&ctx).unwrap().error(),
//! #     Some("'Surname' should not be equal to 'Foo'.")
//! # );
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace`/`debug` events from validators
//! - `serde`: `Serialize`/`Deserialize` for [`ValidationResult`]
//! - `proptest`: `Arbitrary` impls for property-based tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod comparer;
pub mod context;
pub mod error;
pub mod member;
pub mod message;
pub mod result;
pub mod testing;
pub mod validator;

// Re-exports
pub use comparer::{DefaultComparer, EqualityComparer};
pub use context::ValidationContext;
pub use error::ValidatorError;
pub use member::{MemberDescriptor, MemberInfo};
pub use result::ValidationResult;
pub use validator::{
    Comparison, ComparisonInfo, ComparisonTarget, ComparisonValidator, PropertyValidator,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::comparer::{DefaultComparer, EqualityComparer};
    pub use crate::context::ValidationContext;
    pub use crate::error::ValidatorError;
    pub use crate::member;
    pub use crate::member::{MemberDescriptor, MemberInfo};
    pub use crate::result::ValidationResult;
    pub use crate::validator::{
        Comparison, ComparisonInfo, ComparisonTarget, ComparisonValidator, PropertyValidator,
    };
}
