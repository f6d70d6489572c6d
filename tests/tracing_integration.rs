//! Validators emit events into whatever subscriber is installed

#![cfg(feature = "tracing")]

use likewise::prelude::*;
use tracing::Level;

struct Person {
    surname: String,
}

#[test]
fn validates_under_a_fmt_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();

    let validator = ComparisonValidator::not_equal_to_member(member!(Person, surname as "Surname"));
    let person = Person {
        surname: "Foo".to_string(),
    };

    let result = tracing::subscriber::with_default(subscriber, || {
        let ctx = ValidationContext::new(&person, "Foo".to_string()).with_member_name("Forename");
        validator.validate(&ctx)
    });

    assert_eq!(
        result.unwrap().error(),
        Some("'Forename' should not be equal to 'Foo'.")
    );
}
