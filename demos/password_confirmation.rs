//! Signup form checks built from comparison validators
//!
//! Run with: cargo run --example password_confirmation

use likewise::comparer::IgnoreCase;
use likewise::prelude::*;

struct SignupForm {
    username: String,
    password: String,
    password_confirm: String,
}

fn check_form(form: &SignupForm) -> Vec<String> {
    // Confirmation must repeat the password exactly
    let confirm_matches = ComparisonValidator::equal_to_member(member!(SignupForm, password as "Password"))
        .with_message("'{PropertyName}' must match '{ComparisonProperty}'.");

    // Password must not just be the username in another case
    let not_username = ComparisonValidator::not_equal_to_member(member!(SignupForm, username as "Username"))
        .with_comparer(IgnoreCase)
        .with_message("'{PropertyName}' cannot be the same as your {ComparisonProperty}.");

    let reserved = ComparisonValidator::<SignupForm, String>::not_equal_to("admin".to_string())
        .with_comparer(IgnoreCase);

    let checks = [
        (
            &confirm_matches,
            ValidationContext::new(form, form.password_confirm.clone()).with_member_name("Confirm Password"),
        ),
        (
            &not_username,
            ValidationContext::new(form, form.password.clone()).with_member_name("Password"),
        ),
        (
            &reserved,
            ValidationContext::new(form, form.username.clone()).with_member_name("Username"),
        ),
    ];

    checks
        .iter()
        .filter_map(|(validator, ctx)| match validator.validate(ctx) {
            Ok(result) => result.error().map(str::to_string),
            Err(err) => Some(err.to_string()),
        })
        .collect()
}

fn main() {
    let forms = [
        SignupForm {
            username: "ada".to_string(),
            password: "analytical-engine".to_string(),
            password_confirm: "analytical-engine".to_string(),
        },
        SignupForm {
            username: "Admin".to_string(),
            password: "ADMIN".to_string(),
            password_confirm: "admin".to_string(),
        },
    ];

    for form in &forms {
        println!("Signup for {}:", form.username);
        let errors = check_form(form);
        if errors.is_empty() {
            println!("  ok");
        }
        for error in errors {
            println!("  - {}", error);
        }
    }
}
