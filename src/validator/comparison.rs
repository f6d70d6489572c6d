//! Equality and inequality comparison validator

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::{Comparison, ComparisonInfo, PropertyValidator};
use crate::comparer::EqualityComparer;
use crate::context::ValidationContext;
use crate::error::ValidatorError;
use crate::member::{MemberDescriptor, MemberInfo};
use crate::message::{MessageFormatter, COMPARISON_PROPERTY, COMPARISON_VALUE, PROPERTY_VALUE};
use crate::result::ValidationResult;

/// What a candidate value is compared against.
pub enum ComparisonTarget<T, V> {
    /// A fixed value.
    Constant(V),
    /// The current value of another member of the owning object.
    Member(MemberDescriptor<T, V>),
}

impl<T, V> ComparisonTarget<T, V> {
    /// Compare against a fixed value.
    pub fn constant(value: V) -> Self {
        ComparisonTarget::Constant(value)
    }

    /// Compare against another member of the owning object.
    pub fn member(member: MemberDescriptor<T, V>) -> Self {
        ComparisonTarget::Member(member)
    }
}

impl<T, V> From<MemberDescriptor<T, V>> for ComparisonTarget<T, V> {
    fn from(member: MemberDescriptor<T, V>) -> Self {
        ComparisonTarget::Member(member)
    }
}

impl<T, V: Clone> Clone for ComparisonTarget<T, V> {
    fn clone(&self) -> Self {
        match self {
            ComparisonTarget::Constant(value) => ComparisonTarget::Constant(value.clone()),
            ComparisonTarget::Member(member) => ComparisonTarget::Member(member.clone()),
        }
    }
}

impl<T, V: fmt::Debug> fmt::Debug for ComparisonTarget<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonTarget::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            ComparisonTarget::Member(member) => f.debug_tuple("Member").field(member).finish(),
        }
    }
}

/// Checks that a candidate value is equal, or not equal, to a target.
///
/// The configuration is fixed once built; a single validator can be shared
/// across threads and reused for any number of contexts.
///
/// # Example
///
/// ```rust
/// use likewise::prelude::*;
/// use likewise::comparer::IgnoreCase;
///
/// struct Person {
///     surname: String,
/// }
///
/// let validator = ComparisonValidator::not_equal_to_member(member!(Person, surname as "Surname"))
///     .with_comparer(IgnoreCase);
///
/// let person = Person { surname: "foo".to_string() };
/// let ctx = ValidationContext::new(&person, "FOO".to_string()).with_member_name("Surname");
///
/// let result = validator.validate(&ctx).unwrap();
/// assert!(result.is_invalid());
/// assert_eq!(result.error(), Some("'Surname' should not be equal to 'foo'."));
/// ```
pub struct ComparisonValidator<T, V> {
    comparison: Comparison,
    target: ComparisonTarget<T, V>,
    comparer: Option<Arc<dyn EqualityComparer<V>>>,
    message: Option<Cow<'static, str>>,
}

impl<T, V> ComparisonValidator<T, V> {
    /// Create a validator requiring `comparison` against `target`.
    pub fn new(comparison: Comparison, target: ComparisonTarget<T, V>) -> Self {
        ComparisonValidator {
            comparison,
            target,
            comparer: None,
            message: None,
        }
    }

    /// Require the candidate to equal `target`.
    pub fn equal(target: ComparisonTarget<T, V>) -> Self {
        Self::new(Comparison::Equal, target)
    }

    /// Require the candidate to differ from `target`.
    pub fn not_equal(target: ComparisonTarget<T, V>) -> Self {
        Self::new(Comparison::NotEqual, target)
    }

    /// Require the candidate to equal a constant.
    pub fn equal_to(value: V) -> Self {
        Self::equal(ComparisonTarget::Constant(value))
    }

    /// Require the candidate to differ from a constant.
    pub fn not_equal_to(value: V) -> Self {
        Self::not_equal(ComparisonTarget::Constant(value))
    }

    /// Require the candidate to equal another member's current value.
    pub fn equal_to_member(member: MemberDescriptor<T, V>) -> Self {
        Self::equal(ComparisonTarget::Member(member))
    }

    /// Require the candidate to differ from another member's current value.
    pub fn not_equal_to_member(member: MemberDescriptor<T, V>) -> Self {
        Self::not_equal(ComparisonTarget::Member(member))
    }

    /// Decide equality with `comparer` instead of `PartialEq`.
    pub fn with_comparer<C>(mut self, comparer: C) -> Self
    where
        C: EqualityComparer<V> + 'static,
    {
        self.comparer = Some(Arc::new(comparer));
        self
    }

    /// Replace the default failure message template.
    ///
    /// See [`message`](crate::message) for the available placeholders.
    pub fn with_message(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(template.into());
        self
    }

    /// The required relation.
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// The constant target, if the target is a constant.
    pub fn value_to_compare(&self) -> Option<&V> {
        match &self.target {
            ComparisonTarget::Constant(value) => Some(value),
            ComparisonTarget::Member(_) => None,
        }
    }

    /// The target member, if the target is another member.
    pub fn member_to_compare(&self) -> Option<&MemberInfo> {
        match &self.target {
            ComparisonTarget::Constant(_) => None,
            ComparisonTarget::Member(member) => Some(member.info()),
        }
    }

    /// The configured target.
    pub fn target(&self) -> &ComparisonTarget<T, V> {
        &self.target
    }

    /// The failure message template in effect.
    pub fn message_template(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.comparison.default_template())
    }
}

impl<T, V> PropertyValidator<T, V> for ComparisonValidator<T, V>
where
    V: PartialEq + fmt::Display,
{
    fn validate(&self, ctx: &ValidationContext<'_, T, V>) -> Result<ValidationResult, ValidatorError> {
        let read;
        let target = match &self.target {
            ComparisonTarget::Constant(value) => value,
            ComparisonTarget::Member(member) => {
                let Some(instance) = ctx.instance() else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        target_member = member.name(),
                        "comparison target cannot be read without an instance"
                    );
                    return Err(ValidatorError::MissingInstance {
                        member: member.name().to_string(),
                    });
                };
                read = member.read(instance);
                &read
            }
        };

        let candidate = ctx.value();
        let equal = match (ctx.comparer(), &self.comparer) {
            (Some(comparer), _) => comparer.equals(candidate, target),
            (None, Some(comparer)) => comparer.equals(candidate, target),
            (None, None) => candidate == target,
        };

        let result = if self.comparison.is_satisfied(equal) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(self.format_message(ctx, target))
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            comparison = %self.comparison,
            member = ctx.member_name().unwrap_or_default(),
            valid = result.is_valid(),
            "comparison validated"
        );

        Ok(result)
    }
}

impl<T, V: fmt::Display> ComparisonValidator<T, V> {
    fn format_message(&self, ctx: &ValidationContext<'_, T, V>, target: &V) -> String {
        let comparison_property = self.member_to_compare().map(MemberInfo::name).unwrap_or("");
        MessageFormatter::new()
            .with_property_name(ctx.member_name())
            .with_argument(PROPERTY_VALUE, ctx.value())
            .with_argument(COMPARISON_VALUE, target)
            .with_argument(COMPARISON_PROPERTY, comparison_property)
            .build(self.message_template())
    }
}

impl<T, V: Any> ComparisonInfo for ComparisonValidator<T, V> {
    fn comparison(&self) -> Comparison {
        self.comparison
    }

    fn member_to_compare(&self) -> Option<&MemberInfo> {
        ComparisonValidator::member_to_compare(self)
    }

    fn value_to_compare_any(&self) -> Option<&dyn Any> {
        self.value_to_compare().map(|value| value as &dyn Any)
    }
}

impl<T, V: Clone> Clone for ComparisonValidator<T, V> {
    fn clone(&self) -> Self {
        ComparisonValidator {
            comparison: self.comparison,
            target: self.target.clone(),
            comparer: self.comparer.clone(),
            message: self.message.clone(),
        }
    }
}

impl<T, V: fmt::Debug> fmt::Debug for ComparisonValidator<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonValidator")
            .field("comparison", &self.comparison)
            .field("target", &self.target)
            .field("has_comparer", &self.comparer.is_some())
            .field("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::{IgnoreAsciiCase, IgnoreCase};
    use crate::member;

    #[derive(Clone, Debug, Default)]
    struct Person {
        forename: String,
        surname: String,
        age: i32,
    }

    fn person(forename: &str, surname: &str) -> Person {
        Person {
            forename: forename.to_string(),
            surname: surname.to_string(),
            age: 0,
        }
    }

    #[test]
    fn not_equal_fails_when_values_match() {
        let validator = ComparisonValidator::not_equal_to_member(member!(Person, forename));
        let p = person("Foo", "");
        let ctx = ValidationContext::new(&p, "Foo".to_string());
        assert!(validator.validate(&ctx).unwrap().is_invalid());
    }

    #[test]
    fn not_equal_passes_when_values_differ() {
        let validator = ComparisonValidator::not_equal_to_member(member!(Person, forename));
        let p = person("Foo", "");
        let ctx = ValidationContext::new(&p, "Bar".to_string());
        assert_eq!(validator.validate(&ctx).unwrap(), ValidationResult::success());
    }

    #[test]
    fn equal_mirrors_not_equal() {
        let validator = ComparisonValidator::equal_to_member(member!(Person, forename));
        let p = person("Foo", "");
        let same = ValidationContext::new(&p, "Foo".to_string());
        let different = ValidationContext::new(&p, "Bar".to_string()).with_member_name("Nickname");
        assert!(validator.validate(&same).unwrap().is_valid());
        assert_eq!(
            validator.validate(&different).unwrap().error(),
            Some("'Nickname' should be equal to 'Foo'.")
        );
    }

    #[test]
    fn constant_target_needs_no_instance() {
        let validator = ComparisonValidator::<Person, i32>::equal_to(2);
        let ctx = ValidationContext::detached(3).with_member_name("Count");
        let result = validator.validate(&ctx).unwrap();
        assert_eq!(result.error(), Some("'Count' should be equal to '2'."));
    }

    #[test]
    fn member_target_without_instance_is_an_error() {
        let validator = ComparisonValidator::not_equal_to_member(member!(Person, surname as "Surname"));
        let ctx = ValidationContext::detached("Foo".to_string());
        assert_eq!(
            validator.validate(&ctx),
            Err(ValidatorError::MissingInstance {
                member: "Surname".to_string()
            })
        );
    }

    #[test]
    fn target_is_read_at_validation_time() {
        let validator = ComparisonValidator::not_equal_to_member(member!(Person, surname));
        let mut p = person("", "Foo");
        let first = validator
            .validate(&ValidationContext::new(&p, "Foo".to_string()))
            .unwrap();
        p.surname = "Bar".to_string();
        let second = validator
            .validate(&ValidationContext::new(&p, "Foo".to_string()))
            .unwrap();
        assert!(first.is_invalid());
        assert!(second.is_valid());
    }

    #[test]
    fn configured_comparer_is_used() {
        let validator =
            ComparisonValidator::not_equal_to_member(member!(Person, surname)).with_comparer(IgnoreCase);
        let p = person("", "foo");
        let ctx = ValidationContext::new(&p, "FOO".to_string());
        assert!(validator.validate(&ctx).unwrap().is_invalid());
    }

    #[test]
    fn context_comparer_overrides_configured_comparer() {
        let validator =
            ComparisonValidator::not_equal_to_member(member!(Person, surname)).with_comparer(IgnoreCase);
        let p = person("", "ÄRGER");
        let strict = ValidationContext::new(&p, "ärger".to_string()).with_comparer(&IgnoreAsciiCase);
        let lenient = ValidationContext::new(&p, "ärger".to_string());
        assert!(validator.validate(&strict).unwrap().is_valid());
        assert!(validator.validate(&lenient).unwrap().is_invalid());
    }

    #[test]
    fn closure_comparer() {
        let validator = ComparisonValidator::<Person, i32>::not_equal_to(10)
            .with_comparer(|a: &i32, b: &i32| a / 10 == b / 10);
        let ctx = ValidationContext::detached(15);
        assert!(validator.validate(&ctx).unwrap().is_invalid());
        let ctx = ValidationContext::detached(25);
        assert!(validator.validate(&ctx).unwrap().is_valid());
    }

    #[test]
    fn custom_message_uses_all_placeholders() {
        let validator = ComparisonValidator::not_equal_to_member(member!(Person, age as "Age"))
            .with_message("{PropertyName}={PropertyValue} clashes with {ComparisonProperty}={ComparisonValue}");
        let p = Person {
            age: 30,
            ..Person::default()
        };
        let ctx = ValidationContext::new(&p, 30).with_member_name("RetirementAge");
        assert_eq!(
            validator.validate(&ctx).unwrap().error(),
            Some("RetirementAge=30 clashes with Age=30")
        );
    }

    #[test]
    fn comparison_property_is_empty_for_constant_targets() {
        let validator = ComparisonValidator::<Person, i32>::not_equal_to(7)
            .with_message("{PropertyName} matches [{ComparisonProperty}] with {ComparisonValue}");
        let ctx = ValidationContext::detached(7).with_member_name("Lucky");
        assert_eq!(
            validator.validate(&ctx).unwrap().error(),
            Some("Lucky matches [] with 7")
        );
    }

    #[test]
    fn message_without_member_name_drops_prefix() {
        let validator = ComparisonValidator::<Person, String>::not_equal_to("Foo".to_string());
        let ctx = ValidationContext::detached("Foo".to_string());
        assert_eq!(
            validator.validate(&ctx).unwrap().error(),
            Some("should not be equal to 'Foo'.")
        );
    }

    #[test]
    fn exposes_configuration() {
        let by_member = ComparisonValidator::not_equal_to_member(member!(Person, surname as "Surname"));
        assert_eq!(by_member.comparison(), Comparison::NotEqual);
        assert_eq!(
            by_member.member_to_compare(),
            Some(&MemberInfo::of::<Person, String>("Surname"))
        );
        assert!(by_member.value_to_compare().is_none());

        let by_value = ComparisonValidator::<Person, i32>::equal_to(2);
        assert_eq!(by_value.value_to_compare(), Some(&2));
        assert!(by_value.member_to_compare().is_none());
        assert_eq!(by_value.message_template(), Comparison::Equal.default_template());
    }

    #[test]
    fn validator_is_shareable_across_threads() {
        fn assert_send_sync<S: Send + Sync>(_: &S) {}

        let validator = Arc::new(
            ComparisonValidator::not_equal_to_member(member!(Person, surname)).with_comparer(IgnoreCase),
        );
        assert_send_sync(&*validator);

        let handles: Vec<_> = ["foo", "bar"]
            .into_iter()
            .map(|candidate| {
                let validator = Arc::clone(&validator);
                std::thread::spawn(move || {
                    let p = person("", "FOO");
                    validator
                        .validate(&ValidationContext::new(&p, candidate.to_string()))
                        .map(|r| r.is_valid())
                })
            })
            .collect();

        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(outcomes, vec![Ok(false), Ok(true)]);
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn validation_outcome_is_traced() {
            let validator = ComparisonValidator::<Person, i32>::not_equal_to(2);
            let ctx = ValidationContext::detached(2).with_member_name("Count");
            assert!(validator.validate(&ctx).unwrap().is_invalid());
            assert!(logs_contain("comparison validated"));
            assert!(logs_contain("comparison=NotEqual"));
            assert!(logs_contain("valid=false"));
        }

        #[test]
        #[traced_test]
        fn missing_instance_is_logged() {
            let validator = ComparisonValidator::equal_to_member(member!(Person, surname as "Surname"));
            let ctx = ValidationContext::detached("Foo".to_string());
            assert!(validator.validate(&ctx).is_err());
            assert!(logs_contain("cannot be read without an instance"));
        }
    }
}
