//! Pluggable equality comparison
//!
//! Comparison validators decide equality through the [`EqualityComparer`]
//! capability rather than hard-wiring `PartialEq`. This lets a caller swap in
//! case-insensitive string matching, key projections, or any closure.
//!
//! # Example
//!
//! ```rust
//! use likewise::comparer::*;
//!
//! assert!(DefaultComparer.equals(&5, &5));
//! assert!(IgnoreCase.equals("FOO", "foo"));
//! assert!(!IgnoreCase.equals("foo", "bar"));
//!
//! // Any closure works as a comparer
//! let within_one = |a: &i32, b: &i32| (a - b).abs() <= 1;
//! assert!(within_one.equals(&4, &5));
//! ```

use std::fmt;

/// An equality test between two values of the same type.
///
/// Implementations must be `Send + Sync` so that configured validators can be
/// shared across threads.
pub trait EqualityComparer<V: ?Sized>: Send + Sync {
    /// Returns `true` when `a` and `b` are considered equal.
    fn equals(&self, a: &V, b: &V) -> bool;
}

// Blanket impl for closures
impl<V: ?Sized, F> EqualityComparer<V> for F
where
    F: Fn(&V, &V) -> bool + Send + Sync,
{
    #[inline]
    fn equals(&self, a: &V, b: &V) -> bool {
        self(a, b)
    }
}

/// Native equality through `PartialEq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultComparer;

impl<V: PartialEq + ?Sized> EqualityComparer<V> for DefaultComparer {
    #[inline]
    fn equals(&self, a: &V, b: &V) -> bool {
        a == b
    }
}

/// Case-insensitive string equality using simple, char-by-char case mapping.
///
/// Each char is mapped to its single-char uppercase form. Chars whose
/// uppercase form expands to several chars (such as `ß`) are compared as
/// they are, so strings of different char counts are never equal.
///
/// Works for both `String` and `str`.
///
/// ```rust
/// use likewise::comparer::{EqualityComparer, IgnoreCase};
///
/// assert!(IgnoreCase.equals("ÄRGER", "ärger"));
/// assert!(IgnoreCase.equals(&"ÉCOLE".to_string(), &"école".to_string()));
/// assert!(!IgnoreCase.equals("straße", "STRASSE"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IgnoreCase;

impl EqualityComparer<str> for IgnoreCase {
    fn equals(&self, a: &str, b: &str) -> bool {
        a.chars().map(simple_uppercase).eq(b.chars().map(simple_uppercase))
    }
}

// 1:1 mapping; multi-char expansions keep the original char
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}

impl EqualityComparer<String> for IgnoreCase {
    #[inline]
    fn equals(&self, a: &String, b: &String) -> bool {
        EqualityComparer::<str>::equals(self, a, b)
    }
}

/// Case-insensitive string equality restricted to ASCII letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IgnoreAsciiCase;

impl EqualityComparer<str> for IgnoreAsciiCase {
    #[inline]
    fn equals(&self, a: &str, b: &str) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

impl EqualityComparer<String> for IgnoreAsciiCase {
    #[inline]
    fn equals(&self, a: &String, b: &String) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

/// Compares values by a projected key.
#[derive(Clone, Copy)]
pub struct ByKey<F>(F);

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByKey").finish_non_exhaustive()
    }
}

impl<V: ?Sized, K: PartialEq, F> EqualityComparer<V> for ByKey<F>
where
    F: Fn(&V) -> K + Send + Sync,
{
    #[inline]
    fn equals(&self, a: &V, b: &V) -> bool {
        (self.0)(a) == (self.0)(b)
    }
}

/// Create a comparer that treats two values as equal when their keys match.
///
/// # Example
///
/// ```rust
/// use likewise::comparer::{by_key, EqualityComparer};
///
/// let same_len = by_key(|s: &String| s.len());
/// assert!(same_len.equals(&"abc".to_string(), &"xyz".to_string()));
/// assert!(!same_len.equals(&"ab".to_string(), &"xyz".to_string()));
/// ```
pub fn by_key<V: ?Sized, K: PartialEq, F>(key: F) -> ByKey<F>
where
    F: Fn(&V) -> K + Send + Sync,
{
    ByKey(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_comparer_uses_partial_eq() {
        assert!(DefaultComparer.equals(&"Foo".to_string(), &"Foo".to_string()));
        assert!(!DefaultComparer.equals(&"Foo".to_string(), &"foo".to_string()));
        assert!(DefaultComparer.equals(&2, &2));
    }

    #[test]
    fn ignore_case_matches_mixed_case() {
        assert!(IgnoreCase.equals(&"FOO".to_string(), &"foo".to_string()));
        assert!(IgnoreCase.equals("Ärger", "äRGER"));
        assert!(!IgnoreCase.equals("foo", "fooo"));
    }

    #[test]
    fn ignore_case_maps_char_by_char() {
        // U+0130 lowercases to "i\u{307}" under the full mapping
        assert!(!IgnoreCase.equals("\u{130}", "i\u{307}"));
        // Kelvin sign is already uppercase and distinct from 'K'
        assert!(!IgnoreCase.equals("\u{212A}", "k"));
        assert!(!IgnoreCase.equals("ß", "SS"));
        assert!(IgnoreCase.equals("ß", "ß"));
        assert!(IgnoreCase.equals("\u{3C3}", "\u{3A3}"));
    }

    #[test]
    fn ignore_ascii_case_leaves_non_ascii_alone() {
        assert!(IgnoreAsciiCase.equals("FOO", "foo"));
        assert!(!IgnoreAsciiCase.equals("Ä", "ä"));
    }

    #[test]
    fn closure_is_a_comparer() {
        let parity = |a: &u8, b: &u8| a % 2 == b % 2;
        assert!(parity.equals(&2, &4));
        assert!(!parity.equals(&2, &3));
    }

    #[test]
    fn by_key_compares_projection() {
        let first_char = by_key(|s: &str| s.chars().next());
        assert!(first_char.equals("apple", "avocado"));
        assert!(!first_char.equals("apple", "banana"));
    }

    #[test]
    fn comparer_is_object_safe() {
        let comparers: Vec<Box<dyn EqualityComparer<String>>> =
            vec![Box::new(DefaultComparer), Box::new(IgnoreCase)];
        let a = "Foo".to_string();
        let b = "FOO".to_string();
        let verdicts: Vec<bool> = comparers.iter().map(|c| c.equals(&a, &b)).collect();
        assert_eq!(verdicts, vec![false, true]);
    }
}
