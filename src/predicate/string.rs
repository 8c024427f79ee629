//! String predicates

use super::combinators::Predicate;

/// Predicate that holds when a string contains at least one non-whitespace character.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl Predicate<str> for NotBlank {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().any(|c| !c.is_whitespace())
    }
}

impl Predicate<String> for NotBlank {
    #[inline]
    fn check(&self, value: &String) -> bool {
        Predicate::<str>::check(self, value.as_str())
    }
}

/// Create a predicate that rejects empty and all-whitespace strings.
///
/// ```rust
/// use itemguard::predicate::*;
///
/// assert!(not_blank().check("Book"));
/// assert!(not_blank().check("  a  "));
/// assert!(!not_blank().check(""));
/// assert!(!not_blank().check(" \t\n"));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Predicate that holds when a string is not empty. Whitespace counts as content.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

impl Predicate<String> for NotEmpty {
    #[inline]
    fn check(&self, value: &String) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that rejects only the empty string.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}
