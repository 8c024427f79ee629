//! Message codes and default message rendering
//!
//! A [`ValidationError`] carries a reason code and arguments, not text. This
//! module turns it into text for a presentation layer:
//!
//! 1. [`message_codes`] lists the codes to try, most specific first. A
//!    `range` error on `price` of the `item` object tries `range.item.price`,
//!    `range.price`, `range.i32`, then `range`.
//! 2. A [`MessageSource`] looks the codes up; the first hit is the template.
//! 3. `{0}`, `{1}`, ... in the template are replaced by the error arguments,
//!    with thousands separators.
//!
//! ```
//! use itemguard::message::{MessageCatalog, MessageSource};
//! use itemguard::{validate, Item, Profile};
//!
//! let catalog = MessageCatalog::with_defaults();
//! let errors = validate(&Item::new("Book", 1000, 5), Profile::Create);
//! let error = errors.iter().next().unwrap();
//!
//! assert_eq!(
//!     catalog.render(error, "item"),
//!     "price × quantity must be at least 10,000 (was 5,000)"
//! );
//! ```

use std::collections::HashMap;

use crate::error::{Message, Scope, ValidationError};

/// Codes to try for `error`, most specific first. Empty for literal messages.
///
/// ```
/// use itemguard::message::message_codes;
/// use itemguard::{Field, Reason, RejectedValue, ValidationError};
///
/// let error = ValidationError::field(Field::Quantity, RejectedValue::Missing, Reason::Max, vec![9999]);
/// assert_eq!(
///     message_codes(&error, "item"),
///     ["max.item.quantity", "max.quantity", "max.i32", "max"]
/// );
/// ```
pub fn message_codes(error: &ValidationError, object_name: &str) -> Vec<String> {
    let Message::Code { reason, .. } = &error.message else {
        return Vec::new();
    };
    let code = reason.code();
    match error.scope {
        Scope::Field(field) => vec![
            format!("{code}.{object_name}.{}", field.name()),
            format!("{code}.{}", field.name()),
            format!("{code}.{}", field.type_name()),
            code.to_string(),
        ],
        Scope::Global => vec![format!("{code}.{object_name}"), code.to_string()],
    }
}

/// Lookup of message templates by code.
pub trait MessageSource {
    /// Template for `code`, if known.
    fn lookup(&self, code: &str) -> Option<&str>;

    /// Render `error` for the object named `object_name`.
    ///
    /// Literal messages are returned as is. Coded messages use the first code
    /// from [`message_codes`] this source knows; if none is known the result
    /// is the bare code followed by the arguments.
    fn render(&self, error: &ValidationError, object_name: &str) -> String {
        match &error.message {
            Message::Literal(text) => text.clone(),
            Message::Code { reason, args } => message_codes(error, object_name)
                .iter()
                .find_map(|code| self.lookup(code))
                .map(|template| format_template(template, args))
                .unwrap_or_else(|| {
                    let mut fallback = reason.code().to_string();
                    for arg in args {
                        fallback.push(' ');
                        fallback.push_str(&group_thousands(*arg));
                    }
                    fallback
                }),
        }
    }
}

/// In-memory message templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog with English templates for every reason code.
    pub fn with_defaults() -> Self {
        Self::new()
            .with("required", "This field is required.")
            .with("required.id", "An item id is required when updating.")
            .with("forbidden", "This field must not be supplied.")
            .with("forbidden.id", "An id must not be supplied when creating an item.")
            .with("range", "Must be between {0} and {1}.")
            .with("max", "Must be at most {0}.")
            .with("totalPriceMin", "price × quantity must be at least {0} (was {1})")
    }

    /// Add or replace the template for `code`.
    pub fn with(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(code, template);
        self
    }

    /// Add or replace the template for `code` in place.
    pub fn insert(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(code.into(), template.into());
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl MessageSource for MessageCatalog {
    fn lookup(&self, code: &str) -> Option<&str> {
        self.templates.get(code).map(String::as_str)
    }
}

/// Replace `{n}` placeholders with `args[n]`. Unknown placeholders stay as written.
pub fn format_template(template: &str, args: &[i64]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((group_thousands(*arg), close))
        });
        match substituted {
            Some((text, close)) => {
                out.push_str(&text);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Format `n` with `,` between groups of three digits.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Reason, RejectedValue};
    use crate::item::Field;

    fn price_error() -> ValidationError {
        ValidationError::field(
            Field::Price,
            RejectedValue::Integer(500),
            Reason::Range,
            vec![1000, 1_000_000],
        )
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(8500), "8,500");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(-12_345), "-12,345");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_template() {
        assert_eq!(format_template("{0} to {1}", &[1000, 2000]), "1,000 to 2,000");
        assert_eq!(format_template("{2} {x} {", &[1]), "{2} {x} {");
        assert_eq!(format_template("no args", &[]), "no args");
    }

    #[test]
    fn test_global_codes() {
        let error = ValidationError::global(
            RejectedValue::Integer(8500),
            Reason::TotalPriceMin,
            vec![10_000, 8500],
        );
        assert_eq!(message_codes(&error, "item"), ["totalPriceMin.item", "totalPriceMin"]);
    }

    #[test]
    fn test_literal_has_no_codes() {
        let error = ValidationError::literal(Scope::Global, RejectedValue::Missing, "fix it");
        assert!(message_codes(&error, "item").is_empty());
        assert_eq!(MessageCatalog::with_defaults().render(&error, "item"), "fix it");
    }

    #[test]
    fn test_most_specific_code_wins() {
        let catalog = MessageCatalog::with_defaults()
            .with("range.item.price", "Price must be {0} to {1} won.");
        assert_eq!(
            catalog.render(&price_error(), "item"),
            "Price must be 1,000 to 1,000,000 won."
        );
        assert_eq!(
            MessageCatalog::with_defaults().render(&price_error(), "item"),
            "Must be between 1,000 and 1,000,000."
        );
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(MessageCatalog::new().render(&price_error(), "item"), "range 1,000 1,000,000");
    }

    #[test]
    fn test_id_specific_defaults() {
        let required = ValidationError::field(Field::Id, RejectedValue::Missing, Reason::Required, vec![]);
        assert_eq!(
            MessageCatalog::with_defaults().render(&required, "item"),
            "An item id is required when updating."
        );
    }
}
