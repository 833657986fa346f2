//! Naming conventions derived from a single entity name
//!
//! Every identifier the scaffold emits comes from [`NameForms`]:
//!
//! | Form | `Post` | `Category` | Used for |
//! |---|---|---|---|
//! | `ClassName` | `Post` | `Category` | classes, file names, view directory |
//! | `PluralLower` | `posts` | `categories` | table name, migration file name |
//! | `RouteSegment` | `Post` | `Category` | resource route registration |
//!
//! The route segment is intentionally the raw entity name while the table
//! name is plural, matching the routes generated by earlier versions of the
//! tool.

use crate::error::{Result, ScaffoldError};
use inflector::Inflector;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Irregular nouns the inflector gets wrong, keyed by lowercase singular.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
];

/// Nouns whose plural is the singular.
const UNCOUNTABLE: &[&str] = &["fish", "sheep", "deer", "moose", "series", "species"];

/// Words ending in `man` that pluralize regularly.
const REGULAR_MAN_SUFFIXES: &[&str] = &["human", "german", "talisman", "caiman", "shaman"];

/// Validated, user-supplied entity name (e.g. `Post`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName(String);

impl EntityName {
    /// Parse an entity name
    ///
    /// Surrounding whitespace is trimmed. Casing is not enforced; a name that
    /// does not start with an uppercase letter is accepted with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::EmptyName`] if the name is empty or whitespace-only.
    pub fn parse(input: &str) -> Result<Self> {
        let name = input.trim();
        if name.is_empty() {
            return Err(ScaffoldError::EmptyName);
        }

        if !name.chars().next().is_some_and(char::is_uppercase) {
            tracing::warn!(name, "entity name is not capitalized; generated class names will match it verbatim");
        }

        Ok(Self(name.to_string()))
    }

    /// The name as given
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every naming variant used by templates and paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NameForms {
    /// Class name, identical to the entity name
    pub class_name: String,
    /// Lowercased English plural, used for the table name
    pub plural_lower: String,
    /// Segment registered as the resource route
    pub route_segment: String,
}

impl NameForms {
    /// Derive all forms from an entity name
    #[must_use]
    pub fn derive(entity: &EntityName) -> Self {
        let name = entity.as_str();
        Self {
            class_name: name.to_string(),
            plural_lower: plural_lower(name),
            route_segment: name.to_string(),
        }
    }

    /// Placeholder mapping for template rendering
    ///
    /// Keys are the placeholder names without braces (`ClassName`, ...).
    #[must_use]
    pub fn context(&self) -> BTreeMap<&'static str, &str> {
        BTreeMap::from([
            ("ClassName", self.class_name.as_str()),
            ("PluralLower", self.plural_lower.as_str()),
            ("RouteSegment", self.route_segment.as_str()),
        ])
    }
}

/// Pluralize and lowercase a name
///
/// Irregular and uncountable nouns are matched on the last word of a
/// compound name, so `SalesPerson` becomes `salespeople`. Any word ending in
/// `man` takes `men` (`Chairman` becomes `chairmen`) except a few regular
/// ones such as `human`.
///
/// # Examples
///
/// ```
/// # use crudgen::naming::plural_lower;
/// assert_eq!(plural_lower("Post"), "posts");
/// assert_eq!(plural_lower("Category"), "categories");
/// assert_eq!(plural_lower("Box"), "boxes");
/// ```
#[must_use]
pub fn plural_lower(name: &str) -> String {
    let lower = name.to_lowercase();
    let snake = name.to_snake_case();
    let last_word = snake.rsplit('_').next().unwrap_or(&snake);

    if UNCOUNTABLE.iter().any(|word| *word == last_word) {
        return lower;
    }

    if let Some((singular, plural)) = IRREGULAR_PLURALS
        .iter()
        .find(|(singular, _)| *singular == last_word)
    {
        if let Some(prefix) = lower.strip_suffix(singular) {
            return format!("{prefix}{plural}");
        }
    }

    if !REGULAR_MAN_SUFFIXES.iter().any(|word| lower.ends_with(word)) {
        if let Some(stem) = lower.strip_suffix("man") {
            return format!("{stem}men");
        }
    }

    lower.as_str().to_plural()
}
