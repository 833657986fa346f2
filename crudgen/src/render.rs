//! Placeholder substitution
//!
//! Templates use `{{Name}}` placeholders. Rendering is a pure function of the
//! template and a key/value mapping; values are inserted unescaped, and a
//! placeholder with no matching key is left in the output untouched.

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").expect("placeholder pattern is valid")
});

/// Substitute every known `{{key}}` in `template`
///
/// # Examples
///
/// ```
/// # use std::collections::BTreeMap;
/// # use crudgen::render::render;
/// let context = BTreeMap::from([("ClassName", "Post")]);
/// assert_eq!(render("{{ClassName}} / {{Unknown}}", &context), "Post / {{Unknown}}");
/// ```
#[must_use]
pub fn render(template: &str, context: &BTreeMap<&str, &str>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            context
                .get(&caps[1])
                .map_or_else(|| caps[0].to_string(), |value| (*value).to_string())
        })
        .into_owned()
}
