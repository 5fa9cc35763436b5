//! Option name handling.
//!
//! External names arrive in `snake_case`, `camelCase`, or space-separated form
//! and all resolve to the same accessor table entry. The table stores each
//! field under a lookup key, its name's alphanumeric characters lowercased,
//! so `"foo bar"`, `"foo_bar"`, and `"fooBar"` share the key `foobar`.

use std::cmp::Ordering;

/// Compares a stored lookup key against the normalized form of an external
/// name.
///
/// Stored keys are already normalized, so this walks both character streams
/// in lockstep instead of materializing the normalized name.
pub(crate) fn cmp_key(key: &str, name: &str) -> Ordering {
    let mut key = key.chars();
    let mut name = normal_chars(name);
    loop {
        match (key.next(), name.next()) {
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Equal => {},
                not_equal => return not_equal,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn normal_chars(name: &str) -> impl Iterator<Item = char> {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
}

/// Builds the method name an external name resolves to: the prefix followed
/// by the `PascalCase` form of the name.
///
/// Name fragments are split on runs of non-alphanumeric characters; the
/// first letter of each fragment is uppercased and the rest kept as-is, so
/// `"foo bar"`, `"foo_bar"`, and `"fooBar"` all yield `FooBar`.
pub(crate) fn pretty_method(prefix: &str, name: &str) -> String {
    let mut method = String::with_capacity(prefix.len() + name.len());
    method.push_str(prefix);

    let mut boundary = true;
    for c in name.chars() {
        if !c.is_alphanumeric() {
            boundary = true;
        } else if boundary {
            method.extend(c.to_uppercase());
            boundary = false;
        } else {
            method.push(c);
        }
    }

    method
}

/// Builds the lowercase probed method name retained for error messages: the
/// prefix followed by the name with underscores removed, fully lowercased.
///
/// Other separators survive as-is, so `"foo bar"` probes as `setfoo bar`
/// while `"parent_private"` probes as `setparentprivate`.
pub(crate) fn probed_method(prefix: &str, name: &str) -> String {
    let mut method = String::with_capacity(prefix.len() + name.len());
    method.push_str(prefix);

    for c in name.chars() {
        if c != '_' {
            method.extend(c.to_lowercase());
        }
    }

    method
}
