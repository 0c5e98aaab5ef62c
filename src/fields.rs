//! Field updates derived from command-line flags.
//!
//! Flags are identified by their underscore form (`zkc_impl`); the deployment file stores
//! the hyphenated form (`zkc-impl`). Values are trimmed once, when the update is built, and
//! only abbreviated when shown to the user.

use std::borrow::Cow;

/// Values longer than this many characters are abbreviated in reports.
pub const DISPLAY_LIMIT: usize = 50;

/// Characters kept from each end of an abbreviated value.
pub const DISPLAY_EDGE: usize = 10;

/// Convert a flag identifier to the key used in the deployment file.
pub fn toml_field_name(flag: &str) -> String {
    flag.replace('_', "-")
}

/// Shorten long values (addresses, API keys) to `first10...last10` for display.
pub fn abbreviate(value: &str) -> Cow<'_, str> {
    let len = value.chars().count();
    if len <= DISPLAY_LIMIT {
        return Cow::Borrowed(value);
    }

    let head: String = value.chars().take(DISPLAY_EDGE).collect();
    let tail: String = value.chars().skip(len - DISPLAY_EDGE).collect();
    Cow::Owned(format!("{}...{}", head, tail))
}

/// A single field assignment: on-disk field name and trimmed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: String,
    pub value: String,
}

impl FieldUpdate {
    pub fn new(flag: &str, raw_value: &str) -> Self {
        Self {
            field: toml_field_name(flag),
            value: raw_value.trim().to_string(),
        }
    }

    pub fn display_value(&self) -> Cow<'_, str> {
        abbreviate(&self.value)
    }
}

/// Ordered set of updates for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdateSet {
    updates: Vec<FieldUpdate>,
}

impl FieldUpdateSet {
    /// Build the set from `(flag, value)` pairs, keeping only supplied flags.
    ///
    /// A supplied flag with an empty value still counts; only `None` is skipped.
    pub fn from_flags<'a, I>(flags: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let updates = flags
            .into_iter()
            .filter_map(|(flag, value)| value.map(|v| FieldUpdate::new(flag, v)))
            .collect();
        Self { updates }
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldUpdate> {
        self.updates.iter()
    }

    pub fn into_vec(self) -> Vec<FieldUpdate> {
        self.updates
    }
}

impl<'a> IntoIterator for &'a FieldUpdateSet {
    type Item = &'a FieldUpdate;
    type IntoIter = std::slice::Iter<'a, FieldUpdate>;

    fn into_iter(self) -> Self::IntoIter {
        self.updates.iter()
    }
}
