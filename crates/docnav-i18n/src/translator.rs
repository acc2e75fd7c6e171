//! Message lookup for one locale.

use std::collections::HashMap;

/// Translator bound to a single locale's string table.
///
/// Lookups never fail: an unmapped key translates to itself.
#[derive(Clone, Copy, Debug)]
pub struct Translator<'a> {
    locale: &'a str,
    messages: &'a HashMap<String, String>,
}

impl<'a> Translator<'a> {
    pub(crate) fn new(locale: &'a str, messages: &'a HashMap<String, String>) -> Self {
        Self { locale, messages }
    }

    /// Locale key this translator serves.
    #[must_use]
    pub fn locale(&self) -> &'a str {
        self.locale
    }

    /// Message for `key`, if the table has one.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Message for `key`, or `key` itself when unmapped.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_owned()
    }
}
