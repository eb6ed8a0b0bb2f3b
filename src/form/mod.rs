//! Form state and field accessor.
//!
//! [`FormState`] is a flat, ordered map from field name to the raw text the
//! user typed. Nothing is trimmed or escaped on the way in; the accessor
//! methods do that on every read so the stored state always matches the
//! form exactly.

pub mod escape;
pub mod keys;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

pub use escape::{escape_html, trim_horizontal};
pub use keys::{
    AuthorField, FormatOption, MAX_AUTHORS, MAX_INFORMATIVE_REFS, MAX_KEYWORDS,
    MAX_NORMATIVE_REFS,
};

/// Raw form field values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    fields: IndexMap<String, String>,
}

impl FormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field to the given raw value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the raw stored value, or `""` for an unknown field.
    #[must_use]
    pub fn raw(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    /// Returns the value with leading/trailing spaces and tabs removed.
    #[must_use]
    pub fn read(&self, name: &str) -> &str {
        trim_horizontal(self.raw(name))
    }

    /// Whether the trimmed value is non-empty.
    #[must_use]
    pub fn is_filled(&self, name: &str) -> bool {
        !self.read(name).is_empty()
    }

    /// Returns the escaped, trimmed value for embedding in the document.
    ///
    /// When that is empty and `default` is given, the default is returned
    /// verbatim (it is not escaped).
    #[must_use]
    pub fn read_display(&self, name: &str, default: Option<&str>) -> String {
        let value = escape_html(self.read(name));
        match default {
            Some(def) if value.is_empty() => def.to_string(),
            _ => value,
        }
    }

    /// Like [`read_display`](Self::read_display) but `None` when empty.
    #[must_use]
    pub fn read_optional(&self, name: &str) -> Option<String> {
        let value = self.read_display(name, None);
        (!value.is_empty()).then_some(value)
    }

    /// Number of stored fields (including blank ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, raw value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// A filled-in example draft, handy for trying the generator out.
    #[must_use]
    pub fn sample() -> Self {
        Self::new()
            .with(keys::TITLE, "This is My Great New Protocol")
            .with(keys::CATEGORY, "info")
            .with(keys::FILENAME, "draft-abc-00")
            .with(keys::IPR, "trust200902")
            .with(keys::author(1, AuthorField::Fullname), "Joe Nobody")
            .with(keys::author(1, AuthorField::Initials), "J.")
            .with(keys::author(1, AuthorField::Surname), "Nobody")
            .with(keys::author(1, AuthorField::Email), "abc@example.com")
            .with(keys::ABSTRACT, "abc")
    }
}

/// Text of one form-file value.
///
/// Strings are taken as typed, booleans become `yes`/`no` and null is
/// blank. Numbers are rejected: once parsed, `+15551234567` or `3.0` can
/// no longer be told apart from `15551234567` or `3`, so they must be
/// quoted.
struct FieldText(String);

impl<'de> Deserialize<'de> for FieldText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldTextVisitor)
    }
}

struct FieldTextVisitor;

impl FieldTextVisitor {
    fn unquoted_number<E: de::Error>(number: impl std::fmt::Display) -> E {
        E::custom(format_args!(
            "numeric value {number} must be quoted to keep its exact text"
        ))
    }
}

impl<'de> Visitor<'de> for FieldTextVisitor {
    type Value = FieldText;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a string, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldText, E> {
        Ok(FieldText(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FieldText, E> {
        Ok(FieldText(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FieldText, E> {
        Ok(FieldText(String::from(if v { "yes" } else { "no" })))
    }

    fn visit_unit<E: de::Error>(self) -> Result<FieldText, E> {
        Ok(FieldText(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<FieldText, E> {
        self.visit_unit()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<FieldText, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldText, E> {
        Err(Self::unquoted_number(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldText, E> {
        Err(Self::unquoted_number(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldText, E> {
        Err(Self::unquoted_number(v))
    }
}

struct FormVisitor;

impl<'de> Visitor<'de> for FormVisitor {
    type Value = FormState;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a flat mapping of field name to value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FormState, A::Error> {
        let mut form = FormState::new();
        while let Some(name) = map.next_key::<String>()? {
            let FieldText(value) = map
                .next_value::<FieldText>()
                .map_err(|e| <A::Error as de::Error>::custom(format_args!("field '{name}': {e}")))?;
            form.set(name, value);
        }
        Ok(form)
    }
}

impl<'de> Deserialize<'de> for FormState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FormVisitor)
    }
}
