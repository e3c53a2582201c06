//! Raw form field values for one session.
//!
//! Fields are stored exactly as typed; validation happens in the workflow, not here.

use std::collections::BTreeMap;

/// A set of named form fields holding raw string values.
///
/// No field is ever absent, only empty: reading an unknown field yields `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    initial: BTreeMap<String, String>,
    values: BTreeMap<String, String>,
}

impl FormFields {
    /// Creates a field set starting from the given initial values.
    pub fn new<I, K, V>(initial: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let initial: BTreeMap<String, String> = initial
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: initial.clone(),
            initial,
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_owned(), value.into());
    }

    /// Restores every field to its initial value and drops fields added since.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_read_as_empty() {
        let fields = FormFields::new([("postCode", "")]);
        assert_eq!(fields.get("postCode"), "");
        assert_eq!(fields.get("nope"), "");
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut fields = FormFields::new([("postCode", "1000"), ("houseNumber", "")]);
        fields.set("postCode", "1234");
        fields.set("houseNumber", "7");
        fields.set("extra", "x");

        fields.reset();

        assert_eq!(fields.get("postCode"), "1000");
        assert_eq!(fields.get("houseNumber"), "");
        assert_eq!(fields.iter().count(), 2);
    }
}
