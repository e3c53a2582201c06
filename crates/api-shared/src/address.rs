use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A postal address as returned by a lookup, or as saved in an address book.
///
/// `house_number` is attached client-side after the lookup and is not part of the
/// lookup identity. `first_name` / `last_name` are only present once the candidate has
/// been merged into a book entry.
///
/// Two addresses are duplicate *candidates* when their city and street match, and
/// duplicate *book entries* when their `id` matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub street: String,
    pub city: String,
    pub postcode: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub house_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Address {
    /// The (city, street) pair used to collapse duplicate candidates.
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.city, &self.street)
    }

    pub fn with_house_number(mut self, house_number: &str) -> Self {
        self.house_number = house_number.to_owned();
        self
    }

    /// Merges personal details into this candidate, producing a book entry.
    pub fn with_personal_info(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = Some(first_name.to_owned());
        self.last_name = Some(last_name.to_owned());
        self
    }
}
