//! Constants used throughout the address book core crate.

use std::time::Duration;

/// Minimum number of digits in a valid postcode.
pub const MIN_POSTCODE_LEN: usize = 4;

/// Default artificial delay applied by lookup collaborators, so the loading state is observable.
pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(500);

/// Default base URL of the lookup API.
pub const DEFAULT_LOOKUP_URL: &str = "http://127.0.0.1:3000";

/// Path of the lookup endpoint, relative to the API base URL.
pub const LOOKUP_PATH: &str = "/lookup";

/// Form field holding the searched postcode.
pub const FIELD_POSTCODE: &str = "postCode";

/// Form field holding the searched house number.
pub const FIELD_HOUSE_NUMBER: &str = "houseNumber";

/// Form field holding the first name to attach on commit.
pub const FIELD_FIRST_NAME: &str = "firstName";

/// Form field holding the last name to attach on commit.
pub const FIELD_LAST_NAME: &str = "lastName";
