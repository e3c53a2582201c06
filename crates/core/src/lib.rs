//! # Address Book Core
//!
//! Core workflow for building a session-local address book from postcode lookups:
//! - Field validation for lookup and personal-info input
//! - Address lookup collaborators (HTTP client and in-process mock data)
//! - Candidate deduplication by (city, street)
//! - Selection state and the id-unique address book
//! - The [`Workflow`] orchestrator tying them together
//!
//! **No server concerns**: HTTP routing and CORS belong in `api-rest`.

pub mod book;
pub mod config;
pub mod constants;
pub mod dedup;
pub mod error;
pub mod form;
pub mod generator;
pub mod lookup;
pub mod state;
pub mod validation;
pub mod workflow;

pub use api_shared::Address;
pub use book::AddressBook;
pub use config::CoreConfig;
pub use dedup::dedup_candidates;
pub use error::{
    ConfigError, ConfigResult, LookupError, LookupResult, ValidationError, WorkflowError,
    WorkflowResult,
};
pub use form::FormFields;
pub use lookup::{AddressLookup, GeneratedLookup, HttpLookupClient};
pub use state::{Phase, WorkflowState};
pub use validation::{FieldRole, PersonalInfo, validate_field, validate_lookup};
pub use workflow::{Workflow, WorkflowSnapshot};
