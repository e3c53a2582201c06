//! # API Shared
//!
//! Wire types shared by the address book server and its clients.
//!
//! Contains:
//! - [`Address`], the candidate / book entry record
//! - The `GET /lookup` query and response envelope ([`LookupParams`], [`LookupRes`])
//! - Shared services like [`HealthService`]
//!
//! Used by `api-rest` for serving and by `addressbook-core` for the HTTP lookup client.

pub mod address;
pub mod health;
pub mod lookup;

pub use address::Address;
pub use health::{HealthRes, HealthService};
pub use lookup::{LookupParams, LookupRes};
