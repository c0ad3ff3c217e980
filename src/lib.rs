//! Peru RUC/DNI Contact Enrichment Library
//!
//! This library autocompletes business and personal contact data on a
//! CRM/ERP partner record from a Peruvian identity number, using an
//! apiperu.dev-compatible lookup service for RUC and DNI queries.
//!
//! # Modules
//!
//! - `config`: Per-organization API configuration.
//! - `directory`: Read-only geography reference data access.
//! - `enrichment`: The lookup handler and field mapping.
//! - `errors`: Error handling types.
//! - `models`: Contact fields, dispatch table, and wire types.
//! - `services`: Lookup API client.

pub mod config;
pub mod directory;
pub mod enrichment;
pub mod errors;
pub mod models;
pub mod services;

pub use config::ApiPeruConfig;
pub use directory::{InMemoryDirectory, ReferenceDirectory};
pub use enrichment::{capitalize, enrich_from_identification, EnrichmentOutcome};
pub use errors::LookupError;
pub use models::{
    AddressRecord, DistrictId, DniRecord, IdentificationType, LookupEnvelope, LookupKind, Partner,
    RucRecord, StateId, COUNTRY_CODE_PERU,
};
pub use services::ApiPeruService;
