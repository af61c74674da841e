//! Client for the postcodes.io API.
//!
//! postcodes.io is a free UK postcode lookup service. This crate wraps its
//! REST API with typed request and response structures.
//!
//! Key characteristics of the API:
//! - Every response is wrapped in a `{status, result}` envelope, and the
//!   `status` field in the body is authoritative — a postcode that does not
//!   exist comes back as a decodable envelope with `status: 404`, not as a
//!   client error
//! - Many administrative fields are legitimately `null` for a given postcode
//!   (e.g. no admin county), so the DTOs use `Option` liberally
//! - Bulk lookups accept up to 100 postcodes per call, enforced server-side

mod client;
mod error;
mod types;

pub use client::{Client, ClientConfig};
pub use error::PostcodesError;
pub use types::{
    BulkPostcodeLookupQueryResult, BulkPostcodeLookupRequest, BulkPostcodeLookupResponse, Codes,
    Outcode, Place, Postcode, PostcodeLookupResponse, ReverseGeocodingRequest,
    ReverseGeocodingResponse, ReversePostcode, ScottishCodes, ScottishPostcode,
    TerminatedPostcode,
};
