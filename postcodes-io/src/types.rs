//! postcodes.io API request and response DTOs.
//!
//! Response types map directly to the JSON payloads. They use `Option`
//! liberally because the API sends `null` for fields that do not apply to a
//! given postcode, and omits most fields entirely when a bulk lookup is
//! filtered. Every envelope carries the API's own `status` alongside the
//! result.

use serde::{Deserialize, Serialize};

/// A postcode record from the Ordnance Survey Postcode Directory, as
/// returned by the `/postcodes` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Postcode {
    /// Normalized postcode ("NW1 6XE").
    pub postcode: String,

    /// Outward code: area and district ("NW1").
    pub outcode: String,

    /// Inward code: sector and unit ("6XE").
    pub incode: String,

    /// Positional quality indicator, 1 (best) to 9.
    pub quality: i32,

    /// OS grid reference easting.
    pub eastings: Option<i32>,

    /// OS grid reference northing.
    pub northings: Option<i32>,

    /// Country of the UK ("England", "Scotland", ...).
    pub country: String,

    /// NHS health authority area.
    pub nhs_ha: Option<String>,

    /// Administrative county name. `null` for most of the UK, which has no
    /// county tier.
    pub admin_county: Option<String>,

    /// Administrative district or unitary authority name.
    pub admin_district: Option<String>,

    /// Electoral ward name.
    pub admin_ward: Option<String>,

    /// WGS84 longitude.
    pub longitude: Option<f64>,

    /// WGS84 latitude.
    pub latitude: Option<f64>,

    /// Westminster parliamentary constituency.
    pub parliamentary_constituency: Option<String>,

    /// Primary care trust area.
    pub primary_care_trust: Option<String>,

    /// Region (former government office region).
    pub region: Option<String>,

    /// Civil parish, or "unparished area".
    pub parish: Option<String>,

    /// Lower layer super output area.
    pub lsoa: Option<String>,

    /// Middle layer super output area.
    pub msoa: Option<String>,

    /// County electoral division.
    pub ced: Option<String>,

    /// Clinical commissioning group.
    pub ccg: Option<String>,

    /// NUTS / international territorial level area.
    pub nuts: Option<String>,

    /// GSS codes for the areas named above.
    pub codes: Codes,
}

/// Official ONS/GSS identifiers for the areas a postcode belongs to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Codes {
    pub admin_county: Option<String>,
    pub admin_district: Option<String>,
    pub admin_ward: Option<String>,
    pub parish: Option<String>,
    pub ccg: Option<String>,
    pub ccg_code: Option<String>,
    pub nuts: Option<String>,
    pub lau2: Option<String>,
    pub lsoa: Option<String>,
    pub msoa: Option<String>,
}

/// Response envelope for a single postcode lookup.
///
/// For an unknown postcode the API returns `{"status":404,"error":...}` with
/// no `result` key; that decodes here as `result: None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostcodeLookupResponse {
    pub status: u16,
    #[serde(default)]
    pub result: Option<Postcode>,
}

/// Input for a bulk postcode lookup.
///
/// `postcodes` is required; the API accepts up to 100 per call (not enforced
/// client-side). `filters` optionally restricts which `Postcode` fields the
/// server returns; it travels in the query string, never in the JSON body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkPostcodeLookupRequest {
    pub postcodes: Vec<String>,
    #[serde(skip)]
    pub filters: Vec<String>,
}

/// Response envelope for a bulk postcode lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BulkPostcodeLookupResponse {
    pub status: u16,
    #[serde(default)]
    pub result: Vec<BulkPostcodeLookupQueryResult>,
}

/// One query/result pair from a bulk lookup. `result` is `None` when the
/// queried string matched no postcode (the API sends `null`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BulkPostcodeLookupQueryResult {
    pub query: String,
    pub result: Option<Postcode>,
}

/// Input for reverse geocoding. Longitude and latitude are required.
///
/// `limit`, `radius` and `wide_search` are encoded positively: a zero or
/// `false` value is omitted from the query string entirely and the API's own
/// defaults apply.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReverseGeocodingRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Maximum number of results. Omitted when zero (API default 10, max 100).
    pub limit: u32,
    /// Search radius in metres. Omitted when zero (API default 100, max 2000).
    pub radius: f64,
    /// Relax the radius constraint to a wider fixed search. Omitted when
    /// false.
    pub wide_search: bool,
}

/// Response envelope for reverse geocoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReverseGeocodingResponse {
    pub status: u16,
    #[serde(default)]
    pub result: Vec<ReversePostcode>,
}

/// A postcode near the queried point, with its distance from that point in
/// metres.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReversePostcode {
    #[serde(flatten)]
    pub postcode: Postcode,
    pub distance: f64,
}

/// An outcode record, as returned by the `/outcodes` endpoints. Aggregates
/// over all postcodes in the district, so the administrative fields are
/// lists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Outcode {
    pub outcode: String,
    pub eastings: Option<i32>,
    pub northings: Option<i32>,
    pub admin_county: Vec<String>,
    pub admin_district: Vec<String>,
    pub admin_ward: Vec<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub country: Vec<String>,
    pub parish: Vec<String>,
}

/// A Scottish Postcode Directory record, from the `/scotland/*` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScottishPostcode {
    pub postcode: String,
    pub scottish_parliamentary_constituency: String,
    pub codes: ScottishCodes,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScottishCodes {
    pub scottish_parliamentary_constituency: Option<String>,
}

/// A terminated postcode record, from the `/terminated_postcodes` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminatedPostcode {
    pub postcode: String,
    pub year_terminated: i32,
    pub month_terminated: i32,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

/// An Ordnance Survey Open Names place record, from the `/places` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Place {
    pub code: String,
    pub eastings: Option<i32>,
    pub northings: Option<i32>,
    pub max_eastings: Option<i32>,
    pub min_eastings: Option<i32>,
    pub max_northings: Option<i32>,
    pub min_northings: Option<i32>,
    pub country: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub local_type: String,
    pub outcode: String,
    pub name1: Option<String>,
    pub name1_lang: Option<String>,
    pub name2: Option<String>,
    pub name2_lang: Option<String>,
    pub county_unitary: Option<String>,
    pub county_unitary_type: Option<String>,
    pub district_borough: Option<String>,
    pub district_borough_type: Option<String>,
    pub region: Option<String>,
}
