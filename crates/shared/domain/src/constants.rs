//! Domain-level constants.
//!
//! These constants define the accepted data-entry formats and defaults.

// =============================================================================
// Birth Dates
// =============================================================================

/// Canonical wire format for birth dates (ISO calendar date)
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp without an offset, as some servers emit for date columns
pub const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Month-first formats accepted at the data-entry boundary
pub const US_BIRTH_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%m-%d-%Y"];

// =============================================================================
// Remote API
// =============================================================================

/// Default users collection endpoint
pub const DEFAULT_USERS_URL: &str = "http://localhost:3000/users";

/// Content type used for request bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";
