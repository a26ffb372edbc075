//! Application constants for college data processing
//!
//! Domain bounds for record validation, default analysis settings and
//! output file names used throughout the crate.

// =============================================================================
// Record Fields
// =============================================================================

/// Fields every college record must carry
pub const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "acceptance_rate",
    "tuition",
    "sat_average",
    "enrollment",
    "demographics",
    "location",
];

/// Field names as they appear in the source JSON
pub mod fields {
    pub const NAME: &str = "name";
    pub const ACCEPTANCE_RATE: &str = "acceptance_rate";
    pub const TUITION: &str = "tuition";
    pub const SAT_AVERAGE: &str = "sat_average";
    pub const ENROLLMENT: &str = "enrollment";
    pub const DEMOGRAPHICS: &str = "demographics";
    pub const LOCATION: &str = "location";
    pub const STATE: &str = "state";
    pub const REGION: &str = "region";
}

// =============================================================================
// Validation Bounds
// =============================================================================

/// Acceptance rate is a percentage
pub const ACCEPTANCE_RATE_MIN: f64 = 0.0;
pub const ACCEPTANCE_RATE_MAX: f64 = 100.0;

/// SAT composite score range
pub const SAT_MIN: f64 = 400.0;
pub const SAT_MAX: f64 = 1600.0;

/// Demographic category percentage range
pub const DEMOGRAPHIC_PERCENT_MIN: f64 = 0.0;
pub const DEMOGRAPHIC_PERCENT_MAX: f64 = 100.0;

/// Demographic percentages are expected to add up to this total
pub const DEMOGRAPHICS_EXPECTED_TOTAL: f64 = 100.0;

/// Allowed deviation from the expected total before a warning is raised (rounding)
pub const DEFAULT_DEMOGRAPHICS_TOLERANCE: f64 = 1.0;

/// Tuition above this value is flagged as a warning
pub const DEFAULT_TUITION_WARNING_THRESHOLD: f64 = 80_000.0;

// =============================================================================
// Analysis Defaults
// =============================================================================

/// Default number of histogram bins for distribution reporting
pub const DEFAULT_BIN_COUNT: usize = 8;

/// Number of colleges shown in the acceptance rate chart
pub const DEFAULT_TOP_ACCEPTANCE_COUNT: usize = 15;

// =============================================================================
// Output
// =============================================================================

/// File name of the dashboard payload
pub const DASHBOARD_FILE_NAME: &str = "dashboard_data.json";

/// Base file name of the processed (cleaned, flattened) dataset
pub const PROCESSED_FILE_STEM: &str = "processed_college_data";

/// Suffix appended to demographic category columns in flattened output
pub const DEMOGRAPHIC_COLUMN_SUFFIX: &str = "_percent";

/// Directory and file name of the user configuration
pub const CONFIG_DIR_NAME: &str = "college-insights";
pub const CONFIG_FILE_NAME: &str = "config.json";
