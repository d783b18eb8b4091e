// 🗺️ State Code Table - Fixed US state/territory lookup
// 50 states + DC, process-wide constant data

// ============================================================================
// STATE CODES
// ============================================================================

/// All recognized two-letter codes: the 50 states plus DC.
///
/// Stored uppercase. Callers normalize case before lookup; the table
/// itself performs no case folding.
pub const STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA",
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA",
    "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NJ", "NH", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX",
    "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

// ============================================================================
// LOOKUP
// ============================================================================

/// Check whether `code` is a valid uppercase state/territory code.
///
/// Accepts any string: anything that is not exactly two characters, or
/// is not a member of the table, answers `false` rather than erroring.
/// Pure lookup, no side effects.
pub fn is_valid_state_code(code: &str) -> bool {
    code.len() == 2 && STATE_CODES.contains(&code)
}

// ============================================================================
// TESTS
// ============================================================================
