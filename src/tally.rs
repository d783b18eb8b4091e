// 🗳️ Vote Aggregator - Party tally over a prediction string
// Validates syntax first, then re-scans to sum votes for one party

use crate::syntax::is_well_formed;
use std::fmt;

// ============================================================================
// ERROR TAXONOMY
// ============================================================================

/// Why a tally could not be produced.
///
/// Every failure is a normal, expected outcome, not a fatal condition.
/// Exactly one outcome applies per call, checked in priority order:
/// `InvalidParty` before syntax, `InvalidSyntax` before any zero-vote
/// scan. Each variant carries the numeric result code callers see at
/// the integer-code interface (success is 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyError {
    /// Prediction string does not match the record grammar
    InvalidSyntax,
    /// A syntactically valid record claims zero votes
    ZeroVotes,
    /// Queried party is not a letter
    InvalidParty,
}

impl TallyError {
    /// Numeric result code for the integer-code interface
    pub fn code(&self) -> i32 {
        match self {
            TallyError::InvalidSyntax => 1,
            TallyError::ZeroVotes => 2,
            TallyError::InvalidParty => 3,
        }
    }

    /// Short machine-readable label (used in serialized reports)
    pub fn label(&self) -> &'static str {
        match self {
            TallyError::InvalidSyntax => "invalid_syntax",
            TallyError::ZeroVotes => "zero_votes",
            TallyError::InvalidParty => "invalid_party",
        }
    }
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TallyError::InvalidSyntax => "prediction string does not match the record grammar",
            TallyError::ZeroVotes => "a prediction claims zero votes",
            TallyError::InvalidParty => "party must be a single letter",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for TallyError {}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Sum the vote counts of all records whose party matches `party`,
/// case-insensitively on both sides.
///
/// The input is syntax-checked first; aggregation only runs over
/// well-formed strings. A record declaring zero votes aborts the scan
/// with [`TallyError::ZeroVotes`]. The empty string tallies to 0 for
/// any valid party. No total is produced on any failure path.
pub fn compute_votes(input: &str, party: char) -> Result<u32, TallyError> {
    // Party is checked first, regardless of the input string
    if !party.is_ascii_alphabetic() {
        return Err(TallyError::InvalidParty);
    }

    if !is_well_formed(input) {
        return Err(TallyError::InvalidSyntax);
    }

    // Vacuous tally: zero records
    if input.is_empty() {
        return Ok(0);
    }

    let bytes = input.as_bytes();
    let target = (party as u8).to_ascii_uppercase();
    let mut total: u32 = 0;
    let mut pos = 0;

    // Re-walk the records exactly as the validator did. State-code
    // membership is not re-checked; its two characters are consumed
    // positionally.
    while pos < bytes.len() {
        let record_party = bytes[pos].to_ascii_uppercase();
        pos += 1;

        let mut votes = u32::from(bytes[pos] - b'0');
        pos += 1;

        // Greedy second digit, same as the validator
        if pos < bytes.len() && bytes[pos].is_ascii_digit() {
            votes = votes * 10 + u32::from(bytes[pos] - b'0');
            pos += 1;
        }

        // Zero-vote predictions are meaningless to tally
        if votes == 0 {
            return Err(TallyError::ZeroVotes);
        }

        if record_party == target {
            total += votes;
        }

        // Skip state code
        pos += 2;
    }

    Ok(total)
}

/// Integer-code calling convention over [`compute_votes`].
///
/// Writes the total into `out` only on success and returns 0; on any
/// failure `out` is left untouched and the error's result code is
/// returned (1 = invalid syntax, 2 = zero votes, 3 = invalid party).
pub fn compute_votes_into(input: &str, party: char, out: &mut i64) -> i32 {
    match compute_votes(input, party) {
        Ok(total) => {
            *out = i64::from(total);
            0
        }
        Err(err) => err.code(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_tallies_to_zero() {
        assert_eq!(compute_votes("", 'D'), Ok(0));
    }

    #[test]
    fn test_empty_string_still_checks_party() {
        // Party validity comes before everything, including emptiness
        assert_eq!(compute_votes("", '@'), Err(TallyError::InvalidParty));
        assert_eq!(compute_votes("", '0'), Err(TallyError::InvalidParty));
        assert_eq!(compute_votes("", ' '), Err(TallyError::InvalidParty));
    }

    #[test]
    fn test_single_record() {
        assert_eq!(compute_votes("D5CA", 'D'), Ok(5));
        assert_eq!(compute_votes("D15CA", 'D'), Ok(15));
        assert_eq!(compute_votes("D99CA", 'D'), Ok(99));
    }

    #[test]
    fn test_party_match_is_case_insensitive() {
        assert_eq!(compute_votes("d5CA", 'D'), Ok(5)); // record side
        assert_eq!(compute_votes("D5CA", 'd'), Ok(5)); // query side
    }

    #[test]
    fn test_multiple_records_sum() {
        assert_eq!(compute_votes("D5CAD4NY", 'D'), Ok(9));
        assert_eq!(compute_votes("R99TXD99CA", 'D'), Ok(99));
        assert_eq!(compute_votes("R40TXD54CAr6MS", 'D'), Ok(54));
        assert_eq!(compute_votes("R40TXD54CAr6MS", 'R'), Ok(46)); // "R40" + "r6"
    }

    #[test]
    fn test_no_matching_records() {
        assert_eq!(compute_votes("R40TXD54CAr6MS", 'L'), Ok(0));
    }

    #[test]
    fn test_invalid_party() {
        assert_eq!(compute_votes("D5CA", '@'), Err(TallyError::InvalidParty));
        assert_eq!(compute_votes("D5CA", '0'), Err(TallyError::InvalidParty));
        assert_eq!(compute_votes("D5CA", '!'), Err(TallyError::InvalidParty));
        assert_eq!(compute_votes("D5CA", ' '), Err(TallyError::InvalidParty));
        assert_eq!(compute_votes("D5CA", 'é'), Err(TallyError::InvalidParty)); // ASCII only
    }

    #[test]
    fn test_invalid_syntax() {
        assert_eq!(compute_votes("@5CA", 'D'), Err(TallyError::InvalidSyntax));
        assert_eq!(compute_votes("DCA", 'D'), Err(TallyError::InvalidSyntax));
        assert_eq!(compute_votes("D5CAD", 'D'), Err(TallyError::InvalidSyntax));
    }

    #[test]
    fn test_zero_votes_rejected() {
        assert_eq!(compute_votes("D0CA", 'D'), Err(TallyError::ZeroVotes));
        // Even when the zero-vote record belongs to another party
        assert_eq!(compute_votes("D5CAR0NY", 'D'), Err(TallyError::ZeroVotes));
    }

    #[test]
    fn test_error_priority() {
        // Invalid party wins over invalid syntax
        assert_eq!(compute_votes("@5CA", '@'), Err(TallyError::InvalidParty));
        // Invalid syntax wins over zero votes ("CX" is not a state)
        assert_eq!(compute_votes("D0CX", 'D'), Err(TallyError::InvalidSyntax));
    }

    #[test]
    fn test_idempotent() {
        // Pure function, no hidden state
        assert_eq!(compute_votes("R40TXD54CAr6MS", 'R'), Ok(46));
        assert_eq!(compute_votes("R40TXD54CAr6MS", 'R'), Ok(46));
    }

    #[test]
    fn test_result_codes() {
        assert_eq!(TallyError::InvalidSyntax.code(), 1);
        assert_eq!(TallyError::ZeroVotes.code(), 2);
        assert_eq!(TallyError::InvalidParty.code(), 3);
    }

    #[test]
    fn test_into_writes_only_on_success() {
        let mut out: i64 = 666;
        assert_eq!(compute_votes_into("", 'D', &mut out), 0);
        assert_eq!(out, 0);

        let mut out: i64 = -999;
        assert_eq!(compute_votes_into("D5CA", 'D', &mut out), 0);
        assert_eq!(out, 5);
    }

    #[test]
    fn test_into_leaves_out_untouched_on_failure() {
        let mut out: i64 = -999;
        assert_eq!(compute_votes_into("@5CA", 'D', &mut out), 1);
        assert_eq!(out, -999);

        assert_eq!(compute_votes_into("D0CA", 'D', &mut out), 2);
        assert_eq!(out, -999);

        assert_eq!(compute_votes_into("D5CA", '@', &mut out), 3);
        assert_eq!(out, -999);

        assert_eq!(compute_votes_into("", '@', &mut out), 3);
        assert_eq!(out, -999);
    }
}
