// 🔍 Syntax Validator - Prediction string grammar check
// Record := PartyLetter Digit Digit? StateLetter StateLetter, no separators

use crate::states::is_valid_state_code;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Check whether `input` decomposes cleanly into zero or more prediction
/// records with no leftover characters.
///
/// Each record is one party letter (any case), one or two vote-count
/// digits, and a two-letter state code (any case, checked against the
/// state table). Records are concatenated with no separators; the empty
/// string is well-formed (zero records).
///
/// Digit consumption is greedy: when two digits are available both are
/// always taken as the vote count, with no backtracking. Classification
/// is ASCII-only so results never depend on locale.
pub fn is_well_formed(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        // Party code (must be a letter)
        if !bytes[pos].is_ascii_alphabetic() {
            return false;
        }
        pos += 1;

        // First vote-count digit is mandatory
        if pos >= bytes.len() || !bytes[pos].is_ascii_digit() {
            return false;
        }
        pos += 1;

        // Greedy second digit: consumed whenever present
        if pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }

        // Exactly two more characters must remain for the state code
        if pos + 1 >= bytes.len() {
            return false;
        }
        if !bytes[pos].is_ascii_alphabetic() || !bytes[pos + 1].is_ascii_alphabetic() {
            return false;
        }

        // Both bytes are ASCII letters, so this slice is valid UTF-8
        let code = input[pos..pos + 2].to_ascii_uppercase();
        if !is_valid_state_code(&code) {
            return false;
        }
        pos += 2;
    }

    true
}

// ============================================================================
// TESTS
// ============================================================================
