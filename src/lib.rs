// Poll Tally - Core Library
// Grammar validation and vote aggregation for electoral prediction strings

pub mod states;
pub mod syntax;
pub mod tally;
pub mod report;

// Re-export commonly used items
pub use states::{is_valid_state_code, STATE_CODES};
pub use syntax::is_well_formed;
pub use tally::{compute_votes, compute_votes_into, TallyError};
pub use report::TallyReport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
