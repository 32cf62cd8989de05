//! Text analysis module
//!
//! The pure counting core: classifies letters as vowels or consonants and
//! tallies occurrences. No I/O and no state, safe to call from any number
//! of concurrent requests.

mod charset;
mod count;

// Re-export public types
pub use charset::AnalysisMode;
pub use count::{analyze, CountResult};
