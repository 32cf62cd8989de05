// Character set module
// Defines the analysis modes and the fixed set of letters each mode counts

use serde::Serialize;
use std::fmt;

/// Uppercase letters counted by vowel analysis
const VOWELS: &str = "AEIOU";

/// Uppercase letters counted by consonant analysis
const CONSONANTS: &str = "BCDFGHJKLMNPQRSTVWXYZ";

/// Which character category an analysis counts
///
/// Wire names (the `type` query parameter and the `analysisType` JSON
/// field) are the uppercase variant names, matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisMode {
    Vowels,
    Consonants,
}

impl AnalysisMode {
    /// Parse a `type` query parameter value (exact match, case-sensitive)
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "VOWELS" => Some(Self::Vowels),
            "CONSONANTS" => Some(Self::Consonants),
            _ => None,
        }
    }

    /// Wire name of this mode
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vowels => "VOWELS",
            Self::Consonants => "CONSONANTS",
        }
    }

    /// The fixed set of uppercase letters belonging to this mode
    pub const fn charset(self) -> &'static str {
        match self {
            Self::Vowels => VOWELS,
            Self::Consonants => CONSONANTS,
        }
    }

    /// Test whether an (already uppercased) letter belongs to this mode
    pub fn contains(self, letter: char) -> bool {
        self.charset().contains(letter)
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param() {
        assert_eq!(AnalysisMode::from_param("VOWELS"), Some(AnalysisMode::Vowels));
        assert_eq!(
            AnalysisMode::from_param("CONSONANTS"),
            Some(AnalysisMode::Consonants)
        );
        assert_eq!(AnalysisMode::from_param("DIGITS"), None);
        assert_eq!(AnalysisMode::from_param(""), None);
    }

    #[test]
    fn test_from_param_is_case_sensitive() {
        assert_eq!(AnalysisMode::from_param("vowels"), None);
        assert_eq!(AnalysisMode::from_param("Vowels"), None);
        assert_eq!(AnalysisMode::from_param("consonants"), None);
    }

    #[test]
    fn test_charsets_are_disjoint_and_cover_the_alphabet() {
        let vowels = AnalysisMode::Vowels.charset();
        let consonants = AnalysisMode::Consonants.charset();
        assert_eq!(vowels.len() + consonants.len(), 26);
        assert!(vowels.chars().all(|ch| !consonants.contains(ch)));
        for ch in 'A'..='Z' {
            assert!(vowels.contains(ch) || consonants.contains(ch));
        }
    }

    #[test]
    fn test_contains() {
        assert!(AnalysisMode::Vowels.contains('A'));
        assert!(!AnalysisMode::Vowels.contains('B'));
        assert!(AnalysisMode::Consonants.contains('B'));
        assert!(!AnalysisMode::Consonants.contains('E'));
        // Lowercase letters never belong to a set; the analyzer uppercases first
        assert!(!AnalysisMode::Vowels.contains('a'));
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(AnalysisMode::Vowels.to_string(), "VOWELS");
        assert_eq!(AnalysisMode::Consonants.to_string(), "CONSONANTS");
    }
}
