// Letter counting module
// Scans a text and tallies letters belonging to the requested mode

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::charset::AnalysisMode;

/// Ordered letter → count mapping produced by one analysis
///
/// Iteration (and JSON key) order is the order in which each letter first
/// occurred in the scanned text. Counts are always positive; a letter that
/// never occurred has no entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CountResult {
    entries: Vec<(char, u32)>,
}

impl CountResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Count for a letter, or `None` if it never occurred
    pub fn get(&self, letter: char) -> Option<u32> {
        self.entries
            .iter()
            .find(|(ch, _)| *ch == letter)
            .map(|(_, count)| *count)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| u64::from(*count)).sum()
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.entries.iter().copied()
    }

    fn increment(&mut self, letter: char) {
        match self.entries.iter_mut().find(|(ch, _)| *ch == letter) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((letter, 1)),
        }
    }
}

// Serialized as a JSON object with single-letter string keys, preserving
// first-occurrence order. A plain HashMap would lose the ordering contract.
impl Serialize for CountResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        let mut buf = [0_u8; 4];
        for &(letter, count) in &self.entries {
            map.serialize_entry(letter.encode_utf8(&mut buf), &count)?;
        }
        map.end()
    }
}

/// Count occurrences of the mode's letters in `text`, case-insensitively.
///
/// The text is uppercased and scanned left to right; non-alphabetic
/// characters are skipped, and letters outside the mode's character set are
/// ignored. Empty or all-whitespace input yields an empty result.
pub fn analyze(text: &str, mode: AnalysisMode) -> CountResult {
    let mut result = CountResult::default();
    if text.trim().is_empty() {
        return result;
    }

    for ch in text.to_uppercase().chars() {
        if ch.is_alphabetic() && mode.contains(ch) {
            result.increment(ch);
        }
    }
    result
}
