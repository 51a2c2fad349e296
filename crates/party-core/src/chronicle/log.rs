//! Chronicle storage and export.

use serde::{Deserialize, Serialize};

use super::entry::{ChronicleEntry, Narration};

/// A chronological record of everything narrated at a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chronicle {
    entries: Vec<ChronicleEntry>,
}

impl Chronicle {
    /// Create an empty chronicle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: ChronicleEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[ChronicleEntry] {
        &self.entries
    }

    /// Iterate over the narrations without their timestamps.
    pub fn narrations(&self) -> impl Iterator<Item = &Narration> {
        self.entries.iter().map(|e| &e.narration)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been narrated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry rendered as its console line.
    pub fn lines(&self) -> Vec<String> {
        self.narrations().map(ToString::to_string).collect()
    }

    /// The whole chronicle as console text, one line per entry.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// The whole chronicle as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(name: &str, result: i32) -> ChronicleEntry {
        ChronicleEntry::now(Narration::Roll {
            name: name.to_string(),
            result,
        })
    }

    #[test]
    fn append_and_read() {
        let mut chronicle = Chronicle::new();
        assert!(chronicle.is_empty());
        chronicle.append(roll("Robin", 4));
        chronicle.append(roll("Leo", 19));
        assert_eq!(chronicle.len(), 2);
        assert_eq!(chronicle.lines(), vec!["Robin rolled a 4.", "Leo rolled a 19."]);
    }

    #[test]
    fn export_text_ends_each_line() {
        let mut chronicle = Chronicle::new();
        chronicle.append(roll("Robin", 4));
        chronicle.append(roll("Leo", 19));
        assert_eq!(chronicle.export_text(), "Robin rolled a 4.\nLeo rolled a 19.\n");
    }

    #[test]
    fn export_json_round_trips() {
        let mut chronicle = Chronicle::new();
        chronicle.append(roll("Robin", 4));
        let json = chronicle.export_json().unwrap();
        assert!(json.contains("\"Roll\""));
        let back: Chronicle = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lines(), chronicle.lines());
    }
}
