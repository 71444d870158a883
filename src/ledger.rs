//! High score ledger
//!
//! Plain text file, one `<name> <score>` pair per line. The whole file is
//! read at round reset and rewritten at game over.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Player name (never contains whitespace)
    pub name: String,
    /// Pipes passed in the round
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: &str, score: u32) -> Self {
        Self {
            name: sanitize_name(name),
            score,
        }
    }
}

/// Make a name safe for the whitespace-separated format
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if cleaned.is_empty() {
        "anonymous".to_string()
    } else {
        cleaned
    }
}

/// Persisted list of scores, in the order they were recorded
#[derive(Debug, Clone)]
pub struct ScoreLedger {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl ScoreLedger {
    /// Create an empty ledger bound to `path` (nothing is read yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in recording order
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry
    pub fn record(&mut self, name: &str, score: u32) {
        self.entries.push(ScoreEntry::new(name, score));
    }

    /// Best `n` entries, highest first. Ties keep recording order.
    pub fn top(&self, n: usize) -> Vec<ScoreEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(n);
        sorted
    }

    /// Highest recorded score (if any)
    pub fn best(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.score).max()
    }

    /// Replace the in-memory entries with the file contents
    pub fn load(&mut self) -> io::Result<()> {
        let bytes = fs::read(&self.path)?;
        self.entries = parse(&bytes);
        log::info!(
            "Loaded {} high scores from {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Like `load`, but a missing or unreadable file just leaves the ledger empty
    pub fn reload_or_empty(&mut self) {
        if let Err(e) = self.load() {
            if e.kind() == io::ErrorKind::NotFound {
                log::info!("No high scores at {}, starting fresh", self.path.display());
            } else {
                log::warn!(
                    "Failed to read high scores from {}: {}",
                    self.path.display(),
                    e
                );
            }
            self.entries.clear();
        }
    }

    /// Truncate and rewrite the file with every entry
    pub fn save(&self) -> io::Result<()> {
        fs::write(&self.path, format(&self.entries))?;
        log::info!(
            "High scores saved ({} entries) to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Parse ledger bytes, skipping lines that don't hold a name and a score.
/// A line that isn't valid UTF-8 is dropped on its own.
fn parse(bytes: &[u8]) -> Vec<ScoreEntry> {
    let mut entries = Vec::new();
    for (line_no, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let Ok(line) = std::str::from_utf8(raw) else {
            log::warn!(
                "High score line {} is not valid UTF-8: {:?}",
                line_no + 1,
                String::from_utf8_lossy(raw)
            );
            continue;
        };
        let mut fields = line.split_whitespace();
        let (Some(name), Some(score)) = (fields.next(), fields.next()) else {
            if !line.trim().is_empty() {
                log::warn!("High score line {} is incomplete: {:?}", line_no + 1, line);
            }
            continue;
        };
        match score.parse::<u32>() {
            Ok(score) => entries.push(ScoreEntry {
                name: name.to_string(),
                score,
            }),
            Err(_) => log::warn!("High score line {} has a bad score: {:?}", line_no + 1, line),
        }
    }
    entries
}

fn format(entries: &[ScoreEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{} {}", entry.name, entry.score);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");

        let mut ledger = ScoreLedger::new(&path);
        ledger.record("player1", 3);
        ledger.record("player2", 0);
        ledger.record("player1", 12);
        ledger.save().unwrap();

        let mut loaded = ScoreLedger::new(&path);
        loaded.load().unwrap();
        assert_eq!(loaded.entries(), ledger.entries());
    }

    #[test]
    fn test_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");

        let mut ledger = ScoreLedger::new(&path);
        ledger.record("alice", 4);
        ledger.record("bob", 10);
        ledger.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "alice 4\nbob 10\n");
    }

    #[test]
    fn test_load_replaces_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");
        fs::write(&path, "a 1\n").unwrap();

        let mut ledger = ScoreLedger::new(&path);
        ledger.load().unwrap();
        ledger.load().unwrap();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = ScoreLedger::new(dir.path().join("missing.txt"));
        ledger.record("stale", 9);

        assert!(ledger.load().is_err());
        ledger.reload_or_empty();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A directory can't be opened as a file
        let ledger = ScoreLedger::new(dir.path());
        assert!(ledger.save().is_err());
    }

    #[test]
    fn test_bad_utf8_line_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscores.txt");
        fs::write(&path, b"alice 40\nj\xe9r\xf4me 12\r\nbob 35\r\n").unwrap();

        let mut ledger = ScoreLedger::new(&path);
        ledger.reload_or_empty();
        assert_eq!(
            ledger.entries(),
            [ScoreEntry::new("alice", 40), ScoreEntry::new("bob", 35)]
        );

        ledger.record("player1", 1);
        ledger.save().unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "alice 40\nbob 35\nplayer1 1\n"
        );
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let entries = parse(b"good 5\n\nnoscore\nbad -3\nworse x\n  spaced   7  \n");
        assert_eq!(
            entries,
            vec![ScoreEntry::new("good", 5), ScoreEntry::new("spaced", 7)]
        );
    }

    #[test]
    fn test_top_sorts_descending_and_keeps_tie_order() {
        let mut ledger = ScoreLedger::new("unused.txt");
        for (name, score) in [("a", 2), ("b", 9), ("c", 2), ("d", 5), ("e", 0), ("f", 1)] {
            ledger.record(name, score);
        }

        let names: Vec<_> = ledger.top(5).into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["b", "d", "a", "c", "f"]);
        assert_eq!(ledger.best(), Some(9));
        // Display sorting never reorders the ledger itself
        assert_eq!(ledger.entries()[0].name, "a");
    }

    #[test]
    fn test_names_are_sanitized() {
        assert_eq!(ScoreEntry::new("big bird", 1).name, "big_bird");
        assert_eq!(ScoreEntry::new("", 1).name, "anonymous");
    }
}
