use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Failure reading or writing the high score.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the high score lives between sessions.
pub trait HighScoreStore {
    /// Returns the stored high score, or 0 when none can be read.
    fn load_high_score(&self) -> u32;

    fn store_high_score(&mut self, score: u32) -> Result<(), ScoreError>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load_high_score(&self) -> u32 {
        (**self).load_high_score()
    }

    fn store_high_score(&mut self, score: u32) -> Result<(), ScoreError> {
        (**self).store_high_score(score)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// High score kept in a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for JsonScoreStore {
    fn default() -> Self {
        Self::new(scores_path())
    }
}

impl HighScoreStore for JsonScoreStore {
    fn load_high_score(&self) -> u32 {
        match load_high_score_from_path(&self.path) {
            Ok(score) => score,
            Err(error) => {
                warn!(
                    "ignoring unreadable high score at {}: {error}",
                    self.path.display()
                );
                0
            }
        }
    }

    fn store_high_score(&mut self, score: u32) -> Result<(), ScoreError> {
        save_high_score_to_path(&self.path, score)
    }
}

/// High score that only lives for the current process.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    high_score: u32,
    writes: usize,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            writes: 0,
        }
    }

    /// Number of successful `store_high_score` calls.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HighScoreStore for MemoryScoreStore {
    fn load_high_score(&self) -> u32 {
        self.high_score
    }

    fn store_high_score(&mut self, score: u32) -> Result<(), ScoreError> {
        self.high_score = score;
        self.writes += 1;
        Ok(())
    }
}

/// Returns `Ok(0)` when the file does not exist yet (first run).
fn load_high_score_from_path(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str::<ScoreFile>(&raw)?.high_score)
}

fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    fs::write(path, serde_json::to_string_pretty(&payload)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{
        load_high_score_from_path, HighScoreStore, JsonScoreStore, MemoryScoreStore, ScoreError,
    };

    #[test]
    fn json_store_persists_high_score() {
        let path = unique_test_path("persist");
        let mut store = JsonScoreStore::new(path.clone());

        store.store_high_score(42).expect("score save should succeed");

        assert_eq!(JsonScoreStore::new(path.clone()).load_high_score(), 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_loads_as_zero() {
        let path = unique_test_path("missing");

        assert_eq!(load_high_score_from_path(&path).expect("missing is Ok"), 0);
        assert_eq!(JsonScoreStore::new(path).load_high_score(), 0);
    }

    #[test]
    fn malformed_score_file_loads_as_zero() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(matches!(
            load_high_score_from_path(&path),
            Err(ScoreError::Parse(_))
        ));
        assert_eq!(JsonScoreStore::new(path.clone()).load_high_score(), 0);

        cleanup_test_path(&path);
    }

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemoryScoreStore::with_high_score(30);

        store.store_high_score(50).expect("memory store never fails");

        assert_eq!(store.load_high_score(), 50);
        assert_eq!(store.writes(), 1);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &Path) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
