use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

/// Medal earned for a level, relative to the authored optimal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    None,
}

impl Medal {
    /// Thresholds: >= 100% of optimal is gold, >= 80% silver, >= 50% bronze
    pub fn for_score(score: i32, optimal_area: Option<i32>) -> Medal {
        let Some(optimal) = optimal_area else {
            return Medal::None;
        };
        if optimal <= 0 {
            return Medal::None;
        }
        let ratio = score as f64 / optimal as f64;
        if ratio >= 1.0 {
            Medal::Gold
        } else if ratio >= 0.8 {
            Medal::Silver
        } else if ratio >= 0.5 {
            Medal::Bronze
        } else {
            Medal::None
        }
    }
}

/// Best enclosed area per level index, persisted as a JSON file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScoreStore {
    best: HashMap<usize, i32>,
}

impl ScoreStore {
    /// Load scores from file; a missing file is an empty store
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(store) => store,
                Err(e) => {
                    eprintln!("Warning: Failed to parse score file {}: {}", path, e);
                    ScoreStore::default()
                }
            },
            Err(_) => ScoreStore::default(),
        }
    }

    pub fn best(&self, level_index: usize) -> i32 {
        self.best.get(&level_index).copied().unwrap_or(0)
    }

    /// Record a score; returns true when it beats the stored best
    pub fn record(&mut self, level_index: usize, area: i32) -> bool {
        if area > self.best(level_index) {
            self.best.insert(level_index, area);
            return true;
        }
        false
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize scores: {}", e))?;

        fs::write(path, json).map_err(|e| format!("Failed to write score file: {}", e))?;

        Ok(())
    }
}
