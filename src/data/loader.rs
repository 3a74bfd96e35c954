//! RON data loader
//!
//! Loads dialogue and quiz content from external RON files, with fallback to
//! the built-in defaults.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::dialogue::{default_dialogue, DialogueBook};
use super::questions::{default_question_bank, QuestionBank};

/// All external game content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataManager {
    pub dialogue: DialogueBook,
    pub questions: QuestionBank,
}

impl DataManager {
    /// Load from `base_path`, using defaults for anything missing or broken
    pub fn load(base_path: &Path) -> Self {
        Self {
            dialogue: load_or_default(base_path, "dialogue.ron", default_dialogue),
            questions: load_or_default(base_path, "questions.ron", default_question_bank),
        }
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            dialogue: default_dialogue(),
            questions: default_question_bank(),
        }
    }
}

fn load_or_default<T: DeserializeOwned>(base_path: &Path, file: &str, default: fn() -> T) -> T {
    let path = base_path.join(file);
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(data) => {
                    log::info!("Loaded {}", path.display());
                    return data;
                }
                Err(e) => log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e),
            },
            Err(e) => log::warn!("Failed to read {}: {}. Using defaults.", path.display(), e),
        }
    }
    default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_uses_defaults() {
        let data = DataManager::load(Path::new("definitely/not/a/real/dir"));
        assert_eq!(data, DataManager::default());
    }

    #[test]
    fn test_override_and_broken_file() {
        let dir = std::env::temp_dir().join(format!("stonebound-data-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let mut questions = default_question_bank();
        questions.science.truncate(1);
        fs::write(dir.join("questions.ron"), ron::to_string(&questions).unwrap()).unwrap();
        fs::write(dir.join("dialogue.ron"), "(this is not dialogue").unwrap();

        let data = DataManager::load(&dir);
        assert_eq!(data.questions.science.len(), 1);
        assert_eq!(data.dialogue, default_dialogue());

        fs::remove_dir_all(&dir).unwrap();
    }
}
