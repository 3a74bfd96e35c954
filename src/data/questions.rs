//! Quiz content
//!
//! Each cave depth has a fixed question about rock layers; anything without
//! one falls back to a random general science question.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
    /// Diagram shown alongside the question, if any
    #[serde(default)]
    pub image: Option<String>,
}

impl Question {
    fn new(prompt: &str, options: &[&str], answer: &str, image: Option<&str>) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
            image: image.map(str::to_string),
        }
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        self.options.get(choice).is_some_and(|o| *o == self.answer)
    }
}

/// All quiz questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub science: Vec<Question>,
    /// Keyed by cave depth
    pub caves: BTreeMap<u8, Question>,
}

impl QuestionBank {
    /// The question a crystal asks at `depth`
    pub fn for_depth(&self, depth: u8, rng: &mut StdRng) -> Option<&Question> {
        self.caves.get(&depth).or_else(|| self.science.choose(rng))
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        default_question_bank()
    }
}

pub fn default_question_bank() -> QuestionBank {
    let science = vec![
        Question::new("What does a plant need to grow?", &["Sunlight", "Candy", "Toys"], "Sunlight", None),
        Question::new("Which one is hot?", &["Ice cube", "Sun", "Snow"], "Sun", None),
        Question::new("What do we breathe?", &["Water", "Air", "Sand"], "Air", None),
        Question::new(
            "Where do fish live?",
            &["In a tree", "In the water", "In the sky"],
            "In the water",
            None,
        ),
        Question::new("How many legs does a spider have?", &["Two", "Four", "Eight"], "Eight", None),
        Question::new("What color is the sky on a sunny day?", &["Green", "Blue", "Purple"], "Blue", None),
        Question::new("What freezes into ice?", &["Water", "Milk", "Juice"], "Water", None),
        Question::new("What do bees make?", &["Honey", "Jam", "Butter"], "Honey", None),
    ];

    let mut caves = BTreeMap::new();
    caves.insert(
        1,
        Question::new(
            "Which layer is the oldest? A, B, F, or D.",
            &["A", "B", "F", "D"],
            "A",
            Some("https://lh3.googleusercontent.com/d/1W7jbLT8cZ-loqAKRsJOPAz-YaC8VpAFh"),
        ),
    );
    caves.insert(
        2,
        Question::new(
            "Rock layer X at location B is most likely the same relative as which rock layer at location A?",
            &["1", "2", "3", "4"],
            "3",
            Some("https://lh3.googleusercontent.com/d/1Xmsz3vj_s7f7pnAAgZPd8evSW4a74CLt"),
        ),
    );
    caves.insert(
        3,
        Question::new(
            "The Law of Superposition is most commonly applied to which type of rock?",
            &["Igneous", "Metamorphic", "Sedimentary", "Volcanic"],
            "Sedimentary",
            None,
        ),
    );
    caves.insert(
        4,
        Question::new(
            "What is the 3rd oldest thing that happened?",
            &["Layer R", "Layer E", "The Lava", "The Earthquake"],
            "The Earthquake",
            Some("https://lh3.googleusercontent.com/d/1jvhwZ75c9Iq7bKZ5NoiX5FUOONet2o_d"),
        ),
    );
    caves.insert(
        5,
        Question::new(
            "Which of these fossils is the Index Fossil?",
            &["Ammonite", "Brachiopod", "Trilobite", "Crinoid Stem"],
            "Ammonite",
            Some("https://lh3.googleusercontent.com/d/1tWMKVDHXNpCflkVvwYNNKUbqQkY2OhM8"),
        ),
    );
    caves.insert(
        6,
        Question::new(
            "Which of these is the Index Fossil?",
            &["A", "B", "C", "D"],
            "B",
            Some("https://lh3.googleusercontent.com/d/1wN2KerNTMZfjosk7z0rI4IudHfSXRcUb"),
        ),
    );
    caves.insert(
        7,
        Question::new(
            "According to the Law of Superposition, where would you find the oldest rock layer in an undisturbed sequence of sedimentary rocks?",
            &[
                "In the middle of the sequence",
                "The age cannot be determined by position",
                "At the very bottom",
                "At the very top",
            ],
            "At the very bottom",
            None,
        ),
    );
    caves.insert(
        8,
        Question::new(
            "Relative dating using superposition provides:",
            &[
                "The exact age of a rock in years",
                "The temperature at which the rock formed",
                "The order of events without providing specific dates",
                "The chemical composition of the rock",
            ],
            "The order of events without providing specific dates",
            None,
        ),
    );
    caves.insert(
        9,
        Question::new(
            "If an igneous intrusion cuts through several sedimentary layers, is the intrusion older or younger than the layers it cuts through?",
            &["It depends on the type of magma", "The same age", "Older", "Younger"],
            "Younger",
            None,
        ),
    );
    caves.insert(
        10,
        Question::new(
            "What is \"D\"?",
            &["The oldest Layer", "An Intrusion", "An Earthquake", "The Youngest Layer"],
            "An Intrusion",
            Some("https://lh3.googleusercontent.com/d/1yXVGsXRhdwF2GOahvBqjePsqtWFNikjU"),
        ),
    );

    QuestionBank { science, caves }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_every_answer_is_an_option() {
        let bank = default_question_bank();
        for q in bank.science.iter().chain(bank.caves.values()) {
            assert!(q.options.contains(&q.answer), "{}", q.prompt);
        }
        assert_eq!(bank.caves.len(), 10);
    }

    #[test]
    fn test_depth_lookup() {
        let bank = default_question_bank();
        let mut rng = StdRng::seed_from_u64(5);
        let q = bank.for_depth(3, &mut rng).unwrap();
        assert_eq!(q.answer, "Sedimentary");
        assert!(q.is_correct(2));
        assert!(!q.is_correct(0));
        assert!(!q.is_correct(9));

        let fallback = bank.for_depth(0, &mut rng).unwrap();
        assert!(bank.science.contains(fallback));
    }
}
