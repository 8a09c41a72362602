use game_types::{Category, Difficulty, GameError};
use std::collections::BTreeMap;

const STANDARD_WORDS: &[(Category, Difficulty, &[&str])] = &[
    (
        Category::Animals,
        Difficulty::Easy,
        &["CAT", "DOG", "FISH", "BIRD", "BEAR"],
    ),
    (
        Category::Animals,
        Difficulty::Medium,
        &["ELEPHANT", "GIRAFFE", "PENGUIN", "DOLPHIN", "TIGER"],
    ),
    (
        Category::Animals,
        Difficulty::Hard,
        &["BUTTERFLY", "KANGAROO", "FLAMINGO", "RHINOCEROS", "CHIMPANZEE"],
    ),
    (
        Category::Countries,
        Difficulty::Easy,
        &["USA", "ITALY", "SPAIN", "JAPAN", "CHINA"],
    ),
    (
        Category::Countries,
        Difficulty::Medium,
        &["BRAZIL", "CANADA", "FRANCE", "GERMANY", "MEXICO"],
    ),
    (
        Category::Countries,
        Difficulty::Hard,
        &["AUSTRALIA", "ARGENTINA", "BANGLADESH", "SWITZERLAND", "NETHERLANDS"],
    ),
    (
        Category::Food,
        Difficulty::Easy,
        &["PIZZA", "BREAD", "APPLE", "CAKE", "MILK"],
    ),
    (
        Category::Food,
        Difficulty::Medium,
        &["HAMBURGER", "SANDWICH", "PANCAKE", "COOKIE", "BANANA"],
    ),
    (
        Category::Food,
        Difficulty::Hard,
        &["SPAGHETTI", "CHOCOLATE", "STRAWBERRY", "AVOCADO", "CAPPUCCINO"],
    ),
    (
        Category::Movies,
        Difficulty::Easy,
        &["AVATAR", "FROZEN", "SHREK", "CARS", "UP"],
    ),
    (
        Category::Movies,
        Difficulty::Medium,
        &["TITANIC", "BATMAN", "SUPERMAN", "MARVEL", "DISNEY"],
    ),
    (
        Category::Movies,
        Difficulty::Hard,
        &["INCEPTION", "GLADIATOR", "SPIDERMAN", "INTERSTELLAR", "TRANSFORMERS"],
    ),
    (
        Category::Sports,
        Difficulty::Easy,
        &["SOCCER", "TENNIS", "GOLF", "BOXING", "SWIM"],
    ),
    (
        Category::Sports,
        Difficulty::Medium,
        &["BASKETBALL", "FOOTBALL", "BASEBALL", "HOCKEY", "CYCLING"],
    ),
    (
        Category::Sports,
        Difficulty::Hard,
        &["VOLLEYBALL", "BADMINTON", "WRESTLING", "GYMNASTICS", "SKATEBOARDING"],
    ),
];

/// Candidate words keyed by category and difficulty. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: BTreeMap<Category, BTreeMap<Difficulty, Vec<String>>>,
}

impl WordBank {
    /// The built-in dictionary covering every category and difficulty
    pub fn standard() -> Self {
        let mut words: BTreeMap<Category, BTreeMap<Difficulty, Vec<String>>> = BTreeMap::new();
        for (category, difficulty, list) in STANDARD_WORDS {
            words
                .entry(*category)
                .or_default()
                .insert(*difficulty, list.iter().map(|w| w.to_string()).collect());
        }
        Self { words }
    }

    /// Build a bank from explicit lists. Words are upper-cased; every list must be
    /// non-empty and every word made of A-Z only.
    pub fn from_lists<I, W>(lists: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (Category, Difficulty, Vec<W>)>,
        W: AsRef<str>,
    {
        let mut words: BTreeMap<Category, BTreeMap<Difficulty, Vec<String>>> = BTreeMap::new();
        for (category, difficulty, list) in lists {
            let normalized = list
                .iter()
                .map(|w| normalize_word(w.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            if normalized.is_empty() {
                return Err(GameError::EmptyWordList {
                    category,
                    difficulty,
                });
            }
            words
                .entry(category)
                .or_default()
                .entry(difficulty)
                .or_default()
                .extend(normalized);
        }
        Ok(Self { words })
    }

    /// Parse a word list where each line reads `<Category> <Difficulty> WORD WORD ...`.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_word_list(text: &str) -> Result<Self, GameError> {
        let mut lists = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(category), Some(difficulty)) = (fields.next(), fields.next()) else {
                return Err(GameError::MalformedWordList {
                    line: line_no,
                    reason: "expected a category and a difficulty".to_string(),
                });
            };
            let category = category.parse::<Category>().map_err(|e| malformed(line_no, e))?;
            let difficulty = difficulty
                .parse::<Difficulty>()
                .map_err(|e| malformed(line_no, e))?;

            let words: Vec<&str> = fields.collect();
            if words.is_empty() {
                return Err(GameError::EmptyWordList {
                    category,
                    difficulty,
                });
            }
            lists.push((category, difficulty, words));
        }

        Self::from_lists(lists)
    }

    /// Candidate words for a selection. An unknown pair is a configuration error.
    pub fn words_for(
        &self,
        category: Category,
        difficulty: Difficulty,
    ) -> Result<&[String], GameError> {
        self.words
            .get(&category)
            .and_then(|by_difficulty| by_difficulty.get(&difficulty))
            .map(Vec::as_slice)
            .ok_or(GameError::UnknownSelection {
                category,
                difficulty,
            })
    }

    pub fn contains(&self, category: Category, difficulty: Difficulty) -> bool {
        self.words_for(category, difficulty).is_ok()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.words.keys().copied()
    }

    pub fn difficulties(&self, category: Category) -> impl Iterator<Item = Difficulty> + '_ {
        self.words
            .get(&category)
            .into_iter()
            .flat_map(|by_difficulty| by_difficulty.keys().copied())
    }

    /// Total number of words across all lists
    pub fn len(&self) -> usize {
        self.words
            .values()
            .flat_map(|by_difficulty| by_difficulty.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::standard()
    }
}

/// Check if word contains only the letters A-Z once upper-cased
pub fn is_playable_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn normalize_word(word: &str) -> Result<String, GameError> {
    let word = word.trim();
    if !is_playable_word(word) {
        return Err(GameError::InvalidWord {
            word: word.to_string(),
        });
    }
    Ok(word.to_ascii_uppercase())
}

fn malformed(line: usize, err: GameError) -> GameError {
    GameError::MalformedWordList {
        line,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bank_covers_every_selection() {
        let bank = WordBank::standard();

        for category in Category::ALL {
            for difficulty in Difficulty::ALL {
                let words = bank.words_for(category, difficulty).unwrap();
                assert!(!words.is_empty(), "{category}/{difficulty} is empty");
                for word in words {
                    assert!(
                        word.chars().all(|c| c.is_ascii_uppercase()),
                        "{word} is not uppercase A-Z"
                    );
                }
            }
        }
        assert_eq!(bank.len(), 75);
    }

    #[test]
    fn test_standard_word_order_is_preserved() {
        let bank = WordBank::standard();
        let words = bank.words_for(Category::Movies, Difficulty::Easy).unwrap();
        assert_eq!(words, ["AVATAR", "FROZEN", "SHREK", "CARS", "UP"]);
    }

    #[test]
    fn test_unknown_selection() {
        let bank =
            WordBank::from_lists([(Category::Food, Difficulty::Easy, vec!["cake"])]).unwrap();

        assert_eq!(bank.words_for(Category::Food, Difficulty::Easy).unwrap(), ["CAKE"]);
        assert!(!bank.contains(Category::Food, Difficulty::Hard));
        assert_eq!(
            bank.words_for(Category::Sports, Difficulty::Easy),
            Err(GameError::UnknownSelection {
                category: Category::Sports,
                difficulty: Difficulty::Easy,
            })
        );
    }

    #[test]
    fn test_from_lists_rejects_bad_input() {
        let result = WordBank::from_lists([(Category::Food, Difficulty::Easy, vec!["ice cream"])]);
        assert!(matches!(result, Err(GameError::InvalidWord { .. })));

        let result = WordBank::from_lists([(Category::Food, Difficulty::Easy, Vec::<&str>::new())]);
        assert!(matches!(result, Err(GameError::EmptyWordList { .. })));
    }

    #[test]
    fn test_from_word_list() {
        let text =
            "# custom words\n\nanimals easy cat owl\n  Food Hard  Lasagna \nAnimals Easy ant\n";
        let bank = WordBank::from_word_list(text).unwrap();

        assert_eq!(
            bank.words_for(Category::Animals, Difficulty::Easy).unwrap(),
            ["CAT", "OWL", "ANT"]
        );
        assert_eq!(bank.words_for(Category::Food, Difficulty::Hard).unwrap(), ["LASAGNA"]);
        assert_eq!(bank.categories().collect::<Vec<_>>(), [Category::Animals, Category::Food]);
        assert_eq!(bank.difficulties(Category::Food).collect::<Vec<_>>(), [Difficulty::Hard]);
        assert_eq!(bank.len(), 4);
    }

    #[test]
    fn test_from_word_list_errors() {
        let err = WordBank::from_word_list("Animals\n").unwrap_err();
        assert!(matches!(err, GameError::MalformedWordList { line: 1, .. }));

        let err = WordBank::from_word_list("# header\nPlants Easy FERN\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(err.to_string().contains("Plants"));

        let err = WordBank::from_word_list("Animals Easy\n").unwrap_err();
        assert!(matches!(err, GameError::EmptyWordList { .. }));

        let err = WordBank::from_word_list("Animals Easy C4T\n").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidWord {
                word: "C4T".to_string()
            }
        );
    }

    #[test]
    fn test_playable_words() {
        assert!(is_playable_word("hello"));
        assert!(is_playable_word("UP"));
        assert!(!is_playable_word(""));
        assert!(!is_playable_word("hello-world"));
        assert!(!is_playable_word("crème"));
    }
}
