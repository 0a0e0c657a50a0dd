use anyhow::{Result, anyhow};
use std::{collections::HashMap, convert::TryFrom};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Feedback {
    Green,
    Yellow,
    Gray,
}

impl TryFrom<char> for Feedback {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'G' => Ok(Feedback::Green),
            'Y' => Ok(Feedback::Yellow),
            'X' => Ok(Feedback::Gray),
            _ => Err(value),
        }
    }
}

/// Parse a row written as `G`/`Y`/`X` letters, e.g. `"xygyx"`.
pub fn parse_pattern(pattern: &str) -> Result<Vec<Feedback>> {
    pattern
        .chars()
        .map(|c| Feedback::try_from(c).map_err(|bad| anyhow!("invalid tile letter: {:?}", bad)))
        .collect()
}

/// Scores a guess into one correctness state per tile.
pub trait TileScorer {
    fn score(&self, guess: &str) -> Vec<Feedback>;

    /// Number of tiles in a fully solved row.
    fn word_len(&self) -> usize;

    fn is_solved(&self, guess: &str) -> bool {
        let tiles = self.score(guess);
        tiles.len() == self.word_len() && tiles.iter().all(|&fb| fb == Feedback::Green)
    }
}

/// Today's answer, scoring guesses the standard way.
#[derive(Debug, Clone)]
pub struct TargetWord {
    word: String,
}

impl TargetWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.word
    }
}

impl TileScorer for TargetWord {
    fn score(&self, guess: &str) -> Vec<Feedback> {
        generate_feedback(&self.word, &guess.to_lowercase())
    }

    fn word_len(&self) -> usize {
        self.word.chars().count()
    }
}

/// Score `guess` against `target`. Greens are claimed first so a repeated
/// letter only turns yellow while unmatched copies remain in the target.
pub fn generate_feedback(target: &str, guess: &str) -> Vec<Feedback> {
    let t: Vec<char> = target.chars().collect();
    let g: Vec<char> = guess.chars().collect();

    let mut result = vec![Feedback::Gray; g.len()];
    let mut unmatched: HashMap<char, usize> = HashMap::new();

    // Green pass
    for (i, &c) in g.iter().enumerate() {
        if t.get(i) == Some(&c) {
            result[i] = Feedback::Green;
        } else if let Some(&tc) = t.get(i) {
            *unmatched.entry(tc).or_insert(0) += 1;
        }
    }
    for &tc in t.iter().skip(g.len()) {
        *unmatched.entry(tc).or_insert(0) += 1;
    }

    // Yellow pass
    for (i, &c) in g.iter().enumerate() {
        if result[i] == Feedback::Green {
            continue;
        }
        if let Some(left) = unmatched.get_mut(&c) {
            if *left > 0 {
                *left -= 1;
                result[i] = Feedback::Yellow;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_feedback_exact() {
        assert_eq!(
            generate_feedback("apple", "apple"),
            parse_pattern("GGGGG").unwrap()
        );
    }

    #[test]
    fn test_generate_feedback_mixed() {
        // crane vs react: r,e,a,c present elsewhere, t absent
        assert_eq!(
            generate_feedback("crane", "react"),
            parse_pattern("YYGYX").unwrap()
        );
    }

    #[test]
    fn test_generate_feedback_repeated_letters() {
        // Only one 'l' in "world": the green claims it, the other stays gray.
        assert_eq!(
            generate_feedback("world", "hello"),
            parse_pattern("XXXGY").unwrap()
        );
        // The target's only 'e' is claimed by the green, so earlier copies stay gray.
        assert_eq!(
            generate_feedback("crane", "eerie"),
            parse_pattern("XXYXG").unwrap()
        );
    }

    #[test]
    fn test_target_word_is_case_insensitive() {
        let target = TargetWord::new("CRANE");
        assert!(target.is_solved("crane"));
        assert!(target.is_solved("CrAnE"));
        assert!(!target.is_solved("crank"));
        assert_eq!(target.word_len(), 5);
    }

    #[test]
    fn test_parse_pattern() {
        assert_eq!(
            parse_pattern("GYX").unwrap(),
            vec![Feedback::Green, Feedback::Yellow, Feedback::Gray]
        );
        assert!(parse_pattern("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_pattern_ignores_case() {
        assert_eq!(parse_pattern("gYx").unwrap(), parse_pattern("GYX").unwrap());
    }

    #[test]
    fn test_parse_pattern_rejects_unknown_letter() {
        let err = parse_pattern("GGBGG").unwrap_err();
        assert!(err.to_string().contains("'B'"));
        assert_eq!(Feedback::try_from('?'), Err('?'));
    }
}
