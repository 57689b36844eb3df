use once_cell::sync::Lazy;
use std::collections::HashMap;

// AFINN-style lexicon embedded at compile time: one "word<TAB>score" per line
static LEXICON: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    include_str!("../data/lexicon.txt")
        .lines()
        .filter_map(|line| {
            let (word, score) = line.split_once('\t')?;
            Some((word, score.trim().parse().ok()?))
        })
        .collect()
});

/// Scores one text; any lexicon-based or model-based analyzer returning a
/// signed score fits behind this seam.
pub trait Scorer {
    fn score(&self, text: &str) -> i32;
}

/// Word-by-word lexicon scorer with negation and intensifier heuristics
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for LexiconScorer {
    /// Sum of lexicon scores over the tokens. A word's score is doubled when
    /// the token right before it is an intensifier, and its sign is flipped
    /// when a negator appears within the previous three tokens. Texts with no
    /// lexicon matches (including empty ones) score 0.
    fn score(&self, text: &str) -> i32 {
        let tokens: Vec<String> = tokenize(text).collect();
        let mut score = 0;

        for i in 0..tokens.len() {
            let base = match LEXICON.get(tokens[i].as_str()) {
                Some(&s) => s,
                None => continue,
            };

            let mut adj = base;
            if i > 0 && is_intensifier(&tokens[i - 1]) {
                adj *= 2;
            }
            let negated = (1..=3).any(|k| i >= k && is_negator(&tokens[i - k]));
            if negated {
                adj = -adj;
            }
            score += adj;
        }

        score
    }
}

/// Alphanumeric tokens, lower-cased; apostrophes kept so contractions survive
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "nothing"
            | "nobody"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "don't"
            | "doesn't"
            | "didn't"
            | "won't"
            | "can't"
            | "cannot"
            | "without"
    )
}

fn is_intensifier(tok: &str) -> bool {
    matches!(
        tok,
        "very" | "extremely" | "absolutely" | "really" | "incredibly" | "so" | "totally"
    )
}
