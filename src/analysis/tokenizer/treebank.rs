//! Penn-Treebank style word tokenizer.
//!
//! Splits English text into words and punctuation the way the Penn Treebank
//! conventions do:
//!
//! - whitespace separates tokens and is discarded;
//! - every punctuation or symbol character becomes its own token
//!   (`#12345` → `#`, `12345`; `done.` → `done`, `.`);
//! - hyphens, periods and apostrophes *between* word characters stay inside
//!   the word (`3-5`, `shoponline.com`, `o'clock`);
//! - clitic contractions are split off (`don't` → `do`, `n't`;
//!   `can't` → `ca`, `n't`; `it's` → `it`, `'s`; `we'll` → `we`, `'ll`);
//! - a few fused informal forms are split in two as whole words
//!   (`cannot` → `can`, `not`; `gonna` → `gon`, `na`; `gimme` → `gim`, `me`).

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Words (with inner joiners) or single non-space symbols.
const TREEBANK_PATTERN: &str = r"\w+(?:[-'’.]\w+)*|[^\w\s]";

static TREEBANK_REGEX: LazyLock<Arc<Regex>> =
    LazyLock::new(|| Arc::new(Regex::new(TREEBANK_PATTERN).expect("treebank pattern is valid")));

/// Contraction suffixes split off as separate tokens, longest first.
const CONTRACTION_SUFFIXES: &[&str] = &[
    "n't", "n’t", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'s", "’s", "'d", "’d", "'m", "’m",
];

/// Whole words split in two, with the byte length of the first part.
const FUSED_CONTRACTIONS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("d'ye", 1),
    ("d’ye", 1),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("more'n", 4),
    ("more’n", 4),
    ("wanna", 3),
];

/// A tokenizer following Penn-Treebank word splitting conventions.
#[derive(Clone, Debug)]
pub struct TreebankTokenizer {
    pattern: Arc<Regex>,
}

impl TreebankTokenizer {
    /// Create a new treebank tokenizer.
    pub fn new() -> Self {
        TreebankTokenizer {
            pattern: Arc::clone(&TREEBANK_REGEX),
        }
    }

    /// Find where a contraction splits `word`, returning the byte index
    /// where the second part starts.
    fn contraction_split(word: &str) -> Option<usize> {
        let lowered = word.to_ascii_lowercase();
        if let Some(&(_, split)) = FUSED_CONTRACTIONS
            .iter()
            .find(|(fused, _)| lowered == *fused)
        {
            return Some(split);
        }
        CONTRACTION_SUFFIXES.iter().find_map(|suffix| {
            if lowered.len() > suffix.len() && lowered.ends_with(suffix) {
                Some(word.len() - suffix.len())
            } else {
                None
            }
        })
    }
}

impl Default for TreebankTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;

        for mat in self.pattern.find_iter(text) {
            let word = mat.as_str();
            match Self::contraction_split(word) {
                Some(split) => {
                    let (stem, clitic) = word.split_at(split);
                    tokens.push(Token::with_offsets(
                        stem,
                        position,
                        mat.start(),
                        mat.start() + split,
                    ));
                    tokens.push(Token::with_offsets(
                        clitic,
                        position + 1,
                        mat.start() + split,
                        mat.end(),
                    ));
                    position += 2;
                }
                None => {
                    tokens.push(Token::with_offsets(word, position, mat.start(), mat.end()));
                    position += 1;
                }
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "treebank"
    }
}
