//! Lemmatizing token filter and lemmatizer implementations.
//!
//! A lemmatizer maps an inflected word to its dictionary base form
//! (`charges` → `charge`, `policies` → `policy`, `children` → `child`).
//! A word and its lemma always lemmatize to the same term, so singular and
//! plural forms of a noun share one vocabulary entry.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Trait for lemmatization algorithms.
pub trait Lemmatizer: Send + Sync {
    /// Reduce a lowercase word to its lemma.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

/// Irregular noun inflections, plus words that look inflected but are
/// their own lemma.
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "people"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("quizzes", "quiz"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("heroes", "hero"),
    ("echoes", "echo"),
    ("vetoes", "veto"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("means", "means"),
    ("thanks", "thanks"),
    ("always", "always"),
    ("perhaps", "perhaps"),
    ("sometimes", "sometimes"),
    ("towards", "towards"),
    ("afterwards", "afterwards"),
    ("besides", "besides"),
    ("yes", "yes"),
    ("various", "various"),
];

static NOUN_EXCEPTION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NOUN_EXCEPTIONS.iter().copied().collect());

/// Singular nouns ending in `s`; their plural adds `es`.
const S_SINGULARS: &[&str] = &[
    "alias", "atlas", "bias", "bus", "canvas", "chaos", "cosmos", "ethos", "gas", "lens",
    "pancreas", "plus",
];

static S_SINGULAR_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| S_SINGULARS.iter().copied().collect());

/// Nouns ending in `ie`; their plural would otherwise reduce to `-y`.
const IE_NOUNS: &[&str] = &[
    "auntie", "birdie", "boogie", "brownie", "budgie", "calorie", "cookie", "foodie", "freebie",
    "genie", "goalie", "hippie", "hoodie", "indie", "lingerie", "movie", "newbie", "pixie",
    "prairie", "rookie", "selfie", "smoothie", "sweetie", "techie", "veggie", "zombie",
];

static IE_NOUN_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IE_NOUNS.iter().copied().collect());

/// Lemma endings for nouns in `-che`, whose plural ends in `-ches`.
const CHE_ENDINGS: &[&str] = &[
    "avalanche", "cliche", "creche", "fiche", "niche", "psyche", "quiche",
];

/// Regular plural detachment rules, tried in order.
const NOUN_SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("zzes", "zz"),
    ("tzes", "tz"),
    ("zes", "ze"),
    ("xes", "x"),
    ("shes", "sh"),
    ("ches", "ch"),
    ("ies", "y"),
    ("s", ""),
];

/// Endings that mark a word as already singular.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ics"];

/// Rule-based lemmatizer modelled on WordNet's noun morphology.
///
/// Lemmatization is part-of-speech agnostic: every word is treated as a
/// noun, so verb inflections such as `failed` or `charging` are kept as-is
/// while plural nouns are reduced to their singular form. Where several
/// suffix rules apply, word lists of `-ie`, `-che` and `-s` nouns pick the
/// candidate a dictionary lookup would (`movies` → `movie`,
/// `caches` → `cache`, `lenses` → `lens`).
#[derive(Debug, Clone, Default)]
pub struct WordNetLemmatizer;

impl WordNetLemmatizer {
    /// Create a new lemmatizer.
    pub fn new() -> Self {
        WordNetLemmatizer
    }

    /// Whether `base` (a `-ches` plural without its `s`) is a `-che` noun.
    fn is_che_noun(base: &str) -> bool {
        if let Some(stem) = base.strip_suffix("ache") {
            // beaches, coaches and approaches keep `ch`.
            return !stem.ends_with(['e', 'o']);
        }
        CHE_ENDINGS.iter().any(|ending| base.ends_with(ending))
    }

    /// Resolve plurals whose regular rule would give a non-word.
    fn dictionary_candidate(word: &str) -> Option<&str> {
        if let Some(base) = word.strip_suffix("es") {
            if S_SINGULAR_SET.contains(base) {
                return Some(base);
            }
        }

        let base = word.strip_suffix('s')?;
        let ie_plural = word.ends_with("ies") && (word.len() <= 4 || IE_NOUN_SET.contains(base));
        let che_plural = word.ends_with("ches") && Self::is_che_noun(base);
        (ie_plural || che_plural).then_some(base)
    }
}

impl Lemmatizer for WordNetLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = NOUN_EXCEPTION_MAP.get(word) {
            return (*lemma).to_string();
        }

        if word.chars().count() <= 3
            || !word.chars().all(char::is_alphabetic)
            || S_SINGULAR_SET.contains(word)
            || SINGULAR_ENDINGS.iter().any(|ending| word.ends_with(ending))
        {
            return word.to_string();
        }

        if let Some(base) = Self::dictionary_candidate(word) {
            return base.to_string();
        }

        for (suffix, replacement) in NOUN_SUFFIX_RULES {
            if let Some(base) = word.strip_suffix(suffix) {
                // Keep at least a two-letter base.
                if base.chars().count() >= 2 {
                    return format!("{base}{replacement}");
                }
            }
        }

        word.to_string()
    }

    fn name(&self) -> &'static str {
        "wordnet"
    }
}

/// Lemmatizer that returns words unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdentityLemmatizer;

impl IdentityLemmatizer {
    pub fn new() -> Self {
        IdentityLemmatizer
    }
}

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Filter that applies lemmatization to tokens.
pub struct LemmaFilter {
    lemmatizer: Box<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a new lemma filter with the WordNet-style lemmatizer.
    pub fn new() -> Self {
        LemmaFilter {
            lemmatizer: Box::new(WordNetLemmatizer::new()),
        }
    }

    /// Create a lemma filter with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Box<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }

    /// Create a lemma filter that leaves tokens unchanged.
    pub fn identity() -> Self {
        LemmaFilter {
            lemmatizer: Box::new(IdentityLemmatizer::new()),
        }
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let lemma = self.lemmatizer.lemmatize(&token.text);
                    token.with_text(lemma)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
