//! Filter that keeps only purely alphanumeric tokens.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Drops every token that is empty or contains a character that is not
/// alphanumeric.
///
/// Punctuation-only tokens (`?`, `#`), clitics (`n't`, `'s`) and mixed symbol
/// tokens (`3-5`, `shoponline.com`) are all removed.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }
}

impl Filter for AlphanumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens.filter(Token::is_alphanumeric).collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}
