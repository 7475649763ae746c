//! # lexreply
//!
//! Intent matching and templated response retrieval for customer-support
//! chat.
//!
//! A fixed corpus of intents, each with one example query and a response
//! template, is indexed with TF-IDF. Incoming questions are normalized the
//! same way, matched to the closest intent by cosine similarity, and
//! answered with that intent's template, filled with any order number found
//! in the question.
//!
//! ```
//! use lexreply::prelude::*;
//!
//! let responder = Responder::new(Corpus::builtin().unwrap()).unwrap();
//! let answer = responder.get_response("How can I return a product?").unwrap();
//! assert_eq!(answer, "You can return products within 15 days via our online portal.");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod responder;
pub mod slot;
pub mod template;
pub mod vector;

pub mod prelude {
    pub use crate::config::ResponderConfig;
    pub use crate::corpus::{Corpus, IntentRecord};
    pub use crate::error::{LexreplyError, Result};
    pub use crate::responder::{MatchExplanation, Responder};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
