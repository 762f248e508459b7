//! Pronoun grammar for PronounDB
//!
//! PronounDB stores a compact pronoun code per account (`"ht"` for he/they,
//! `"sh"` for she/her, `"avoid"`, ...). This crate turns those codes into the
//! word forms needed to write a sentence about someone.
//!
//! ## Quick start
//!
//! ```
//! use pronoundb_grammar::{Grammar, Pronoun};
//!
//! // Unknown or empty codes fall back to `unspecified`, which reads as "they".
//! let pronoun = Pronoun::normalize("ht");
//!
//! assert_eq!(pronoun.subject(), "he");
//! assert_eq!(pronoun.abbreviation(), "He/They");
//!
//! let sentence = format!(
//!     "{} prefer{} {} coffee",
//!     pronoun.subject(),
//!     pronoun.verb_suffix(),
//!     pronoun.possessive()
//! );
//! assert_eq!(sentence, "he prefers his coffee");
//! ```
//!
//! ## Layers
//!
//! - [`Gender`]: one atomic grammatical gender and its word forms.
//! - [`Pronoun`]: a code that maps to an ordered list of one or more genders.
//!   The first one is the *best* gender, used for every single form;
//!   combination codes get a blended abbreviation such as `"She/He"`.
//!
//! Both implement [`Grammar`], so display code can stay generic over which
//! one it was handed.

#![warn(missing_docs)]

pub mod error;
pub mod forms;
pub mod gender;
pub mod pronoun;

pub use error::{UnknownCode, UnknownGender};
pub use forms::Grammar;
pub use gender::Gender;
pub use pronoun::Pronoun;
