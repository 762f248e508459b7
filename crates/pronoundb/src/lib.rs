//! # pronoundb
//!
//! Client for [PronounDB](https://pronoundb.org), with the grammar needed to
//! actually use the answer in a sentence.
//!
//! ## Quick start
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use pronoundb::{DefaultClient, Grammar, Platform};
//!
//! let client = DefaultClient::default();
//!
//! let pronoun = client.lookup_one(Platform::Discord, "94762492923748352").await?;
//! println!(
//!     "{} prefer{} {} ({})",
//!     pronoun.subject(),
//!     pronoun.verb_suffix(),
//!     pronoun.possessive(),
//!     pronoun.abbreviation(),
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Bulk lookups
//!
//! [`PronounDbClient::lookup`] takes any number of IDs and splits them into
//! batches of [`client::BULK_LOOKUP_ID_LIMIT`]. Accounts PronounDB doesn't know
//! are left out of the result. If a batch fails, the error still carries the
//! accounts fetched before it:
//!
//! ```no_run
//! # async fn example(ids: Vec<String>) {
//! use pronoundb::{DefaultClient, Platform};
//!
//! let client = DefaultClient::default();
//! let pronouns = match client.lookup(Platform::Github, &ids).await {
//!     Ok(found) => found,
//!     Err(e) if e.source.is_rate_limited() => e.partial,
//!     Err(e) => panic!("{e}"),
//! };
//! # }
//! ```
//!
//! ## Customization
//!
//! ```
//! use pronoundb::PronounDbClient;
//! use pronoundb::client::ClientOptions;
//! use http::{HeaderName, HeaderValue};
//!
//! let opts = ClientOptions::new()
//!     .base(url::Url::parse("https://pronoundb.example").unwrap())
//!     .user_agent("my-bot/2.1 (+https://bot.example)".to_owned())
//!     .build();
//!
//! let client = PronounDbClient::new(reqwest::Client::new(), opts)
//!     .with_header(HeaderName::from_static("x-trace"), HeaderValue::from_static("on"));
//! ```
//!
//! Any type implementing [`HttpClient`](http_client::HttpClient) can stand in
//! for `reqwest`.

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod http_client;
pub mod platform;

#[cfg(feature = "reqwest-client")]
pub use client::DefaultClient;
pub use client::{PronounDbClient, PronounMap, RawBulk, RawUser};
pub use error::{BulkLookupError, HttpError, LookupError, TransportError};
pub use platform::{Platform, UnknownPlatform};

pub use pronoundb_grammar as grammar;
pub use pronoundb_grammar::{Gender, Grammar, Pronoun, UnknownCode, UnknownGender};
