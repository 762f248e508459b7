//! Strict parse errors.
//!
//! Lookup paths never produce these: they normalize instead. They exist for
//! callers that take codes from user input and want to reject typos.

use miette::Diagnostic;
use thiserror::Error;

/// A string that is not one of the known pronoun codes.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unknown pronoun code: {0:?}")]
#[diagnostic(
    code(pronoundb_grammar::unknown_code),
    help("valid codes: unspecified, any, ask, avoid, hh, hi, hs, ht, ih, ii, is, it, shh, sh, si, st, th, ti, ts, tt")
)]
pub struct UnknownCode(pub String);

/// A string that is not one of the grammatical gender values.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unknown gender: {0:?}")]
#[diagnostic(
    code(pronoundb_grammar::unknown_gender),
    help("valid genders: she, he, it, they, avoid")
)]
pub struct UnknownGender(pub String);
