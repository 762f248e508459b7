//! PronounDB pronoun codes and the gender table behind them.
//!
//! A code is either a single gender (`"sh"`, she/her), an ordered pair of
//! acceptable genders (`"st"`, she or they, she preferred), or a meta value
//! (`"any"`, `"ask"`, `"avoid"`, `"unspecified"`). The table in
//! [`Pronoun::genders`] is fixed data: the same code always yields the same
//! genders in the same order.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownCode;
use crate::forms::Grammar;
use crate::gender::Gender;
use crate::gender::Gender::{
    Avoid as A,
    Feminine as F,
    Masculine as M,
    NeutralObject as O,
    NeutralPersonal as T,
};

/// A pronoun code as stored by PronounDB.
///
/// Build one from directory data with [`Pronoun::normalize`]; anything empty
/// or unknown becomes [`Pronoun::Unspecified`]. The strict [`FromStr`] impl is
/// there for user input where a typo should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Pronoun {
    /// No preference recorded. Reads as "they".
    #[default]
    Unspecified,
    /// Any pronouns are fine.
    Any,
    /// Ask me.
    Ask,
    /// Avoid pronouns, use my name.
    Avoid,
    /// he/him
    HeHim,
    /// he/it
    HeIt,
    /// he/she
    HeShe,
    /// he/they
    HeThey,
    /// it/him
    ItHim,
    /// it/its
    ItIts,
    /// it/she
    ItShe,
    /// it/they
    ItThey,
    /// she/he
    SheHe,
    /// she/her
    SheHer,
    /// she/it
    SheIt,
    /// she/they
    SheThey,
    /// they/he
    TheyHe,
    /// they/it
    TheyIt,
    /// they/she
    TheyShe,
    /// they/them
    TheyThem,
}

impl Pronoun {
    /// Every code, meta values first.
    pub const ALL: [Pronoun; 20] = [
        Pronoun::Unspecified,
        Pronoun::Any,
        Pronoun::Ask,
        Pronoun::Avoid,
        Pronoun::HeHim,
        Pronoun::HeIt,
        Pronoun::HeShe,
        Pronoun::HeThey,
        Pronoun::ItHim,
        Pronoun::ItIts,
        Pronoun::ItShe,
        Pronoun::ItThey,
        Pronoun::SheHe,
        Pronoun::SheHer,
        Pronoun::SheIt,
        Pronoun::SheThey,
        Pronoun::TheyHe,
        Pronoun::TheyIt,
        Pronoun::TheyShe,
        Pronoun::TheyThem,
    ];

    /// The code as PronounDB spells it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Pronoun::Unspecified => "unspecified",
            Pronoun::Any => "any",
            Pronoun::Ask => "ask",
            Pronoun::Avoid => "avoid",
            Pronoun::HeHim => "hh",
            Pronoun::HeIt => "hi",
            Pronoun::HeShe => "hs",
            Pronoun::HeThey => "ht",
            Pronoun::ItHim => "ih",
            Pronoun::ItIts => "ii",
            Pronoun::ItShe => "is",
            Pronoun::ItThey => "it",
            Pronoun::SheHe => "shh",
            Pronoun::SheHer => "sh",
            Pronoun::SheIt => "si",
            Pronoun::SheThey => "st",
            Pronoun::TheyHe => "th",
            Pronoun::TheyIt => "ti",
            Pronoun::TheyShe => "ts",
            Pronoun::TheyThem => "tt",
        }
    }

    /// Look up a code exactly. `None` for anything not in the table,
    /// including the empty string.
    pub fn from_code(code: &str) -> Option<Pronoun> {
        Pronoun::ALL.into_iter().find(|p| p.as_str() == code)
    }

    /// Resolve a code received from the directory, falling back to
    /// [`Pronoun::Unspecified`] when it is empty or unknown.
    ///
    /// Idempotent: normalizing the result's [`as_str`](Pronoun::as_str)
    /// gives the same value back, and a valid code is never replaced.
    pub fn normalize(code: &str) -> Pronoun {
        match Pronoun::from_code(code) {
            Some(p) => p,
            None => {
                #[cfg(feature = "tracing")]
                {
                    if !code.is_empty() {
                        tracing::debug!(code, "unknown pronoun code, using unspecified");
                    }
                }
                Pronoun::Unspecified
            }
        }
    }

    /// Ordered genders for this code, best first.
    ///
    /// Length 1 for single genders and meta values, 2 for combinations,
    /// and 4 for [`Pronoun::Any`].
    pub const fn genders(self) -> &'static [Gender] {
        match self {
            Pronoun::Avoid => &[A],
            Pronoun::Ask | Pronoun::Unspecified => &[T],
            Pronoun::Any => &[T, F, M, O],

            Pronoun::TheyThem => &[T],
            Pronoun::TheyHe => &[T, M],
            Pronoun::TheyShe => &[T, F],
            Pronoun::TheyIt => &[T, O],

            Pronoun::HeHim => &[M],
            Pronoun::HeThey => &[M, T],
            Pronoun::HeShe => &[M, F],
            Pronoun::HeIt => &[M, O],

            Pronoun::SheHer => &[F],
            Pronoun::SheThey => &[F, T],
            Pronoun::SheHe => &[F, M],
            Pronoun::SheIt => &[F, O],

            Pronoun::ItIts => &[O],
            Pronoun::ItThey => &[O, T],
            Pronoun::ItHim => &[O, M],
            Pronoun::ItShe => &[O, F],
        }
    }

    /// The gender used whenever a single form is needed.
    pub const fn best_gender(self) -> Gender {
        self.genders()[0]
    }

    /// Whether this code names two acceptable genders.
    pub const fn is_combination(self) -> bool {
        self.genders().len() == 2
    }

    /// Whether this is one of `unspecified`, `any`, `ask` or `avoid`.
    pub const fn is_meta(self) -> bool {
        matches!(
            self,
            Pronoun::Unspecified | Pronoun::Any | Pronoun::Ask | Pronoun::Avoid
        )
    }
}

impl Grammar for Pronoun {
    fn subject(&self) -> &'static str {
        self.best_gender().subject()
    }

    fn possessive(&self) -> &'static str {
        self.best_gender().possessive()
    }

    fn object(&self) -> &'static str {
        self.best_gender().object()
    }

    fn reflexive(&self) -> &'static str {
        self.best_gender().reflexive()
    }

    fn verb_to_be(&self) -> &'static str {
        self.best_gender().verb_to_be()
    }

    fn verb_suffix(&self) -> &'static str {
        self.best_gender().verb_suffix()
    }

    fn gender_label(&self) -> &'static str {
        self.best_gender().gender_label()
    }

    /// Single genders abbreviate as `subject/object` ("she/her").
    /// Combinations join both subject forms, each capitalized ("She/They").
    /// `any` has more than two genders and falls back to its first one.
    fn abbreviation(&self) -> Cow<'static, str> {
        match self.genders() {
            [first, second] => Cow::Owned(format!(
                "{}/{}",
                capitalize(first.subject()),
                capitalize(second.subject())
            )),
            [first, ..] => first.abbreviation(),
            [] => Cow::Borrowed("avoid"),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Pronoun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pronoun {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pronoun::from_code(s).ok_or_else(|| UnknownCode(s.to_owned()))
    }
}

impl From<&str> for Pronoun {
    fn from(code: &str) -> Self {
        Pronoun::normalize(code)
    }
}

impl From<Pronoun> for Gender {
    fn from(p: Pronoun) -> Self {
        p.best_gender()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pronoun {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserialization normalizes, so unknown codes in a payload never fail it.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pronoun {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = <Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Pronoun::normalize(&code))
    }
}
