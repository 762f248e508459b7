use std::borrow::Cow;

/// Word forms for writing about a person.
///
/// Implemented by [`Gender`](crate::Gender) and [`Pronoun`](crate::Pronoun).
/// Every method is total: forms that don't exist for a value (everything for
/// `avoid`, for instance) come back as the empty string, and the caller is
/// expected to rewrite the sentence without a pronoun.
pub trait Grammar {
    /// Subject form: "she", "he", "it", "they".
    fn subject(&self) -> &'static str;

    /// Possessive determiner: "her", "his", "its", "their".
    fn possessive(&self) -> &'static str;

    /// Object form: "her", "him", "it", "them".
    fn object(&self) -> &'static str;

    /// Reflexive form: "herself", "himself", "itself", "themself".
    fn reflexive(&self) -> &'static str;

    /// Number agreement for "to be".
    ///
    /// She *is*, they *are*.
    fn verb_to_be(&self) -> &'static str;

    /// Third person "-s" for regular verbs.
    ///
    /// She prefer*s*, they prefer.
    fn verb_suffix(&self) -> &'static str;

    /// Human readable description, e.g. "gender neutral".
    fn gender_label(&self) -> &'static str;

    /// Short display form, e.g. "they/them" or "He/They".
    fn abbreviation(&self) -> Cow<'static, str>;
}
