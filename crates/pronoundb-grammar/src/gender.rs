//! Atomic grammatical genders.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownGender;
use crate::forms::Grammar;

/// One grammatical gender, the unit every word form is chosen from.
///
/// Serialized as its subject pronoun (`"she"`, `"he"`, `"it"`, `"they"`),
/// or `"avoid"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    /// she/her
    #[cfg_attr(feature = "serde", serde(rename = "she"))]
    Feminine,
    /// he/him
    #[cfg_attr(feature = "serde", serde(rename = "he"))]
    Masculine,
    /// it/its, used as a personal pronoun
    #[cfg_attr(feature = "serde", serde(rename = "it"))]
    NeutralObject,
    /// singular they
    #[cfg_attr(feature = "serde", serde(rename = "they"))]
    NeutralPersonal,
    /// No pronouns at all. Every word form is empty; write around it.
    #[cfg_attr(feature = "serde", serde(rename = "avoid"))]
    Avoid,
}

impl Gender {
    /// Every gender, in declaration order.
    pub const ALL: [Gender; 5] = [
        Gender::Feminine,
        Gender::Masculine,
        Gender::NeutralObject,
        Gender::NeutralPersonal,
        Gender::Avoid,
    ];

    /// Serialized value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Gender::Feminine => "she",
            Gender::Masculine => "he",
            Gender::NeutralObject => "it",
            Gender::NeutralPersonal => "they",
            Gender::Avoid => "avoid",
        }
    }

    /// Whether this is the "avoid pronouns" gender.
    pub const fn is_avoid(self) -> bool {
        matches!(self, Gender::Avoid)
    }
}

impl Grammar for Gender {
    fn subject(&self) -> &'static str {
        match self {
            Gender::Feminine => "she",
            Gender::Masculine => "he",
            Gender::NeutralObject => "it",
            Gender::NeutralPersonal => "they",
            Gender::Avoid => "",
        }
    }

    fn possessive(&self) -> &'static str {
        match self {
            Gender::Feminine => "her",
            Gender::Masculine => "his",
            Gender::NeutralObject => "its",
            Gender::NeutralPersonal => "their",
            Gender::Avoid => "",
        }
    }

    fn object(&self) -> &'static str {
        match self {
            Gender::Feminine => "her",
            Gender::Masculine => "him",
            Gender::NeutralObject => "it",
            Gender::NeutralPersonal => "them",
            Gender::Avoid => "",
        }
    }

    fn reflexive(&self) -> &'static str {
        match self {
            Gender::Feminine => "herself",
            Gender::Masculine => "himself",
            Gender::NeutralObject => "itself",
            Gender::NeutralPersonal => "themself",
            Gender::Avoid => "",
        }
    }

    fn verb_to_be(&self) -> &'static str {
        match self {
            Gender::NeutralPersonal => "are",
            // agreement is up to whoever rewrites the sentence
            Gender::Avoid => "",
            Gender::Feminine | Gender::Masculine | Gender::NeutralObject => "is",
        }
    }

    fn verb_suffix(&self) -> &'static str {
        match self {
            Gender::NeutralPersonal | Gender::Avoid | Gender::NeutralObject => "",
            Gender::Feminine | Gender::Masculine => "s",
        }
    }

    fn gender_label(&self) -> &'static str {
        match self {
            Gender::Feminine => "female",
            Gender::Masculine => "male",
            Gender::NeutralPersonal => "gender neutral",
            Gender::NeutralObject => "gender neutral (personal 'it')",
            Gender::Avoid => "avoid",
        }
    }

    fn abbreviation(&self) -> Cow<'static, str> {
        if self.is_avoid() {
            return Cow::Borrowed("avoid");
        }
        Cow::Owned(format!("{}/{}", self.subject(), self.object()))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGender(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_forms_empty_only_for_avoid() {
        for g in Gender::ALL {
            let forms = [g.subject(), g.possessive(), g.object(), g.reflexive()];
            if g.is_avoid() {
                assert!(forms.iter().all(|f| f.is_empty()), "{g}: {forms:?}");
            } else {
                assert!(forms.iter().all(|f| !f.is_empty()), "{g}: {forms:?}");
            }
        }
    }

    #[test]
    fn every_form_of_every_gender() {
        use Gender::*;
        #[rustfmt::skip]
        let table = [
            (Feminine,        ["she", "her", "her", "herself", "is", "s", "female"]),
            (Masculine,       ["he", "his", "him", "himself", "is", "s", "male"]),
            (NeutralObject,   ["it", "its", "it", "itself", "is", "", "gender neutral (personal 'it')"]),
            (NeutralPersonal, ["they", "their", "them", "themself", "are", "", "gender neutral"]),
            (Avoid,           ["", "", "", "", "", "", "avoid"]),
        ];
        for (g, expected) in table {
            let forms = [
                g.subject(),
                g.possessive(),
                g.object(),
                g.reflexive(),
                g.verb_to_be(),
                g.verb_suffix(),
                g.gender_label(),
            ];
            assert_eq!(forms, expected, "{g}");
        }
    }

    #[test]
    fn verb_agreement() {
        assert_eq!(Gender::NeutralPersonal.verb_to_be(), "are");
        assert_eq!(Gender::Feminine.verb_to_be(), "is");
        assert_eq!(Gender::Masculine.verb_to_be(), "is");
        assert_eq!(Gender::NeutralObject.verb_to_be(), "is");
        assert_eq!(Gender::Avoid.verb_to_be(), "");

        assert_eq!(Gender::Feminine.verb_suffix(), "s");
        assert_eq!(Gender::Masculine.verb_suffix(), "s");
        assert_eq!(Gender::NeutralObject.verb_suffix(), "");
        assert_eq!(Gender::NeutralPersonal.verb_suffix(), "");
        assert_eq!(Gender::Avoid.verb_suffix(), "");
    }

    #[test]
    fn abbreviation_is_subject_slash_object() {
        assert_eq!(Gender::NeutralPersonal.abbreviation(), "they/them");
        assert_eq!(Gender::Feminine.abbreviation(), "she/her");
        assert_eq!(Gender::Masculine.abbreviation(), "he/him");
        assert_eq!(Gender::NeutralObject.abbreviation(), "it/it");
        assert_eq!(Gender::Avoid.abbreviation(), "avoid");
    }

    #[test]
    fn avoid_label_is_displayable() {
        assert_eq!(Gender::Avoid.gender_label(), "avoid");
        assert_eq!(
            Gender::NeutralObject.gender_label(),
            "gender neutral (personal 'it')"
        );
        for g in Gender::ALL {
            assert!(!g.gender_label().is_empty());
        }
    }

    #[test]
    fn parse_matches_display() {
        for g in Gender::ALL {
            assert_eq!(g.to_string().parse::<Gender>(), Ok(g));
        }
        assert!("they/them".parse::<Gender>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_subject() {
        assert_eq!(
            serde_json::to_string(&Gender::NeutralPersonal).unwrap(),
            "\"they\""
        );
        let g: Gender = serde_json::from_str("\"avoid\"").unwrap();
        assert_eq!(g, Gender::Avoid);
    }
}
