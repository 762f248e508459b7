//! Platforms PronounDB links accounts from.

use std::fmt;
use std::str::FromStr;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Account namespace an ID belongs to.
///
/// IDs are platform-native: a Discord snowflake, a GitHub numeric user ID, a
/// Minecraft UUID and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Discord, by user snowflake
    Discord,
    /// GitHub, by numeric user ID
    Github,
    /// Minecraft, by player UUID
    Minecraft,
    /// Twitch, by user ID
    Twitch,
    /// Twitter, by numeric user ID
    Twitter,
}

impl Platform {
    /// Every supported platform.
    pub const ALL: [Platform; 5] = [
        Platform::Discord,
        Platform::Github,
        Platform::Minecraft,
        Platform::Twitch,
        Platform::Twitter,
    ];

    /// Query parameter value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Discord => "discord",
            Platform::Github => "github",
            Platform::Minecraft => "minecraft",
            Platform::Twitch => "twitch",
            Platform::Twitter => "twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform name that PronounDB doesn't support.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unknown platform: {0:?}")]
#[diagnostic(
    code(pronoundb::unknown_platform),
    help("supported platforms: discord, github, minecraft, twitch, twitter")
)]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| UnknownPlatform(s.to_owned()))
    }
}
