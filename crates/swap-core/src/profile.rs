use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Content-appropriateness class of a single dataset entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyTier {
    Kid,
    Family,
    Standard,
}

impl SafetyTier {
    pub fn rank(&self) -> u8 {
        match self {
            SafetyTier::Kid => 0,
            SafetyTier::Family => 1,
            SafetyTier::Standard => 2,
        }
    }
}

/// Safety tier requested for a puzzle. A higher profile admits more content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentProfile {
    Kid,
    Family,
    #[default]
    Standard,
}

impl ContentProfile {
    pub fn rank(&self) -> u8 {
        match self {
            ContentProfile::Kid => 0,
            ContentProfile::Family => 1,
            ContentProfile::Standard => 2,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ContentProfile::Kid => "kid",
            ContentProfile::Family => "family",
            ContentProfile::Standard => "standard",
        }
    }

    pub fn admits(&self, tier: SafetyTier) -> bool {
        tier.rank() <= self.rank()
    }
}

impl fmt::Display for ContentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentProfile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kid" => Ok(ContentProfile::Kid),
            "family" => Ok(ContentProfile::Family),
            "standard" => Ok(ContentProfile::Standard),
            other => Err(ParseError::Profile(other.to_string())),
        }
    }
}
