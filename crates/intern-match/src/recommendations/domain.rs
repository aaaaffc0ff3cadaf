use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub String);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Highest completed education level. Matching against listings is exact; there is no
/// ordering between levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "10th")]
    Tenth,
    #[serde(rename = "12th")]
    Twelfth,
    #[serde(rename = "diploma")]
    Diploma,
    #[serde(rename = "graduation")]
    Graduation,
    #[serde(rename = "postgraduation")]
    Postgraduation,
}

impl Education {
    pub const ALL: [Education; 5] = [
        Education::Tenth,
        Education::Twelfth,
        Education::Diploma,
        Education::Graduation,
        Education::Postgraduation,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Education::Tenth => "10th",
            Education::Twelfth => "12th",
            Education::Diploma => "diploma",
            Education::Graduation => "graduation",
            Education::Postgraduation => "postgraduation",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Education::Tenth => "10th Standard",
            Education::Twelfth => "12th Standard",
            Education::Diploma => "Diploma",
            Education::Graduation => "Graduation",
            Education::Postgraduation => "Post Graduation",
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Education {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Education::ALL
            .into_iter()
            .find(|level| level.code() == trimmed)
            .ok_or_else(|| UnknownOption {
                kind: "education level",
                value: value.to_string(),
            })
    }
}

/// Self-reported prior experience. Only `NoExperience` and `Experienced` affect scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "none")]
    NoExperience,
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "some")]
    SomeExperience,
    #[serde(rename = "experienced")]
    Experienced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::NoExperience,
        ExperienceLevel::Basic,
        ExperienceLevel::SomeExperience,
        ExperienceLevel::Experienced,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            ExperienceLevel::NoExperience => "none",
            ExperienceLevel::Basic => "basic",
            ExperienceLevel::SomeExperience => "some",
            ExperienceLevel::Experienced => "experienced",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ExperienceLevel::NoExperience => "No Experience",
            ExperienceLevel::Basic => "Basic Knowledge",
            ExperienceLevel::SomeExperience => "Some Experience",
            ExperienceLevel::Experienced => "Experienced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ExperienceLevel {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| level.code() == trimmed)
            .ok_or_else(|| UnknownOption {
                kind: "experience level",
                value: value.to_string(),
            })
    }
}

/// Raised when a code does not name one of the enumerated options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// Candidate profile produced by the intake steps and consumed by the scorer.
///
/// Every field tolerates being empty so an unfinished profile can still be scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: String,
    /// Raw text as entered. Age is collected but never validated or scored.
    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub education: Option<Education>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub experience: Option<ExperienceLevel>,
}

impl CandidateProfile {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|candidate| candidate == skill)
    }

    pub fn has_sector(&self, sector: &str) -> bool {
        self.sectors.iter().any(|candidate| candidate == sector)
    }
}

/// Catalog entry describing one internship opening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub sector: String,
    pub duration: String,
    pub stipend: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub education_levels: Vec<Education>,
    pub is_remote: bool,
}

impl Listing {
    pub fn accepts(&self, education: Education) -> bool {
        self.education_levels.contains(&education)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AgeInput {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_age<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<AgeInput>::deserialize(deserializer)? {
        None => String::new(),
        Some(AgeInput::Text(raw)) => raw,
        Some(AgeInput::Number(number)) => number.to_string(),
    })
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
