use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::engine::EngineError;

/// Single-valued and tag fields of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Gender,
    Nationality,
    DateOfBirth,
    Birthplace,
    Height,
    Weight,
    IdType,
    IdNumber,
    HomeAddress,
    PhoneNumber,
    Department,
    Position,
    JobTitle,
    StartDatePreference,
    Languages,
    ComputerSkills,
    PoliticalStatus,
    AccountLocation,
}

impl FieldName {
    pub const fn ordered() -> [Self; 19] {
        [
            Self::FullName,
            Self::Gender,
            Self::Nationality,
            Self::DateOfBirth,
            Self::Birthplace,
            Self::Height,
            Self::Weight,
            Self::IdType,
            Self::IdNumber,
            Self::HomeAddress,
            Self::PhoneNumber,
            Self::Department,
            Self::Position,
            Self::JobTitle,
            Self::StartDatePreference,
            Self::Languages,
            Self::ComputerSkills,
            Self::PoliticalStatus,
            Self::AccountLocation,
        ]
    }

    /// Wire name used in field paths and JSON payloads.
    pub const fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Gender => "gender",
            Self::Nationality => "nationality",
            Self::DateOfBirth => "dateOfBirth",
            Self::Birthplace => "birthplace",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::IdType => "idType",
            Self::IdNumber => "idNumber",
            Self::HomeAddress => "homeAddress",
            Self::PhoneNumber => "phoneNumber",
            Self::Department => "department",
            Self::Position => "position",
            Self::JobTitle => "jobTitle",
            Self::StartDatePreference => "startDatePreference",
            Self::Languages => "languages",
            Self::ComputerSkills => "computerSkills",
            Self::PoliticalStatus => "politicalStatus",
            Self::AccountLocation => "accountLocation",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|name| name.key() == raw)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    School,
    Major,
    Period,
}

impl EducationField {
    pub const fn ordered() -> [Self; 3] {
        [Self::School, Self::Major, Self::Period]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::School => "school",
            Self::Major => "major",
            Self::Period => "period",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|field| field.key() == raw)
    }
}

const EDUCATION_KEY: &str = "education";

/// Address of a value on the form: a top-level field, the education list as a whole,
/// or one sub-field of an education entry (`education[2].school`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    Field(FieldName),
    Education,
    EducationEntry { index: usize, field: EducationField },
}

impl FieldPath {
    pub const fn entry(index: usize, field: EducationField) -> Self {
        Self::EducationEntry { index, field }
    }

    /// True for the aggregate `education` path and every path nested under it.
    pub fn is_education(&self) -> bool {
        matches!(self, Self::Education | Self::EducationEntry { .. })
    }
}

impl From<FieldName> for FieldPath {
    fn from(value: FieldName) -> Self {
        Self::Field(value)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Field(name) => f.write_str(name.key()),
            FieldPath::Education => f.write_str(EDUCATION_KEY),
            FieldPath::EducationEntry { index, field } => {
                write!(f, "{EDUCATION_KEY}[{index}].{}", field.key())
            }
        }
    }
}

impl FromStr for FieldPath {
    type Err = EngineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let unknown = || EngineError::UnknownField(raw.to_string());
        let trimmed = raw.trim();

        if trimmed == EDUCATION_KEY {
            return Ok(FieldPath::Education);
        }

        if let Some(rest) = trimmed.strip_prefix("education[") {
            let (index, field) = rest.split_once("].").ok_or_else(unknown)?;
            if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                return Err(unknown());
            }
            let index = index.parse::<usize>().map_err(|_| unknown())?;
            let field = EducationField::from_key(field).ok_or_else(unknown)?;
            return Ok(FieldPath::EducationEntry { index, field });
        }

        FieldName::from_key(trimmed)
            .map(FieldPath::Field)
            .ok_or_else(unknown)
    }
}

impl Serialize for FieldPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
