use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::path::{EducationField, FieldName};

/// Date format used by every date-valued input on the form.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn ordered() -> [Self; 2] {
        [Self::Male, Self::Female]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|option| option.label() == raw)
    }
}

/// Countries offered for nationality and account location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Indonesia,
    Malaysia,
    Singapore,
}

impl Country {
    pub const fn ordered() -> [Self; 3] {
        [Self::Indonesia, Self::Malaysia, Self::Singapore]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Indonesia => "Indonesia",
            Self::Malaysia => "Malaysia",
            Self::Singapore => "Singapore",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|option| option.label() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StartDatePreference {
    AsSoonAsPossible,
    OneMonthNotice,
}

impl StartDatePreference {
    pub const fn ordered() -> [Self; 2] {
        [Self::AsSoonAsPossible, Self::OneMonthNotice]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AsSoonAsPossible => "As Soon As Possible",
            Self::OneMonthNotice => "1 month notice",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|option| option.label() == raw)
    }
}

/// Kind of identity document the ID number refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdType {
    NationalIdCard,
    Passport,
    DrivingLicense,
}

impl IdType {
    pub const fn ordered() -> [Self; 3] {
        [Self::NationalIdCard, Self::Passport, Self::DrivingLicense]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NationalIdCard => "National ID Card",
            Self::Passport => "Passport",
            Self::DrivingLicense => "Driving License",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|option| option.label() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoliticalStatus {
    PreferNotToSay,
    Independent,
    Affiliated,
}

impl PoliticalStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::PreferNotToSay, Self::Independent, Self::Affiliated]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PreferNotToSay => "Prefer Not To Say",
            Self::Independent => "Independent",
            Self::Affiliated => "Affiliated",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|option| option.label() == raw)
    }
}

/// One row of the repeatable education section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub major: String,
    /// Start and end date, each `YYYY-MM-DD` or empty.
    pub period: [String; 2],
}

impl EducationEntry {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn new(school: &str, major: &str, start: &str, end: &str) -> Self {
        Self {
            school: school.to_string(),
            major: major.to_string(),
            period: [start.to_string(), end.to_string()],
        }
    }

    pub fn period_dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = parse_form_date(&self.period[0])?;
        let end = parse_form_date(&self.period[1])?;
        Some((start, end))
    }

    pub(crate) fn text(&self, field: EducationField) -> Option<&str> {
        match field {
            EducationField::School => Some(&self.school),
            EducationField::Major => Some(&self.major),
            EducationField::Period => None,
        }
    }
}

/// Raw values captured by the registration form.
///
/// Select inputs are held as the option label the user picked (or empty), so an
/// untouched select and a cleared select look the same to validation. Typed accessors
/// are provided for callers that need the parsed option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub gender: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub birthplace: String,
    pub height: String,
    pub weight: String,
    pub id_type: String,
    pub id_number: String,
    pub home_address: String,
    pub phone_number: String,
    pub department: String,
    pub position: String,
    pub job_title: String,
    pub start_date_preference: String,
    pub education: Vec<EducationEntry>,
    pub languages: Vec<String>,
    pub computer_skills: Vec<String>,
    pub political_status: String,
    pub account_location: String,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            gender: String::new(),
            nationality: String::new(),
            date_of_birth: String::new(),
            birthplace: String::new(),
            height: String::new(),
            weight: String::new(),
            id_type: IdType::NationalIdCard.label().to_string(),
            id_number: String::new(),
            home_address: String::new(),
            phone_number: String::new(),
            department: String::new(),
            position: String::new(),
            job_title: String::new(),
            start_date_preference: String::new(),
            education: vec![EducationEntry::blank()],
            languages: Vec::new(),
            computer_skills: Vec::new(),
            political_status: String::new(),
            account_location: String::new(),
        }
    }
}

impl RegistrationForm {
    pub fn gender(&self) -> Option<Gender> {
        Gender::from_label(&self.gender)
    }

    pub fn nationality(&self) -> Option<Country> {
        Country::from_label(&self.nationality)
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        parse_form_date(&self.date_of_birth)
    }

    pub fn id_type(&self) -> Option<IdType> {
        IdType::from_label(&self.id_type)
    }

    pub fn start_date_preference(&self) -> Option<StartDatePreference> {
        StartDatePreference::from_label(&self.start_date_preference)
    }

    pub fn political_status(&self) -> Option<PoliticalStatus> {
        PoliticalStatus::from_label(&self.political_status)
    }

    pub fn account_location(&self) -> Option<Country> {
        Country::from_label(&self.account_location)
    }

    /// Text value of a single-valued field; `None` for tag lists.
    pub(crate) fn text(&self, name: FieldName) -> Option<&str> {
        let value = match name {
            FieldName::FullName => &self.full_name,
            FieldName::Gender => &self.gender,
            FieldName::Nationality => &self.nationality,
            FieldName::DateOfBirth => &self.date_of_birth,
            FieldName::Birthplace => &self.birthplace,
            FieldName::Height => &self.height,
            FieldName::Weight => &self.weight,
            FieldName::IdType => &self.id_type,
            FieldName::IdNumber => &self.id_number,
            FieldName::HomeAddress => &self.home_address,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::Department => &self.department,
            FieldName::Position => &self.position,
            FieldName::JobTitle => &self.job_title,
            FieldName::StartDatePreference => &self.start_date_preference,
            FieldName::PoliticalStatus => &self.political_status,
            FieldName::AccountLocation => &self.account_location,
            FieldName::Languages | FieldName::ComputerSkills => return None,
        };
        Some(value.as_str())
    }

    pub(crate) fn text_mut(&mut self, name: FieldName) -> Option<&mut String> {
        let value = match name {
            FieldName::FullName => &mut self.full_name,
            FieldName::Gender => &mut self.gender,
            FieldName::Nationality => &mut self.nationality,
            FieldName::DateOfBirth => &mut self.date_of_birth,
            FieldName::Birthplace => &mut self.birthplace,
            FieldName::Height => &mut self.height,
            FieldName::Weight => &mut self.weight,
            FieldName::IdType => &mut self.id_type,
            FieldName::IdNumber => &mut self.id_number,
            FieldName::HomeAddress => &mut self.home_address,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::Department => &mut self.department,
            FieldName::Position => &mut self.position,
            FieldName::JobTitle => &mut self.job_title,
            FieldName::StartDatePreference => &mut self.start_date_preference,
            FieldName::PoliticalStatus => &mut self.political_status,
            FieldName::AccountLocation => &mut self.account_location,
            FieldName::Languages | FieldName::ComputerSkills => return None,
        };
        Some(value)
    }

    pub(crate) fn tags(&self, name: FieldName) -> Option<&Vec<String>> {
        match name {
            FieldName::Languages => Some(&self.languages),
            FieldName::ComputerSkills => Some(&self.computer_skills),
            _ => None,
        }
    }

    pub(crate) fn tags_mut(&mut self, name: FieldName) -> Option<&mut Vec<String>> {
        match name {
            FieldName::Languages => Some(&mut self.languages),
            FieldName::ComputerSkills => Some(&mut self.computer_skills),
            _ => None,
        }
    }
}

/// Value written to a single field path.
///
/// Deserializes from a JSON string, a two-element array (education periods), or a
/// list of strings (tag inputs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Range([String; 2]),
    Tags(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<[&str; 2]> for FieldValue {
    fn from(value: [&str; 2]) -> Self {
        FieldValue::Range([value[0].to_string(), value[1].to_string()])
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::Tags(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::Tags(value.into_iter().map(str::to_string).collect())
    }
}
