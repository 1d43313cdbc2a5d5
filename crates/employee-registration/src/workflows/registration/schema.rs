use serde::Serialize;

use super::domain::{Country, Gender, IdType, PoliticalStatus, StartDatePreference};
use super::path::{EducationField, FieldName};

/// Visual grouping of the form; also the traversal order used by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSection {
    Personal,
    Contact,
    Professional,
    Education,
    Skills,
    Status,
}

impl FormSection {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Personal,
            Self::Contact,
            Self::Professional,
            Self::Education,
            Self::Skills,
            Self::Status,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Contact => "Contact Information",
            Self::Professional => "Professional Information",
            Self::Education => "Education",
            Self::Skills => "Skills & Languages",
            Self::Status => "Status Information",
        }
    }
}

/// Format rule applied once a value is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFormat {
    /// Any text.
    Text,
    /// One of the descriptor's options.
    Select,
    /// ASCII digits only.
    Numeric,
    /// `YYYY-MM-DD`, not after today.
    PastDate,
    /// Positive whole number.
    Measure,
    /// Free-form list of tags.
    Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: FieldName,
    pub label: &'static str,
    /// Lower-case phrase used inside messages ("Please enter your <noun>").
    pub noun: &'static str,
    pub section: FormSection,
    pub required: bool,
    pub format: FieldFormat,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
}

impl FieldDescriptor {
    fn new(
        name: FieldName,
        label: &'static str,
        noun: &'static str,
        section: FormSection,
        format: FieldFormat,
    ) -> Self {
        Self {
            name,
            label,
            noun,
            section,
            required: true,
            format,
            options: Vec::new(),
        }
    }

    fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn with_options(mut self, options: impl IntoIterator<Item = &'static str>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Message reported when a required value is missing.
    pub fn required_message(&self) -> String {
        match self.format {
            FieldFormat::Select => format!("Please select your {}", self.noun),
            _ => format!("Please enter your {}", self.noun),
        }
    }
}

/// Sub-field of an education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationDescriptor {
    pub field: EducationField,
    pub label: &'static str,
    pub noun: &'static str,
}

impl EducationDescriptor {
    pub fn required_message(&self) -> String {
        format!("Please enter your {}", self.noun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    fields: Vec<FieldDescriptor>,
    education: Vec<EducationDescriptor>,
}

impl FormSchema {
    /// The employee registration schema in display order.
    pub fn standard() -> Self {
        use FieldFormat::*;
        use FormSection::*;

        let fields = vec![
            FieldDescriptor::new(FieldName::FullName, "Full Name", "full name", Personal, Text),
            FieldDescriptor::new(FieldName::Gender, "Gender", "gender", Personal, Select)
                .with_options(Gender::ordered().map(Gender::label)),
            FieldDescriptor::new(
                FieldName::Nationality,
                "Nationality",
                "nationality",
                Personal,
                Select,
            )
            .with_options(Country::ordered().map(Country::label)),
            FieldDescriptor::new(
                FieldName::DateOfBirth,
                "Date of Birth",
                "date of birth",
                Personal,
                PastDate,
            ),
            FieldDescriptor::new(
                FieldName::Birthplace,
                "Birthplace",
                "birthplace",
                Personal,
                Text,
            ),
            FieldDescriptor::new(FieldName::Height, "Height (cm)", "height", Personal, Measure)
                .optional(),
            FieldDescriptor::new(FieldName::Weight, "Weight (kg)", "weight", Personal, Measure)
                .optional(),
            FieldDescriptor::new(FieldName::IdType, "ID Type", "ID type", Personal, Select)
                .optional()
                .with_options(IdType::ordered().map(IdType::label)),
            FieldDescriptor::new(FieldName::IdNumber, "ID Number", "ID number", Personal, Numeric),
            FieldDescriptor::new(
                FieldName::HomeAddress,
                "Home Address",
                "home address",
                Contact,
                Text,
            ),
            FieldDescriptor::new(
                FieldName::PhoneNumber,
                "Phone Number",
                "phone number",
                Contact,
                Numeric,
            ),
            FieldDescriptor::new(
                FieldName::Department,
                "Department",
                "department",
                Professional,
                Text,
            ),
            FieldDescriptor::new(FieldName::Position, "Position", "position", Professional, Text),
            FieldDescriptor::new(FieldName::JobTitle, "Job Title", "job title", Professional, Text),
            FieldDescriptor::new(
                FieldName::StartDatePreference,
                "Start Date Preference",
                "start date preference",
                Professional,
                Select,
            )
            .with_options(StartDatePreference::ordered().map(StartDatePreference::label)),
            FieldDescriptor::new(FieldName::Languages, "Languages", "languages", Skills, Tags)
                .optional()
                .with_options(["Indonesian", "Malay", "English"]),
            FieldDescriptor::new(
                FieldName::ComputerSkills,
                "Computer Skills",
                "computer skills",
                Skills,
                Tags,
            )
            .optional()
            .with_options([
                "TypeScript",
                "PHP",
                "Python",
                "JavaScript",
                "React",
                "Node.js",
            ]),
            FieldDescriptor::new(
                FieldName::PoliticalStatus,
                "Political Status",
                "political status",
                Status,
                Select,
            )
            .optional()
            .with_options(PoliticalStatus::ordered().map(PoliticalStatus::label)),
            FieldDescriptor::new(
                FieldName::AccountLocation,
                "Account Location",
                "location",
                Status,
                Select,
            )
            .optional()
            .with_options(Country::ordered().map(Country::label)),
        ];

        let education = vec![
            EducationDescriptor {
                field: EducationField::School,
                label: "School/University",
                noun: "school/university",
            },
            EducationDescriptor {
                field: EducationField::Major,
                label: "Major/Field of Study",
                noun: "major/field of study",
            },
            EducationDescriptor {
                field: EducationField::Period,
                label: "Education Period",
                noun: "education period",
            },
        ];

        Self { fields, education }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn education(&self) -> &[EducationDescriptor] {
        &self.education
    }

    pub fn descriptor(&self, name: FieldName) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|descriptor| descriptor.name == name)
    }

    pub fn education_descriptor(&self, field: EducationField) -> Option<&EducationDescriptor> {
        self.education
            .iter()
            .find(|descriptor| descriptor.field == field)
    }

    pub fn fields_in(&self, section: FormSection) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(move |descriptor| descriptor.section == section)
    }

    /// Required top-level fields plus the education list.
    pub fn required_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|descriptor| descriptor.required)
            .count()
            + 1
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::standard()
    }
}
