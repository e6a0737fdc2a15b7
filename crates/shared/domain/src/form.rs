//! Registration form state and its per-field reducer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported professional experience.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    #[default]
    #[serde(rename = "Fresher")]
    Fresher,
    #[serde(rename = "0–1 years")]
    UpToOneYear,
    #[serde(rename = "1–3 years")]
    OneToThreeYears,
    #[serde(rename = "3–5 years")]
    ThreeToFiveYears,
    #[serde(rename = "5+ years")]
    FivePlusYears,
}

impl Experience {
    /// Every option, in the order the select shows them.
    pub const ALL: [Self; 5] = [
        Self::Fresher,
        Self::UpToOneYear,
        Self::OneToThreeYears,
        Self::ThreeToFiveYears,
        Self::FivePlusYears,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fresher => "Fresher",
            Self::UpToOneYear => "0–1 years",
            Self::OneToThreeYears => "1–3 years",
            Self::ThreeToFiveYears => "3–5 years",
            Self::FivePlusYears => "5+ years",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The course catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    #[default]
    #[serde(rename = "Java + Spring Boot")]
    JavaSpringBoot,
    #[serde(rename = "Full‑Stack: Java + React")]
    FullStackJavaReact,
    #[serde(rename = "Data Engineering (Java + Spark + SQL)")]
    DataEngineering,
}

impl Course {
    pub const ALL: [Self; 3] = [Self::JavaSpringBoot, Self::FullStackJavaReact, Self::DataEngineering];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::JavaSpringBoot => "Java + Spring Boot",
            Self::FullStackJavaReact => "Full‑Stack: Java + React",
            Self::DataEngineering => "Data Engineering (Java + Spark + SQL)",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classes only run on weekends, so the batch is fixed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Batch {
    #[default]
    #[serde(rename = "Weekend (Sat–Sun)")]
    Weekend,
}

impl Batch {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekend => "Weekend (Sat–Sun)",
        }
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prospective-student details, one instance per page session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub experience: Experience,
    pub course: Course,
    /// Not user-editable; there is no [`FieldUpdate`] for it.
    pub batch: Batch,
    /// Optional free text. Cleared after a successful registration.
    pub goals: String,
    pub consent: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            experience: Experience::default(),
            course: Course::default(),
            batch: Batch::default(),
            goals: String::new(),
            consent: true,
        }
    }
}

/// A single edit coming from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FullName(String),
    Email(String),
    Phone(String),
    Experience(Experience),
    Course(Course),
    Goals(String),
    Consent(bool),
}

impl RegistrationForm {
    /// Applies one field edit. Pure: only the named field changes.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FullName(value) => self.full_name = value,
            FieldUpdate::Email(value) => self.email = value,
            FieldUpdate::Phone(value) => self.phone = value,
            FieldUpdate::Experience(value) => self.experience = value,
            FieldUpdate::Course(value) => self.course = value,
            FieldUpdate::Goals(value) => self.goals = value,
            FieldUpdate::Consent(value) => self.consent = value,
        }
    }

    /// Builder-style variant of [`RegistrationForm::apply`].
    #[must_use]
    pub fn with(mut self, update: FieldUpdate) -> Self {
        self.apply(update);
        self
    }
}
