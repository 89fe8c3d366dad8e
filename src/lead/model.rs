use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Kinds of work a lead can ask about. The label is what the email template receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectType {
    #[default]
    #[serde(rename = "3D Website")]
    ThreeDWebsite,
    #[serde(rename = "Modern Website")]
    ModernWebsite,
    #[serde(rename = "E-commerce")]
    ECommerce,
    #[serde(rename = "Custom Development")]
    CustomDevelopment,
    #[serde(rename = "Redesign")]
    Redesign,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::ThreeDWebsite,
        ProjectType::ModernWebsite,
        ProjectType::ECommerce,
        ProjectType::CustomDevelopment,
        ProjectType::Redesign,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::ThreeDWebsite => "3D Website",
            ProjectType::ModernWebsite => "Modern Website",
            ProjectType::ECommerce => "E-commerce",
            ProjectType::CustomDevelopment => "Custom Development",
            ProjectType::Redesign => "Redesign",
        }
    }

    /// Translation key of the option text shown in the select box.
    pub fn translation_key(&self) -> &'static str {
        match self {
            ProjectType::ThreeDWebsite => "contact.project_types.3d_website",
            ProjectType::ModernWebsite => "contact.project_types.modern_website",
            ProjectType::ECommerce => "contact.project_types.e_commerce",
            ProjectType::CustomDevelopment => "contact.project_types.custom_development",
            ProjectType::Redesign => "contact.project_types.redesign",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project type: {0}")]
pub struct UnknownProjectType(pub String);

impl FromStr for ProjectType {
    type Err = UnknownProjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| UnknownProjectType(s.to_string()))
    }
}

/// Form inputs of the contact form, named after their HTML `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Company,
    ProjectType,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl Field {
    pub fn html_name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::ProjectType => "projectType",
            Field::Message => "message",
        }
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    // Accepts both the HTML names and the struct field names validator reports.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "company" => Ok(Field::Company),
            "projectType" | "project_type" => Ok(Field::ProjectType),
            "message" => Ok(Field::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// A prospective customer's contact request, exactly as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct LeadSubmission {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub company: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
    #[validate(custom(function = "known_project_type"))]
    pub project_type: String,
}

impl Default for LeadSubmission {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            message: String::new(),
            project_type: ProjectType::default().label().to_string(),
        }
    }
}

impl LeadSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::ProjectType => &self.project_type,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::ProjectType => self.project_type = value,
            Field::Message => self.message = value,
        }
    }

    /// Runs the form rules. On success returns the parsed project type, otherwise
    /// the offending fields in form order.
    pub fn check(&self) -> Result<ProjectType, Vec<Field>> {
        if let Err(errors) = self.validate() {
            let mut fields: Vec<Field> = errors
                .field_errors()
                .keys()
                .filter_map(|name| name.parse().ok())
                .collect();
            fields.sort();
            fields.dedup();
            return Err(fields);
        }
        self.project_type.parse().map_err(|_| vec![Field::ProjectType])
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn known_project_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<ProjectType>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("unknown_project_type"))
}
