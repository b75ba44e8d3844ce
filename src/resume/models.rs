// src/resume/models.rs
use serde::{Deserialize, Serialize};

/// Placeholder for any field that could not be extracted.
pub const NOT_PROVIDED: &str = "Not provided";

/// Fixed-schema output for one résumé. Every key is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StructuredRecord {
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub personal_details: PersonalDetails,
    /// At most one entry.
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub profiles: Profiles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: String,
    pub father_name: String,
    pub gender: String,
    pub languages: Vec<String>,
}

impl PersonalDetails {
    /// Number of scalar fields holding a real value (Languages counts when not the sentinel).
    pub fn populated_fields(&self) -> usize {
        let scalars = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone_number,
            &self.address,
            &self.date_of_birth,
            &self.father_name,
            &self.gender,
        ];
        let populated = scalars.iter().filter(|v| v.as_str() != NOT_PROVIDED).count();
        let languages = usize::from(self.languages.iter().any(|l| l != NOT_PROVIDED));
        populated + languages
    }

    pub const FIELD_COUNT: usize = 9;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Experience {
    pub job_title: String,
    pub company: String,
    pub from_date: String,
    pub to_date: String,
    /// Bullet fragments joined with `" | "`.
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub from_year: String,
    pub to_year: String,
}

/// First URL per platform, or the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profiles {
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
    #[serde(rename = "GitHub")]
    pub github: String,
    #[serde(rename = "Facebook")]
    pub facebook: String,
    #[serde(rename = "X")]
    pub x: String,
    #[serde(rename = "Website")]
    pub website: String,
}
