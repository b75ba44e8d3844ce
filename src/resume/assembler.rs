// src/resume/assembler.rs
use std::path::Path;
use crate::config::SkillVocabulary;
use crate::document::{self, DocumentKind, TextBlob};
use crate::extractors::{certifications, education, experience, personal, profiles, SkillMatcher};
use crate::extractors::{EducationMatch, ExperienceMatch};
use crate::resume::models::{
    Education, Experience, PersonalDetails, Profiles, StructuredRecord, NOT_PROVIDED,
};
use crate::utils::error::{ConfigError, ExtractError};

const DESCRIPTION_SEPARATOR: &str = " | ";

/// A document that made it through text extraction and field assembly.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub kind: DocumentKind,
    pub text: TextBlob,
    pub record: StructuredRecord,
}

/// Runs every field extractor over a text blob and merges the results into a record.
/// Holds no per-document state, so one parser can serve any number of documents.
pub struct ResumeParser {
    skills: SkillMatcher,
}

impl ResumeParser {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self, ConfigError> {
        Ok(Self {
            skills: SkillMatcher::new(vocabulary)?,
        })
    }

    /// Extracts the document's text and assembles its record.
    /// Fails only for an unsupported extension or an unreadable document.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedDocument, ExtractError> {
        let (kind, text) = document::extract_text(path)?;
        tracing::debug!("\n====== Extracted Resume Text ======\n{}\n===================================", text.as_str());

        let record = self.parse_text(&text);
        tracing::info!(
            "Assembled record for {}: {}/{} personal fields, {} skills",
            path.display(),
            record.personal_details.populated_fields(),
            PersonalDetails::FIELD_COUNT,
            record.skills.len()
        );

        Ok(ParsedDocument { kind, text, record })
    }

    /// Invokes each field extractor once and builds the fixed-schema record.
    pub fn parse_text(&self, blob: &TextBlob) -> StructuredRecord {
        let text = blob.as_str();

        let name = personal::extract_name(text);
        let emails = personal::extract_emails(text);
        let phones = personal::extract_phone_numbers(text);
        let profiles = profiles::extract_profiles(text);
        let experience = experience::extract_experience(text);
        let education = education::extract_education(text);
        let address = personal::extract_address(text);
        let date_of_birth = personal::extract_date_of_birth(text);
        let skills = self.skills.extract(text);
        let father_name = personal::extract_father_name(text);
        let gender = personal::extract_gender(text);
        let languages = personal::extract_languages(text);
        let certifications = certifications::extract_certifications(text);

        StructuredRecord {
            skills,
            certifications,
            personal_details: PersonalDetails {
                first_name: name.first,
                last_name: name.last,
                email: first_or_missing(&emails),
                phone_number: first_or_missing(&phones),
                address: non_empty_or_missing(address),
                date_of_birth: non_empty_or_missing(date_of_birth),
                father_name,
                gender,
                languages,
            },
            experience: experience.iter().map(assemble_experience).collect(),
            education: education.iter().map(assemble_education).collect(),
            profiles: Profiles {
                linkedin: first_or_missing(&profiles.linkedin),
                github: first_or_missing(&profiles.github),
                facebook: first_or_missing(&profiles.facebook),
                x: first_or_missing(&profiles.x),
                website: first_or_missing(&profiles.website),
            },
        }
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self {
            skills: SkillMatcher::default(),
        }
    }
}

fn first_or_missing(values: &[String]) -> String {
    values.first().cloned().unwrap_or_else(|| NOT_PROVIDED.to_string())
}

fn non_empty_or_missing(value: String) -> String {
    if value.is_empty() { NOT_PROVIDED.to_string() } else { value }
}

/// Splits on a literal hyphen: first segment and last segment, trimmed.
/// `None` when the value has no hyphen.
fn split_range(value: &str) -> Option<(String, String)> {
    if !value.contains('-') {
        return None;
    }
    let mut parts = value.split('-');
    let from = parts.next().unwrap_or_default().trim().to_string();
    let to = parts.last().unwrap_or_default().trim().to_string();
    Some((from, to))
}

fn assemble_experience(entry: &ExperienceMatch) -> Experience {
    // Without a hyphen the whole duration is the start and the role is ongoing
    let (from_date, to_date) = split_range(&entry.duration)
        .unwrap_or_else(|| (entry.duration.clone(), "Present".to_string()));

    Experience {
        job_title: entry.job_title.clone(),
        company: entry.company.clone(),
        from_date,
        to_date,
        job_description: entry.description.join(DESCRIPTION_SEPARATOR),
    }
}

fn assemble_education(entry: &EducationMatch) -> Education {
    // Unlike experience, a year without a range leaves both ends unknown
    let (from_year, to_year) = split_range(&entry.year)
        .unwrap_or_else(|| (NOT_PROVIDED.to_string(), NOT_PROVIDED.to_string()));

    Education {
        institution: entry.institution.clone(),
        degree: entry.degree.clone(),
        from_year,
        to_year,
    }
}
