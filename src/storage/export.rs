// src/storage/export.rs
//! Flat, one-row-per-résumé tabular export.

use std::fs::File;
use std::path::{Path, PathBuf};
use crate::resume::models::StructuredRecord;
use crate::utils::error::StorageError;

/// Where a column's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    FirstName,
    LastName,
    FatherName,
    DateOfBirth,
    Gender,
    Email,
    Languages,
    Address,
    PhoneNumber,
    JobTitle,
    Company,
    JobDescription,
    JobFrom,
    JobTo,
    Institution,
    Degree,
    EducationFrom,
    EducationTo,
    Certification(usize),
    Skills,
    /// Column kept for layout compatibility; nothing feeds it.
    Blank,
}

// Column names repeat ("From date", "To date"), so position is what identifies a column.
const COLUMNS: &[(&str, Source)] = &[
    ("First Name", Source::FirstName),
    ("Middle Name", Source::Blank),
    ("Last Name", Source::LastName),
    ("Father Name", Source::FatherName),
    ("DOB", Source::DateOfBirth),
    ("Gender", Source::Gender),
    ("Email ID", Source::Email),
    ("Languages", Source::Languages),
    ("Residential Address", Source::Address),
    ("Current Address", Source::Address),
    ("Phone No", Source::PhoneNumber),
    ("Total Experience", Source::Blank),
    ("Job Title", Source::JobTitle),
    ("Company", Source::Company),
    ("Office Location", Source::Blank),
    ("Job Description", Source::JobDescription),
    ("From date", Source::JobFrom),
    ("To date", Source::JobTo),
    ("Institution", Source::Institution),
    ("Major", Source::Blank),
    ("Degree", Source::Degree),
    ("School Location", Source::Blank),
    ("Description", Source::Blank),
    ("From date", Source::EducationFrom),
    ("To date", Source::EducationTo),
    ("Certification 1", Source::Certification(0)),
    ("Certification 2", Source::Certification(1)),
    ("Certification 3", Source::Certification(2)),
    ("Key skills", Source::Skills),
];

const LIST_SEPARATOR: &str = ", ";

/// The fixed export header, in column order.
pub fn header() -> Vec<&'static str> {
    COLUMNS.iter().map(|(name, _)| *name).collect()
}

/// One export row for a record, aligned with [`header`].
/// Only the first experience, the first education entry and the first three
/// certifications are exported.
pub fn flatten(record: &StructuredRecord) -> Vec<String> {
    COLUMNS.iter().map(|(_, source)| cell(record, *source)).collect()
}

fn cell(record: &StructuredRecord, source: Source) -> String {
    let details = &record.personal_details;
    let job = record.experience.first();
    let school = record.education.first();

    let value = match source {
        Source::FirstName => Some(&details.first_name),
        Source::LastName => Some(&details.last_name),
        Source::FatherName => Some(&details.father_name),
        Source::DateOfBirth => Some(&details.date_of_birth),
        Source::Gender => Some(&details.gender),
        Source::Email => Some(&details.email),
        Source::Address => Some(&details.address),
        Source::PhoneNumber => Some(&details.phone_number),
        Source::JobTitle => job.map(|j| &j.job_title),
        Source::Company => job.map(|j| &j.company),
        Source::JobDescription => job.map(|j| &j.job_description),
        Source::JobFrom => job.map(|j| &j.from_date),
        Source::JobTo => job.map(|j| &j.to_date),
        Source::Institution => school.map(|s| &s.institution),
        Source::Degree => school.map(|s| &s.degree),
        Source::EducationFrom => school.map(|s| &s.from_year),
        Source::EducationTo => school.map(|s| &s.to_year),
        Source::Certification(idx) => record.certifications.get(idx),
        Source::Languages => return details.languages.join(LIST_SEPARATOR),
        Source::Skills => return record.skills.join(LIST_SEPARATOR),
        Source::Blank => None,
    };

    value.cloned().unwrap_or_default()
}

/// Writes the header once, then one row per appended record.
/// Nothing touches the disk until the first record arrives.
pub struct CsvExporter {
    path: PathBuf,
    writer: Option<csv::Writer<File>>,
    rows: usize,
}

impl CsvExporter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            writer: None,
            rows: 0,
        }
    }

    pub fn append(&mut self, record: &StructuredRecord) -> Result<(), StorageError> {
        if self.writer.is_none() {
            self.writer = Some(Self::open(&self.path)?);
        }
        if let Some(writer) = self.writer.as_mut() {
            writer
                .write_record(flatten(record))
                .map_err(|e| StorageError::CsvError(e.to_string()))?;
            self.rows += 1;
        }
        Ok(())
    }

    /// Flushes buffered rows. Returns the export path, or `None` when no record was appended.
    pub fn finish(self) -> Result<Option<PathBuf>, StorageError> {
        let Some(mut writer) = self.writer else {
            tracing::info!("No records to export; {} not written", self.path.display());
            return Ok(None);
        };
        writer.flush()?;
        tracing::info!("Exported {} row(s) to {}", self.rows, self.path.display());
        Ok(Some(self.path))
    }

    fn open(path: &Path) -> Result<csv::Writer<File>, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path).map_err(|e| StorageError::CsvError(e.to_string()))?;
        writer
            .write_record(header())
            .map_err(|e| StorageError::CsvError(e.to_string()))?;
        Ok(writer)
    }
}
