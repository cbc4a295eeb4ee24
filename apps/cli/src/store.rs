//! Per-section JSON stores — the only persisted state in vitae.
//!
//! Each of the five fixed sections lives in its own file under the data
//! directory. A missing file is never an error: it loads as the section's
//! empty default (`{}` for personal, `[]` for the list sections). Malformed
//! JSON in an existing file is a hard error.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use clap::ValueEnum;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeData;

/// The five fixed resume sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Personal,
    Skills,
    Projects,
    Education,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Personal,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Certifications,
    ];

    /// Store file name. Certifications keeps its historical short name.
    pub fn file_name(self) -> &'static str {
        match self {
            Section::Personal => "personal.json",
            Section::Skills => "skills.json",
            Section::Projects => "projects.json",
            Section::Education => "education.json",
            Section::Certifications => "certs.json",
        }
    }

    /// Empty default used when the store file does not exist yet.
    pub fn empty_value(self) -> Value {
        match self {
            Section::Personal => Value::Object(serde_json::Map::new()),
            _ => Value::Array(Vec::new()),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Personal => "personal",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Certifications => "certifications",
        };
        f.write_str(name)
    }
}

/// File-backed store for the five section files.
///
/// Only the interactive updater and the text-to-JSON converter write through
/// it; PDF generation only reads.
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, section: Section) -> PathBuf {
        self.dir.join(section.file_name())
    }

    /// Loads a section's raw JSON value, substituting the empty default when
    /// the file is absent.
    pub fn load_value(&self, section: Section) -> Result<Value, AppError> {
        let path = self.path(section);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} missing, using empty default", path.display());
                Ok(section.empty_value())
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Persists a section value, pretty-printed, creating the data directory
    /// on first write.
    pub fn save_value(&self, section: Section, value: &Value) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        let text = serde_json::to_string_pretty(value)?;
        fs::write(self.path(section), text)?;
        Ok(())
    }

    /// Assembles the fully-defaulted aggregate the layout engine consumes.
    /// Missing files and missing fields both collapse to empty values.
    pub fn load_resume(&self) -> Result<ResumeData, AppError> {
        Ok(ResumeData {
            personal: serde_json::from_value(self.load_value(Section::Personal)?)?,
            skills: serde_json::from_value(self.load_value(Section::Skills)?)?,
            projects: serde_json::from_value(self.load_value(Section::Projects)?)?,
            education: serde_json::from_value(self.load_value(Section::Education)?)?,
            certifications: serde_json::from_value(self.load_value(Section::Certifications)?)?,
        })
    }
}
