use serde::{Deserialize, Serialize};

/// Contact header and summary paragraph. Every field defaults to the empty
/// string so a sparse `personal.json` loads without error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Appended to the contact line only when non-empty.
    pub linkedin: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start: String,
    pub end: String,
    /// Appended to the date line as " | {notes}" when present and non-empty.
    pub notes: Option<String>,
}

/// The sole input to the layout engine: one personal block plus four ordered
/// lists, assembled fresh per invocation by the data store. The engine only
/// reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub personal: PersonalInfo,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_info_missing_fields_default_to_empty() {
        let personal: PersonalInfo = serde_json::from_str(r#"{"name": "Jane Doe"}"#).unwrap();
        assert_eq!(personal.name, "Jane Doe");
        assert_eq!(personal.email, "");
        assert_eq!(personal.linkedin, "");
        assert_eq!(personal.summary, "");
    }

    #[test]
    fn test_education_entry_notes_optional() {
        let entry: EducationEntry =
            serde_json::from_str(r#"{"degree": "BSc", "start": "2018", "end": "2022"}"#).unwrap();
        assert_eq!(entry.notes, None);
        assert_eq!(entry.institution, "");
    }

    #[test]
    fn test_resume_data_default_is_fully_empty() {
        let data = ResumeData::default();
        assert!(data.skills.is_empty());
        assert!(data.projects.is_empty());
        assert_eq!(data.personal, PersonalInfo::default());
    }
}
