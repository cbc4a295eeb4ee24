//! Shape validation for LLM-produced section JSON.
//!
//! The converter refuses to persist output that does not match the target
//! section's schema — a rejected response leaves the store untouched.

use serde_json::Value;

use crate::store::Section;

pub fn validate_section(section: Section, value: &Value) -> Result<(), String> {
    match section {
        Section::Personal => validate_personal(value),
        Section::Skills => validate_string_array(value, "skills"),
        Section::Certifications => validate_string_array(value, "certifications"),
        Section::Projects => validate_projects(value),
        Section::Education => validate_education(value),
    }
}

fn validate_personal(value: &Value) -> Result<(), String> {
    let obj = value
        .as_object()
        .ok_or_else(|| "personal section must be a JSON object".to_string())?;
    for (key, field) in obj {
        if !field.is_string() {
            return Err(format!("personal field '{key}' must be a string"));
        }
    }
    Ok(())
}

fn validate_string_array(value: &Value, section: &str) -> Result<(), String> {
    let items = value
        .as_array()
        .ok_or_else(|| format!("{section} section must be a JSON array"))?;
    for (i, item) in items.iter().enumerate() {
        if !item.is_string() {
            return Err(format!("{section} entry {i} must be a string"));
        }
    }
    Ok(())
}

fn validate_projects(value: &Value) -> Result<(), String> {
    let items = value
        .as_array()
        .ok_or_else(|| "projects section must be a JSON array".to_string())?;
    for (i, item) in items.iter().enumerate() {
        let obj = item
            .as_object()
            .ok_or_else(|| format!("project {i} must be a JSON object"))?;
        for key in ["title", "description"] {
            if let Some(field) = obj.get(key) {
                if !field.is_string() {
                    return Err(format!("project {i} field '{key}' must be a string"));
                }
            }
        }
    }
    Ok(())
}

fn validate_education(value: &Value) -> Result<(), String> {
    let items = value
        .as_array()
        .ok_or_else(|| "education section must be a JSON array".to_string())?;
    for (i, item) in items.iter().enumerate() {
        let obj = item
            .as_object()
            .ok_or_else(|| format!("education entry {i} must be a JSON object"))?;
        for key in ["degree", "institution", "location", "start", "end", "notes"] {
            if let Some(field) = obj.get(key) {
                if !field.is_string() && !field.is_null() {
                    return Err(format!("education entry {i} field '{key}' must be a string"));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_personal_accepts_string_object() {
        let value = json!({"name": "Jane", "email": "jane@x.com"});
        assert!(validate_section(Section::Personal, &value).is_ok());
    }

    #[test]
    fn test_personal_rejects_arrays_and_nested_values() {
        assert!(validate_section(Section::Personal, &json!(["Jane"])).is_err());
        assert!(validate_section(Section::Personal, &json!({"name": ["Jane"]})).is_err());
    }

    #[test]
    fn test_skills_accepts_string_array() {
        assert!(validate_section(Section::Skills, &json!(["Go", "Testing"])).is_ok());
        assert!(validate_section(Section::Skills, &json!([])).is_ok());
    }

    #[test]
    fn test_skills_rejects_objects_and_mixed_arrays() {
        assert!(validate_section(Section::Skills, &json!({"skills": []})).is_err());
        assert!(validate_section(Section::Skills, &json!(["Go", 42])).is_err());
    }

    #[test]
    fn test_projects_require_object_entries_with_string_fields() {
        let good = json!([{"title": "Widget", "description": "A thing."}]);
        assert!(validate_section(Section::Projects, &good).is_ok());

        assert!(validate_section(Section::Projects, &json!(["Widget"])).is_err());
        let bad_field = json!([{"title": 7, "description": "A thing."}]);
        assert!(validate_section(Section::Projects, &bad_field).is_err());
    }

    #[test]
    fn test_education_allows_null_notes() {
        let value = json!([{"degree": "BSc", "notes": null}]);
        assert!(validate_section(Section::Education, &value).is_ok());
    }

    #[test]
    fn test_education_rejects_non_string_core_fields() {
        let value = json!([{"degree": ["BSc"]}]);
        assert!(validate_section(Section::Education, &value).is_err());
    }
}
