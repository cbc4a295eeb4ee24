//! Per-section prompt construction for text-to-JSON conversion.

use crate::store::Section;

/// JSON-only instruction folded into the prompt. Both backends are plain
/// completion endpoints here, so it rides along with the user text instead
/// of a separate system message.
const JSON_ONLY: &str = "Respond with valid JSON only. \
    Do not include any text outside the JSON value, \
    markdown code fences, or explanations.";

/// Expected shape, spelled out per section so the model returns data the
/// validator will accept.
fn shape_hint(section: Section) -> &'static str {
    match section {
        Section::Personal => {
            "a JSON object with string fields \"name\", \"email\", \"phone\", \
             \"linkedin\" and \"summary\""
        }
        Section::Skills => "a JSON array of skill name strings",
        Section::Projects => {
            "a JSON array of objects with string fields \"title\" and \"description\""
        }
        Section::Education => {
            "a JSON array of objects with string fields \"degree\", \"institution\", \
             \"location\", \"start\", \"end\" and an optional \"notes\""
        }
        Section::Certifications => "a JSON array of certification name strings",
    }
}

pub fn build_prompt(section: Section, text: &str) -> String {
    format!(
        "Convert the following into {} for the '{}' section of a professional resume. {}\n\n{}",
        shape_hint(section),
        section,
        JSON_ONLY,
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_section_and_carries_the_text() {
        let prompt = build_prompt(Section::Skills, "ten years of Go and k8s");
        assert!(prompt.contains("'skills'"));
        assert!(prompt.ends_with("ten years of Go and k8s"));
    }

    #[test]
    fn test_prompt_describes_the_personal_shape() {
        let prompt = build_prompt(Section::Personal, "I'm Jane");
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("JSON object"));
    }

    #[test]
    fn test_every_section_has_a_shape_hint() {
        for section in Section::ALL {
            assert!(!shape_hint(section).is_empty());
        }
    }
}
