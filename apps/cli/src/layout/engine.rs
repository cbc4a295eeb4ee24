//! The layout engine: walks the fixed section sequence and emits positioned
//! text ops for a single page.
//!
//! Section order is hard-wired: header → summary → skills → projects →
//! education → certifications. Every section step takes a `Cursor` and
//! returns the next one. Headers are always emitted; an empty section simply
//! contributes no body lines.

use crate::models::resume::{EducationEntry, PersonalInfo, Project, ResumeData};

use super::page::{
    Cursor, FontStyle, Page, BODY_SIZE, HEADER_SIZE, LINE_HEIGHT, NAME_SIZE, X_BASE, X_INDENT,
    X_PARA,
};
use super::wrap::draw_paragraph;

/// Column width for the wrapped summary paragraph.
const SUMMARY_WIDTH: f32 = 500.0;
/// Column width for wrapped project descriptions (narrower, indented column).
const PROJECT_WIDTH: f32 = 470.0;

/// Renders the aggregate into one page of drawing instructions.
/// Deterministic: identical input yields an identical op sequence.
pub fn render(data: &ResumeData) -> Page {
    let mut page = Page::new();
    let cur = Cursor::top();

    let cur = header(&mut page, &data.personal, cur);
    let cur = summary(&mut page, &data.personal, cur);
    let cur = skills(&mut page, &data.skills, cur);
    let cur = projects(&mut page, &data.projects, cur);
    let cur = education(&mut page, &data.education, cur);
    certifications(&mut page, &data.certifications, cur);

    page
}

/// Name in large bold, then a single contact line.
fn header(page: &mut Page, personal: &PersonalInfo, cur: Cursor) -> Cursor {
    page.text(X_BASE, cur, FontStyle::Bold, NAME_SIZE, personal.name.as_str());
    let cur = cur.down(25.0);

    let mut contact = format!("Email: {} | Phone: {}", personal.email, personal.phone);
    if !personal.linkedin.is_empty() {
        contact.push_str(" | LinkedIn: ");
        contact.push_str(&personal.linkedin);
    }
    page.text(X_BASE, cur, FontStyle::Regular, BODY_SIZE, contact);
    cur.down(30.0)
}

fn section_header(page: &mut Page, title: &str, cur: Cursor) -> Cursor {
    page.text(X_BASE, cur, FontStyle::Bold, HEADER_SIZE, title);
    cur.down(15.0)
}

fn summary(page: &mut Page, personal: &PersonalInfo, cur: Cursor) -> Cursor {
    let cur = section_header(page, "PROFESSIONAL SUMMARY", cur);
    let cur = draw_paragraph(
        page,
        &personal.summary,
        X_BASE,
        cur,
        SUMMARY_WIDTH,
        LINE_HEIGHT,
    );
    cur.down(10.0)
}

fn skills(page: &mut Page, skills: &[String], cur: Cursor) -> Cursor {
    let mut cur = section_header(page, "TECHNICAL SKILLS", cur);
    for skill in skills {
        page.text(
            X_INDENT,
            cur,
            FontStyle::Regular,
            BODY_SIZE,
            format!("• {skill}"),
        );
        cur = cur.down(LINE_HEIGHT);
    }
    cur.down(10.0)
}

fn projects(page: &mut Page, projects: &[Project], cur: Cursor) -> Cursor {
    let mut cur = section_header(page, "PROJECTS", cur);
    for project in projects {
        page.text(X_INDENT, cur, FontStyle::Bold, BODY_SIZE, project.title.as_str());
        cur = cur.down(LINE_HEIGHT);
        cur = draw_paragraph(
            page,
            &project.description,
            X_PARA,
            cur,
            PROJECT_WIDTH,
            LINE_HEIGHT,
        );
        cur = cur.down(8.0);
    }
    cur
}

fn education(page: &mut Page, entries: &[EducationEntry], cur: Cursor) -> Cursor {
    let mut cur = section_header(page, "EDUCATION", cur);
    for entry in entries {
        let line = format!(
            "{} | {} | {}",
            entry.degree, entry.institution, entry.location
        );
        page.text(X_INDENT, cur, FontStyle::Regular, BODY_SIZE, line);
        cur = cur.down(LINE_HEIGHT);

        let mut dates = format!("{} - {}", entry.start, entry.end);
        if let Some(notes) = entry.notes.as_deref() {
            if !notes.is_empty() {
                dates.push_str(" | ");
                dates.push_str(notes);
            }
        }
        page.text(X_PARA, cur, FontStyle::Regular, BODY_SIZE, dates);
        cur = cur.down(20.0);
    }
    cur
}

fn certifications(page: &mut Page, certs: &[String], cur: Cursor) -> Cursor {
    let mut cur = section_header(page, "CERTIFICATIONS", cur);
    for cert in certs {
        page.text(
            X_INDENT,
            cur,
            FontStyle::Regular,
            BODY_SIZE,
            format!("• {cert}"),
        );
        cur = cur.down(LINE_HEIGHT);
    }
    cur
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_titles(page: &Page) -> Vec<&str> {
        page.ops()
            .iter()
            .filter(|op| op.style == FontStyle::Bold && op.size == HEADER_SIZE)
            .map(|op| op.text.as_str())
            .collect()
    }

    fn jane_doe() -> ResumeData {
        ResumeData {
            personal: PersonalInfo {
                name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                phone: "555-1234".to_string(),
                linkedin: String::new(),
                summary: "Experienced engineer.".to_string(),
            },
            skills: vec!["Go".to_string(), "Testing".to_string()],
            projects: vec![],
            education: vec![],
            certifications: vec![],
        }
    }

    #[test]
    fn test_empty_resume_renders_headers_only() {
        let page = render(&ResumeData::default());
        assert_eq!(
            header_titles(&page),
            vec![
                "PROFESSIONAL SUMMARY",
                "TECHNICAL SKILLS",
                "PROJECTS",
                "EDUCATION",
                "CERTIFICATIONS"
            ]
        );
        // No body lines: only the (empty) name, the contact line, and the
        // five section headers.
        assert_eq!(page.ops().len(), 7);
        assert!(!page.ops().iter().any(|op| op.text.starts_with("• ")));
    }

    #[test]
    fn test_section_order_is_fixed() {
        let data = ResumeData {
            education: vec![EducationEntry {
                degree: "BSc".to_string(),
                ..Default::default()
            }],
            ..jane_doe()
        };
        let page = render(&data);
        let titles = header_titles(&page);
        assert_eq!(titles[0], "PROFESSIONAL SUMMARY");
        assert_eq!(titles[4], "CERTIFICATIONS");
    }

    #[test]
    fn test_name_is_the_first_drawn_text() {
        let page = render(&jane_doe());
        let first = &page.ops()[0];
        assert_eq!(first.text, "Jane Doe");
        assert_eq!(first.style, FontStyle::Bold);
        assert_eq!(first.size, NAME_SIZE);
    }

    #[test]
    fn test_contact_line_omits_empty_linkedin() {
        let page = render(&jane_doe());
        assert_eq!(page.ops()[1].text, "Email: jane@x.com | Phone: 555-1234");

        let mut data = jane_doe();
        data.personal.linkedin = "linkedin.com/in/janedoe".to_string();
        let page = render(&data);
        assert_eq!(
            page.ops()[1].text,
            "Email: jane@x.com | Phone: 555-1234 | LinkedIn: linkedin.com/in/janedoe"
        );
    }

    #[test]
    fn test_skills_render_as_bulleted_lines() {
        let page = render(&jane_doe());
        let bullets: Vec<&str> = page
            .ops()
            .iter()
            .filter(|op| op.text.starts_with("• "))
            .map(|op| op.text.as_str())
            .collect();
        assert_eq!(bullets, vec!["• Go", "• Testing"]);
    }

    #[test]
    fn test_empty_projects_section_has_header_and_no_body() {
        let page = render(&jane_doe());
        let idx = page
            .ops()
            .iter()
            .position(|op| op.text == "PROJECTS")
            .expect("projects header missing");
        // The very next op is the education header: zero project body lines.
        assert_eq!(page.ops()[idx + 1].text, "EDUCATION");
    }

    #[test]
    fn test_project_description_wraps_into_indented_column() {
        let mut data = jane_doe();
        data.projects = vec![Project {
            title: "Widget".to_string(),
            description: "d".repeat(600),
        }];
        let page = render(&data);
        let title_idx = page
            .ops()
            .iter()
            .position(|op| op.text == "Widget")
            .unwrap();
        assert_eq!(page.ops()[title_idx].x, X_INDENT);
        // ceil(600 / floor(470/6)) = 8 wrapped lines, all at the paragraph indent.
        let wrapped: Vec<_> = page.ops()[title_idx + 1..title_idx + 9]
            .iter()
            .collect();
        assert_eq!(wrapped.len(), 8);
        assert!(wrapped.iter().all(|op| op.x == X_PARA));
    }

    #[test]
    fn test_education_entry_without_notes_omits_separator() {
        let mut data = jane_doe();
        data.education = vec![EducationEntry {
            degree: "BSc Computer Science".to_string(),
            institution: "State University".to_string(),
            location: "Springfield".to_string(),
            start: "2018".to_string(),
            end: "2022".to_string(),
            notes: None,
        }];
        let page = render(&data);
        let dates = page
            .ops()
            .iter()
            .find(|op| op.text.starts_with("2018"))
            .unwrap();
        assert_eq!(dates.text, "2018 - 2022");
        assert_eq!(dates.x, X_PARA);
    }

    #[test]
    fn test_education_notes_append_with_separator() {
        let mut data = jane_doe();
        data.education = vec![EducationEntry {
            degree: "BSc".to_string(),
            start: "2018".to_string(),
            end: "2022".to_string(),
            notes: Some("Dean's list".to_string()),
            ..Default::default()
        }];
        let page = render(&data);
        assert!(page
            .ops()
            .iter()
            .any(|op| op.text == "2018 - 2022 | Dean's list"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let data = jane_doe();
        assert_eq!(render(&data), render(&data));
    }

    #[test]
    fn test_rendering_does_not_mutate_input() {
        let data = jane_doe();
        let before = data.clone();
        let _ = render(&data);
        assert_eq!(data, before);
    }

    #[test]
    fn test_cursor_only_moves_down() {
        let mut data = jane_doe();
        data.projects = vec![Project {
            title: "One".to_string(),
            description: "A short description.".to_string(),
        }];
        let page = render(&data);
        for pair in page.ops().windows(2) {
            assert!(
                pair[1].y <= pair[0].y,
                "y increased from {} to {}",
                pair[0].y,
                pair[1].y
            );
        }
    }
}
