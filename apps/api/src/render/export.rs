//! Word-compatible export.
//!
//! Word opens an HTML document carrying the Office namespaces as a native
//! `.doc`, so the export is static markup with print styling, prefixed by a
//! UTF-8 byte-order mark so non-ASCII names survive the round trip.

use bytes::Bytes;

use crate::models::resume::ResumeModel;
use crate::render::{company_line, contact_fields, date_range, gpa_badge, visible_points, SEPARATOR};

pub const EXPORT_CONTENT_TYPE: &str = "application/msword";
pub const EXPORT_EXTENSION: &str = "doc";

const BOM: &str = "\u{feff}";

const STYLESHEET: &str = "\
body { font-family: 'Times New Roman', serif; font-size: 11pt; color: #000; line-height: 1.15; }
h1 { font-size: 20pt; margin-bottom: 5px; text-transform: uppercase; letter-spacing: 1px; }
h2 { font-size: 12pt; border-bottom: 1px solid #000; margin-top: 15px; margin-bottom: 8px; text-transform: uppercase; font-weight: bold; }
p { margin-top: 0; margin-bottom: 3px; }
ul { margin-top: 3px; padding-left: 20px; margin-bottom: 8px; }
li { margin-bottom: 2px; }
.contact-info { margin-bottom: 15px; font-size: 10pt; text-align: center; }
.entry { margin-bottom: 10px; }
.row { display: flex; justify-content: space-between; }
.sub { font-style: italic; margin-bottom: 3px; }";

#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub filename: String,
    pub content_type: &'static str,
    pub body: Bytes,
}

pub fn render_export_document(snapshot: &ResumeModel) -> ExportDocument {
    let mut body = String::from(BOM);
    body.push_str(&render_markup(snapshot));

    ExportDocument {
        filename: export_filename(&snapshot.personal_info.full_name),
        content_type: EXPORT_CONTENT_TYPE,
        body: Bytes::from(body),
    }
}

/// `<name>_Resume.doc`, where every run of whitespace in the name becomes `_`
/// and characters that are unsafe in file names also become `_`.
pub fn export_filename(full_name: &str) -> String {
    let mut stem = String::with_capacity(full_name.len());
    let mut in_gap = false;
    for c in full_name.trim().chars() {
        let unsafe_char = c.is_control()
            || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|');
        if c.is_whitespace() || unsafe_char {
            if !in_gap || unsafe_char {
                stem.push('_');
            }
            in_gap = c.is_whitespace();
        } else {
            stem.push(c);
            in_gap = false;
        }
    }

    if stem.is_empty() {
        format!("Resume.{EXPORT_EXTENSION}")
    } else {
        format!("{stem}_Resume.{EXPORT_EXTENSION}")
    }
}

fn render_markup(snapshot: &ResumeModel) -> String {
    let info = &snapshot.personal_info;
    let name = escape_html(&info.full_name);
    let mut html = String::new();

    html.push_str(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
         xmlns:w='urn:schemas-microsoft-com:office:word' \
         xmlns='http://www.w3.org/TR/REC-html40'>\n",
    );
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{name} Resume</title>\n"));
    html.push_str(&format!("<style>\n{STYLESHEET}\n</style>\n</head>\n<body>\n"));

    // Header
    html.push_str("<div style=\"text-align: center;\">\n");
    html.push_str(&format!("<h1>{name}</h1>\n"));
    let contacts = contact_fields(info);
    if !contacts.is_empty() {
        let line = contacts
            .iter()
            .map(|c| escape_html(c))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        html.push_str(&format!("<div class=\"contact-info\">{line}</div>\n"));
    }
    html.push_str("</div>\n");

    // Education
    html.push_str("<h2>Education</h2>\n");
    for edu in &snapshot.education {
        html.push_str("<div class=\"entry\">\n");
        html.push_str(&format!(
            "<div class=\"row\"><strong>{}</strong><span>{}</span></div>\n",
            escape_html(&edu.institution),
            escape_html(&edu.graduation_date)
        ));
        let mut degree_line = escape_html(&edu.degree);
        if let Some(badge) = gpa_badge(edu) {
            degree_line.push_str(SEPARATOR);
            degree_line.push_str(&escape_html(&badge));
        }
        html.push_str(&format!("<div>{degree_line}</div>\n"));
        html.push_str("</div>\n");
    }

    // Experience
    html.push_str("<h2>Experience</h2>\n");
    for exp in &snapshot.experience {
        html.push_str("<div class=\"entry\">\n");
        html.push_str(&format!(
            "<div class=\"row\"><strong>{}</strong><span>{}</span></div>\n",
            escape_html(&exp.title),
            escape_html(&date_range(exp))
        ));
        let company = company_line(exp);
        if !company.is_empty() {
            html.push_str(&format!(
                "<div class=\"sub\">{}</div>\n",
                escape_html(&company)
            ));
        }
        let bullets: Vec<_> = visible_points(exp).collect();
        if !bullets.is_empty() {
            html.push_str("<ul>\n");
            for point in bullets {
                html.push_str(&format!("<li>{}</li>\n", escape_html(point)));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</div>\n");
    }

    // Skills
    html.push_str("<h2>Skills</h2>\n");
    for skill in &snapshot.skills {
        html.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>\n",
            escape_html(&skill.category),
            escape_html(&skill.items)
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ops;
    use crate::models::resume::{EducationField, ExperienceField, PersonalField};

    fn body_text(doc: &ExportDocument) -> String {
        String::from_utf8(doc.body.to_vec()).unwrap()
    }

    #[test]
    fn test_filename_replaces_whitespace_runs() {
        assert_eq!(export_filename("Alex Rivera"), "Alex_Rivera_Resume.doc");
        assert_eq!(export_filename("Mary  Ann\tLee"), "Mary_Ann_Lee_Resume.doc");
        assert_eq!(export_filename("  Cher  "), "Cher_Resume.doc");
    }

    #[test]
    fn test_filename_replaces_path_separators() {
        assert_eq!(export_filename("A/B Smith"), "A_B_Smith_Resume.doc");
        assert_eq!(export_filename("..\\x"), ".._x_Resume.doc");
        assert!(!export_filename("a/b\\c:d").contains(['/', '\\', ':']));
    }

    #[test]
    fn test_filename_for_blank_name() {
        assert_eq!(export_filename(""), "Resume.doc");
        assert_eq!(export_filename("   "), "Resume.doc");
    }

    #[test]
    fn test_document_starts_with_bom_and_office_namespace() {
        let doc = render_export_document(&ResumeModel::sample());
        assert_eq!(doc.content_type, "application/msword");
        assert_eq!(doc.filename, "Alex_Rivera_Resume.doc");
        assert!(doc.body.starts_with("\u{feff}".as_bytes()));
        assert!(body_text(&doc).contains("urn:schemas-microsoft-com:office:word"));
    }

    #[test]
    fn test_sections_in_screen_order() {
        let text = body_text(&render_export_document(&ResumeModel::sample()));
        let edu = text.find("<h2>Education</h2>").unwrap();
        let exp = text.find("<h2>Experience</h2>").unwrap();
        let skills = text.find("<h2>Skills</h2>").unwrap();
        assert!(edu < exp && exp < skills);
        assert!(text.find("TechCorp Inc.").unwrap() < text.find("University AI Lab").unwrap());
    }

    #[test]
    fn test_current_role_shows_present() {
        let snapshot = ops::update_experience_field(
            &ResumeModel::sample(),
            "2",
            &ExperienceField::EndDate("2099".to_string()),
        );
        let text = body_text(&render_export_document(&snapshot));
        assert!(text.contains("Jan 2023 — Present"));
        assert!(!text.contains("2099"));
    }

    #[test]
    fn test_no_blank_bullets_or_empty_gpa() {
        let mut snapshot = ResumeModel::sample();
        snapshot = ops::add_point(&snapshot, "1");
        snapshot = ops::update_education_field(&snapshot, "1", &EducationField::Gpa(String::new()));
        let text = body_text(&render_export_document(&snapshot));
        assert!(!text.contains("<li></li>"));
        assert!(!text.contains("GPA:"));
    }

    #[test]
    fn test_gpa_badge_exported_when_present() {
        let text = body_text(&render_export_document(&ResumeModel::sample()));
        assert!(text.contains("B.S. Computer Science | GPA: 3.8/4.0"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let snapshot = ops::set_personal_field(
            &ResumeModel::sample(),
            PersonalField::FullName,
            "<script>alert(1)</script>",
        );
        let text = body_text(&render_export_document(&snapshot));
        assert!(!text.contains("<script>"));
        assert!(text.contains("&lt;script&gt;"));
        // Skill categories with ampersands stay readable
        assert!(text.contains("Tools &amp; Frameworks:"));
    }

    #[test]
    fn test_empty_role_has_no_bullet_list() {
        let snapshot = ops::add_experience(&ResumeModel::sample());
        let text = body_text(&render_export_document(&snapshot));
        assert_eq!(text.matches("<ul>").count(), 2);
    }

    #[test]
    fn test_role_without_company_or_location_has_no_sub_line() {
        let snapshot = ops::add_experience(&ResumeModel::sample());
        let text = body_text(&render_export_document(&snapshot));
        assert_eq!(text.matches("<div class=\"sub\">").count(), 2);
        assert!(!text.contains("<div class=\"sub\"></div>"));
    }
}
