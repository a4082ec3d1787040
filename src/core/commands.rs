use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::document_parser::ResumeImporter;
use super::models::CvData;

const PLAIN_FORMAT_HINT: &str = "Try exporting the resume as .txt or .json.";

/// Import command for the web UI, which uploads files as base64 text.
pub fn import_resume_base64(
    importer: &ResumeImporter,
    file_name: &str,
    file_bytes_base64: &str,
) -> Result<CvData, String> {
    let bytes = STANDARD
        .decode(file_bytes_base64.trim().as_bytes())
        .map_err(|err| format!("invalid base64 input: {err}"))?;

    importer.import_bytes(file_name, &bytes).map_err(|err| {
        if err.is_user_fixable() {
            err.to_string()
        } else {
            format!("{err}. {PLAIN_FORMAT_HINT}")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_imports_payload() {
        let payload = STANDARD.encode(r#"{"basics": {"name": "Grace Hopper", "label": "Admiral"}}"#);
        let cv = import_resume_base64(&ResumeImporter::default(), "grace.json", &payload).unwrap();

        assert_eq!(cv.personal_details.first_name, "Grace");
        assert_eq!(cv.personal_details.job_title, "Admiral");
    }

    #[test]
    fn reports_bad_base64_and_import_errors_as_strings() {
        let importer = ResumeImporter::default();

        let err = import_resume_base64(&importer, "cv.txt", "***").unwrap_err();
        assert!(err.starts_with("invalid base64 input"));

        let payload = STANDARD.encode("[1, 2, 3]");
        let err = import_resume_base64(&importer, "cv.json", &payload).unwrap_err();
        assert_eq!(err, "File does not appear to be in JSON Resume format.");
    }

    #[test]
    fn extraction_failures_suggest_a_plain_format() {
        let payload = STANDARD.encode(b"not a zip");
        let err = import_resume_base64(&ResumeImporter::default(), "cv.docx", &payload).unwrap_err();

        assert!(err.starts_with("Could not extract text"));
        assert!(err.ends_with(PLAIN_FORMAT_HINT));
    }
}
