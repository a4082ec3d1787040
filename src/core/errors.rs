use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    Format(String),
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Unsupported file type: {0}. Please use .json, .txt, .docx or .pdf.")]
    UnsupportedFileType(String),
    #[error("Could not extract text: {0}")]
    Extraction(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CoreError {
    pub fn not_json_resume() -> Self {
        CoreError::Format("File does not appear to be in JSON Resume format.".to_string())
    }

    /// The user can retry with a different file or a corrected one.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, CoreError::Extraction(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            CoreError::not_json_resume().to_string(),
            "File does not appear to be in JSON Resume format."
        );
        assert_eq!(
            CoreError::UnsupportedFileType("cv.odt".to_string()).to_string(),
            "Unsupported file type: cv.odt. Please use .json, .txt, .docx or .pdf."
        );
    }

    #[test]
    fn extraction_failures_are_not_user_fixable() {
        assert!(!CoreError::Extraction("bad xref".to_string()).is_user_fixable());
        assert!(CoreError::InvalidJson("eof".to_string()).is_user_fixable());
    }
}
