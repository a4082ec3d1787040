use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{info, warn};

use super::errors::CoreError;
use super::json_resume::parse_json_resume;
use super::models::{CvData, ImportSettings};
use super::text_resume::segment_text_resume;

const PDF_MAGIC: &[u8] = b"%PDF-";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const DOCX_BODY_PART: &str = "word/document.xml";
const PARAGRAPH_TAG: &[u8] = b"w:p";
const RUN_BREAK_TAGS: [&[u8]; 2] = [b"w:tab", b"w:br"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    JsonResume,
    PlainText,
    Docx,
    Pdf,
}

impl ImportFormat {
    /// Picks a format from the file extension, falling back to the leading
    /// bytes when the extension is missing or unknown.
    pub fn detect(file_name: &str, data: &[u8]) -> Option<Self> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|v| v.to_str())
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Some(Self::JsonResume),
            "txt" => Some(Self::PlainText),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => Self::sniff(data),
        }
    }

    fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(PDF_MAGIC) {
            return Some(Self::Pdf);
        }
        if data.starts_with(ZIP_MAGIC) {
            return Some(Self::Docx);
        }

        let text = std::str::from_utf8(data).ok()?;
        if text.trim_start().starts_with('{') {
            Some(Self::JsonResume)
        } else {
            Some(Self::PlainText)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JsonResume => "json",
            Self::PlainText => "text",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }
}

pub struct ResumeImporter {
    settings: ImportSettings,
}

impl ResumeImporter {
    pub fn new(settings: ImportSettings) -> Self {
        Self {
            settings: settings.sanitized(),
        }
    }

    pub fn import_bytes(&self, file_name: &str, data: &[u8]) -> Result<CvData, CoreError> {
        let result = self.import_inner(file_name, data);
        match &result {
            Ok(cv) => info!(file = file_name, items = cv.item_count(), "resume imported"),
            Err(err) => warn!(file = file_name, error = %err, "resume import failed"),
        }
        result
    }

    fn import_inner(&self, file_name: &str, data: &[u8]) -> Result<CvData, CoreError> {
        if data.is_empty() {
            return Err(CoreError::InvalidRequest(format!("{file_name} is empty")));
        }
        if data.len() > self.settings.max_file_bytes {
            return Err(CoreError::InvalidRequest(format!(
                "{file_name} is {} bytes, the limit is {}",
                data.len(),
                self.settings.max_file_bytes
            )));
        }

        let format = ImportFormat::detect(file_name, data)
            .ok_or_else(|| CoreError::UnsupportedFileType(file_name.to_string()))?;
        info!(file = file_name, format = format.as_str(), "importing resume");

        let mut cv = match format {
            ImportFormat::JsonResume => {
                let text = std::str::from_utf8(data).map_err(|err| {
                    CoreError::InvalidRequest(format!("{file_name} is not UTF-8: {err}"))
                })?;
                parse_json_resume(text)?
            }
            ImportFormat::PlainText => segment_text_resume(&String::from_utf8_lossy(data)),
            ImportFormat::Docx => {
                let text = extract_docx_text(data)
                    .map_err(|err| CoreError::Extraction(format!("{file_name}: {err}")))?;
                segment_text_resume(&text)
            }
            ImportFormat::Pdf => {
                let text = extract_pdf_text(data)
                    .map_err(|err| CoreError::Extraction(format!("{file_name}: {err}")))?;
                segment_text_resume(&text)
            }
        };

        self.apply_name_fallback(&mut cv);
        Ok(cv)
    }

    fn apply_name_fallback(&self, cv: &mut CvData) {
        let details = &mut cv.personal_details;
        if self.settings.apply_name_fallback
            && details.first_name.is_empty()
            && details.last_name.is_empty()
        {
            details.first_name = self.settings.fallback_first_name.clone();
            details.last_name = self.settings.fallback_last_name.clone();
        }
    }
}

impl Default for ResumeImporter {
    fn default() -> Self {
        Self::new(ImportSettings::default())
    }
}

fn extract_pdf_text(data: &[u8]) -> anyhow::Result<String> {
    let text = pdf_extract::extract_text_from_mem(data)?;
    Ok(text)
}

/// One line per non-empty `w:p` paragraph of `word/document.xml`.
pub fn extract_docx_text(data: &[u8]) -> anyhow::Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)?
        .read_to_string(&mut xml)?;
    paragraph_lines(&xml)
}

fn paragraph_lines(xml: &str) -> anyhow::Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut lines = Vec::new();
    // Some while inside a paragraph; text outside paragraphs is ignored.
    let mut paragraph: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(tag) if tag.name().as_ref() == PARAGRAPH_TAG => {
                paragraph = Some(String::new());
            }
            Event::End(tag) if tag.name().as_ref() == PARAGRAPH_TAG => {
                let text = paragraph.take().unwrap_or_default();
                let text = text.trim();
                if !text.is_empty() {
                    lines.push(text.to_string());
                }
            }
            Event::Empty(tag) if RUN_BREAK_TAGS.contains(&tag.name().as_ref()) => {
                if let Some(text) = paragraph.as_mut() {
                    text.push(' ');
                }
            }
            Event::Text(text) => {
                if let Some(current) = paragraph.as_mut() {
                    current.push_str(&text.xml_content()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}
