pub mod commands;
pub mod dates;
pub mod document_parser;
pub mod errors;
pub mod experience;
pub mod field_extractor;
pub mod ids;
pub mod json_resume;
pub mod models;
pub mod section_classifier;
pub mod settings_store;
pub mod text_resume;
