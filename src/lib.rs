pub mod core;

pub use crate::core::document_parser::{ImportFormat, ResumeImporter};
pub use crate::core::errors::CoreError;
pub use crate::core::json_resume::{looks_like_json_resume, map_json_resume, parse_json_resume};
pub use crate::core::models::{CvData, ImportSettings};
pub use crate::core::text_resume::segment_text_resume;

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
