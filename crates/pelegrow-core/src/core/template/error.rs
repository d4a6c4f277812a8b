use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Section between '{start}' and '{end}' not found in template")]
    SectionNotFound {
        start: &'static str,
        end: &'static str,
    },
    #[error("Template '{name}' is empty")]
    EmptyTemplate { name: String },
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
