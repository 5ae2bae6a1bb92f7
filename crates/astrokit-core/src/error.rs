use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Invalid template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("No value bound for placeholder ${{{0}}}")]
    MissingBinding(String),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Template pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid color model '{0}'")]
    InvalidColorModel(String),

    #[error("Channel length mismatch: expected {expected}, got {actual}")]
    InvalidDimensions { expected: usize, actual: usize },
}

impl AstroError {
    pub(crate) fn invalid_template(template: &str, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AstroError>;
