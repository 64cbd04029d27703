//! Error types for template assembly

use thiserror::Error;

/// Errors raised while declaring template parameters
///
/// Value-level constraint violations (length, range, allowed values) are
/// not errors here; CloudFormation reports those at stack-validation time.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The same logical id was declared twice within one template
    #[error("parameter '{id}' is already declared in this template")]
    DuplicateParameter { id: String },
}

/// Result type alias for TemplateError
pub type Result<T> = std::result::Result<T, TemplateError>;
