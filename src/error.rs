//! Error types shared by the registry, resolver, and renderer

use thiserror::Error;

/// Errors that can occur while resolving or rendering a license
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Identifier did not match any registered license key or alias
    #[error("unsupported license '{identifier}'; use --list to see supported identifiers")]
    UnknownLicense { identifier: String },

    /// A `--set` override that could not be parsed
    #[error("invalid --set value '{assignment}': {reason}")]
    InvalidOverride {
        assignment: String,
        reason: &'static str,
    },

    /// A spec references a template body that is not embedded. This is a
    /// catalog defect, not a user mistake.
    #[error("template file not found: {filename}")]
    TemplateNotFound { filename: String },

    /// A preamble template references a context key that was never
    /// resolved. Also a catalog defect with the built-in licenses.
    #[error("missing value '{key}' required by this template")]
    MissingField { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_license_message_points_at_listing() {
        let err = LicenseError::UnknownLicense {
            identifier: "zlib".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'zlib'"));
        assert!(message.contains("--list"));
    }
}
