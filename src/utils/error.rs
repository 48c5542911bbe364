use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid sample range for {field}: {reason}")]
    InvalidRange { field: String, reason: String },

    #[error("Sample length mismatch: likelihood has {likelihood} values, impact has {impact}")]
    LengthMismatch { likelihood: usize, impact: usize },

    #[error("Empty input: {what}")]
    EmptyInput { what: String },

    #[error("Invalid input '{input}': {reason}")]
    InvalidUserInput { input: String, reason: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Chart rendering failed: {message}")]
    RenderError { message: String },

    #[error("PNG encoding failed: {0}")]
    EncodeError(#[from] image::ImageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Computation,
    Output,
}

impl SimError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SimError::InvalidRange { .. }
            | SimError::InvalidConfigValueError { .. }
            | SimError::MissingConfigError { .. }
            | SimError::TomlError(_) => ErrorCategory::Configuration,
            SimError::InvalidUserInput { .. } => ErrorCategory::Input,
            SimError::LengthMismatch { .. } | SimError::EmptyInput { .. } => {
                ErrorCategory::Computation
            }
            SimError::IoError(_) | SimError::RenderError { .. } | SimError::EncodeError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SimError::InvalidUserInput { .. } => ErrorSeverity::Low,
            SimError::InvalidRange { .. }
            | SimError::InvalidConfigValueError { .. }
            | SimError::MissingConfigError { .. }
            | SimError::TomlError(_) => ErrorSeverity::Medium,
            SimError::LengthMismatch { .. } | SimError::EmptyInput { .. } => ErrorSeverity::High,
            SimError::IoError(_) | SimError::RenderError { .. } | SimError::EncodeError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SimError::InvalidRange { field, .. } => {
                format!("Check that the {} bounds are finite and min <= max", field)
            }
            SimError::LengthMismatch { .. } => {
                "Draw both factor sample sets with the same iteration count".to_string()
            }
            SimError::EmptyInput { .. } => {
                "Run the simulation with at least one iteration".to_string()
            }
            SimError::InvalidUserInput { .. } => {
                "Enter a plain number, e.g. 10000 or 2.5".to_string()
            }
            SimError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and retry", field)
            }
            SimError::MissingConfigError { field } => {
                format!("Add the '{}' setting to the configuration", field)
            }
            SimError::IoError(_) => {
                "Check that the output directory is writable and has free space".to_string()
            }
            SimError::TomlError(_) => {
                "Check the scenario file against the documented TOML layout".to_string()
            }
            SimError::RenderError { .. } | SimError::EncodeError(_) => {
                "Retry with a smaller bin count or report the chart input".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SimError::InvalidRange { field, reason } => {
                format!("The {} range is not usable: {}", field, reason)
            }
            SimError::LengthMismatch { likelihood, impact } => format!(
                "Internal inconsistency: {} likelihood samples vs {} impact samples",
                likelihood, impact
            ),
            SimError::EmptyInput { what } => format!("Nothing to analyze: {}", what),
            SimError::InvalidUserInput { input, reason } => {
                format!("'{}' was not understood: {}", input, reason)
            }
            SimError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration value '{}' for {} is invalid: {}", value, field, reason)
            }
            SimError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            SimError::IoError(e) => format!("File system problem: {}", e),
            SimError::TomlError(e) => format!("Scenario file could not be parsed: {}", e),
            SimError::RenderError { message } => format!("Could not draw the histogram: {}", message),
            SimError::EncodeError(e) => format!("Could not encode the histogram image: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let err = SimError::InvalidUserInput {
            input: "abc".to_string(),
            reason: "not an integer".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Input);

        let err = SimError::LengthMismatch {
            likelihood: 10,
            impact: 9,
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.category(), ErrorCategory::Computation);
    }

    #[test]
    fn test_messages_mention_the_field() {
        let err = SimError::InvalidRange {
            field: "impact".to_string(),
            reason: "min 5 exceeds max 2".to_string(),
        };
        assert!(err.user_friendly_message().contains("impact"));
        assert!(err.recovery_suggestion().contains("impact"));
    }
}
