use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Division by zero: hours_per_employee must be greater than 0 (got {hours_per_employee})")]
    DivisionError { hours_per_employee: f64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Calculation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidInput { .. } | CalcError::MissingField { .. } => ErrorCategory::Input,
            CalcError::DivisionError { .. } => ErrorCategory::Calculation,
            CalcError::ConfigError { .. } | CalcError::TomlError(_) => ErrorCategory::Configuration,
            CalcError::CsvError(_) | CalcError::IoError(_) | CalcError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // bad user input: fix the numbers and run again
            ErrorCategory::Input | ErrorCategory::Calculation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Exit code used by the binaries for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidInput { field, .. } => {
                format!("Please enter a valid number for {}", field)
            }
            CalcError::MissingField { field } => format!("Please fill in {}", field),
            CalcError::DivisionError { .. } => {
                "Hours per employee must be greater than zero".to_string()
            }
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            CalcError::CsvError(_) => "Could not read or write the CSV data".to_string(),
            CalcError::IoError(e) => format!("File access failed: {}", e),
            CalcError::SerializationError(_) => "Could not format the result as JSON".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => {
                "Use plain decimal numbers, e.g. 100 or 37.5; hours and rates cannot be negative"
            }
            CalcError::MissingField { .. } => {
                "Pass all three values, or set defaults in the [defaults] section of the config file"
            }
            CalcError::DivisionError { .. } => "Set hours_per_employee to a positive number",
            CalcError::ConfigError { .. } | CalcError::TomlError(_) => {
                "Check the config file against the documented sections"
            }
            CalcError::CsvError(_) => {
                "Make sure the CSV header is required_hours,hours_per_employee,hourly_rate"
            }
            CalcError::IoError(_) => "Check that the path exists and is readable/writable",
            CalcError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
