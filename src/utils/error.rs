use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid venue '{venue_id}' ({field}): {reason}")]
    InvalidVenueError {
        venue_id: String,
        field: String,
        reason: String,
    },

    #[error("Duplicate venue id: {id}")]
    DuplicateVenueId { id: String },

    #[error("Venue data file error: {message}")]
    DataFileError { message: String },

    #[error("Unsupported venue file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Venue not found: {id}")]
    VenueNotFound { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Data,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::IoError(_) => ErrorCategory::Io,
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::MissingConfigError { .. } => ErrorCategory::Config,
            DirectoryError::SerializationError(_)
            | DirectoryError::CsvError(_)
            | DirectoryError::InvalidVenueError { .. }
            | DirectoryError::DuplicateVenueId { .. }
            | DirectoryError::DataFileError { .. }
            | DirectoryError::UnsupportedFormat { .. } => ErrorCategory::Data,
            DirectoryError::VenueNotFound { .. } => ErrorCategory::Lookup,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 查無此場館只是提示，不影響其他輸出
            ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Config | ErrorCategory::Data => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DirectoryError::IoError(_) => "Check that the data file exists and is readable",
            DirectoryError::SerializationError(_) => {
                "Make sure the venue file is a JSON array of venue records"
            }
            DirectoryError::CsvError(_) => {
                "Check the CSV header: id,name,city,country,rating,stakes,games,hours,tables,latitude,longitude,featured"
            }
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            DirectoryError::MissingConfigError { .. } => "Add the missing setting to the config file",
            DirectoryError::InvalidVenueError { .. } => {
                "Correct the venue record; ratings are 0-5 and every venue needs at least one game"
            }
            DirectoryError::DuplicateVenueId { .. } => "Give every venue a unique id",
            DirectoryError::DataFileError { .. } => {
                "Make sure the venue file is UTF-8 TOML with [[venues]] tables"
            }
            DirectoryError::UnsupportedFormat { .. } => "Use a .json, .csv or .toml venue file",
            DirectoryError::VenueNotFound { .. } => "List the directory to see the available ids",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::IoError(e) => format!("Could not read the data file: {}", e),
            DirectoryError::VenueNotFound { id } => {
                format!("No poker room with id '{}' in the directory", id)
            }
            DirectoryError::DuplicateVenueId { id } => {
                format!("The venue data lists id '{}' more than once", id)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
