mod app_config;
mod config;
mod faculty;
mod record;

pub use app_config::{AppConfig, Credentials};
pub use config::{load_app_config, load_app_config_from_env};
pub use faculty::{FacultyCode, FacultySelector, ProgramLevel};
pub use record::Record;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown program level: {0}")]
    UnknownProgramLevel(String),

    #[error("unknown faculty code: {0}")]
    UnknownFaculty(String),

    #[error("faculty {code} is not offered at the {level} level")]
    FacultyNotOffered { code: String, level: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
