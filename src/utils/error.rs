use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Logger initialization failed: {message}")]
    LoggerError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, DeployError>;
