use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error("Weather series holds no records to predict from")]
    InsufficientData,

    #[error("Unknown weather field '{0}'")]
    InvalidField(String),

    #[error("Invalid value {value} for '{argument}': {reason}")]
    InvalidArgument {
        argument: &'static str,
        value: usize,
        reason: &'static str,
    },
}
