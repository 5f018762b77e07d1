use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown gateway: {0}")]
    UnknownGateway(String),
    #[error("Processor failure: {0}")]
    ProcessorFailure(String),
    #[error("Processor timed out after {0:?}")]
    ProcessorTimeout(Duration),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
