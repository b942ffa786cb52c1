use ministack::parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("File {0} does not exist")]
    InputFileDoesNotExist(String),
    #[error("parse error: {0}")]
    ParserError(#[from] ParseError),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
