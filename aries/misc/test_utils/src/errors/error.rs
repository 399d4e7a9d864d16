use log::SetLoggerError;
use thiserror::Error as ThisError;

pub type TestUtilsResult<T> = Result<T, TestUtilsError>;

#[derive(Debug, ThisError)]
pub enum TestUtilsError {
    #[error("Test logger could not be installed: {0}")]
    LoggerInit(#[from] SetLoggerError),
}
