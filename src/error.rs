use thiserror::Error;

/// Recoverable errors raised by the quiz controller. None of them end the
/// session; the caller shows the message and keeps going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("⚠️ Please select at least one times table!")]
    EmptyTableSelection,
    #[error("⚠️ Table {0} is not a positive number!")]
    InvalidTable(u32),
    #[error("❓ Please enter a number!")]
    NotANumber,
    #[error("not accepting answers right now")]
    NotAcceptingAnswers,
}

/// Errors raised while loading the settings file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}
