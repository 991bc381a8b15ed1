use thiserror::Error;

/// error types of the rate constant calculator
/// ShapeError - temperature/pressure grids of wrong rank or cardinality, Arrhenius parameter lists of wrong length
/// ConfigError - inconsistent parameter bundle (e.g. Troe parameters without low-pressure Arrhenius parameters)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KineticsError {
    #[error("Shape error: {0}")]
    ShapeError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl KineticsError {
    pub fn shape(msg: impl Into<String>) -> Self {
        KineticsError::ShapeError(msg.into())
    }
    pub fn config(msg: impl Into<String>) -> Self {
        KineticsError::ConfigError(msg.into())
    }
    /// prefixes the message, keeping the error kind
    pub fn with_context(self, context: &str) -> Self {
        match self {
            KineticsError::ShapeError(msg) => KineticsError::ShapeError(format!("{}: {}", context, msg)),
            KineticsError::ConfigError(msg) => KineticsError::ConfigError(format!("{}: {}", context, msg)),
        }
    }
}
