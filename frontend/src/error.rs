use thiserror::Error;

/// Failures raised by the browser host adapters.
///
/// The controller never surfaces these to the page; they are logged and the
/// operation carries on with whatever it could still do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("No window object")]
    NoWindow,
    #[error("No document")]
    NoDocument,
    #[error("No localStorage")]
    NoStorage,
    #[error("storage access failed: {0}")]
    Storage(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("invalid theme config: {0}")]
    Config(String),
}

impl ThemeError {
    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
