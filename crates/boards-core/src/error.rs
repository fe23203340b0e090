use thiserror::Error;

/// Failures surfaced by the synchronization engine.
///
/// The remote variants (`Network` through `Builder`) mirror the failure
/// modes of the structured-database service; the rest cover local I/O,
/// snapshot decoding, and the availability poll.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {message}")]
    Api {
        code: Option<String>,
        message: String,
    },

    #[error("Request encoding error: {0}")]
    Encoding(String),

    #[error("Response decoding error: {0}")]
    Decoding(String),

    #[error("Unsupported response")]
    UnsupportedResponse,

    #[error("Request builder error: {0}")]
    Builder(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("No known database for id {0}")]
    DatabaseNotFound(String),

    #[error("Cloud directory never finished downloading after {attempts} attempts")]
    DownloadTimeout { attempts: u32 },
}

impl SyncError {
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            code: None,
            message: message.into(),
        }
    }
}
