use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed log record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },
    #[error("invalid match geometry: {message}")]
    InvalidGeometry { message: String },
}

impl AlignError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }
}
