//! Error types for the logging engine

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Sink could not be opened at configuration construction
    #[error("open sink '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Sink write failure at log time
    #[error("write to sink: {0}")]
    SinkWrite(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create a sink-open error wrapping the underlying I/O failure
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
