use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("AMQP error: {0}")]
    Amqp(#[from] lapin::Error),

    #[error("invalid sales event: {0}")]
    InvalidEvent(#[from] serde_json::Error),

    #[error("invalid sales event: body is not a JSON object")]
    NotAnObject,

    #[error("invalid sales event: missing key '{0}'")]
    MissingField(&'static str),

    #[error("delivery stream for queue '{0}' closed")]
    StreamClosed(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
