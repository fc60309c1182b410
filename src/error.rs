//! Error types for mattersend.

/// Everything that can stop a message from being composed or delivered.
///
/// None of these are recovered internally: each one ends the current send.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing webhook URL or channel, or an unusable configuration file.
    #[error("{0}")]
    Config(String),

    /// Dialect sniffing could not make sense of the tabular input.
    #[error("Could not determine CSV dialect: {0}")]
    Detection(String),

    /// Input text is not valid UTF-8.
    #[error("{path} is not valid UTF-8 text: {source}")]
    Decode {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The webhook answered with anything but 200.
    #[error("{message} ({status})")]
    Delivery { message: String, status: u16 },

    /// Connection, DNS, TLS or timeout failure talking to the webhook.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not serialize payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub(crate) fn detection(message: impl Into<String>) -> Self {
        Self::Detection(message.into())
    }

    /// HTTP status carried by a delivery error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Delivery { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_formats_message_and_status() {
        let err = Error::Delivery {
            message: "X".to_string(),
            status: 502,
        };
        assert_eq!(err.to_string(), "X (502)");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_config_error_is_message_verbatim() {
        let err = Error::config("Missing webhook URL");
        assert_eq!(err.to_string(), "Missing webhook URL");
        assert_eq!(err.status(), None);
    }
}
