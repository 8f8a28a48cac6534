use std::fmt;

/// Message shown for failures the server never got to answer.
pub const CONNECTIVITY_MESSAGE: &str = "Error connecting to server. Please try again.";

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// True for failures where no usable server answer exists (network,
    /// timeout, malformed or unbuildable exchanges).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Network(_)
                | AppError::Timeout(_)
                | AppError::Parse(_)
                | AppError::Serialization(_)
        )
    }

    /// User-facing message: local validation and server-reported messages are
    /// surfaced verbatim, transport failures collapse to a generic retry hint.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(message) => message.clone(),
            AppError::Http { message, .. } => message.clone(),
            _ => CONNECTIVITY_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::{AppError, CONNECTIVITY_MESSAGE};

    #[test]
    fn http_errors_surface_the_server_message() {
        let err = AppError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(err.to_string(), "Request failed (401): Invalid credentials");
    }

    #[test]
    fn transport_errors_collapse_to_the_generic_message() {
        let network = AppError::Network("connection refused".to_string());
        let timeout = AppError::Timeout("aborted".to_string());
        let parse = AppError::Parse("unexpected token".to_string());

        for err in [&network, &timeout, &parse] {
            assert!(err.is_transport());
            assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
        }
    }

    #[test]
    fn config_errors_are_local_and_verbatim() {
        let err = AppError::Config("Please fill in all fields".to_string());
        assert!(!err.is_transport());
        assert_eq!(err.user_message(), "Please fill in all fields");
    }
}
