//! Error types for vkpost

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VkPostError>;

/// VK API error code for "User authorization failed"
pub const VK_AUTH_FAILED: i64 = 5;

#[derive(Error, Debug)]
pub enum VkPostError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl VkPostError {
    /// Returns the appropriate exit code for this error
    ///
    /// Problems found before any network call exit with 3, VK authorization
    /// failures with 2, everything else with 1. A config file that cannot be
    /// read at all is an I/O failure (1); one that reads but is invalid is 3.
    pub fn exit_code(&self) -> i32 {
        match self {
            VkPostError::InvalidInput(_) => 3,
            VkPostError::Config(ConfigError::ReadError(_)) => 1,
            VkPostError::Config(_) => 3,
            VkPostError::Platform(PlatformError::Api { code, .. }) if *code == VK_AUTH_FAILED => 2,
            VkPostError::Platform(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Access token is required (use --token or VK_TOKEN)")]
    MissingToken,

    #[error("No target selected (use --owner-id, --group or --account)")]
    MissingTarget,

    /// Carries a description of the problem, never the token itself
    #[error("Invalid account: {0} (expected <token>:<owner_id>)")]
    InvalidAccount(String),
}

#[derive(Error, Debug, Clone)]
pub enum PlatformError {
    /// Error object returned by the VK API, carried verbatim
    #[error("VK API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = VkPostError::InvalidInput("Message cannot be empty".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_missing_credentials() {
        assert_eq!(VkPostError::Config(ConfigError::MissingToken).exit_code(), 3);
        assert_eq!(VkPostError::Config(ConfigError::MissingTarget).exit_code(), 3);
        assert_eq!(
            VkPostError::Config(ConfigError::InvalidAccount("empty token".to_string())).exit_code(),
            3
        );
    }

    #[test]
    fn test_exit_code_unreadable_config_file() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error = VkPostError::Config(ConfigError::ReadError(io_error));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_invalid_config_file() {
        let parse_error = toml::from_str::<toml::Value>("[api\nendpoint =").unwrap_err();
        assert_eq!(VkPostError::Config(ConfigError::ParseError(parse_error)).exit_code(), 3);

        let missing = ConfigError::MissingField("api.endpoint".to_string());
        assert_eq!(VkPostError::Config(missing).exit_code(), 3);
    }

    #[test]
    fn test_exit_code_authorization_failed() {
        let error = VkPostError::Platform(PlatformError::Api {
            code: VK_AUTH_FAILED,
            message: "User authorization failed: invalid access_token".to_string(),
        });
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_other_platform_errors() {
        let access_denied = VkPostError::Platform(PlatformError::Api {
            code: 15,
            message: "Access denied".to_string(),
        });
        assert_eq!(access_denied.exit_code(), 1);

        let transport = VkPostError::Platform(PlatformError::Transport("timed out".to_string()));
        assert_eq!(transport.exit_code(), 1);

        let status = VkPostError::Platform(PlatformError::HttpStatus {
            status: 502,
            body: "Bad Gateway".to_string(),
        });
        assert_eq!(status.exit_code(), 1);

        let malformed =
            VkPostError::Platform(PlatformError::MalformedResponse("no post_id".to_string()));
        assert_eq!(malformed.exit_code(), 1);
    }

    #[test]
    fn test_api_error_formatting_is_verbatim() {
        let error = VkPostError::Platform(PlatformError::Api {
            code: 15,
            message: "Access denied".to_string(),
        });
        assert_eq!(error.to_string(), "Platform error: VK API error 15: Access denied");
    }

    #[test]
    fn test_http_status_formatting() {
        let error = PlatformError::HttpStatus {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn test_config_error_formatting() {
        let error = VkPostError::Config(ConfigError::MissingToken);
        let message = error.to_string();
        assert!(message.starts_with("Configuration error:"));
        assert!(message.contains("VK_TOKEN"));
    }

    #[test]
    fn test_error_conversion_from_platform_error() {
        let platform_error = PlatformError::Transport("connection refused".to_string());
        let error: VkPostError = platform_error.into();

        match error {
            VkPostError::Platform(PlatformError::Transport(msg)) => {
                assert_eq!(msg, "connection refused");
            }
            _ => panic!("Expected VkPostError::Platform"),
        }
    }

    #[test]
    fn test_platform_error_clone() {
        let original = PlatformError::Api {
            code: 214,
            message: "Access to adding post denied".to_string(),
        };
        let cloned = original.clone();

        assert_eq!(format!("{}", original), format!("{}", cloned));
    }
}
