//! Core types for vkpost

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, Result, VkPostError};

/// Credential and target wall for one post
///
/// The token is kept in a [`SecretString`], so `Debug` output never shows it.
pub struct Account {
    token: SecretString,
    owner_id: i64,
}

impl Account {
    pub fn new(token: impl Into<String>, owner_id: i64) -> Self {
        Self {
            token: SecretString::from(token.into()),
            owner_id,
        }
    }

    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Wall owner: negative for communities, positive for users
    pub fn owner_id(&self) -> i64 {
        self.owner_id
    }

    pub fn is_community(&self) -> bool {
        self.owner_id < 0
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("token", &"[REDACTED]")
            .field("owner_id", &self.owner_id)
            .finish()
    }
}

/// Parses `<token>:<owner_id>`, splitting on the first colon
impl FromStr for Account {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (token, owner) = s
            .split_once(':')
            .ok_or_else(|| ConfigError::InvalidAccount("missing ':' separator".to_string()))?;

        if token.is_empty() {
            return Err(ConfigError::InvalidAccount("empty token".to_string()));
        }

        let owner_id = owner.parse::<i64>().map_err(|_| {
            ConfigError::InvalidAccount(format!("owner id '{}' is not an integer", owner))
        })?;

        Ok(Self::new(token, owner_id))
    }
}

/// Message and attachments shared by every account in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub message: String,
    /// Comma-separated attachment references, passed through untouched
    pub attachments: Option<String>,
}

impl PostRequest {
    /// Build a request, dropping an empty attachment string
    ///
    /// # Errors
    ///
    /// Returns `VkPostError::InvalidInput` when there is neither message text
    /// nor attachments, since VK refuses such posts.
    pub fn new(message: impl Into<String>, attachments: Option<String>) -> Result<Self> {
        let message = message.into();
        let attachments = attachments.filter(|a| !a.trim().is_empty());

        if message.trim().is_empty() && attachments.is_none() {
            return Err(VkPostError::InvalidInput(
                "Message cannot be empty without attachments".to_string(),
            ));
        }

        Ok(Self {
            message,
            attachments,
        })
    }
}

/// A published post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostResult {
    pub owner_id: i64,
    pub post_id: i64,
}

impl fmt::Display for PostResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Posted successfully. owner_id={} post_id={}",
            self.owner_id, self.post_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_pair() {
        let account: Account = "abc123:-42".parse().unwrap();
        assert_eq!(account.token(), "abc123");
        assert_eq!(account.owner_id(), -42);
        assert!(account.is_community());
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        // Only the first colon separates, so the remainder here is not an integer
        let result = "tok:en:5".parse::<Account>();
        assert!(matches!(result, Err(ConfigError::InvalidAccount(_))));

        let account: Account = "vk1.a.x-Y_z:7".parse().unwrap();
        assert_eq!(account.token(), "vk1.a.x-Y_z");
        assert_eq!(account.owner_id(), 7);
        assert!(!account.is_community());
    }

    #[test]
    fn test_parse_rejects_non_integer_owner() {
        for input in [
            "token:",
            "token:abc",
            "token: 12",
            "token:1.5",
            "token:99999999999999999999",
        ] {
            let result = input.parse::<Account>();
            assert!(
                matches!(result, Err(ConfigError::InvalidAccount(_))),
                "expected failure for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_missing_separator_and_empty_token() {
        assert!(matches!(
            "token-only".parse::<Account>(),
            Err(ConfigError::InvalidAccount(_))
        ));
        assert!(matches!(
            ":123".parse::<Account>(),
            Err(ConfigError::InvalidAccount(_))
        ));
    }

    #[test]
    fn test_invalid_account_error_does_not_leak_token() {
        let err = "supersecret:notanumber".parse::<Account>().unwrap_err();
        let message = err.to_string();
        assert!(!message.contains("supersecret"));
        assert!(message.contains("notanumber"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let account = Account::new("supersecret", 1);
        let debug = format!("{:?}", account);
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("owner_id: 1"));
    }

    #[test]
    fn test_post_request_drops_empty_attachments() {
        let request = PostRequest::new("Hello", Some(String::new())).unwrap();
        assert_eq!(request.attachments, None);

        let request = PostRequest::new("Hello", Some("photo1_2,video3_4".to_string())).unwrap();
        assert_eq!(request.attachments.as_deref(), Some("photo1_2,video3_4"));
    }

    #[test]
    fn test_post_request_requires_message_or_attachments() {
        let result = PostRequest::new("   ", None);
        assert!(matches!(result, Err(VkPostError::InvalidInput(_))));

        let request = PostRequest::new("", Some("photo1_2".to_string())).unwrap();
        assert!(request.message.is_empty());
    }

    #[test]
    fn test_post_result_display() {
        let result = PostResult {
            owner_id: -5,
            post_id: 42,
        };
        assert_eq!(
            result.to_string(),
            "Posted successfully. owner_id=-5 post_id=42"
        );
    }
}
