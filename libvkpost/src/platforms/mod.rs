//! Wall posting abstraction and implementations
//!
//! [`WallPoster`] is the seam between the batch driver and the network.
//! [`vk::VkClient`] talks to the real `wall.post` endpoint; [`mock::MockPoster`]
//! stands in for it in tests.
//!
//! # Examples
//!
//! ```no_run
//! use libvkpost::config::ApiConfig;
//! use libvkpost::platforms::{vk::VkClient, WallPoster};
//! use libvkpost::{Account, PostRequest};
//!
//! # async fn example() -> libvkpost::Result<()> {
//! let client = VkClient::new(&ApiConfig::default())?;
//! let account = Account::new("vk1.a.token", -123456);
//! let request = PostRequest::new("Hello", None)?;
//!
//! let post_id = client.post(&account, &request).await?;
//! println!("post_id={}", post_id);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Account, PostRequest};

pub mod mock;
pub mod vk;

/// Publishes a post on a single wall
#[async_trait]
pub trait WallPoster: Send + Sync {
    /// Publish `request` on the wall of `account` and return the new post id
    ///
    /// Makes exactly one attempt.
    ///
    /// # Errors
    ///
    /// - `PlatformError::Api` when the service answers with an error object
    /// - `PlatformError::Transport` / `PlatformError::HttpStatus` on network
    ///   failure, timeout or a non-2xx status
    /// - `PlatformError::MalformedResponse` when the success payload lacks a post id
    async fn post(&self, account: &Account, request: &PostRequest) -> Result<i64>;

    /// Lowercase identifier used in logs
    fn name(&self) -> &str;
}
