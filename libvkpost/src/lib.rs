//! vkpost - post to VK walls from the command line
//!
//! This library provides account resolution, the `wall.post` client and the
//! sequential batch driver used by the `vk-post` binary.

pub mod accounts;
pub mod config;
pub mod error;
pub mod logging;
pub mod platforms;
pub mod poster;
pub mod types;

// Re-export commonly used types
pub use accounts::AccountSelection;
pub use config::Config;
pub use error::{Result, VkPostError};
pub use types::{Account, PostRequest, PostResult};
