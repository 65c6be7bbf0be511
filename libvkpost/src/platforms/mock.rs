//! In-memory wall poster for tests
//!
//! Hands out sequential post ids, can be told to fail for a given owner id,
//! and records every call so tests can check ordering and that a batch
//! stopped where it should.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::{PlatformError, Result};
use crate::platforms::WallPoster;
use crate::types::{Account, PostRequest};

/// A call received by [`MockPoster`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPost {
    pub token: String,
    pub owner_id: i64,
    pub message: String,
    pub attachments: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MockConfig {
    pub name: String,
    /// First post id handed out; each success increments it
    pub first_post_id: i64,
    /// Owner id whose post fails, and the error it fails with
    pub fail_on: Option<(i64, PlatformError)>,
    pub calls: Arc<Mutex<Vec<RecordedPost>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            first_post_id: 1,
            fail_on: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

pub struct MockPoster {
    config: MockConfig,
    next_post_id: Mutex<i64>,
}

impl MockPoster {
    pub fn new(config: MockConfig) -> Self {
        let next_post_id = Mutex::new(config.first_post_id);
        Self {
            config,
            next_post_id,
        }
    }

    /// A poster where every call succeeds
    pub fn success() -> Self {
        Self::new(MockConfig::default())
    }

    /// A poster that fails with `error` when posting to `owner_id`
    pub fn failing_on(owner_id: i64, error: PlatformError) -> Self {
        Self::new(MockConfig {
            fail_on: Some((owner_id, error)),
            ..Default::default()
        })
    }

    /// Shared handle to the call log, usable after the poster is moved
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<RecordedPost>>> {
        Arc::clone(&self.config.calls)
    }

    pub fn calls(&self) -> Vec<RecordedPost> {
        self.config.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WallPoster for MockPoster {
    async fn post(&self, account: &Account, request: &PostRequest) -> Result<i64> {
        self.config.calls.lock().unwrap().push(RecordedPost {
            token: account.token().to_string(),
            owner_id: account.owner_id(),
            message: request.message.clone(),
            attachments: request.attachments.clone(),
        });

        if let Some((owner_id, error)) = &self.config.fail_on {
            if *owner_id == account.owner_id() {
                return Err(error.clone().into());
            }
        }

        let mut next = self.next_post_id.lock().unwrap();
        let post_id = *next;
        *next += 1;
        Ok(post_id)
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
