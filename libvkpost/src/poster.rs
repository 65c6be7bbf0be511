//! Sequential batch posting
//!
//! Posts one request to every resolved account, one at a time, in input order.
//! The first failure stops the batch; accounts after it are never attempted.

use tracing::{info, warn};

use crate::error::Result;
use crate::platforms::WallPoster;
use crate::types::{Account, PostRequest, PostResult};

/// Drives a [`WallPoster`] over a list of accounts
pub struct BatchPoster {
    poster: Box<dyn WallPoster>,
}

impl BatchPoster {
    /// # Examples
    ///
    /// ```no_run
    /// use libvkpost::config::Config;
    /// use libvkpost::platforms::vk::VkClient;
    /// use libvkpost::poster::BatchPoster;
    ///
    /// # fn example() -> libvkpost::Result<()> {
    /// let config = Config::load(None)?;
    /// let batch = BatchPoster::new(Box::new(VkClient::new(&config.api)?));
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(poster: Box<dyn WallPoster>) -> Self {
        Self { poster }
    }

    /// Post `request` to each account in order
    ///
    /// `on_posted` is called right after each successful post, before the next
    /// account is attempted, so callers can report progress as it happens.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Results for accounts that were
    /// already posted have been delivered through `on_posted` by then.
    pub async fn run<F>(
        &self,
        accounts: &[Account],
        request: &PostRequest,
        mut on_posted: F,
    ) -> Result<Vec<PostResult>>
    where
        F: FnMut(&PostResult),
    {
        let mut results = Vec::with_capacity(accounts.len());

        for (index, account) in accounts.iter().enumerate() {
            info!(
                platform = self.poster.name(),
                owner_id = account.owner_id(),
                community = account.is_community(),
                position = index + 1,
                total = accounts.len(),
                "Posting to wall"
            );

            let post_id = match self.poster.post(account, request).await {
                Ok(post_id) => post_id,
                Err(e) => {
                    warn!(
                        owner_id = account.owner_id(),
                        skipped = accounts.len() - index - 1,
                        "Post failed, stopping batch: {}",
                        e
                    );
                    return Err(e);
                }
            };

            let result = PostResult {
                owner_id: account.owner_id(),
                post_id,
            };
            on_posted(&result);
            results.push(result);
        }

        Ok(results)
    }
}
