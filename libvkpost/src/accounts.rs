//! Account resolution
//!
//! Turns the raw command-line inputs into the ordered list of accounts a run
//! posts to. Three input modes exist and are checked in precedence order:
//!
//! 1. explicit `token:owner_id` pairs
//! 2. one shared token plus one or more group ids
//! 3. one token plus one owner id

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::types::Account;

/// Raw inputs for account resolution
#[derive(Debug, Clone, Default)]
pub struct AccountSelection {
    pub token: Option<String>,
    pub owner_id: Option<i64>,
    pub groups: Vec<i64>,
    /// Unparsed `token:owner_id` pairs
    pub accounts: Vec<String>,
}

impl AccountSelection {
    /// Resolve the selection into accounts, preserving input order
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a pair is malformed, when a mode
    /// that needs a token has none, or when no target was given at all.
    pub fn resolve(&self) -> Result<Vec<Account>> {
        if !self.accounts.is_empty() {
            debug!(count = self.accounts.len(), "Resolving explicit account pairs");
            let accounts = self
                .accounts
                .iter()
                .map(|pair| pair.parse::<Account>())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            return Ok(accounts);
        }

        if !self.groups.is_empty() {
            let token = self.shared_token()?;
            debug!(count = self.groups.len(), "Resolving groups under one token");
            return Ok(self
                .groups
                .iter()
                .map(|&group| Account::new(token, group))
                .collect());
        }

        let token = self.shared_token()?;
        let owner_id = self.owner_id.ok_or(ConfigError::MissingTarget)?;
        Ok(vec![Account::new(token, owner_id)])
    }

    /// The `--token` value; an empty string counts as missing
    fn shared_token(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::MissingToken.into()),
        }
    }
}
