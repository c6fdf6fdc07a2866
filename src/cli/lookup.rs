//! Address lookup flow
//!
//! Probes the directory for an address, first as a user, then as a group.
//! A probe error on the target address counts as "not found": the API
//! reports lookup failures and genuinely unknown addresses the same way.
//! A canary lookup of the delegation subject, which must exist, is the only
//! way to tell a dead API from an absent address.

use log::debug;

use crate::client::DirectoryApi;

/// Result of a lookup run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The address resolves to a user or a group
    Found,
    /// The address resolves to neither
    NotFound,
    /// The canary lookup failed, so nothing can be concluded
    ApiUnavailable,
}

/// Check whether `address` exists in the directory.
///
/// `canary` is an address known to exist (the delegation subject); if it
/// does not come back positive the API is considered down.
pub async fn run(client: &dyn DirectoryApi, canary: &str, address: &str) -> LookupOutcome {
    if !exists_as_user(client, canary).await {
        return LookupOutcome::ApiUnavailable;
    }

    if exists_as_user(client, address).await {
        return LookupOutcome::Found;
    }

    if exists_as_group(client, address).await {
        return LookupOutcome::Found;
    }

    LookupOutcome::NotFound
}

async fn exists_as_user(client: &dyn DirectoryApi, address: &str) -> bool {
    match client.get_user(address).await {
        Ok(user) => user.is_some(),
        Err(e) => {
            debug!("user probe for {} failed: {}", address, e);
            false
        }
    }
}

async fn exists_as_group(client: &dyn DirectoryApi, address: &str) -> bool {
    match client.get_group(address).await {
        Ok(group) => group.is_some(),
        Err(e) => {
            debug!("group probe for {} failed: {}", address, e);
            false
        }
    }
}
