//! Directory API client

use async_trait::async_trait;

use crate::error::Result;

pub mod directory;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use directory::DirectoryClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockDirectoryClient;
pub use models::{Group, Member, User};

/// Read-only Directory API operations used by the tools
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetch a user by email address or ID. Returns `None` if absent.
    async fn get_user(&self, user_key: &str) -> Result<Option<User>>;

    /// Fetch a group by email address or ID. Returns `None` if absent.
    async fn get_group(&self, group_key: &str) -> Result<Option<Group>>;

    /// List all users for a customer
    async fn list_users(&self, customer: &str) -> Result<Vec<User>>;

    /// List all groups for a domain
    async fn list_groups(&self, domain: &str) -> Result<Vec<Group>>;

    /// List the members of a group
    async fn list_members(&self, group_key: &str) -> Result<Vec<Member>>;
}
