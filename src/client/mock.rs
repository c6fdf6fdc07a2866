//! Mock Directory API client for testing
//!
//! Scripted implementation of [`DirectoryApi`] for unit testing the command
//! flows without a server.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{DirectoryApi, Group, Member, User};
use crate::error::{ApiError, Result};

/// Mock client scripted with known users, groups, and members.
///
/// An injected error is consumed by the next call, whichever operation that
/// happens to be.
#[derive(Default)]
pub struct MockDirectoryClient {
    users: Arc<Mutex<Vec<User>>>,
    groups: Arc<Mutex<Vec<Group>>>,
    /// Members keyed by group ID
    members: Arc<Mutex<HashMap<String, Vec<Member>>>>,
    /// Error to return on the next call, consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub get_user: usize,
    pub get_group: usize,
    pub list_users: usize,
    pub list_groups: usize,
    pub list_members: usize,
}

impl MockDirectoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the users known to the directory
    pub async fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().await = users;
        self
    }

    /// Script the groups known to the directory
    pub async fn with_groups(self, groups: Vec<Group>) -> Self {
        *self.groups.lock().await = groups;
        self
    }

    /// Script the member list for a group ID
    pub async fn with_members(self, group_id: &str, members: Vec<Member>) -> Self {
        self.members
            .lock()
            .await
            .insert(group_id.to_string(), members);
        self
    }

    /// Inject an error returned by the next call
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryApi for MockDirectoryClient {
    async fn get_user(&self, user_key: &str) -> Result<Option<User>> {
        self.call_count.lock().await.get_user += 1;
        self.check_error().await?;

        let users = self.users.lock().await;
        Ok(users
            .iter()
            .find(|u| {
                u.primary_email == user_key
                    || u.aliases
                        .as_ref()
                        .is_some_and(|aliases| aliases.iter().any(|a| a == user_key))
            })
            .cloned())
    }

    async fn get_group(&self, group_key: &str) -> Result<Option<Group>> {
        self.call_count.lock().await.get_group += 1;
        self.check_error().await?;

        let groups = self.groups.lock().await;
        Ok(groups.iter().find(|g| g.email == group_key).cloned())
    }

    async fn list_users(&self, _customer: &str) -> Result<Vec<User>> {
        self.call_count.lock().await.list_users += 1;
        self.check_error().await?;

        Ok(self.users.lock().await.clone())
    }

    async fn list_groups(&self, _domain: &str) -> Result<Vec<Group>> {
        self.call_count.lock().await.list_groups += 1;
        self.check_error().await?;

        Ok(self.groups.lock().await.clone())
    }

    async fn list_members(&self, group_key: &str) -> Result<Vec<Member>> {
        self.call_count.lock().await.list_members += 1;
        self.check_error().await?;

        Ok(self
            .members
            .lock()
            .await
            .get(group_key)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::UserName;

    fn user(email: &str) -> User {
        User {
            primary_email: email.to_string(),
            name: UserName {
                full_name: "Test User".to_string(),
            },
            org_unit_path: None,
            aliases: Some(vec![format!("alias-{email}")]),
        }
    }

    #[tokio::test]
    async fn test_mock_default_is_empty() {
        let mock = MockDirectoryClient::new();

        assert!(mock.get_user("a@example.org").await.unwrap().is_none());
        assert!(mock.list_groups("example.org").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_finds_user_by_primary_or_alias() {
        let mock = MockDirectoryClient::new()
            .with_users(vec![user("jane@example.org")])
            .await;

        assert!(mock.get_user("jane@example.org").await.unwrap().is_some());
        assert!(
            mock.get_user("alias-jane@example.org")
                .await
                .unwrap()
                .is_some()
        );
        assert!(mock.get_user("other@example.org").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockDirectoryClient::new()
            .with_error(ApiError::Forbidden)
            .await;

        assert!(mock.get_user("a@example.org").await.is_err());
        assert!(mock.get_user("a@example.org").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_call_counts() {
        let mock = MockDirectoryClient::new();

        mock.get_user("a@example.org").await.unwrap();
        mock.get_user("b@example.org").await.unwrap();
        mock.get_group("g@example.org").await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.get_user, 2);
        assert_eq!(counts.get_group, 1);
        assert_eq!(counts.list_members, 0);
    }
}
