//! reqwest implementation of the Directory API client

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::models::{GroupList, MemberList, UserList};
use super::{DirectoryApi, Group, Member, User};
use crate::auth::{ServiceAccountKey, TokenSource};
use crate::error::{ApiError, Error, Result};

/// Directory API base URL
const API_BASE_URL: &str = "https://admin.googleapis.com";

/// Directory API client authenticated with a service account
pub struct DirectoryClient {
    http: HttpClient,
    base_url: String,
    auth: TokenSource,
}

impl DirectoryClient {
    /// Create a client impersonating the given subject account
    pub fn new(key: ServiceAccountKey, subject: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let auth = TokenSource::new(http.clone(), key, subject);

        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
            auth,
        })
    }

    /// Override the base URL, for testing
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Make an authenticated GET request and parse the JSON response
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let token = self.auth.token().await?;

        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string()).into()),
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }

    /// Make an existence probe, mapping 404 to `None`
    async fn probe<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.get_json::<T>(path, &[]).await {
            Ok(resource) => Ok(Some(resource)),
            Err(Error::Api(ApiError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl DirectoryApi for DirectoryClient {
    async fn get_user(&self, user_key: &str) -> Result<Option<User>> {
        self.probe(&format!("/admin/directory/v1/users/{}", user_key))
            .await
    }

    async fn get_group(&self, group_key: &str) -> Result<Option<Group>> {
        self.probe(&format!("/admin/directory/v1/groups/{}", group_key))
            .await
    }

    async fn list_users(&self, customer: &str) -> Result<Vec<User>> {
        let list: UserList = self
            .get_json("/admin/directory/v1/users", &[("customer", customer)])
            .await?;
        debug!("Fetched {} users", list.users.len());
        Ok(list.users)
    }

    async fn list_groups(&self, domain: &str) -> Result<Vec<Group>> {
        let list: GroupList = self
            .get_json("/admin/directory/v1/groups", &[("domain", domain)])
            .await?;
        debug!("Fetched {} groups", list.groups.len());
        Ok(list.groups)
    }

    async fn list_members(&self, group_key: &str) -> Result<Vec<Member>> {
        let list: MemberList = self
            .get_json(&format!("/admin/directory/v1/groups/{}/members", group_key), &[])
            .await?;
        Ok(list.members)
    }
}
