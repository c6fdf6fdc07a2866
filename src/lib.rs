//! Admin tools for email accounts in a Google Workspace domain.
//!
//! Two binaries link this library: `lookup_email` checks whether an address
//! exists as a user or group, and `list_emails` prints every user and group
//! in the domain as an HTML fragment.

pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod listing;
pub mod output;
