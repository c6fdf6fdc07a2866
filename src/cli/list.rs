//! Listing flow: fetch users, groups, and members, then assemble the model

use log::debug;

use crate::client::DirectoryApi;
use crate::config::Config;
use crate::error::Result;
use crate::listing::{self, DomainListing};

/// Fetch the complete domain listing.
///
/// One list call per collection plus one member call per group whose list
/// is published. Groups keep the API's return order; only users are sorted.
pub async fn run(client: &dyn DirectoryApi, config: &Config) -> Result<DomainListing> {
    let users = client.list_users(&config.customer).await?;
    let units = listing::group_users(users);

    let fetched = client.list_groups(&config.domain).await?;
    debug!("Assembling listing for {} groups", fetched.len());

    let mut groups = Vec::with_capacity(fetched.len());
    for group in fetched {
        let local = listing::local_part(&group.email, &config.domain);
        let members = if listing::members_hidden(local) {
            None
        } else {
            Some(client.list_members(&group.id).await?)
        };
        groups.push(listing::group_section(group, &config.domain, members));
    }

    Ok(DomainListing { units, groups })
}
