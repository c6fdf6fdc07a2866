//! Domain listing model and the grouping/ordering rules behind it

use std::collections::BTreeMap;

use serde::Serialize;

use crate::client::{Group, Member, User};

/// Display order for organizational units. Anything not listed here sorts
/// after these, alphabetically.
const UNIT_SORT_ORDER: [&str; 6] = [
    "/Admins and super admins",
    "/Staff users",
    "/Non-staff users",
    "/Non-staff users/Former staff",
    "/Support mailboxes",
    "/Special-purpose mailboxes",
];

/// Groups whose member lists are not published (public-facing lists)
const MEMBERS_HIDDEN: [&str; 3] = ["mysociety-community", "fixmystreet", "theyworkforyou"];

/// Unit path used for users whose record carries none
const UNFILED_UNIT: &str = "/";

/// Rank of a unit in the fixed preference order
fn unit_rank(unit: &str) -> usize {
    UNIT_SORT_ORDER
        .iter()
        .position(|&u| u == unit)
        .unwrap_or(usize::MAX)
}

/// Whether a group's member list is withheld from the listing
pub fn members_hidden(local_part: &str) -> bool {
    MEMBERS_HIDDEN.contains(&local_part)
}

/// Strip the domain from an address, e.g. `dev@example.org` -> `dev`
pub fn local_part<'a>(email: &'a str, domain: &str) -> &'a str {
    email
        .strip_suffix(domain)
        .and_then(|s| s.strip_suffix('@'))
        .unwrap_or(email)
}

/// Web forum URL for a group's local part
pub fn forum_url(domain: &str, local_part: &str) -> String {
    format!("https://groups.google.com/a/{domain}/forum/#!forum/{local_part}")
}

/// Complete listing of a domain's email accounts
#[derive(Debug, Clone, Serialize)]
pub struct DomainListing {
    pub units: Vec<UnitSection>,
    pub groups: Vec<GroupSection>,
}

/// Users of one organizational unit, sorted by full name
#[derive(Debug, Clone, Serialize)]
pub struct UnitSection {
    pub org_unit: String,
    pub users: Vec<UserEntry>,
}

/// One user line in the listing
#[derive(Debug, Clone, Serialize)]
pub struct UserEntry {
    pub full_name: String,
    pub primary_email: String,
    pub aliases: Vec<String>,
}

/// One group in the listing, with its member list unless withheld
#[derive(Debug, Clone, Serialize)]
pub struct GroupSection {
    pub name: String,
    pub email: String,
    pub local_part: String,
    pub forum_url: String,
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<MemberEntry>>,
}

/// One member line in a group section
#[derive(Debug, Clone, Serialize)]
pub struct MemberEntry {
    pub email: String,
    pub owner: bool,
    pub group: bool,
}

impl From<User> for UserEntry {
    fn from(user: User) -> Self {
        Self {
            full_name: user.name.full_name,
            primary_email: user.primary_email,
            aliases: user.aliases.unwrap_or_default(),
        }
    }
}

impl From<Member> for MemberEntry {
    fn from(member: Member) -> Self {
        Self {
            email: member.email,
            owner: member.role.as_deref() == Some("OWNER"),
            group: member.member_type.as_deref() == Some("GROUP"),
        }
    }
}

/// Group users by organizational unit.
///
/// Units on the preference list come first, in list order; the rest follow
/// alphabetically. Within a unit, users sort by full name.
pub fn group_users(users: Vec<User>) -> Vec<UnitSection> {
    let mut by_unit: BTreeMap<String, Vec<UserEntry>> = BTreeMap::new();
    for user in users {
        let unit = user
            .org_unit_path
            .clone()
            .unwrap_or_else(|| UNFILED_UNIT.to_string());
        by_unit.entry(unit).or_default().push(user.into());
    }

    let mut sections: Vec<UnitSection> = by_unit
        .into_iter()
        .map(|(org_unit, mut users)| {
            users.sort_by(|a, b| a.full_name.cmp(&b.full_name));
            UnitSection { org_unit, users }
        })
        .collect();

    // BTreeMap already yields alphabetical order; a stable sort on rank
    // moves preference-list units to the front without disturbing it.
    sections.sort_by_key(|s| unit_rank(&s.org_unit));
    sections
}

/// Build a group section from the API record and its fetched members.
///
/// `members` is `None` when the group is on the withheld list.
pub fn group_section(group: Group, domain: &str, members: Option<Vec<Member>>) -> GroupSection {
    let local = local_part(&group.email, domain).to_string();
    GroupSection {
        name: group.name,
        forum_url: forum_url(domain, &local),
        local_part: local,
        email: group.email,
        aliases: group.aliases.unwrap_or_default(),
        members: members.map(|ms| ms.into_iter().map(MemberEntry::from).collect()),
    }
}
