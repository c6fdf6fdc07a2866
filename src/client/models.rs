//! Serde models for Directory API resources

use serde::{Deserialize, Serialize};

/// A user account in the domain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Primary email address
    pub primary_email: String,

    /// Name fields
    pub name: UserName,

    /// Organizational unit path, e.g. `/Staff users`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_unit_path: Option<String>,

    /// Alias addresses, absent when the user has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

/// Name fields for a user record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
    pub full_name: String,
}

/// A group in the domain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Opaque group ID, used as the key for member listing
    pub id: String,

    /// Display name
    pub name: String,

    /// Group email address
    pub email: String,

    /// Alias addresses, absent when the group has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

/// A member of a group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member email address
    pub email: String,

    /// Role within the group: `OWNER`, `MANAGER`, or `MEMBER`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Member kind: `USER` or `GROUP`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub member_type: Option<String>,
}

/// Response to a domain user listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,

    /// Continuation token, present when the listing spans pages
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Response to a domain group listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupList {
    #[serde(default)]
    pub groups: Vec<Group>,

    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Response to a group member listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberList {
    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_api_shape() {
        let json = r#"{
            "primaryEmail": "jane@example.org",
            "name": {"givenName": "Jane", "familyName": "Doe", "fullName": "Jane Doe"},
            "orgUnitPath": "/Staff users",
            "aliases": ["j.doe@example.org"]
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.primary_email, "jane@example.org");
        assert_eq!(user.name.full_name, "Jane Doe");
        assert_eq!(user.org_unit_path.as_deref(), Some("/Staff users"));
        assert_eq!(user.aliases.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_user_without_aliases_or_unit() {
        let json = r#"{
            "primaryEmail": "jane@example.org",
            "name": {"fullName": "Jane Doe"}
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.aliases.is_none());
        assert!(user.org_unit_path.is_none());
    }

    #[test]
    fn test_member_type_field_renamed() {
        let json = r#"{"email": "x@example.org", "role": "OWNER", "type": "GROUP"}"#;

        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.role.as_deref(), Some("OWNER"));
        assert_eq!(member.member_type.as_deref(), Some("GROUP"));
    }

    #[test]
    fn test_member_optional_fields() {
        let json = r#"{"email": "x@example.org"}"#;

        let member: Member = serde_json::from_str(json).unwrap();
        assert!(member.role.is_none());
        assert!(member.member_type.is_none());
    }

    #[test]
    fn test_empty_list_responses() {
        // The API omits the collection key entirely when there are no entries
        let users: UserList = serde_json::from_str(r#"{"kind": "admin#directory#users"}"#).unwrap();
        assert!(users.users.is_empty());
        assert!(users.next_page_token.is_none());

        let groups: GroupList = serde_json::from_str("{}").unwrap();
        assert!(groups.groups.is_empty());

        let members: MemberList = serde_json::from_str("{}").unwrap();
        assert!(members.members.is_empty());
    }

    #[test]
    fn test_group_list_with_entries() {
        let json = r#"{
            "groups": [
                {"id": "g1", "name": "Sysadmin", "email": "sysadmin@example.org"},
                {"id": "g2", "name": "Dev", "email": "dev@example.org",
                 "aliases": ["developers@example.org"]}
            ],
            "nextPageToken": "page2"
        }"#;

        let list: GroupList = serde_json::from_str(json).unwrap();
        assert_eq!(list.groups.len(), 2);
        assert_eq!(list.groups[1].aliases.as_ref().unwrap().len(), 1);
        assert_eq!(list.next_page_token.as_deref(), Some("page2"));
    }
}
