//! # Domain models for users, tasks, posts and comments
//!
//! These are the JSON shapes served by the remote service and persisted in the
//! local store. Field names are camelCase on the wire (`userId`, `postId`,
//! `catchPhrase`) so locally created records serialise exactly like remote ones.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A person. Optional `phone`, `username`, `website`, [`Address`] and [`Company`]. |
//! | [`Task`] | A todo item owned by a user (`userId`). |
//! | [`Post`] | A remote-only article owned by a user. Never created locally. |
//! | [`Comment`] | A comment on a post (`postId`). |
//!
//! ## ID spaces
//!
//! Every entity implements [`Record`], which names its [`REMOTE_ID_CEILING`](Record::REMOTE_ID_CEILING):
//! the largest ID the remote service hands out for that kind. Locally allocated
//! IDs (see [`crate::ids`]) always land above it, so the two spaces never collide.

use serde::{Deserialize, Serialize};

/// Common surface of every stored or fetched entity.
pub trait Record {
    /// Short lowercase name used in log lines: "user", "task", ...
    const KIND: &'static str;
    /// Largest ID the remote service assigns to this kind.
    const REMOTE_ID_CEILING: u64;

    fn id(&self) -> u64;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: Option<Company>,
}

impl User {
    /// City name, if present and non-empty.
    pub fn city(&self) -> Option<&str> {
        self.address
            .as_ref()
            .map(|a| a.city.as_str())
            .filter(|c| !c.is_empty())
    }

    /// Company name, if present and non-empty.
    pub fn company_name(&self) -> Option<&str> {
        self.company
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|c| !c.is_empty())
    }
}

impl Record for User {
    const KIND: &'static str = "user";
    const REMOTE_ID_CEILING: u64 = 10;

    fn id(&self) -> u64 {
        self.id
    }
}

/// A todo item. Called "task" throughout the client, "todo" on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Record for Task {
    const KIND: &'static str = "task";
    const REMOTE_ID_CEILING: u64 = 200;

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Record for Post {
    const KIND: &'static str = "post";
    const REMOTE_ID_CEILING: u64 = 100;

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub body: String,
}

impl Record for Comment {
    const KIND: &'static str = "comment";
    const REMOTE_ID_CEILING: u64 = 500;

    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_remote_user_shape() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough", "zipcode": "92998-3874", "geo": { "lat": "-37.3159", "lng": "81.1496" } },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net", "bs": "harness real-time e-markets" }
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.city(), Some("Gwenborough"));
        assert_eq!(user.company_name(), Some("Romaguera-Crona"));
        assert_eq!(
            user.company.unwrap().catch_phrase,
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn test_decode_minimal_user() {
        let user: User =
            serde_json::from_str(r#"{"id": 5, "name": "Ann", "email": "ann@x.io"}"#).unwrap();
        assert!(user.phone.is_none());
        assert!(user.city().is_none());
        assert!(user.company_name().is_none());
    }

    #[test]
    fn test_task_uses_camel_case_keys() {
        let task = Task {
            id: 7,
            user_id: 3,
            title: "Water plants".into(),
            completed: true,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"userId\":3"));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
