//! Create-form input and validation.
//!
//! The shell hands back a [`FormFields`] map of the submitted inputs. Each
//! draft type parses and validates it, then turns into a store record once an
//! ID has been allocated.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use store::models::{Address, Company};
use store::{Comment, Task, User};
use thiserror::Error;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),
}

/// Submitted form values keyed by input name. Values are trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.trim().to_string());
    }

    /// Non-empty value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    fn required(&self, name: &'static str, label: &'static str) -> Result<String, ValidationError> {
        self.get(name)
            .map(str::to_string)
            .ok_or(ValidationError::Missing(label))
    }

    fn email(&self) -> Result<String, ValidationError> {
        let email = self.required("email", "Email")?;
        if EMAIL.is_match(&email) {
            Ok(email)
        } else {
            Err(ValidationError::InvalidEmail(email))
        }
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub company: Option<String>,
}

impl UserDraft {
    pub fn parse(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            name: fields.required("name", "Name")?,
            email: fields.email()?,
            phone: fields.optional("phone"),
            city: fields.optional("city"),
            company: fields.optional("company"),
        })
    }

    pub fn into_user(self, id: u64) -> User {
        let username = self
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".")
            .to_lowercase();
        User {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            username: Some(username),
            website: None,
            address: self.city.map(|city| Address {
                city,
                ..Address::default()
            }),
            company: self.company.map(|name| Company {
                name,
                ..Company::default()
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub completed: bool,
}

impl TaskDraft {
    pub fn parse(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            title: fields.required("title", "Title")?,
            completed: matches!(fields.get("completed"), Some("true" | "on")),
        })
    }

    pub fn into_task(self, id: u64, user_id: u64) -> Task {
        Task {
            id,
            user_id,
            title: self.title,
            completed: self.completed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommentDraft {
    pub name: String,
    pub email: String,
    pub body: String,
}

impl CommentDraft {
    pub fn parse(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            name: fields.required("name", "Name")?,
            email: fields.email()?,
            body: fields.required("body", "Comment")?,
        })
    }

    pub fn into_comment(self, id: u64, post_id: u64) -> Comment {
        Comment {
            id,
            post_id,
            name: self.name,
            email: self.email,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_requires_name_and_email() {
        let fields = FormFields::new().with("email", "a@b.co");
        assert_eq!(
            UserDraft::parse(&fields),
            Err(ValidationError::Missing("Name"))
        );
        let fields = FormFields::new().with("name", "   ");
        assert_eq!(
            UserDraft::parse(&fields),
            Err(ValidationError::Missing("Name"))
        );
        let fields = FormFields::new().with("name", "Ann");
        assert_eq!(
            UserDraft::parse(&fields),
            Err(ValidationError::Missing("Email"))
        );
    }

    #[test]
    fn test_email_shape() {
        for bad in ["plain", "a@b", "a b@c.de", "@c.de"] {
            let fields = FormFields::new().with("name", "Ann").with("email", bad);
            assert!(
                matches!(UserDraft::parse(&fields), Err(ValidationError::InvalidEmail(_))),
                "{bad}"
            );
        }
        let fields = FormFields::new().with("name", "Ann").with("email", " ann@x.io ");
        assert_eq!(UserDraft::parse(&fields).unwrap().email, "ann@x.io");
    }

    #[test]
    fn test_user_draft_builds_record() {
        let fields: FormFields = [
            ("name", "Mary  Ann Smith"),
            ("email", "mary@x.io"),
            ("city", "Lisbon"),
            ("company", ""),
        ]
        .into_iter()
        .collect();
        let user = UserDraft::parse(&fields).unwrap().into_user(1_700_000_000_000);
        assert_eq!(user.username.as_deref(), Some("mary.ann.smith"));
        assert_eq!(user.city(), Some("Lisbon"));
        assert!(user.company.is_none());
        assert!(user.phone.is_none());
    }

    #[test]
    fn test_task_draft() {
        assert_eq!(
            TaskDraft::parse(&FormFields::new()),
            Err(ValidationError::Missing("Title"))
        );
        let draft = TaskDraft::parse(&FormFields::new().with("title", "Ship it").with("completed", "on"))
            .unwrap();
        let task = draft.into_task(900, 5);
        assert!(task.completed);
        assert_eq!(task.user_id, 5);
        let open = TaskDraft::parse(&FormFields::new().with("title", "Later")).unwrap();
        assert!(!open.completed);
    }

    #[test]
    fn test_comment_draft() {
        let fields = FormFields::new().with("name", "Kim").with("email", "kim@x.io");
        assert_eq!(
            CommentDraft::parse(&fields),
            Err(ValidationError::Missing("Comment"))
        );
        let comment = CommentDraft::parse(&fields.with("body", "Nice post"))
            .unwrap()
            .into_comment(9_000, 7);
        assert_eq!(comment.post_id, 7);
        assert_eq!(comment.body, "Nice post");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Missing("Title").to_string(), "Title is required");
        assert_eq!(
            ValidationError::InvalidEmail("x".into()).to_string(),
            "\"x\" is not a valid email address"
        );
    }
}
