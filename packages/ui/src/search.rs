//! Free-text filtering shared by every view.
//!
//! A [`SearchQuery`] is trimmed and lowercased once; a whitespace-only input is
//! no filter at all. Each entity names the fields it is searched on through
//! [`Searchable`], and a record matches when any of them contains the query.

use store::{Comment, Post, Task, User};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery(Option<String>);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_lowercase()))
        }
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        match &self.0 {
            None => true,
            Some(needle) => record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Fields a record is matched on.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        if let Some(username) = &self.username {
            fields.push(username.as_str());
        }
        fields
    }
}

impl Searchable for Task {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

impl Searchable for Post {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.body.as_str()]
    }
}

impl Searchable for Comment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.body.as_str()]
    }
}

/// Keep the records that match, preserving order.
pub fn filter<T: Searchable>(records: Vec<T>, query: &SearchQuery) -> Vec<T> {
    if query.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| query.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, username: Option<&str>) -> User {
        User {
            id: 1,
            name: name.into(),
            email: email.into(),
            username: username.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn test_case_insensitive_substring() {
        let users = vec![user("Alice", "a@x.io", None), user("Bob", "b@x.io", None)];
        let hits = filter(users, &SearchQuery::new("ALI"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alice");
    }

    #[test]
    fn test_whitespace_query_is_no_filter() {
        let q = SearchQuery::new("   \t ");
        assert!(q.is_empty());
        let users = vec![user("Alice", "a@x.io", None), user("Bob", "b@x.io", None)];
        assert_eq!(filter(users, &q).len(), 2);
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(SearchQuery::new("  Bob ").as_str(), Some("bob"));
    }

    #[test]
    fn test_user_fields() {
        let u = user("Clementine", "c@april.biz", Some("Samantha"));
        assert!(SearchQuery::new("april").matches(&u));
        assert!(SearchQuery::new("saman").matches(&u));
        assert!(!SearchQuery::new("phone").matches(&u));
    }

    #[test]
    fn test_post_matches_title_or_body() {
        let post = Post {
            id: 1,
            user_id: 1,
            title: "Quarterly report".into(),
            body: "Numbers went up".into(),
        };
        assert!(SearchQuery::new("REPORT").matches(&post));
        assert!(SearchQuery::new("went").matches(&post));
        assert!(!SearchQuery::new("down").matches(&post));
    }

    #[test]
    fn test_task_matches_title_only() {
        let task = Task {
            id: 1,
            user_id: 42,
            title: "Buy milk".into(),
            completed: false,
        };
        assert!(SearchQuery::new("milk").matches(&task));
        assert!(!SearchQuery::new("42").matches(&task));
    }
}
