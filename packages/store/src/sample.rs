//! First-run sample data.
//!
//! Seeded by [`PersistentStore::seed_sample_data`](crate::PersistentStore::seed_sample_data)
//! when the local user collection is empty. IDs sit just above each kind's
//! remote ceiling.

use crate::models::{Address, Comment, Company, Task, User};

pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 101,
            name: "Ivan Petrov".into(),
            email: "ivan.petrov@example.com".into(),
            phone: Some("+7 (999) 123-45-67".into()),
            username: Some("ivan.petrov".into()),
            website: Some("https://example.com".into()),
            address: Some(Address {
                street: "Primernaya St.".into(),
                suite: "Bldg. 1".into(),
                city: "Moscow".into(),
                zipcode: "123456".into(),
            }),
            company: Some(Company {
                name: "Horns & Hooves LLC".into(),
                catch_phrase: "The best horns in town".into(),
                bs: "horn manufacturing".into(),
            }),
        },
        User {
            id: 102,
            name: "Maria Sidorova".into(),
            email: "maria.sidorova@example.com".into(),
            phone: Some("+7 (999) 987-65-43".into()),
            username: Some("maria.sidorova".into()),
            website: Some("https://sidorova.com".into()),
            address: Some(Address {
                street: "Testovaya St.".into(),
                suite: "Apt. 5".into(),
                city: "Saint Petersburg".into(),
                zipcode: "654321".into(),
            }),
            company: Some(Company {
                name: "Sidorova Consulting".into(),
                catch_phrase: "Quality services".into(),
                bs: "consulting".into(),
            }),
        },
    ]
}

pub fn sample_tasks() -> Vec<Task> {
    [
        (201, 101, "Learn Rust", false),
        (202, 101, "Finish the lab assignment", true),
        (203, 102, "Buy groceries", false),
        (204, 102, "Pay the internet bill", true),
    ]
    .into_iter()
    .map(|(id, user_id, title, completed)| Task {
        id,
        user_id,
        title: title.into(),
        completed,
    })
    .collect()
}

pub fn sample_comments() -> Vec<Comment> {
    vec![Comment {
        id: 1001,
        post_id: 1,
        name: "Sample Commenter".into(),
        email: "test@example.com".into(),
        body: "This comment was added in the app. Delete it or add your own!".into(),
    }]
}
