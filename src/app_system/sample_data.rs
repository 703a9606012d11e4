use crate::domain::{User, UserCreate};

/// The three fixture users used by the demo and the tests.
pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com").with_active(true),
        User::new(2, "Jane Smith", "jane@example.com"),
        User::from(UserCreate {
            id: 3,
            name: "Bob Johnson".into(),
            email: "bob@example.com".into(),
            active: Some(true),
        }),
    ]
}
