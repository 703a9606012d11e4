use std::fmt;

/// A single user's entry in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: bool,
}

/// Payload for creating a user from loosely shaped input.
///
/// `active` may be left out; it resolves to `false` when the [`User`] is built.
#[derive(Debug, Clone, Default)]
pub struct UserCreate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: Option<bool>,
}

impl User {
    /// Creates a new, inactive User.
    ///
    /// # Arguments
    /// * `id` - Identifier; the registry does not enforce uniqueness
    /// * `name` - User's display name
    /// * `email` - User's email address, stored as given
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            active: false,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl From<UserCreate> for User {
    fn from(params: UserCreate) -> Self {
        Self {
            id: params.id,
            name: params.name,
            email: params.email,
            active: params.active.unwrap_or(false),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}
