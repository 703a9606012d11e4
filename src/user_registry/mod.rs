//! User-specific registry operations.

mod entity;

use tracing::{debug, instrument};

use crate::domain::User;
use crate::registry::Registry;

/// Registry of [`User`] records, kept in insertion order.
pub type UserRegistry = Registry<User>;

impl Registry<User> {
    /// Appends `user`. Always succeeds; duplicate ids and malformed emails
    /// are accepted as-is.
    pub fn add_user(&mut self, user: User) {
        self.add(user);
    }

    /// Returns the first user added with `id`, or `None`.
    pub fn find_user(&self, id: i64) -> Option<&User> {
        self.find(&id)
    }

    /// Returns every active user, in insertion order.
    #[instrument(skip(self))]
    pub fn get_active_users(&self) -> Vec<User> {
        let active = self.filter(|user| user.active);
        debug!(active = active.len(), total = self.len(), "Collected active users");
        active
    }

    /// Formats the user with `id` as `"name (email)"`, or `"User not found"`.
    pub fn describe_user(&self, id: i64) -> String {
        match self.find_user(id) {
            Some(user) => user.to_string(),
            None => "User not found".to_string(),
        }
    }
}
