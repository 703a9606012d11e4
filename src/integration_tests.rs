#[cfg(test)]
mod tests {
    use crate::app_system::sample_users;
    use crate::domain::User;
    use crate::user_registry::UserRegistry;
    use crate::validation::validate_email;

    #[test]
    fn test_active_users_scenario() {
        let mut registry = UserRegistry::new();
        registry.add_user(User::new(1, "John Doe", "john@example.com").with_active(true));
        registry.add_user(User::new(2, "Jane Smith", "jane@example.com").with_active(false));
        registry.add_user(User::new(3, "Bob Johnson", "bob@example.com").with_active(true));

        let active = registry.get_active_users();
        let ids: Vec<i64> = active.iter().map(|u| u.id).collect();
        assert_eq!(ids, [1, 3]);

        // Source sequence is unchanged.
        let all: Vec<i64> = registry.iter().map(|u| u.id).collect();
        assert_eq!(all, [1, 2, 3]);
    }

    #[test]
    fn test_sample_users_round_through_registry() {
        let users = sample_users();
        let registry: UserRegistry = users.iter().cloned().collect();

        for user in &users {
            assert!(validate_email(&user.email));
            assert_eq!(registry.find_user(user.id), Some(user));
        }
        assert_eq!(registry.find_user(4), None);
        assert_eq!(registry.describe_user(2), "Jane Smith (jane@example.com)");
    }

    #[test]
    fn test_registry_does_not_validate_emails() {
        let mut registry = UserRegistry::new();
        registry.add_user(User::new(9, "No Email", ""));

        let user = registry.find_user(9).unwrap();
        assert!(!validate_email(&user.email));
    }
}
