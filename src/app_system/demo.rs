use tracing::{error, info, info_span, warn};

use crate::arithmetic::{divide, ArithmeticError};
use crate::user_registry::UserRegistry;
use crate::validation::validate_email;

use super::sample_users;

/// What the demo observed, returned so callers can check it.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    pub registered: usize,
    pub invalid_emails: usize,
    pub active_ids: Vec<i64>,
    pub quotient: f64,
    pub division_by_zero: Option<ArithmeticError>,
}

/// Runs every operation once against the sample data set.
///
/// # Errors
/// Propagates an [`ArithmeticError`] from the regular division step. The
/// deliberate division by zero is reported in [`DemoSummary`] instead.
pub fn run_demo() -> Result<DemoSummary, ArithmeticError> {
    let registry: UserRegistry = info_span!("registration").in_scope(|| {
        info!("Registering sample users");
        sample_users().into_iter().collect()
    });
    info!(registered = registry.len(), "Sample users registered");

    let invalid_emails = info_span!("email_validation").in_scope(|| {
        registry
            .iter()
            .filter(|user| {
                let valid = validate_email(&user.email);
                if !valid {
                    warn!(user_id = user.id, email = %user.email, "Invalid email");
                }
                !valid
            })
            .count()
    });

    info_span!("lookup").in_scope(|| {
        for id in [1, 42] {
            match registry.find_user(id) {
                Some(user) => info!(user_id = id, user = %user, "User found"),
                None => info!(user_id = id, "User not found"),
            }
        }
        info!(description = %registry.describe_user(3), "Described user");
    });

    let active_ids: Vec<i64> = registry.get_active_users().iter().map(|u| u.id).collect();
    info!(?active_ids, "Active users");

    let quotient = divide(10.0, 2.0)?;
    info!(quotient, "10 / 2");

    let division_by_zero = divide(1.0, 0.0)
        .inspect_err(|e| error!(error = %e, "Division failed"))
        .err();

    Ok(DemoSummary {
        registered: registry.len(),
        invalid_emails,
        active_ids,
        quotient,
        division_by_zero,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_demo() {
        let summary = run_demo().unwrap();
        assert_eq!(summary.registered, 3);
        assert_eq!(summary.invalid_emails, 0);
        assert_eq!(summary.active_ids, vec![1, 3]);
        assert_eq!(summary.quotient, 5.0);
        assert_eq!(
            summary.division_by_zero,
            Some(ArithmeticError::DivisionByZero { dividend: 1.0 })
        );
    }
}
