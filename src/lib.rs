//! # User Registry
//!
//! A small library with three independent pieces:
//!
//! - **Email checking** - [`validate_email`] tests the `local@domain.tld` shape
//! - **User registry** - [`UserRegistry`] keeps [`User`] records in insertion order
//!   with append, lookup-by-id and active-user filtering
//! - **Arithmetic** - [`divide`] fails with [`ArithmeticError::DivisionByZero`]
//!   instead of guarding its divisor
//!
//! ## Example Usage
//!
//! ```rust
//! use user_registry::{divide, validate_email, User, UserRegistry};
//!
//! let mut registry = UserRegistry::new();
//! registry.add_user(User::new(1, "Alice", "alice@example.com").with_active(true));
//! registry.add_user(User::new(2, "Bob", "bob@example.com"));
//!
//! assert!(validate_email("alice@example.com"));
//! assert_eq!(registry.find_user(2).map(|u| u.name.as_str()), Some("Bob"));
//! assert_eq!(registry.get_active_users().len(), 1);
//! assert!(divide(1.0, 0.0).is_err());
//! ```

pub mod app_system;
pub mod arithmetic;
pub mod domain;
pub mod registry;
pub mod user_registry;
pub mod validation;

#[cfg(test)]
mod integration_tests;

pub use arithmetic::{calculate_area, divide, ArithmeticError};
pub use domain::{User, UserCreate};
pub use registry::{Entity, Registry};
pub use user_registry::UserRegistry;
pub use validation::validate_email;
