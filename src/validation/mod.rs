//! Input format checks.

mod email;

pub use email::*;
