//! Generic insertion-ordered record store.
//!
//! A [`Registry`] keeps records in the order they were added and never
//! reorders, mutates or removes them. Lookups scan from the front, so the
//! first record added with a given id is the one returned.

mod entity;
mod store;

pub use entity::*;
pub use store::*;
