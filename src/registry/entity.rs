use std::fmt::{Debug, Display};

/// Trait that any record must implement to be held by a [`Registry`](super::Registry).
pub trait Entity: Clone + Debug {
    type Id: PartialEq + Clone + Display + Debug;

    /// Get the ID of the record
    fn id(&self) -> &Self::Id;
}
