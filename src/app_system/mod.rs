//! Demo wiring: logging setup, sample data and the run the binary executes.

pub mod demo;
pub mod logging;
pub mod sample_data;

pub use demo::*;
pub use logging::*;
pub use sample_data::*;
