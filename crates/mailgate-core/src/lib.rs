//! Core utilities and types shared across all Mailgate crates

pub mod error_builder;
pub mod problemdetails;

// Re-export commonly used types
pub use error_builder::*;
pub use problemdetails::{Problem, ProblemDetails};
