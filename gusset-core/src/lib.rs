// Core library for the Gusset validator
// This module contains the field value model, the parsed-body mapping,
// and the body-source boundary shared by the validation crates.

pub mod body;
pub mod error;

// Re-export commonly used types
pub use body::*;
pub use error::*;
