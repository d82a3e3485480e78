// Gusset - request-body field validation for Rust HTTP handlers
//
// This library wraps a decoded request body and offers criterion checks,
// per-field failure tracking, and typed extraction, so handlers validate
// their input before business logic runs.

// Re-export core functionality
pub use gusset_core::*;

// Re-export the validation engine
pub use gusset_validation::*;
