//! Request-body field validation for Gusset
//!
//! Wraps an already-decoded request body and provides criterion checks,
//! per-field failure tracking, and typed getters with strict and lenient
//! variants.
//!
//! # Examples
//!
//! ## Checking fields
//!
//! ```
//! use gusset_validation::{BodyValidator, Criterion};
//! use serde_json::json;
//!
//! let mut validator = BodyValidator::from_json(json!({
//!     "datetime": "2021-03-21 18:08:23",
//!     "invalidDatetime": "20203-21 180823",
//!     "amount": "27.5",
//!     "note": "",
//! }))
//! .unwrap();
//!
//! assert!(validator.check("amount", Criterion::Numeric));
//! assert!(!validator.check("note", Criterion::NotEmpty));
//!
//! assert!(!validator.check_all(["datetime", "invalidDatetime"], Criterion::DateFormat));
//! assert_eq!(validator.failed_fields(), vec!["note", "invalidDatetime"]);
//! ```
//!
//! ## Typed extraction
//!
//! ```
//! use gusset_validation::BodyValidator;
//! use serde_json::json;
//!
//! let mut validator = BodyValidator::from_json(json!({
//!     "quantity": "25",
//!     "price": 27.5,
//!     "accepted": true,
//! }))
//! .unwrap();
//!
//! // Strict getters return a field-level error...
//! assert_eq!(validator.get_int("quantity").unwrap(), 25);
//! assert_eq!(validator.get_float("price").unwrap(), 27.5);
//! assert!(validator.get_int("absent").is_err());
//!
//! // ...lenient twins fold the same failure into `None`.
//! assert_eq!(validator.get_int_opt("absent"), None);
//!
//! // Checkboxes: absent simply means unchecked.
//! assert!(validator.get_checkbox("accepted"));
//! assert!(!validator.get_checkbox("newsletter"));
//! ```

mod criteria;
pub mod datetime;
mod errors;
mod validator;

pub use criteria::*;
pub use errors::*;
pub use validator::*;
