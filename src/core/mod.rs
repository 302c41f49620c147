//! Core invoice types, validation, totals, and due-date resolution.
//!
//! An invoice starts life as a raw [`InvoiceDraft`], is re-validated and
//! re-computed on every edit, and becomes a typed [`Invoice`] only once
//! validation passes.

mod calc;
mod draft;
mod error;
mod terms;
mod types;
mod validation;

pub use calc::*;
pub use draft::*;
pub use error::*;
pub use terms::*;
pub use types::*;
pub use validation::{is_valid_email, is_valid_uk_vat_number, validate_draft};
