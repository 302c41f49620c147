//! # sterling
//!
//! UK small-business invoicing core: draft, validate, price, and render
//! invoices with a fixed UK-style VAT model.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Arithmetic is exact mid-computation; amounts round half-up to two decimal
//! places only at presentation.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use sterling::core::*;
//!
//! let mut draft = InvoiceDraft::default();
//! draft.company_details = CompanyDetails {
//!     name: "Acme Design Ltd".into(),
//!     address: "1 High Street, London".into(),
//!     vat_number: "GB123456789".into(),
//!     company_number: "12345678".into(),
//!     phone: None,
//!     email: None,
//! };
//! draft.client_name = "Globex Corp".into();
//! draft.client_email = "accounts@globex.example".into();
//! draft.invoice_number = "INV-2024-001".into();
//! draft.set_issue_date("2024-12-15");
//! draft.bank_details = "Sort 12-34-56, Account 12345678".into();
//! draft.items = vec![LineItem::new("Design work", dec!(10), dec!(50), vat_rate::STANDARD)];
//!
//! assert!(validate_draft(&draft).is_empty());
//! // net_30 default: due date follows the issue date by 30 days
//! assert_eq!(draft.due_date, "2025-01-14");
//!
//! let totals = draft.totals();
//! assert_eq!(totals.subtotal, dec!(500));
//! assert_eq!(totals.tax, dec!(100));
//! assert_eq!(totals.total, dec!(600));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, validation, totals, due dates, store seam |
//! | `document` | Printable document projection and text rendering |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "document")]
pub mod document;

#[cfg(feature = "core")]
pub mod store;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
