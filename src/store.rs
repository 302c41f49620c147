//! Seam to the external invoice store.
//!
//! Persistence lives outside this crate; the core only needs a single
//! atomic handoff at submission time. Store failures surface as a generic
//! [`InvoiceError::Store`] with no retry or partial-state recovery — the
//! draft that produced the invoice is untouched, so the user can resubmit.

use crate::core::{Invoice, InvoiceError};

/// External collaborator accepting finished invoices.
pub trait InvoiceStore {
    /// Persist a finalized invoice. Succeeds or fails atomically.
    fn submit(&mut self, invoice: &Invoice) -> Result<(), InvoiceError>;
}

/// In-memory store for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    submitted: Vec<Invoice>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoices received so far, in submission order.
    pub fn submitted(&self) -> &[Invoice] {
        &self.submitted
    }
}

impl InvoiceStore for MemoryStore {
    fn submit(&mut self, invoice: &Invoice) -> Result<(), InvoiceError> {
        self.submitted.push(invoice.clone());
        Ok(())
    }
}
