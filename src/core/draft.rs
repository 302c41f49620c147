//! The in-edit invoice record and its reactive recompute rules.
//!
//! An [`InvoiceDraft`] holds raw, user-editable field values exactly as the
//! editing session supplies them: dates as ISO strings, payment terms as a
//! free-form code. Edits arrive one field at a time; edits to the issue date
//! or payment terms re-derive the due date, and totals are re-derived from
//! scratch whenever asked for. There is exactly one writer per draft and no
//! hidden state, so every recompute is idempotent.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calc::calculate_totals;
use super::error::{InvoiceError, ValidationError};
use super::terms::{PaymentTerms, resolve_due_date};
use super::types::{CompanyDetails, Invoice, LineItem, Totals};
use super::validation::validate_draft;
use crate::store::InvoiceStore;

/// Raw, user-editable invoice record.
///
/// Fields are public for direct form binding; use the `set_*` methods for
/// the fields that trigger recomputation (issue date, payment terms).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub company_details: CompanyDetails,
    pub client_name: String,
    pub client_email: String,
    /// Client VAT number for B2B invoices; empty means absent.
    pub client_vat_number: String,
    pub invoice_number: String,
    /// ISO `YYYY-MM-DD` string as entered; may be empty or malformed until
    /// validation runs.
    pub issue_date: String,
    /// Derived from issue date and payment terms on every trigger; manual
    /// edits stick until the next trigger fires.
    pub due_date: String,
    pub items: Vec<LineItem>,
    pub notes: String,
    /// When false the aggregate VAT line is suppressed; per-line tax is
    /// still computed for display.
    pub include_vat: bool,
    /// Payment terms code; unrecognized values resolve as net_30.
    pub payment_terms: String,
    pub bank_details: String,
}

impl Default for InvoiceDraft {
    /// A fresh form: one blank item, VAT included, net_30 terms, issued
    /// today with the due date already derived.
    fn default() -> Self {
        let mut draft = Self {
            company_details: CompanyDetails::default(),
            client_name: String::new(),
            client_email: String::new(),
            client_vat_number: String::new(),
            invoice_number: String::new(),
            issue_date: Local::now().date_naive().to_string(),
            due_date: String::new(),
            items: vec![LineItem::default()],
            notes: String::new(),
            include_vat: true,
            payment_terms: PaymentTerms::default().code().to_string(),
            bank_details: String::new(),
        };
        draft.refresh_due_date();
        draft
    }
}

impl InvoiceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the issue date and re-derive the due date.
    pub fn set_issue_date(&mut self, value: impl Into<String>) {
        self.issue_date = value.into();
        self.refresh_due_date();
    }

    /// Set the payment-terms code and re-derive the due date.
    pub fn set_payment_terms(&mut self, code: impl Into<String>) {
        self.payment_terms = code.into();
        self.refresh_due_date();
    }

    /// Manually override the due date. Never triggers resolution; the value
    /// holds until the next issue-date or payment-terms edit.
    pub fn set_due_date(&mut self, value: impl Into<String>) {
        self.due_date = value.into();
    }

    /// Append a blank item row.
    pub fn add_item(&mut self) {
        self.items.push(LineItem::default());
    }

    /// Remove an item row. The last remaining row cannot be removed, mirroring
    /// the items-never-empty invariant.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Current totals, re-derived from the items and VAT flag.
    pub fn totals(&self) -> Totals {
        calculate_totals(&self.items, self.include_vat)
    }

    /// Validate the draft in its current state.
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_draft(self)
    }

    /// Validate and convert into a typed [`Invoice`] with computed totals.
    pub fn finalize(&self) -> Result<Invoice, InvoiceError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(InvoiceError::Validation(errors));
        }

        let issue_date = parse_date(&self.issue_date, "issue_date", "Issue date")?;
        let due_date = parse_date(&self.due_date, "due_date", "Due date")?;

        Ok(Invoice {
            company_details: self.company_details.clone(),
            client_name: self.client_name.clone(),
            client_email: self.client_email.clone(),
            client_vat_number: non_empty(&self.client_vat_number),
            invoice_number: self.invoice_number.clone(),
            issue_date,
            due_date: Some(due_date),
            items: self.items.clone(),
            notes: non_empty(&self.notes),
            include_vat: self.include_vat,
            payment_terms: PaymentTerms::from_code(&self.payment_terms).unwrap_or_default(),
            bank_details: self.bank_details.clone(),
            totals: Some(self.totals()),
        })
    }

    /// Validate, finalize, and hand the invoice to the external store in a
    /// single atomic step. The draft is left untouched either way, so a
    /// failed handoff can simply be retried.
    pub fn submit<S: InvoiceStore + ?Sized>(&self, store: &mut S) -> Result<Invoice, InvoiceError> {
        let invoice = self.finalize()?;
        store.submit(&invoice)?;
        Ok(invoice)
    }

    fn refresh_due_date(&mut self) {
        match resolve_due_date(&self.issue_date, &self.payment_terms) {
            Some(due) => self.due_date = due.to_string(),
            None => self.due_date.clear(),
        }
    }
}

fn parse_date(value: &str, field: &str, label: &str) -> Result<NaiveDate, InvoiceError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        InvoiceError::Validation(vec![ValidationError::new(
            field,
            format!("{label} is not a valid date (expected YYYY-MM-DD)"),
        )])
    })
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
