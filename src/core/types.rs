use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::terms::PaymentTerms;

/// UK VAT rate presets offered in the editing UI. Any non-negative rate is
/// mechanically accepted by the calculator; these are the enumerated choices.
pub mod vat_rate {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Standard rate (20%).
    pub const STANDARD: Decimal = dec!(20);
    /// Reduced rate (5%).
    pub const REDUCED: Decimal = dec!(5);
    /// Zero rate (0%).
    pub const ZERO: Decimal = dec!(0);
}

/// Issuing party details printed on every invoice.
///
/// Editable while the invoice is in draft; fixed once the record is
/// finalized for submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDetails {
    /// Registered company name.
    pub name: String,
    /// Postal address, single free-text field.
    pub address: String,
    /// UK VAT registration number ("GB" + 9 digits).
    pub vat_number: String,
    /// Companies House registration number (at least 8 characters).
    pub company_number: String,
    /// Contact phone, optional.
    pub phone: Option<String>,
    /// Contact email, optional; validated for syntax when present.
    pub email: Option<String>,
}

/// One priced row of an invoice.
///
/// `line_total` and `line_tax` are derived on demand and never stored, so
/// they cannot drift from the quantity/price/rate that produce them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// What was supplied.
    pub description: String,
    /// Invoiced quantity (at least 1).
    pub quantity: Decimal,
    /// Unit price, non-negative.
    pub price: Decimal,
    /// VAT rate percentage for this line.
    pub vat_rate: Decimal,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
        vat_rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            price,
            vat_rate,
        }
    }

    /// Net amount for this line: quantity × unit price.
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.price
    }

    /// VAT amount for this line at its own rate, computed regardless of the
    /// invoice-level `include_vat` flag.
    pub fn line_tax(&self) -> Decimal {
        self.line_total() * self.vat_rate / dec!(100)
    }
}

impl Default for LineItem {
    /// A blank row as the editing form seeds it: quantity 1, price 0,
    /// standard rate.
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: Decimal::ONE,
            price: Decimal::ZERO,
            vat_rate: vat_rate::STANDARD,
        }
    }
}

/// A validated invoice record, ready for submission and projection.
///
/// Produced by [`InvoiceDraft::finalize`](super::draft::InvoiceDraft::finalize)
/// after validation passes; construct through a draft rather than directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Issuing party.
    pub company_details: CompanyDetails,
    /// Billed party name.
    pub client_name: String,
    /// Billed party email.
    pub client_email: String,
    /// Billed party VAT number, for B2B invoices.
    pub client_vat_number: Option<String>,
    /// Invoice number. Uniqueness is the external store's concern.
    pub invoice_number: String,
    /// Date the invoice was issued.
    pub issue_date: NaiveDate,
    /// Payment due date, derived from the payment terms unless overridden.
    pub due_date: Option<NaiveDate>,
    /// Line items, never empty.
    pub items: Vec<LineItem>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// When false, the aggregate VAT line is suppressed and the grand total
    /// equals the subtotal. Per-line tax is still derivable.
    pub include_vat: bool,
    /// Payment terms policy.
    pub payment_terms: PaymentTerms,
    /// Bank details printed in the payment block.
    pub bank_details: String,
    /// Calculated totals (set by `calculate_totals`, consumed by projection).
    pub totals: Option<Totals>,
}

/// Derived monetary summary of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line net amounts.
    pub subtotal: Decimal,
    /// Aggregate VAT; zero when `include_vat` is false.
    pub tax: Decimal,
    /// Grand total = subtotal + tax.
    pub total: Decimal,
    /// Per-line net and tax amounts, in item order, for line-by-line display.
    pub lines: Vec<LineTotals>,
}

/// Derived amounts for a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    /// quantity × unit price.
    pub total: Decimal,
    /// total × vat_rate / 100, always computed at the line's own rate.
    pub tax: Decimal,
}
