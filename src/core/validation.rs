//! Draft validation — a structural gate ahead of submission.
//!
//! Validation is pure and idempotent: safe to re-run on every keystroke,
//! reporting all violations rather than stopping at the first. Nothing is
//! coerced; bad input is reported, never corrected.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::draft::InvoiceDraft;
use super::error::ValidationError;
use super::types::{CompanyDetails, LineItem};

/// Validate a candidate invoice draft, possibly partially filled.
///
/// Returns every violation found, keyed by field path
/// (e.g. `items[2].quantity`, `company_details.vat_number`). An empty
/// result means the draft may be finalized and submitted.
pub fn validate_draft(draft: &InvoiceDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_company(&draft.company_details, &mut errors);

    if draft.client_name.trim().is_empty() {
        errors.push(ValidationError::new("client_name", "Client name is required"));
    }

    if !is_valid_email(&draft.client_email) {
        errors.push(ValidationError::new("client_email", "Invalid email address"));
    }

    if draft.invoice_number.trim().is_empty() {
        errors.push(ValidationError::new(
            "invoice_number",
            "Invoice number is required",
        ));
    }

    validate_date(&draft.issue_date, "issue_date", "Issue date", &mut errors);
    validate_date(&draft.due_date, "due_date", "Due date", &mut errors);

    if draft.items.is_empty() {
        errors.push(ValidationError::new("items", "At least one item is required"));
    }
    for (i, item) in draft.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    if draft.bank_details.trim().is_empty() {
        errors.push(ValidationError::new(
            "bank_details",
            "Bank details are required",
        ));
    }

    errors
}

fn validate_company(company: &CompanyDetails, errors: &mut Vec<ValidationError>) {
    if company.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "company_details.name",
            "Company name is required",
        ));
    }

    if company.address.trim().is_empty() {
        errors.push(ValidationError::new(
            "company_details.address",
            "Address is required",
        ));
    }

    if !is_valid_uk_vat_number(&company.vat_number) {
        errors.push(ValidationError::new(
            "company_details.vat_number",
            "Invalid UK VAT number format",
        ));
    }

    if company.company_number.len() < 8 {
        errors.push(ValidationError::new(
            "company_details.company_number",
            "Company number is required",
        ));
    }

    if let Some(email) = &company.email {
        if !is_valid_email(email) {
            errors.push(ValidationError::new(
                "company_details.email",
                "Invalid email address",
            ));
        }
    }
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            "Description is required",
        ));
    }

    if item.quantity < Decimal::ONE {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "Quantity must be at least 1",
        ));
    }

    if item.price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.price"),
            "Price must be positive",
        ));
    }
}

fn validate_date(value: &str, field: &str, label: &str, errors: &mut Vec<ValidationError>) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(ValidationError::new(field, format!("{label} is required")));
    } else if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        errors.push(ValidationError::new(
            field,
            format!("{label} is not a valid date (expected YYYY-MM-DD)"),
        ));
    }
}

/// Check a UK VAT registration number: "GB" followed by exactly 9 digits.
pub fn is_valid_uk_vat_number(vat_number: &str) -> bool {
    let Some(digits) = vat_number.strip_prefix("GB") else {
        return false;
    };
    digits.len() == 9 && digits.chars().all(|c| c.is_ascii_digit())
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain with
/// non-empty labels, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Join validation errors into a single diagnostic line.
pub(crate) fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
