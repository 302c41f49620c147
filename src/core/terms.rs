//! Payment terms and due-date resolution.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Named payment-terms policies determining the gap between issue date and
/// due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentTerms {
    /// Payment expected on the issue date.
    DueOnReceipt,
    /// 7 days after issue.
    Net7,
    /// 14 days after issue.
    Net14,
    /// 30 days after issue.
    Net30,
    /// 60 days after issue.
    Net60,
}

impl PaymentTerms {
    /// Stable code used in stored records and form values.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DueOnReceipt => "due_on_receipt",
            Self::Net7 => "net_7",
            Self::Net14 => "net_14",
            Self::Net30 => "net_30",
            Self::Net60 => "net_60",
        }
    }

    /// Parse from a code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "due_on_receipt" => Some(Self::DueOnReceipt),
            "net_7" => Some(Self::Net7),
            "net_14" => Some(Self::Net14),
            "net_30" => Some(Self::Net30),
            "net_60" => Some(Self::Net60),
            _ => None,
        }
    }

    /// Display label for selection lists and the printed payment block.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DueOnReceipt => "Due on Receipt",
            Self::Net7 => "Net 7",
            Self::Net14 => "Net 14",
            Self::Net30 => "Net 30",
            Self::Net60 => "Net 60",
        }
    }

    /// Days between issue date and due date under this policy.
    pub fn offset_days(&self) -> u64 {
        match self {
            Self::DueOnReceipt => 0,
            Self::Net7 => 7,
            Self::Net14 => 14,
            Self::Net30 => 30,
            Self::Net60 => 60,
        }
    }

    /// Due date for an invoice issued on `issue_date`. Saturates to the
    /// issue date at the edge of chrono's representable range.
    pub fn due_date(&self, issue_date: NaiveDate) -> NaiveDate {
        issue_date
            .checked_add_days(Days::new(self.offset_days()))
            .unwrap_or(issue_date)
    }
}

impl Default for PaymentTerms {
    /// Net 30 — the form default and the fallback for unrecognized codes.
    fn default() -> Self {
        Self::Net30
    }
}

/// Resolve a due date from a raw issue-date string and a payment-terms code.
///
/// Total over arbitrary input: an unrecognized terms code falls back to
/// net_30; an empty or unparseable issue date yields `None` rather than a
/// guessed date.
pub fn resolve_due_date(issue_date: &str, terms_code: &str) -> Option<NaiveDate> {
    let issue = NaiveDate::parse_from_str(issue_date.trim(), "%Y-%m-%d").ok()?;
    let terms = PaymentTerms::from_code(terms_code).unwrap_or_default();
    Some(terms.due_date(issue))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_on_receipt_is_issue_date() {
        assert_eq!(
            resolve_due_date("2024-06-15", "due_on_receipt"),
            Some(date(2024, 6, 15))
        );
    }

    #[test]
    fn net_30_crosses_year_boundary() {
        assert_eq!(
            resolve_due_date("2024-12-15", "net_30"),
            Some(date(2025, 1, 14))
        );
    }

    #[test]
    fn net_7_crosses_month_boundary() {
        assert_eq!(
            resolve_due_date("2024-06-28", "net_7"),
            Some(date(2024, 7, 5))
        );
    }

    #[test]
    fn net_60_offset() {
        assert_eq!(
            resolve_due_date("2024-01-01", "net_60"),
            Some(date(2024, 3, 1))
        );
    }

    #[test]
    fn unrecognized_code_falls_back_to_net_30() {
        assert_eq!(
            resolve_due_date("2024-06-15", "whenever"),
            resolve_due_date("2024-06-15", "net_30")
        );
    }

    #[test]
    fn missing_or_garbage_issue_date_yields_none() {
        assert_eq!(resolve_due_date("", "net_30"), None);
        assert_eq!(resolve_due_date("not-a-date", "net_30"), None);
        assert_eq!(resolve_due_date("2024-13-40", "net_30"), None);
    }

    #[test]
    fn code_round_trip() {
        for terms in [
            PaymentTerms::DueOnReceipt,
            PaymentTerms::Net7,
            PaymentTerms::Net14,
            PaymentTerms::Net30,
            PaymentTerms::Net60,
        ] {
            assert_eq!(PaymentTerms::from_code(terms.code()), Some(terms));
        }
        assert_eq!(PaymentTerms::from_code("net_90"), None);
    }

    #[test]
    fn leap_day_arithmetic() {
        assert_eq!(
            resolve_due_date("2024-02-15", "net_14"),
            Some(date(2024, 2, 29))
        );
    }
}
