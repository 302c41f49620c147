#![cfg(feature = "document")]

use rust_decimal_macros::dec;
use sterling::core::*;
use sterling::document::{Block, Document, project, render_text};

fn company() -> CompanyDetails {
    CompanyDetails {
        name: "Acme Design Ltd".into(),
        address: "1 High Street, London".into(),
        vat_number: "GB123456789".into(),
        company_number: "12345678".into(),
        phone: None,
        email: None,
    }
}

fn invoice(include_vat: bool) -> Invoice {
    let mut draft = InvoiceDraft::new();
    draft.company_details = company();
    draft.client_name = "Globex Corp".into();
    draft.client_email = "accounts@globex.example".into();
    draft.invoice_number = "INV-2024-001".into();
    draft.set_issue_date("2024-06-15");
    draft.bank_details = "Sort 12-34-56, Account 12345678".into();
    draft.include_vat = include_vat;
    draft.items = vec![LineItem::new("Design work", dec!(10), dec!(50), dec!(20))];
    draft.finalize().unwrap()
}

fn document(include_vat: bool) -> Document {
    project(&invoice(include_vat)).unwrap()
}

#[test]
fn section_order_is_fixed() {
    let doc = document(true);
    let kinds: Vec<&str> = doc
        .blocks
        .iter()
        .map(|b| match b {
            Block::Heading(_) => "heading",
            Block::KeyValues { .. } => "key_values",
            Block::Table { .. } => "table",
            Block::Totals(_) => "totals",
            Block::Text(_) => "text",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "heading",    // title
            "key_values", // metadata
            "key_values", // issuer
            "key_values", // bill-to
            "table",      // items
            "totals",
            "key_values", // payment
        ]
    );
}

#[test]
fn layout_is_a4_with_two_fonts() {
    let doc = document(true);
    assert_eq!(doc.layout.page_size, "A4");
    assert_eq!(doc.layout.margin, 30);
    assert_eq!(doc.layout.font_regular, "Helvetica");
    assert_eq!(doc.layout.font_bold, "Helvetica-Bold");
}

#[test]
fn table_column_order() {
    let doc = document(true);
    let Some(Block::Table { columns, rows }) = doc
        .blocks
        .iter()
        .find(|b| matches!(b, Block::Table { .. }))
    else {
        panic!("no table block");
    };
    let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(headers, vec!["Description", "Qty", "Price", "VAT", "Total"]);
    let widths: Vec<u32> = columns.iter().map(|c| c.width).collect();
    assert_eq!(widths, vec![4, 1, 1, 1, 1]);

    assert_eq!(
        rows[0],
        vec!["Design work", "10", "£50.00", "20%", "£500.00"]
    );
}

#[test]
fn totals_block_matches_calculator_output() {
    let inv = invoice(true);
    let independent = calculate_totals(&inv.items, inv.include_vat);
    let doc = project(&inv).unwrap();

    let Some(Block::Totals(lines)) = doc.blocks.iter().find(|b| matches!(b, Block::Totals(_)))
    else {
        panic!("no totals block");
    };
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].label, "Subtotal");
    assert_eq!(lines[0].amount, format_gbp(independent.subtotal));
    assert_eq!(lines[1].label, "VAT");
    assert_eq!(lines[1].amount, format_gbp(independent.tax));
    assert_eq!(lines[2].label, "Total");
    assert_eq!(lines[2].amount, format_gbp(independent.total));
    assert!(lines[2].bold);
    assert!(!lines[0].bold);
}

#[test]
fn vat_line_suppressed_when_excluded() {
    let doc = document(false);
    let Some(Block::Totals(lines)) = doc.blocks.iter().find(|b| matches!(b, Block::Totals(_)))
    else {
        panic!("no totals block");
    };
    let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Subtotal", "Total"]);
    assert_eq!(lines[1].amount, "£500.00");
}

#[test]
fn client_vat_number_appears_only_when_present() {
    let doc = document(true);
    let json = serde_json::to_string(&doc).unwrap();
    assert!(!json.contains("GB987654321"));

    let mut draft = InvoiceDraft::new();
    draft.company_details = company();
    draft.client_name = "Globex Corp".into();
    draft.client_email = "accounts@globex.example".into();
    draft.client_vat_number = "GB987654321".into();
    draft.invoice_number = "INV-2024-002".into();
    draft.set_issue_date("2024-06-15");
    draft.bank_details = "Sort 12-34-56".into();
    draft.items = vec![LineItem::new("Design work", dec!(1), dec!(50), dec!(20))];
    let doc = project(&draft.finalize().unwrap()).unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    assert!(json.contains("GB987654321"));
}

#[test]
fn payment_block_uses_terms_label() {
    let text = render_text(&document(true));
    assert!(text.contains("Payment Terms: Net 30"));
    assert!(text.contains("Sort 12-34-56, Account 12345678"));
}

#[test]
fn projection_requires_computed_totals() {
    let mut inv = invoice(true);
    inv.totals = None;
    let err = project(&inv).unwrap_err();
    assert!(matches!(err, InvoiceError::Projection(_)));
}

#[test]
fn projection_requires_due_date() {
    let mut inv = invoice(true);
    inv.due_date = None;
    let err = project(&inv).unwrap_err();
    assert!(matches!(err, InvoiceError::Projection(_)));
}

#[test]
fn text_rendering_is_deterministic_and_ordered() {
    let text = render_text(&document(true));
    let heading = text.find("INVOICE").unwrap();
    let issuer = text.find("Acme Design Ltd").unwrap();
    let bill_to = text.find("Bill To").unwrap();
    let table = text.find("Description | Qty | Price | VAT | Total").unwrap();
    let totals = text.find("Subtotal: £500.00").unwrap();
    let payment = text.find("Payment Details").unwrap();
    assert!(heading < issuer && issuer < bill_to && bill_to < table);
    assert!(table < totals && totals < payment);

    assert_eq!(text, render_text(&document(true)));
}

#[test]
fn notes_render_after_payment_block() {
    let mut draft = InvoiceDraft::new();
    draft.company_details = company();
    draft.client_name = "Globex Corp".into();
    draft.client_email = "accounts@globex.example".into();
    draft.invoice_number = "INV-2024-003".into();
    draft.set_issue_date("2024-06-15");
    draft.bank_details = "Sort 12-34-56".into();
    draft.notes = "Thank you for your business.".into();
    draft.items = vec![LineItem::new("Design work", dec!(1), dec!(50), dec!(20))];
    let doc = project(&draft.finalize().unwrap()).unwrap();

    assert!(matches!(doc.blocks.last(), Some(Block::Text(t)) if t.contains("Thank you")));
}

#[test]
fn document_serde_round_trip() {
    let doc = document(true);
    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}
