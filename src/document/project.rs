use crate::core::{Invoice, InvoiceError, format_gbp};

use super::{Block, Column, Document, KeyValue, Layout, TotalsLine};

/// Project a validated invoice into its printable document tree.
///
/// Consumes the totals computed at finalization — this function never
/// re-runs validation or calculation. A missing due date or missing totals
/// means the caller skipped the submit path's checks and is reported as
/// [`InvoiceError::Projection`].
pub fn project(invoice: &Invoice) -> Result<Document, InvoiceError> {
    let totals = invoice.totals.as_ref().ok_or_else(|| {
        InvoiceError::Projection("totals must be calculated before projection".into())
    })?;
    let due_date = invoice.due_date.ok_or_else(|| {
        InvoiceError::Projection("due date must be resolved before projection".into())
    })?;

    let mut blocks = Vec::new();

    // Title and metadata
    blocks.push(Block::Heading("INVOICE".into()));
    blocks.push(Block::KeyValues {
        title: None,
        pairs: vec![
            KeyValue::new("Invoice Number", &invoice.invoice_number),
            KeyValue::new("Date", invoice.issue_date.to_string()),
            KeyValue::new("Due Date", due_date.to_string()),
        ],
    });

    // Issuer details
    let company = &invoice.company_details;
    let mut issuer = vec![
        KeyValue::new("", &company.address),
        KeyValue::new("VAT", &company.vat_number),
        KeyValue::new("Company No", &company.company_number),
    ];
    if let Some(phone) = &company.phone {
        issuer.push(KeyValue::new("Phone", phone));
    }
    if let Some(email) = &company.email {
        issuer.push(KeyValue::new("Email", email));
    }
    blocks.push(Block::KeyValues {
        title: Some(company.name.clone()),
        pairs: issuer,
    });

    // Bill-to details
    let mut bill_to = vec![KeyValue::new("", &invoice.client_name)];
    if let Some(vat) = &invoice.client_vat_number {
        bill_to.push(KeyValue::new("VAT", vat));
    }
    blocks.push(Block::KeyValues {
        title: Some("Bill To".into()),
        pairs: bill_to,
    });

    // Itemized table — column order is fixed
    let columns = vec![
        Column::new("Description", 4),
        Column::new("Qty", 1),
        Column::new("Price", 1),
        Column::new("VAT", 1),
        Column::new("Total", 1),
    ];
    let rows = invoice
        .items
        .iter()
        .zip(&totals.lines)
        .map(|(item, line)| {
            vec![
                item.description.clone(),
                item.quantity.normalize().to_string(),
                format_gbp(item.price),
                format!("{}%", item.vat_rate.normalize()),
                format_gbp(line.total),
            ]
        })
        .collect();
    blocks.push(Block::Table { columns, rows });

    // Totals — VAT line only when the invoice includes VAT
    let mut summary = vec![TotalsLine {
        label: "Subtotal".into(),
        amount: format_gbp(totals.subtotal),
        bold: false,
    }];
    if invoice.include_vat {
        summary.push(TotalsLine {
            label: "VAT".into(),
            amount: format_gbp(totals.tax),
            bold: false,
        });
    }
    summary.push(TotalsLine {
        label: "Total".into(),
        amount: format_gbp(totals.total),
        bold: true,
    });
    blocks.push(Block::Totals(summary));

    // Payment details
    blocks.push(Block::KeyValues {
        title: Some("Payment Details".into()),
        pairs: vec![
            KeyValue::new("", &invoice.bank_details),
            KeyValue::new("Payment Terms", invoice.payment_terms.label()),
        ],
    });

    if let Some(notes) = &invoice.notes {
        blocks.push(Block::Text(notes.clone()));
    }

    Ok(Document {
        layout: Layout::default(),
        blocks,
    })
}
