//! Printable document assembly for invoices and the daily report.
//!
//! Builds the ordered block list for each document, estimates block
//! heights from the layout settings, and lets the layout engine cut the
//! list into A4 pages. The PDF rasterizer downstream consumes the
//! resulting pages one by one.

use crate::error::BillingResult;
use crate::ledger;
use crate::models::BillingRecord;
use crate::reporting::DailyMetrics;
use layout_engine::{BlockContent, ContentBlock, LayoutSettings, PrintDocument};
use rust_decimal::Decimal;

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

fn date(at: chrono::DateTime<chrono::Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Assemble the printable invoice for one admission
pub fn build_invoice(
    record: &BillingRecord,
    settings: &LayoutSettings,
) -> BillingResult<PrintDocument> {
    let summary = ledger::summarize(record);
    let mut blocks: Vec<ContentBlock> = Vec::new();

    blocks.push(settings.block(BlockContent::Heading {
        text: "Inpatient Invoice".to_string(),
    }));
    blocks.push(settings.block(BlockContent::LabeledValues {
        pairs: vec![
            ("Patient".to_string(), record.patient_name.clone()),
            (
                "Admission".to_string(),
                record.admission_id.simple().to_string(),
            ),
            (
                "Room / Bed".to_string(),
                format!("{} / {}", record.room_type, record.bed_id),
            ),
            ("Admitted".to_string(), date(record.admitted_at)),
            (
                "Discharged".to_string(),
                record.discharged_at.map_or_else(|| "-".to_string(), date),
            ),
        ],
    }));
    blocks.push(settings.block(BlockContent::Rule));

    if !record.services.is_empty() {
        blocks.push(settings.block(BlockContent::Subheading {
            text: "Services".to_string(),
        }));
        blocks.push(settings.block(BlockContent::TableHeader {
            columns: vec![
                "Service".to_string(),
                "Status".to_string(),
                "Amount".to_string(),
            ],
        }));
        for service in &record.services {
            blocks.push(settings.block(BlockContent::TableRow {
                cells: vec![
                    service.name.clone(),
                    service.status.as_str().to_string(),
                    money(service.amount),
                ],
            }));
        }
    }

    if !record.equipment.is_empty() {
        blocks.push(settings.block(BlockContent::Subheading {
            text: "Equipment".to_string(),
        }));
        blocks.push(settings.block(BlockContent::TableHeader {
            columns: vec![
                "Category".to_string(),
                "Item".to_string(),
                "Price".to_string(),
            ],
        }));
        for equipment in &record.equipment {
            blocks.push(settings.block(BlockContent::TableRow {
                cells: vec![
                    equipment.category.clone(),
                    equipment.name.clone(),
                    money(equipment.price),
                ],
            }));
        }
    }

    if !record.payments.is_empty() {
        blocks.push(settings.block(BlockContent::Subheading {
            text: "Payments".to_string(),
        }));
        blocks.push(settings.block(BlockContent::TableHeader {
            columns: vec![
                "Date".to_string(),
                "Method".to_string(),
                "Amount".to_string(),
            ],
        }));
        for payment in &record.payments {
            blocks.push(settings.block(BlockContent::TableRow {
                cells: vec![
                    date(payment.received_at),
                    payment.method.as_str().to_string(),
                    money(payment.amount),
                ],
            }));
        }
    }

    blocks.push(settings.block(BlockContent::Rule));
    blocks.push(settings.block(BlockContent::TotalsLine {
        label: "Gross charges".to_string(),
        value: money(summary.gross_charges),
        emphasis: false,
    }));
    blocks.push(settings.block(BlockContent::TotalsLine {
        label: format!("Discount ({}%)", summary.discount_percent),
        value: money(summary.discount_amount),
        emphasis: false,
    }));
    blocks.push(settings.block(BlockContent::TotalsLine {
        label: "Net charges".to_string(),
        value: money(summary.net_charges),
        emphasis: false,
    }));
    blocks.push(settings.block(BlockContent::TotalsLine {
        label: "Paid".to_string(),
        value: money(summary.total_paid),
        emphasis: false,
    }));
    blocks.push(settings.block(BlockContent::TotalsLine {
        label: "Balance due".to_string(),
        value: money(summary.balance_due),
        emphasis: true,
    }));

    let document = PrintDocument::new(
        format!("invoice-{}", record.admission_id.simple()),
        settings.page,
        blocks,
    )?;
    Ok(document)
}

/// Assemble the printable daily performance report
pub fn build_daily_report(
    metrics: &DailyMetrics,
    day_label: &str,
    settings: &LayoutSettings,
) -> BillingResult<PrintDocument> {
    let mut blocks: Vec<ContentBlock> = Vec::new();

    blocks.push(settings.block(BlockContent::Heading {
        text: "Daily Performance Report".to_string(),
    }));
    blocks.push(settings.block(BlockContent::Paragraph {
        text: day_label.to_string(),
    }));
    blocks.push(settings.block(BlockContent::LabeledValues {
        pairs: vec![
            (
                "Admissions".to_string(),
                metrics.admissions_opened.to_string(),
            ),
            ("Discharges".to_string(), metrics.discharges.to_string()),
            (
                "Services completed".to_string(),
                metrics.services_completed.to_string(),
            ),
            (
                "Services pending".to_string(),
                metrics.services_pending.to_string(),
            ),
        ],
    }));
    blocks.push(settings.block(BlockContent::Rule));

    if !metrics.by_method.is_empty() {
        blocks.push(settings.block(BlockContent::Subheading {
            text: "Collections by method".to_string(),
        }));
        blocks.push(settings.block(BlockContent::TableHeader {
            columns: vec![
                "Method".to_string(),
                "Payments".to_string(),
                "Amount".to_string(),
            ],
        }));
        for collection in &metrics.by_method {
            blocks.push(settings.block(BlockContent::TableRow {
                cells: vec![
                    collection.method.as_str().to_string(),
                    collection.count.to_string(),
                    money(collection.amount),
                ],
            }));
        }
    }

    blocks.push(settings.block(BlockContent::Rule));
    blocks.push(settings.block(BlockContent::TotalsLine {
        label: "Gross charges".to_string(),
        value: money(metrics.gross_charges),
        emphasis: false,
    }));
    blocks.push(settings.block(BlockContent::TotalsLine {
        label: "Collections".to_string(),
        value: money(metrics.collections),
        emphasis: true,
    }));
    blocks.push(settings.block(BlockContent::TotalsLine {
        label: "Outstanding".to_string(),
        value: money(metrics.outstanding),
        emphasis: false,
    }));

    let document = PrintDocument::new(
        format!("daily-report-{day_label}"),
        settings.page,
        blocks,
    )?;
    Ok(document)
}
