//! Daily performance metrics, derived on demand.
//!
//! The legacy console staged dashboard counts through global mutable
//! accumulators updated on every data event. This module replaces that
//! with a pure reducer: hand it the record snapshots and the filters,
//! get the metrics back. Same input, same output, nothing retained
//! between calls.

use crate::ledger;
use crate::models::{BillingRecord, PaymentMethod, ServiceStatus};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use itertools::Itertools;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Time window and ward filters for the performance report
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportFilters {
    /// Inclusive lower bound
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound
    pub to: Option<DateTime<Utc>>,
    pub room_type: Option<String>,
}

impl ReportFilters {
    /// Window covering one calendar day (UTC)
    pub fn for_day(day: NaiveDate) -> Self {
        let start = day.and_time(NaiveTime::MIN).and_utc();
        Self {
            from: Some(start),
            to: Some(start + Duration::days(1)),
            room_type: None,
        }
    }

    fn in_window(&self, at: DateTime<Utc>) -> bool {
        self.from.map_or(true, |from| at >= from) && self.to.map_or(true, |to| at < to)
    }

    fn matches_ward(&self, record: &BillingRecord) -> bool {
        self.room_type
            .as_deref()
            .map_or(true, |room| record.room_type == room)
    }
}

/// Collections received through one payment method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodCollection {
    pub method: PaymentMethod,
    pub amount: Decimal,
    pub count: usize,
}

/// One derived snapshot of the day's performance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMetrics {
    /// Admissions whose booking falls inside the window
    pub admissions_opened: usize,
    /// Discharges inside the window
    pub discharges: usize,
    /// Status counts over services booked inside the window
    pub services_completed: usize,
    pub services_pending: usize,
    /// Service and equipment charges booked inside the window
    pub gross_charges: Decimal,
    /// Payments received inside the window
    pub collections: Decimal,
    pub by_method: Vec<MethodCollection>,
    /// Balance due summed over admissions still open, regardless of
    /// window (outstanding money is a snapshot figure, not a daily one)
    pub outstanding: Decimal,
}

/// Reduce record snapshots into the day's metrics
pub fn derive_metrics(records: &[BillingRecord], filters: &ReportFilters) -> DailyMetrics {
    let records: Vec<&BillingRecord> = records
        .iter()
        .filter(|r| filters.matches_ward(r))
        .collect();

    let admissions_opened = records
        .iter()
        .filter(|r| filters.in_window(r.admitted_at))
        .count();

    let discharges = records
        .iter()
        .filter_map(|r| r.discharged_at)
        .filter(|at| filters.in_window(*at))
        .count();

    let windowed_services = records
        .iter()
        .flat_map(|r| r.services.iter())
        .filter(|s| filters.in_window(s.created_at));
    let (services_completed, services_pending) =
        windowed_services.fold((0, 0), |(done, pending), s| match s.status {
            ServiceStatus::Completed => (done + 1, pending),
            ServiceStatus::Pending => (done, pending + 1),
        });

    let service_charges: Decimal = records
        .iter()
        .flat_map(|r| r.services.iter())
        .filter(|s| filters.in_window(s.created_at))
        .map(|s| s.amount)
        .sum();
    let equipment_charges: Decimal = records
        .iter()
        .flat_map(|r| r.equipment.iter())
        .filter(|e| filters.in_window(e.created_at))
        .map(|e| e.price)
        .sum();

    let windowed_payments: Vec<_> = records
        .iter()
        .flat_map(|r| r.payments.iter())
        .filter(|p| filters.in_window(p.received_at))
        .collect();
    let collections: Decimal = windowed_payments.iter().map(|p| p.amount).sum();

    let by_method: Vec<MethodCollection> = windowed_payments
        .iter()
        .map(|p| (p.method, p.amount))
        .into_grouping_map()
        .fold((Decimal::ZERO, 0usize), |(total, count), _method, amount| {
            (total + amount, count + 1)
        })
        .into_iter()
        .map(|(method, (amount, count))| MethodCollection {
            method,
            amount,
            count,
        })
        .sorted_by_key(|m| m.method)
        .collect();

    let outstanding: Decimal = records
        .iter()
        .filter(|r| !r.is_discharged())
        .map(|r| ledger::balance_due(r))
        .sum();

    DailyMetrics {
        admissions_opened,
        discharges,
        services_completed,
        services_pending,
        gross_charges: service_charges + equipment_charges,
        collections,
        by_method,
        outstanding,
    }
}
