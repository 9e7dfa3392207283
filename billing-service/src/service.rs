//! Async orchestration tying the ledger to the record store and the
//! bed inventory.
//!
//! Each operation is one read-modify-write: load the snapshot, validate
//! the form payload, apply the pure mutation, write the new snapshot
//! back verbatim. Concurrent edits to the same admission are resolved
//! by the store, not here.

use crate::admission;
use crate::error::{BillingError, BillingResult};
use crate::invoice;
use crate::ledger::{self, LedgerSummary};
use crate::models::{BillingRecord, EquipmentCharge, PaymentMethod, ServiceCharge};
use crate::reporting::{self, DailyMetrics, ReportFilters};
use crate::validation::{
    AdmissionInput, DiscountInput, EquipmentInput, FormValidation, PaymentInput, ServiceInput,
};
use chrono::{DateTime, Utc};
use layout_engine::{LayoutSettings, PrintDocument};
use logger_redacted::redact_name;
use record_store::{BedInventory, BedStatus, RecordStore};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Store path holding one record per IPD admission
const ADMISSIONS_PATH: &str = "ipd/admissions";

/// Billing service
pub struct BillingService<S, B> {
    store: S,
    beds: B,
    settings: LayoutSettings,
}

impl<S: RecordStore, B: BedInventory> BillingService<S, B> {
    /// Create a new billing service
    pub fn new(store: S, beds: B) -> Self {
        Self {
            store,
            beds,
            settings: LayoutSettings::default(),
        }
    }

    pub fn with_settings(store: S, beds: B, settings: LayoutSettings) -> Self {
        Self {
            store,
            beds,
            settings,
        }
    }

    fn record_path(admission_id: Uuid) -> String {
        format!("{ADMISSIONS_PATH}/{}", admission_id.simple())
    }

    async fn load(&self, admission_id: Uuid) -> BillingResult<BillingRecord> {
        let value = self
            .store
            .get(&Self::record_path(admission_id))
            .await?
            .ok_or_else(|| BillingError::NotFound(format!("admission {admission_id}")))?;
        serde_json::from_value(value).map_err(|e| BillingError::Serialization(e.to_string()))
    }

    async fn save(&self, record: &BillingRecord) -> BillingResult<()> {
        let value =
            serde_json::to_value(record).map_err(|e| BillingError::Serialization(e.to_string()))?;
        self.store
            .set(&Self::record_path(record.admission_id), value)
            .await?;
        Ok(())
    }

    /// Book an admission: create its billing record and occupy the bed.
    ///
    /// An advance deposit, when given, is recorded as the first cash
    /// payment so the deposit and the payment ledger stay consistent.
    pub async fn open_admission(&self, input: AdmissionInput) -> BillingResult<BillingRecord> {
        input.validate()?;

        let mut record = BillingRecord::new(
            Uuid::new_v4(),
            input.patient_name,
            input.room_type,
            input.bed_id,
            Utc::now(),
        );
        if let Some(advance) = input.advance {
            if advance > Decimal::ZERO {
                record =
                    admission::apply_payment(&record, advance, PaymentMethod::Cash, Utc::now())?;
            }
        }

        self.save(&record).await?;
        self.beds
            .set_bed_status(&record.room_type, &record.bed_id, BedStatus::Occupied)
            .await?;

        tracing::info!(
            admission_id = %record.admission_id,
            patient = %redact_name(&record.patient_name),
            room_type = %record.room_type,
            "admission opened"
        );
        Ok(record)
    }

    /// Add an additional service to an admission
    pub async fn add_service(
        &self,
        admission_id: Uuid,
        input: ServiceInput,
    ) -> BillingResult<BillingRecord> {
        input.validate()?;
        let record = self.load(admission_id).await?;
        let next = admission::add_service(
            &record,
            ServiceCharge::new(input.name, input.amount, Utc::now()),
        )?;
        self.save(&next).await?;
        Ok(next)
    }

    /// Add an equipment charge to an admission
    pub async fn add_equipment(
        &self,
        admission_id: Uuid,
        input: EquipmentInput,
    ) -> BillingResult<BillingRecord> {
        input.validate()?;
        let record = self.load(admission_id).await?;
        let next = admission::add_equipment(
            &record,
            EquipmentCharge {
                category: input.category,
                name: input.name,
                price: input.price,
                created_at: Utc::now(),
            },
        )?;
        self.save(&next).await?;
        Ok(next)
    }

    /// Record a payment against an admission
    pub async fn record_payment(
        &self,
        admission_id: Uuid,
        input: PaymentInput,
    ) -> BillingResult<BillingRecord> {
        input.validate()?;
        let record = self.load(admission_id).await?;
        let next = admission::apply_payment(&record, input.amount, input.method, Utc::now())?;
        self.save(&next).await?;

        tracing::info!(
            admission_id = %admission_id,
            patient = %redact_name(&next.patient_name),
            amount = %input.amount,
            method = input.method.as_str(),
            "payment recorded"
        );
        Ok(next)
    }

    /// Mark the service at `index` completed (idempotent)
    pub async fn complete_service(
        &self,
        admission_id: Uuid,
        index: usize,
    ) -> BillingResult<BillingRecord> {
        let record = self.load(admission_id).await?;
        let next = admission::mark_service_completed(&record, index)?;
        self.save(&next).await?;
        Ok(next)
    }

    /// Overwrite the admission's discount percentage
    pub async fn set_discount(
        &self,
        admission_id: Uuid,
        input: DiscountInput,
    ) -> BillingResult<BillingRecord> {
        input.validate()?;
        let record = self.load(admission_id).await?;
        let next = admission::apply_discount(&record, input.percentage)?;
        self.save(&next).await?;
        Ok(next)
    }

    /// Close the admission and release its bed
    pub async fn discharge(
        &self,
        admission_id: Uuid,
        discharged_at: DateTime<Utc>,
    ) -> BillingResult<BillingRecord> {
        let record = self.load(admission_id).await?;
        let next = admission::apply_discharge(&record, discharged_at)?;
        self.save(&next).await?;
        self.beds
            .set_bed_status(&next.room_type, &next.bed_id, BedStatus::Available)
            .await?;

        tracing::info!(
            admission_id = %admission_id,
            patient = %redact_name(&next.patient_name),
            "admission discharged, bed released"
        );
        Ok(next)
    }

    /// Derived totals for one admission
    pub async fn summary(&self, admission_id: Uuid) -> BillingResult<LedgerSummary> {
        let record = self.load(admission_id).await?;
        Ok(ledger::summarize(&record))
    }

    /// Printable invoice for one admission
    pub async fn invoice(&self, admission_id: Uuid) -> BillingResult<PrintDocument> {
        let record = self.load(admission_id).await?;
        invoice::build_invoice(&record, &self.settings)
    }

    /// Daily performance metrics over every admission record
    pub async fn daily_report(&self, filters: &ReportFilters) -> BillingResult<DailyMetrics> {
        let snapshots = self.store.get_all(ADMISSIONS_PATH).await?;
        let records = snapshots
            .into_iter()
            .map(|(_, value)| serde_json::from_value(value))
            .collect::<Result<Vec<BillingRecord>, _>>()
            .map_err(|e| BillingError::Serialization(e.to_string()))?;
        Ok(reporting::derive_metrics(&records, filters))
    }

    /// Printable daily performance report
    pub async fn daily_report_document(
        &self,
        filters: &ReportFilters,
        day_label: &str,
    ) -> BillingResult<PrintDocument> {
        let metrics = self.daily_report(filters).await?;
        invoice::build_daily_report(&metrics, day_label, &self.settings)
    }
}
