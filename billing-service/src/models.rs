use crate::error::{BillingError, BillingResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Progress of an additional service booked on an admission.
///
/// Pending -> Completed is the only transition; neither state can be
/// left once completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Pending,
    Completed,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> BillingResult<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(BillingError::Validation(format!(
                "Unknown service status: {s}"
            ))),
        }
    }
}

/// An additional service charged to an admission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCharge {
    pub name: String,
    pub amount: Decimal,
    pub status: ServiceStatus,
    pub created_at: DateTime<Utc>,
}

impl ServiceCharge {
    /// New services start pending until staff marks them done
    pub fn new(name: impl Into<String>, amount: Decimal, created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            amount,
            status: ServiceStatus::Pending,
            created_at,
        }
    }
}

/// An equipment charge on an admission (append-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentCharge {
    pub category: String,
    pub name: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// How a payment was made
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Online,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Online => "online",
            Self::Card => "card",
        }
    }

    pub fn from_str(s: &str) -> BillingResult<Self> {
        match s {
            "cash" => Ok(Self::Cash),
            "online" => Ok(Self::Online),
            "card" => Ok(Self::Card),
            _ => Err(BillingError::Validation(format!(
                "Unknown payment method: {s}"
            ))),
        }
    }
}

/// A received payment, immutable once recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub received_at: DateTime<Utc>,
}

/// Admission lifecycle.
///
/// Discharged is terminal: every mutating operation checks this state
/// and rejects once the admission is closed, instead of leaving the
/// gate to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionState {
    Open,
    Discharged,
}

/// The per-admission billing record: everything one admission has been
/// charged, has paid, and has been discounted.
///
/// The record is treated as an immutable snapshot; mutations in
/// [`crate::admission`] clone it and return a new value, and the store
/// persists whatever it is handed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingRecord {
    pub admission_id: Uuid,
    pub patient_name: String,
    pub room_type: String,
    pub bed_id: String,
    pub admitted_at: DateTime<Utc>,
    pub services: Vec<ServiceCharge>,
    pub equipment: Vec<EquipmentCharge>,
    pub payments: Vec<Payment>,
    /// Running total of money received, incremented on every payment
    pub deposit: Decimal,
    /// Whole-bill discount percentage in [0, 100]; overwritten, never
    /// accumulated
    pub discount_percent: Decimal,
    pub discharged_at: Option<DateTime<Utc>>,
}

impl BillingRecord {
    pub fn new(
        admission_id: Uuid,
        patient_name: impl Into<String>,
        room_type: impl Into<String>,
        bed_id: impl Into<String>,
        admitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            admission_id,
            patient_name: patient_name.into(),
            room_type: room_type.into(),
            bed_id: bed_id.into(),
            admitted_at,
            services: Vec::new(),
            equipment: Vec::new(),
            payments: Vec::new(),
            deposit: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            discharged_at: None,
        }
    }

    pub fn state(&self) -> AdmissionState {
        if self.discharged_at.is_some() {
            AdmissionState::Discharged
        } else {
            AdmissionState::Open
        }
    }

    pub fn is_discharged(&self) -> bool {
        self.state() == AdmissionState::Discharged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_open_and_empty() {
        let record = BillingRecord::new(
            Uuid::new_v4(),
            "Asha Rao",
            "general",
            "412",
            Utc::now(),
        );

        assert_eq!(record.state(), AdmissionState::Open);
        assert!(record.services.is_empty());
        assert_eq!(record.deposit, Decimal::ZERO);
    }

    #[test]
    fn test_discharge_timestamp_flips_state() {
        let mut record =
            BillingRecord::new(Uuid::new_v4(), "Asha Rao", "general", "412", Utc::now());
        record.discharged_at = Some(Utc::now());

        assert_eq!(record.state(), AdmissionState::Discharged);
        assert!(record.is_discharged());
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(
            ServiceStatus::from_str("completed").unwrap(),
            ServiceStatus::Completed
        );
        assert_eq!(ServiceStatus::Pending.as_str(), "pending");
        assert!(ServiceStatus::from_str("done").is_err());
    }

    #[test]
    fn test_payment_method_round_trip() {
        assert_eq!(
            PaymentMethod::from_str("online").unwrap(),
            PaymentMethod::Online
        );
        assert!(PaymentMethod::from_str("upi").is_err());
    }
}
