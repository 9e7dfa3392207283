//! Copy-on-write mutations over the billing record.
//!
//! Every operation takes the current snapshot and returns a new one;
//! persistence is the caller's job. Each mutation checks the admission
//! lifecycle first: once a record is discharged it is terminal, and
//! the rejection happens here in the data layer rather than behind a
//! disabled button.

use crate::error::{BillingError, BillingResult};
use crate::models::{
    AdmissionState, BillingRecord, EquipmentCharge, Payment, PaymentMethod, ServiceCharge,
    ServiceStatus,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

fn ensure_open(record: &BillingRecord) -> BillingResult<()> {
    match record.state() {
        AdmissionState::Open => Ok(()),
        AdmissionState::Discharged => Err(BillingError::Lifecycle(format!(
            "admission {} is discharged",
            record.admission_id
        ))),
    }
}

/// Append a service charge
pub fn add_service(record: &BillingRecord, service: ServiceCharge) -> BillingResult<BillingRecord> {
    ensure_open(record)?;
    let mut next = record.clone();
    next.services.push(service);
    Ok(next)
}

/// Append an equipment charge
pub fn add_equipment(
    record: &BillingRecord,
    equipment: EquipmentCharge,
) -> BillingResult<BillingRecord> {
    ensure_open(record)?;
    let mut next = record.clone();
    next.equipment.push(equipment);
    Ok(next)
}

/// Record a payment: append to the payment list and grow the deposit.
///
/// Rejects non-positive amounts; the form boundary catches these first,
/// but a payment is money and gets a second gate.
pub fn apply_payment(
    record: &BillingRecord,
    amount: Decimal,
    method: PaymentMethod,
    received_at: DateTime<Utc>,
) -> BillingResult<BillingRecord> {
    ensure_open(record)?;
    if amount <= Decimal::ZERO {
        return Err(BillingError::Validation(format!(
            "payment amount must be positive, got {amount}"
        )));
    }

    let mut next = record.clone();
    next.payments.push(Payment {
        id: Uuid::new_v4(),
        amount,
        method,
        received_at,
    });
    next.deposit += amount;
    Ok(next)
}

/// Transition the service at `index` from pending to completed.
///
/// Idempotent by design: an out-of-range index or an already-completed
/// service returns the record unchanged rather than erroring.
pub fn mark_service_completed(
    record: &BillingRecord,
    index: usize,
) -> BillingResult<BillingRecord> {
    ensure_open(record)?;
    let mut next = record.clone();
    if let Some(service) = next.services.get_mut(index) {
        if service.status == ServiceStatus::Pending {
            service.status = ServiceStatus::Completed;
        }
    }
    Ok(next)
}

/// Overwrite the whole-bill discount percentage.
///
/// Not cumulative: each submission replaces the previous value. The
/// range check lives at the form boundary.
pub fn apply_discount(record: &BillingRecord, percent: Decimal) -> BillingResult<BillingRecord> {
    ensure_open(record)?;
    let mut next = record.clone();
    next.discount_percent = percent;
    Ok(next)
}

/// Close the admission.
///
/// Terminal: a second discharge is a lifecycle error. Releasing the bed
/// back to the ward inventory is the orchestration layer's side of this
/// transition.
pub fn apply_discharge(
    record: &BillingRecord,
    discharged_at: DateTime<Utc>,
) -> BillingResult<BillingRecord> {
    ensure_open(record)?;
    let mut next = record.clone();
    next.discharged_at = Some(discharged_at);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn open_record() -> BillingRecord {
        BillingRecord::new(Uuid::new_v4(), "Asha Rao", "general", "412", Utc::now())
    }

    fn pending_service(amount: i64) -> ServiceCharge {
        ServiceCharge::new("X-Ray", Decimal::from(amount), Utc::now())
    }

    #[test]
    fn test_apply_payment_appends_and_grows_deposit() {
        let record = open_record();

        let amounts = [200i64, 350, 450];
        let mut current = record.clone();
        for amount in amounts {
            current = apply_payment(
                &current,
                Decimal::from(amount),
                PaymentMethod::Cash,
                Utc::now(),
            )
            .unwrap();
        }

        assert_eq!(current.payments.len(), amounts.len());
        assert_eq!(
            current.deposit,
            record.deposit + Decimal::from(amounts.iter().sum::<i64>())
        );
    }

    #[test]
    fn test_apply_payment_rejects_non_positive_amounts() {
        let record = open_record();

        for amount in [Decimal::ZERO, Decimal::from(-5)] {
            let result = apply_payment(&record, amount, PaymentMethod::Card, Utc::now());
            assert!(matches!(result, Err(BillingError::Validation(_))));
        }
    }

    #[test]
    fn test_mark_service_completed_is_idempotent() {
        let record = add_service(&open_record(), pending_service(500)).unwrap();

        let once = mark_service_completed(&record, 0).unwrap();
        let twice = mark_service_completed(&once, 0).unwrap();

        assert_eq!(once.services[0].status, ServiceStatus::Completed);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_mark_service_completed_out_of_range_is_a_no_op() {
        let record = add_service(&open_record(), pending_service(500)).unwrap();

        let next = mark_service_completed(&record, 7).unwrap();
        assert_eq!(next, record);
    }

    #[test]
    fn test_apply_discount_overwrites_instead_of_accumulating() {
        let record = open_record();

        let first = apply_discount(&record, Decimal::from(10)).unwrap();
        let second = apply_discount(&first, Decimal::from(25)).unwrap();
        assert_eq!(second.discount_percent, Decimal::from(25));
    }

    #[test]
    fn test_discharge_is_terminal() {
        let record = open_record();
        let discharged = apply_discharge(&record, Utc::now()).unwrap();

        let again = apply_discharge(&discharged, Utc::now());
        assert!(matches!(again, Err(BillingError::Lifecycle(_))));
    }

    #[test]
    fn test_discharged_record_rejects_every_mutation() {
        let discharged = apply_discharge(&open_record(), Utc::now()).unwrap();

        assert!(matches!(
            add_service(&discharged, pending_service(100)),
            Err(BillingError::Lifecycle(_))
        ));
        assert!(matches!(
            apply_payment(
                &discharged,
                Decimal::from(100),
                PaymentMethod::Online,
                Utc::now()
            ),
            Err(BillingError::Lifecycle(_))
        ));
        assert!(matches!(
            mark_service_completed(&discharged, 0),
            Err(BillingError::Lifecycle(_))
        ));
        assert!(matches!(
            apply_discount(&discharged, Decimal::from(5)),
            Err(BillingError::Lifecycle(_))
        ));
    }

    #[test]
    fn test_mutations_never_touch_the_input_snapshot() {
        let record = add_service(&open_record(), pending_service(500)).unwrap();
        let before = record.clone();

        let _ = apply_payment(&record, Decimal::from(100), PaymentMethod::Cash, Utc::now());
        let _ = mark_service_completed(&record, 0);
        let _ = apply_discharge(&record, Utc::now());

        assert_eq!(record, before);
    }
}
