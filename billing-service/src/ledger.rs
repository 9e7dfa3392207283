//! Pure ledger arithmetic over a billing record snapshot.
//!
//! Nothing here mutates its input or touches the store. Percentages are
//! clamped at the form boundary (`crate::validation`), not here: an
//! out-of-range discount is a caller error and flows through the
//! arithmetic unguarded.

use crate::models::{BillingRecord, EquipmentCharge, Payment, ServiceCharge, ServiceStatus};
use rust_decimal::Decimal;
use serde::Serialize;

/// Every derived total for one admission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    /// Sum of all service amounts regardless of status
    pub total_services: Decimal,
    /// Sum of completed service amounts (the figure the legacy console
    /// persisted under the misleading name "totalPaid")
    pub completed_services: Decimal,
    /// Sum of pending service amounts
    pub pending_services: Decimal,
    pub total_equipment: Decimal,
    /// Services plus equipment, before discount
    pub gross_charges: Decimal,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    /// Gross charges minus the discount
    pub net_charges: Decimal,
    /// Money actually received across all payments
    pub total_paid: Decimal,
    pub deposit: Decimal,
    /// Canonical outstanding balance: net charges minus money received
    pub balance_due: Decimal,
}

/// Sum of all service amounts; empty list sums to zero
pub fn total_services_amount(services: &[ServiceCharge]) -> Decimal {
    services.iter().map(|s| s.amount).sum()
}

/// Sum of amounts for completed services only
pub fn completed_services_amount(services: &[ServiceCharge]) -> Decimal {
    services
        .iter()
        .filter(|s| s.status == ServiceStatus::Completed)
        .map(|s| s.amount)
        .sum()
}

/// Sum of amounts for pending services only.
///
/// Together with [`completed_services_amount`] this partitions
/// [`total_services_amount`] for every input.
pub fn pending_services_amount(services: &[ServiceCharge]) -> Decimal {
    services
        .iter()
        .filter(|s| s.status == ServiceStatus::Pending)
        .map(|s| s.amount)
        .sum()
}

pub fn total_equipment_amount(equipment: &[EquipmentCharge]) -> Decimal {
    equipment.iter().map(|e| e.price).sum()
}

pub fn total_payments(payments: &[Payment]) -> Decimal {
    payments.iter().map(|p| p.amount).sum()
}

/// `total × percentage / 100`. The percentage must already be in
/// [0, 100]; nothing is clamped here.
pub fn discount_amount(total: Decimal, percentage: Decimal) -> Decimal {
    total * percentage / Decimal::ONE_HUNDRED
}

/// `total − discount`. Goes negative when the caller passes an
/// out-of-range discount; deliberately unguarded.
pub fn amount_after_discount(total: Decimal, discount: Decimal) -> Decimal {
    total - discount
}

/// Canonical outstanding balance for one admission: what was charged
/// after discount, minus what has actually been received.
pub fn balance_due(record: &BillingRecord) -> Decimal {
    let gross = total_services_amount(&record.services) + total_equipment_amount(&record.equipment);
    let discount = discount_amount(gross, record.discount_percent);
    amount_after_discount(gross, discount) - total_payments(&record.payments)
}

/// Compute every derived total in one pass over the snapshot
pub fn summarize(record: &BillingRecord) -> LedgerSummary {
    let total_services = total_services_amount(&record.services);
    let completed_services = completed_services_amount(&record.services);
    let pending_services = pending_services_amount(&record.services);
    let total_equipment = total_equipment_amount(&record.equipment);
    let gross_charges = total_services + total_equipment;
    let discount = discount_amount(gross_charges, record.discount_percent);
    let net_charges = amount_after_discount(gross_charges, discount);
    let total_paid = total_payments(&record.payments);

    LedgerSummary {
        total_services,
        completed_services,
        pending_services,
        total_equipment,
        gross_charges,
        discount_percent: record.discount_percent,
        discount_amount: discount,
        net_charges,
        total_paid,
        deposit: record.deposit,
        balance_due: net_charges - total_paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PaymentMethod, ServiceStatus};
    use chrono::Utc;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn service(amount: i64, status: ServiceStatus) -> ServiceCharge {
        ServiceCharge {
            name: "service".to_string(),
            amount: Decimal::from(amount),
            status,
            created_at: Utc::now(),
        }
    }

    fn equipment(price: i64) -> EquipmentCharge {
        EquipmentCharge {
            category: "monitoring".to_string(),
            name: "equipment".to_string(),
            price: Decimal::from(price),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_lists_sum_to_zero() {
        assert_eq!(total_services_amount(&[]), Decimal::ZERO);
        assert_eq!(completed_services_amount(&[]), Decimal::ZERO);
        assert_eq!(pending_services_amount(&[]), Decimal::ZERO);
        assert_eq!(total_equipment_amount(&[]), Decimal::ZERO);
        assert_eq!(total_payments(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_reference_scenario() {
        // services 500 completed + 300 pending, equipment 200, 10% off
        let mut record =
            BillingRecord::new(Uuid::new_v4(), "Asha Rao", "general", "412", Utc::now());
        record.services = vec![
            service(500, ServiceStatus::Completed),
            service(300, ServiceStatus::Pending),
        ];
        record.equipment = vec![equipment(200)];
        record.discount_percent = Decimal::from(10);

        let summary = summarize(&record);
        assert_eq!(summary.total_services, Decimal::from(800));
        assert_eq!(summary.total_equipment, Decimal::from(200));
        assert_eq!(summary.gross_charges, Decimal::from(1000));
        assert_eq!(summary.discount_amount, Decimal::from(100));
        assert_eq!(summary.net_charges, Decimal::from(900));
        assert_eq!(summary.completed_services, Decimal::from(500));
        assert_eq!(summary.pending_services, Decimal::from(300));
        assert_eq!(summary.balance_due, Decimal::from(900));
    }

    #[test]
    fn test_balance_due_nets_payments_against_net_charges() {
        let mut record =
            BillingRecord::new(Uuid::new_v4(), "Asha Rao", "general", "412", Utc::now());
        record.services = vec![service(1000, ServiceStatus::Completed)];
        record.payments = vec![Payment {
            id: Uuid::new_v4(),
            amount: Decimal::from(400),
            method: PaymentMethod::Cash,
            received_at: Utc::now(),
        }];
        record.deposit = Decimal::from(400);

        assert_eq!(balance_due(&record), Decimal::from(600));
        assert_eq!(summarize(&record).balance_due, Decimal::from(600));
    }

    #[test]
    fn test_out_of_range_discount_flows_through_unguarded() {
        let gross = Decimal::from(100);
        let discount = discount_amount(gross, Decimal::from(150));
        assert_eq!(discount, Decimal::from(150));
        assert_eq!(amount_after_discount(gross, discount), Decimal::from(-50));
    }

    #[test]
    fn test_summarize_does_not_mutate_input() {
        let mut record =
            BillingRecord::new(Uuid::new_v4(), "Asha Rao", "general", "412", Utc::now());
        record.services = vec![service(500, ServiceStatus::Completed)];
        let before = record.clone();

        let _ = summarize(&record);
        assert_eq!(record, before);
    }

    proptest! {
        #[test]
        fn prop_completed_and_pending_partition_total(
            entries in prop::collection::vec((0i64..1_000_000, any::<bool>()), 0..50)
        ) {
            let services: Vec<ServiceCharge> = entries
                .iter()
                .map(|(cents, completed)| ServiceCharge {
                    name: "service".to_string(),
                    amount: Decimal::new(*cents, 2),
                    status: if *completed {
                        ServiceStatus::Completed
                    } else {
                        ServiceStatus::Pending
                    },
                    created_at: Utc::now(),
                })
                .collect();

            prop_assert_eq!(
                completed_services_amount(&services) + pending_services_amount(&services),
                total_services_amount(&services)
            );
        }
    }
}
