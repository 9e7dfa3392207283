//! Form-boundary validation for billing inputs
//!
//! The ledger assumes pre-validated input; this module is the boundary
//! that does the validating. Every create/mutate payload coming off a
//! console form implements [`FormValidation`] so rejection messages stay
//! consistent across screens.

use crate::error::{BillingError, BillingResult};
use crate::models::PaymentMethod;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Trait for validating form payloads before they reach the ledger
pub trait FormValidation {
    /// Returns `Ok(())` when the payload is acceptable, or a
    /// `BillingError::Validation` describing the first failure.
    fn validate(&self) -> BillingResult<()>;
}

/// Macro for validating fields with custom predicates
///
/// # Usage
///
/// ```rust,ignore
/// validate_field!(self.amount, self.amount > Decimal::ZERO, "Amount must be positive");
/// ```
#[macro_export]
macro_rules! validate_field {
    ($field:expr, $predicate:expr, $message:expr) => {
        if !$predicate {
            return Err($crate::error::BillingError::Validation($message.to_string()));
        }
    };
}

/// Macro for validating required fields (non-empty strings)
#[macro_export]
macro_rules! validate_required {
    ($field:expr, $message:expr) => {
        validate_field!($field, !$field.trim().is_empty(), $message);
    };
}

/// Admission-booking form payload
#[derive(Debug, Clone, Deserialize)]
pub struct AdmissionInput {
    pub patient_name: String,
    pub room_type: String,
    pub bed_id: String,
    /// Advance deposit collected at booking, recorded as a cash payment
    pub advance: Option<Decimal>,
}

impl FormValidation for AdmissionInput {
    fn validate(&self) -> BillingResult<()> {
        validate_required!(self.patient_name, "Patient name is required");
        validate_required!(self.room_type, "Room type is required");
        validate_required!(self.bed_id, "Bed is required");
        if let Some(advance) = self.advance {
            validate_field!(
                self.advance,
                advance >= Decimal::ZERO,
                "Advance deposit cannot be negative"
            );
        }
        Ok(())
    }
}

/// Additional-service form payload
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceInput {
    pub name: String,
    pub amount: Decimal,
}

impl FormValidation for ServiceInput {
    fn validate(&self) -> BillingResult<()> {
        validate_required!(self.name, "Service name is required");
        validate_field!(
            self.amount,
            self.amount >= Decimal::ZERO,
            "Service amount cannot be negative"
        );
        Ok(())
    }
}

/// Equipment-charge form payload
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentInput {
    pub category: String,
    pub name: String,
    pub price: Decimal,
}

impl FormValidation for EquipmentInput {
    fn validate(&self) -> BillingResult<()> {
        validate_required!(self.category, "Equipment category is required");
        validate_required!(self.name, "Equipment name is required");
        validate_field!(
            self.price,
            self.price >= Decimal::ZERO,
            "Equipment price cannot be negative"
        );
        Ok(())
    }
}

/// Payment form payload
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentInput {
    pub amount: Decimal,
    pub method: PaymentMethod,
}

impl FormValidation for PaymentInput {
    fn validate(&self) -> BillingResult<()> {
        validate_field!(
            self.amount,
            self.amount > Decimal::ZERO,
            "Payment amount must be positive"
        );
        Ok(())
    }
}

/// Discount form payload
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountInput {
    pub percentage: Decimal,
}

impl FormValidation for DiscountInput {
    fn validate(&self) -> BillingResult<()> {
        validate_field!(
            self.percentage,
            self.percentage >= Decimal::ZERO && self.percentage <= Decimal::ONE_HUNDRED,
            "Discount must be between 0 and 100 percent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_input_requires_names() {
        let input = AdmissionInput {
            patient_name: "  ".to_string(),
            room_type: "general".to_string(),
            bed_id: "412".to_string(),
            advance: None,
        };
        assert!(matches!(input.validate(), Err(BillingError::Validation(_))));
    }

    #[test]
    fn test_admission_input_rejects_negative_advance() {
        let input = AdmissionInput {
            patient_name: "Asha Rao".to_string(),
            room_type: "general".to_string(),
            bed_id: "412".to_string(),
            advance: Some(Decimal::from(-100)),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_payment_input_rejects_zero_amount() {
        let input = PaymentInput {
            amount: Decimal::ZERO,
            method: PaymentMethod::Cash,
        };
        assert!(input.validate().is_err());

        let input = PaymentInput {
            amount: Decimal::from(250),
            method: PaymentMethod::Cash,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_discount_input_bounds() {
        for pct in [0i64, 50, 100] {
            let input = DiscountInput {
                percentage: Decimal::from(pct),
            };
            assert!(input.validate().is_ok());
        }
        for pct in [-1i64, 101] {
            let input = DiscountInput {
                percentage: Decimal::from(pct),
            };
            assert!(input.validate().is_err());
        }
    }

    #[test]
    fn test_service_input_allows_free_services() {
        let input = ServiceInput {
            name: "Counselling".to_string(),
            amount: Decimal::ZERO,
        };
        assert!(input.validate().is_ok());
    }
}
