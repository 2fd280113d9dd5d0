//! Total compensation calculation functionality.

use rust_decimal::Decimal;

use crate::models::ShowCompensation;

use super::{judging_fee, travel_expense_total};

/// Calculates the total compensation for a compensation snapshot.
///
/// The total is the judging fee plus the travel expense total.
///
/// # Arguments
///
/// * `comp` - The compensation snapshot to total
///
/// # Returns
///
/// The total compensation as a Decimal. This function is total and never
/// fails.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::total_compensation;
/// use compensation_engine::models::{CompensationType, ShowCompensation};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let comp = ShowCompensation {
///     compensation_type: Some(CompensationType::FlatFee),
///     flat_fee_amount: Some(Decimal::from_str("200").unwrap()),
///     hotel_expense: Some(Decimal::from_str("150").unwrap()),
///     ..Default::default()
/// };
/// assert_eq!(total_compensation(&comp), Decimal::from_str("350").unwrap());
/// ```
pub fn total_compensation(comp: &ShowCompensation) -> Decimal {
    judging_fee(comp) + travel_expense_total(comp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompensationType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// TC-001: flat fee with no travel fields
    #[test]
    fn test_flat_fee_no_travel_fields() {
        let comp = ShowCompensation {
            compensation_type: Some(CompensationType::FlatFee),
            flat_fee_amount: Some(dec("200")),
            ..Default::default()
        };

        assert_eq!(judging_fee(&comp), dec("200"));
        assert_eq!(travel_expense_total(&comp), Decimal::ZERO);
        assert_eq!(total_compensation(&comp), dec("200"));
    }

    /// TC-002: per dog with mileage and hotel
    #[test]
    fn test_per_dog_with_mileage_and_hotel() {
        let comp = ShowCompensation {
            compensation_type: Some(CompensationType::PerDog),
            per_dog_rate: Some(dec("5")),
            total_dogs: 40,
            mileage_rate: Some(dec("0.655")),
            mileage_traveled: Some(dec("100")),
            hotel_expense: Some(dec("150")),
            ..Default::default()
        };

        assert_eq!(judging_fee(&comp), dec("200"));
        assert_eq!(travel_expense_total(&comp), dec("215.5"));
        assert_eq!(total_compensation(&comp), dec("415.5"));
    }

    /// TC-003: everything absent totals zero
    #[test]
    fn test_everything_absent_totals_zero() {
        let comp = ShowCompensation {
            compensation_type: Some(CompensationType::FlatFee),
            ..Default::default()
        };

        assert_eq!(total_compensation(&comp), Decimal::ZERO);
    }

    /// TC-004: total is fee plus travel for mixed inputs
    #[test]
    fn test_total_is_fee_plus_travel() {
        let comp = ShowCompensation {
            compensation_type: Some(CompensationType::PerDog),
            per_dog_rate: Some(dec("3.75")),
            total_dogs: 17,
            airfare_expense: Some(dec("312.60")),
            other_expenses: Some(dec("48.15")),
            ..Default::default()
        };

        assert_eq!(
            total_compensation(&comp),
            judging_fee(&comp) + travel_expense_total(&comp)
        );
        assert_eq!(total_compensation(&comp), dec("424.50"));
    }
}
