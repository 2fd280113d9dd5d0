//! Travel expense calculation functionality.
//!
//! This module provides the functions for totalling a judge's travel
//! expenses: mileage reimbursement plus the fixed expense categories
//! (hotel, airfare, other).

use rust_decimal::Decimal;

use crate::models::ShowCompensation;

/// Calculates the mileage reimbursement for a compensation snapshot.
///
/// The reimbursement is `mileage_rate * mileage_traveled`, with either field
/// treated as zero when absent. Note that an absent `mileage_rate` means zero
/// here; substituting the configured standard rate happens when the snapshot
/// is resolved, not during calculation (see
/// [`ConfigLoader::standard_rate`](crate::config::ConfigLoader::standard_rate)).
///
/// # Arguments
///
/// * `comp` - The compensation snapshot to calculate the reimbursement for
///
/// # Returns
///
/// The mileage reimbursement as a Decimal. This function is total and never
/// fails.
pub fn mileage_expense(comp: &ShowCompensation) -> Decimal {
    comp.mileage_rate.unwrap_or(Decimal::ZERO) * comp.mileage_traveled.unwrap_or(Decimal::ZERO)
}

/// Calculates the travel expense total for a compensation snapshot.
///
/// The total is the mileage reimbursement plus hotel, airfare, and other
/// expenses, with every absent field treated as zero.
///
/// # Arguments
///
/// * `comp` - The compensation snapshot to total expenses for
///
/// # Returns
///
/// The travel expense total as a Decimal. This function is total and never
/// fails.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::travel_expense_total;
/// use compensation_engine::models::ShowCompensation;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let comp = ShowCompensation {
///     mileage_rate: Some(Decimal::from_str("0.655").unwrap()),
///     mileage_traveled: Some(Decimal::from_str("100").unwrap()),
///     hotel_expense: Some(Decimal::from_str("150").unwrap()),
///     ..Default::default()
/// };
/// assert_eq!(travel_expense_total(&comp), Decimal::from_str("215.5").unwrap());
/// ```
pub fn travel_expense_total(comp: &ShowCompensation) -> Decimal {
    mileage_expense(comp)
        + comp.hotel_expense.unwrap_or(Decimal::ZERO)
        + comp.airfare_expense.unwrap_or(Decimal::ZERO)
        + comp.other_expenses.unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// TE-001: mileage expense is rate times miles
    #[test]
    fn test_mileage_expense_is_rate_times_miles() {
        let comp = ShowCompensation {
            mileage_rate: Some(dec("0.655")),
            mileage_traveled: Some(dec("100")),
            ..Default::default()
        };

        assert_eq!(mileage_expense(&comp), dec("65.5"));
    }

    /// TE-002: absent mileage rate yields zero mileage expense
    #[test]
    fn test_absent_rate_yields_zero_mileage() {
        let comp = ShowCompensation {
            mileage_traveled: Some(dec("250")),
            ..Default::default()
        };

        assert_eq!(mileage_expense(&comp), Decimal::ZERO);
    }

    /// TE-003: absent distance yields zero mileage expense
    #[test]
    fn test_absent_distance_yields_zero_mileage() {
        let comp = ShowCompensation {
            mileage_rate: Some(dec("0.655")),
            ..Default::default()
        };

        assert_eq!(mileage_expense(&comp), Decimal::ZERO);
    }

    /// TE-004: total sums mileage and fixed categories
    #[test]
    fn test_total_sums_mileage_and_fixed_categories() {
        let comp = ShowCompensation {
            mileage_rate: Some(dec("0.655")),
            mileage_traveled: Some(dec("100")),
            hotel_expense: Some(dec("150")),
            airfare_expense: Some(dec("420.40")),
            other_expenses: Some(dec("35.10")),
            ..Default::default()
        };

        assert_eq!(travel_expense_total(&comp), dec("671.00"));
    }

    /// TE-005: all fields absent totals zero
    #[test]
    fn test_all_fields_absent_totals_zero() {
        let comp = ShowCompensation::default();
        assert_eq!(travel_expense_total(&comp), Decimal::ZERO);
    }

    /// TE-006: fixed categories alone are summed
    #[test]
    fn test_fixed_categories_alone() {
        let comp = ShowCompensation {
            hotel_expense: Some(dec("89.99")),
            other_expenses: Some(dec("12.01")),
            ..Default::default()
        };

        assert_eq!(travel_expense_total(&comp), dec("102.00"));
    }

    /// TE-007: negative expenses propagate as-is
    #[test]
    fn test_negative_expenses_propagate() {
        let comp = ShowCompensation {
            hotel_expense: Some(dec("150")),
            other_expenses: Some(dec("-25")),
            ..Default::default()
        };

        assert_eq!(travel_expense_total(&comp), dec("125"));
    }

    /// TE-008: fractional mileage keeps decimal precision
    #[test]
    fn test_fractional_mileage_precision() {
        let comp = ShowCompensation {
            mileage_rate: Some(dec("0.655")),
            mileage_traveled: Some(dec("123.4")),
            ..Default::default()
        };

        assert_eq!(travel_expense_total(&comp), dec("80.8270"));
    }
}
