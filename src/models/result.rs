//! Compensation result models for the Show Compensation Engine.
//!
//! This module contains the [`CompensationResult`] type and its associated
//! structures that capture all outputs from a compensation calculation,
//! including per-category expense lines and totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the travel expense category of an expense line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Mileage reimbursement (rate per mile times miles driven).
    Mileage,
    /// Hotel expenses.
    Hotel,
    /// Airfare expenses.
    Airfare,
    /// Other miscellaneous expenses.
    Other,
}

/// Represents a single travel expense line in a compensation result.
///
/// For mileage, `units` is the number of miles and `rate` the per-mile rate.
/// For the fixed categories (hotel, airfare, other), `units` is 1 and `rate`
/// equals the amount.
///
/// # Example
///
/// ```
/// use compensation_engine::models::{ExpenseCategory, ExpenseLine};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = ExpenseLine {
///     category: ExpenseCategory::Mileage,
///     units: Decimal::from_str("100").unwrap(),
///     rate: Decimal::from_str("0.655").unwrap(),
///     amount: Decimal::from_str("65.5").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLine {
    /// The expense category.
    pub category: ExpenseCategory,
    /// The number of units (miles for mileage, 1 for fixed categories).
    pub units: Decimal,
    /// The rate per unit.
    pub rate: Decimal,
    /// The total amount for this line (units * rate).
    pub amount: Decimal,
}

/// Aggregated totals for a compensation calculation.
///
/// # Example
///
/// ```
/// use compensation_engine::models::CompensationTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = CompensationTotals {
///     judging_fee: Decimal::from_str("200").unwrap(),
///     travel_expense_total: Decimal::from_str("215.5").unwrap(),
///     total_compensation: Decimal::from_str("415.5").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationTotals {
    /// The judging fee (flat amount or per-dog rate times dog count).
    pub judging_fee: Decimal,
    /// The sum of all travel expenses.
    pub travel_expense_total: Decimal,
    /// Judging fee plus travel expense total.
    pub total_compensation: Decimal,
}

/// The complete result of a compensation calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationResult {
    /// Unique identifier for this calculation run.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced this result.
    pub engine_version: String,
    /// The ID of the show the calculation applies to.
    pub show_id: String,
    /// Travel expense lines by category, in mileage/hotel/airfare/other order.
    pub expense_lines: Vec<ExpenseLine>,
    /// The aggregated totals.
    pub totals: CompensationTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_expense_category_serialization() {
        assert_eq!(
            serde_json::to_string(&ExpenseCategory::Mileage).unwrap(),
            "\"mileage\""
        );
        assert_eq!(
            serde_json::to_string(&ExpenseCategory::Airfare).unwrap(),
            "\"airfare\""
        );
    }

    #[test]
    fn test_result_serialization_round_trip() {
        let result = CompensationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            show_id: "show_001".to_string(),
            expense_lines: vec![ExpenseLine {
                category: ExpenseCategory::Mileage,
                units: dec("100"),
                rate: dec("0.655"),
                amount: dec("65.5"),
            }],
            totals: CompensationTotals {
                judging_fee: dec("200"),
                travel_expense_total: dec("65.5"),
                total_compensation: dec("265.5"),
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: CompensationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_totals_serialize_as_strings() {
        let totals = CompensationTotals {
            judging_fee: dec("200"),
            travel_expense_total: dec("0"),
            total_compensation: dec("200"),
        };

        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"judging_fee\":\"200\""));
    }
}
