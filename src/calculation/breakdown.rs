//! Assembly of a full compensation result.
//!
//! This module builds a [`CompensationResult`] from a compensation snapshot:
//! per-category expense lines plus the judging fee, travel expense, and grand
//! total figures.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    CompensationResult, CompensationTotals, ExpenseCategory, ExpenseLine, ShowCompensation,
};

use super::{judging_fee, mileage_expense, total_compensation, travel_expense_total};

/// Performs a full compensation calculation for a show.
///
/// Assembles one expense line per travel category that is present in the
/// snapshot (mileage when a distance is recorded, the fixed categories when
/// their field is set), together with the three derived totals. Categories
/// with no recorded value produce no line; they still count as zero in the
/// totals.
///
/// # Arguments
///
/// * `show_id` - The ID of the show the snapshot belongs to
/// * `comp` - The compensation snapshot to calculate
///
/// # Returns
///
/// A `CompensationResult` with a fresh calculation ID and timestamp. This
/// function is total and never fails.
pub fn calculate_compensation(show_id: &str, comp: &ShowCompensation) -> CompensationResult {
    let mut expense_lines = Vec::new();

    if let Some(miles) = comp.mileage_traveled {
        let rate = comp.mileage_rate.unwrap_or(Decimal::ZERO);
        expense_lines.push(ExpenseLine {
            category: ExpenseCategory::Mileage,
            units: miles,
            rate,
            amount: mileage_expense(comp),
        });
    }

    let fixed_categories = [
        (ExpenseCategory::Hotel, comp.hotel_expense),
        (ExpenseCategory::Airfare, comp.airfare_expense),
        (ExpenseCategory::Other, comp.other_expenses),
    ];
    for (category, amount) in fixed_categories {
        if let Some(amount) = amount {
            expense_lines.push(ExpenseLine {
                category,
                units: Decimal::ONE,
                rate: amount,
                amount,
            });
        }
    }

    CompensationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        show_id: show_id.to_string(),
        expense_lines,
        totals: CompensationTotals {
            judging_fee: judging_fee(comp),
            travel_expense_total: travel_expense_total(comp),
            total_compensation: total_compensation(comp),
        },
    }
}
