//! Calculation logic for the Show Compensation Engine.
//!
//! This module contains the pure calculation functions for determining a
//! judge's compensation: the judging fee (flat fee or per-dog), the mileage
//! and travel expense totals, the grand total, and the assembly of a full
//! [`CompensationResult`](crate::models::CompensationResult).
//!
//! Every function here is total and side-effect free: each operates on an
//! immutable [`ShowCompensation`](crate::models::ShowCompensation) snapshot,
//! treats absent fields as zero, and never fails. Negative inputs are
//! accepted as-is and propagate arithmetically.

mod breakdown;
mod judging_fee;
mod total;
mod travel_expenses;

pub use breakdown::calculate_compensation;
pub use judging_fee::judging_fee;
pub use total::total_compensation;
pub use travel_expenses::{mileage_expense, travel_expense_total};
