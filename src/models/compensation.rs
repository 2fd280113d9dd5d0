//! Compensation snapshot model and related types.
//!
//! This module defines the [`ShowCompensation`] struct, the immutable snapshot
//! of a show's compensation configuration consumed by the calculation
//! functions, and the [`CompensationType`] enum.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents how the judging fee for a show is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationType {
    /// A single flat amount for the whole assignment.
    FlatFee,
    /// A per-dog rate multiplied by the number of dogs judged.
    PerDog,
}

/// A snapshot of a show's compensation configuration and travel expenses.
///
/// Every monetary and distance field is optional; an absent value is treated
/// as zero by every computation. `total_dogs` is derived externally as the sum
/// of the show's breed-assignment entry counts (see
/// [`Show::compensation_snapshot`](crate::models::Show::compensation_snapshot)).
///
/// The snapshot carries no behavior of its own beyond defaulting the
/// compensation type; the calculations live in
/// [`crate::calculation`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowCompensation {
    /// How the judging fee is determined. Absent means flat fee.
    #[serde(default)]
    pub compensation_type: Option<CompensationType>,
    /// The flat judging fee amount.
    #[serde(default)]
    pub flat_fee_amount: Option<Decimal>,
    /// The fee per dog judged.
    #[serde(default)]
    pub per_dog_rate: Option<Decimal>,
    /// The number of dogs judged, summed over breed assignments.
    #[serde(default)]
    pub total_dogs: u32,
    /// The reimbursement rate per mile driven.
    #[serde(default)]
    pub mileage_rate: Option<Decimal>,
    /// The number of miles driven for the show.
    #[serde(default)]
    pub mileage_traveled: Option<Decimal>,
    /// Hotel expenses for the show.
    #[serde(default)]
    pub hotel_expense: Option<Decimal>,
    /// Airfare expenses for the show.
    #[serde(default)]
    pub airfare_expense: Option<Decimal>,
    /// Any other expenses for the show.
    #[serde(default)]
    pub other_expenses: Option<Decimal>,
    /// Free-form notes about the expenses.
    #[serde(default)]
    pub expense_notes: Option<String>,
}

impl ShowCompensation {
    /// Returns the effective compensation type, defaulting to flat fee.
    pub fn effective_type(&self) -> CompensationType {
        self.compensation_type.unwrap_or(CompensationType::FlatFee)
    }
}
