//! Show model and related types.
//!
//! This module defines the Show struct representing a judging engagement,
//! together with its derived values: total dog count, upcoming/past status,
//! and the compensation snapshot handed to the calculation functions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BreedAssignment, CompensationType, ShowCompensation};

/// Whether a show lies in the future or the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowStatus {
    /// The show date is after the reference date.
    Upcoming,
    /// The show date is on or before the reference date.
    Past,
}

/// Represents a show a judge has been assigned to officiate.
///
/// The compensation and travel expense fields are all optional: a show is
/// created when it is scheduled and the judge fills these in over time. The
/// lifecycle of the record is owned by the caller; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Unique identifier for the show.
    pub id: String,
    /// The name of the show.
    pub name: String,
    /// The date of the show.
    pub date: NaiveDate,
    /// The city or venue of the show.
    pub location: String,
    /// The state the show takes place in.
    pub state: String,
    /// The club or event number for the show.
    pub event_number: String,
    /// The ring number the judge is assigned to.
    pub ring_number: u32,
    /// Free-form notes about the show.
    #[serde(default)]
    pub notes: Option<String>,
    /// The breed assignments scheduled for the judge at this show.
    #[serde(default)]
    pub breed_assignments: Vec<BreedAssignment>,
    /// How the judging fee is determined. Absent means flat fee.
    #[serde(default)]
    pub compensation_type: Option<CompensationType>,
    /// The flat judging fee amount.
    #[serde(default)]
    pub flat_fee_amount: Option<Decimal>,
    /// The fee per dog judged.
    #[serde(default)]
    pub per_dog_rate: Option<Decimal>,
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

impl Show {
    /// Returns the total number of dogs across all breed assignments.
    pub fn total_dogs(&self) -> u32 {
        self.breed_assignments.iter().map(|a| a.count).sum()
    }

    /// Returns whether the show is upcoming or past relative to `today`.
    pub fn status_on(&self, today: NaiveDate) -> ShowStatus {
        if self.date > today {
            ShowStatus::Upcoming
        } else {
            ShowStatus::Past
        }
    }

    /// Builds the compensation snapshot for this show.
    ///
    /// The snapshot copies the compensation and expense fields and fills in
    /// `total_dogs` from the breed assignments, so the calculation functions
    /// never need to see the show record itself.
    pub fn compensation_snapshot(&self) -> ShowCompensation {
        ShowCompensation {
            compensation_type: self.compensation_type,
            flat_fee_amount: self.flat_fee_amount,
            per_dog_rate: self.per_dog_rate,
            total_dogs: self.total_dogs(),
            mileage_rate: self.mileage_rate,
            mileage_traveled: self.mileage_traveled,
            hotel_expense: self.hotel_expense,
            airfare_expense: self.airfare_expense,
            other_expenses: self.other_expenses,
            expense_notes: self.expense_notes.clone(),
        }
    }
}
