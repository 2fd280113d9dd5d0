//! Request types for the Show Compensation Engine API.
//!
//! This module defines the JSON request structures for the `/compensation`
//! endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BreedAssignment, CompensationType, Show};

/// Request body for the `/compensation` endpoint.
///
/// Contains the show record whose compensation should be calculated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// The show to calculate compensation for.
    pub show: ShowRequest,
}

/// Show information in a compensation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowRequest {
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
    pub breed_assignments: Vec<BreedAssignmentRequest>,
    /// How the judging fee is determined. Absent means flat fee.
    #[serde(default)]
    pub compensation_type: Option<CompensationType>,
    /// The flat judging fee amount.
    #[serde(default)]
    pub flat_fee_amount: Option<Decimal>,
    /// The fee per dog judged.
    #[serde(default)]
    pub per_dog_rate: Option<Decimal>,
    /// The reimbursement rate per mile. Absent means the configured standard
    /// rate for the show date is applied.
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

/// Breed assignment information in a compensation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedAssignmentRequest {
    /// Unique identifier for the assignment.
    pub id: String,
    /// The name of the breed being judged.
    pub breed_name: String,
    /// The number of dogs entered for this breed.
    pub count: u32,
    /// The scheduled ring time for this assignment.
    pub time: NaiveDateTime,
    /// The ring number the assignment takes place in.
    pub ring: u32,
    /// Free-form notes about the assignment.
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<ShowRequest> for Show {
    fn from(req: ShowRequest) -> Self {
        Show {
            id: req.id,
            name: req.name,
            date: req.date,
            location: req.location,
            state: req.state,
            event_number: req.event_number,
            ring_number: req.ring_number,
            notes: req.notes,
            breed_assignments: req.breed_assignments.into_iter().map(Into::into).collect(),
            compensation_type: req.compensation_type,
            flat_fee_amount: req.flat_fee_amount,
            per_dog_rate: req.per_dog_rate,
            mileage_rate: req.mileage_rate,
            mileage_traveled: req.mileage_traveled,
            hotel_expense: req.hotel_expense,
            airfare_expense: req.airfare_expense,
            other_expenses: req.other_expenses,
            expense_notes: req.expense_notes,
        }
    }
}

impl From<BreedAssignmentRequest> for BreedAssignment {
    fn from(req: BreedAssignmentRequest) -> Self {
        BreedAssignment {
            id: req.id,
            breed_name: req.breed_name,
            count: req.count,
            time: req.time,
            ring: req.ring,
            notes: req.notes,
        }
    }
}
