//! Core data models for the Show Compensation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breed_assignment;
mod compensation;
mod result;
mod show;

pub use breed_assignment::BreedAssignment;
pub use compensation::{CompensationType, ShowCompensation};
pub use result::{CompensationResult, CompensationTotals, ExpenseCategory, ExpenseLine};
pub use show::{Show, ShowStatus};
