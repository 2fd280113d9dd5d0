//! Breed assignment model.
//!
//! This module defines the BreedAssignment struct for representing a block of
//! dogs of one breed that a judge is scheduled to judge at a show.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Represents a scheduled judging assignment for a single breed at a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedAssignment {
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
