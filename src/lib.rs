//! Show Compensation Engine for dog show judging assignments
//!
//! This crate provides functionality for computing a judge's compensation for a
//! show: the judging fee (flat fee or per-dog), the travel expense total, and the
//! grand total, with standard mileage rates supplied by configuration.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
