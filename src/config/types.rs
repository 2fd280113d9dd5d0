//! Configuration types for standard mileage rates.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from the YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the mileage rate schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct MileageMetadata {
    /// The human-readable name of the rate schedule.
    pub name: String,
    /// The version or latest effective date of the schedule.
    pub version: String,
    /// URL to the official rate documentation.
    pub source_url: String,
}

/// A standard mileage rate with its effective date.
#[derive(Debug, Clone, Deserialize)]
pub struct MileageRate {
    /// The date this rate takes effect.
    pub effective_date: NaiveDate,
    /// The reimbursement rate per mile.
    pub rate_per_mile: Decimal,
}

/// The complete mileage rate configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct MileageConfig {
    /// Schedule metadata.
    metadata: MileageMetadata,
    /// Rates by effective date (sorted oldest first).
    rates: Vec<MileageRate>,
}

impl MileageConfig {
    /// Creates a new MileageConfig from its component parts.
    pub fn new(metadata: MileageMetadata, rates: Vec<MileageRate>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &MileageMetadata {
        &self.metadata
    }

    /// Returns all rates, sorted by effective date ascending.
    pub fn rates(&self) -> &[MileageRate] {
        &self.rates
    }

    /// Returns the rate in effect on the given date, if any.
    ///
    /// Rates are sorted by effective_date ascending, so this finds the most
    /// recent rate that is on or before the date (searching from the end).
    pub fn rate_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.rates
            .iter()
            .rfind(|r| r.effective_date <= date)
            .map(|r| r.rate_per_mile)
    }
}
