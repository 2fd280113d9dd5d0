//! Judging fee calculation functionality.
//!
//! This module provides the function for determining the judging fee owed to
//! a judge for officiating a show, either as a flat amount or as a per-dog
//! rate times the number of dogs judged.

use rust_decimal::Decimal;

use crate::models::{CompensationType, ShowCompensation};

/// Calculates the judging fee for a compensation snapshot.
///
/// For flat-fee shows the fee is `flat_fee_amount`, or zero when absent. For
/// per-dog shows the fee is `total_dogs * per_dog_rate`, with an absent rate
/// treated as zero. An absent compensation type is treated as flat fee.
///
/// # Arguments
///
/// * `comp` - The compensation snapshot to calculate the fee for
///
/// # Returns
///
/// The judging fee as a Decimal. This function is total and never fails.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::judging_fee;
/// use compensation_engine::models::{CompensationType, ShowCompensation};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let comp = ShowCompensation {
///     compensation_type: Some(CompensationType::PerDog),
///     per_dog_rate: Some(Decimal::from_str("5").unwrap()),
///     total_dogs: 40,
///     ..Default::default()
/// };
/// assert_eq!(judging_fee(&comp), Decimal::from_str("200").unwrap());
/// ```
pub fn judging_fee(comp: &ShowCompensation) -> Decimal {
    match comp.effective_type() {
        CompensationType::FlatFee => comp.flat_fee_amount.unwrap_or(Decimal::ZERO),
        CompensationType::PerDog => {
            Decimal::from(comp.total_dogs) * comp.per_dog_rate.unwrap_or(Decimal::ZERO)
        }
    }
}
