//! Property tests for the compensation calculation functions.
//!
//! Every calculation is total over its snapshot: absent fields behave as
//! zero, and the grand total is always the judging fee plus the travel
//! expense total.

use proptest::option;
use proptest::prelude::*;
use rust_decimal::Decimal;

use compensation_engine::calculation::{
    judging_fee, mileage_expense, total_compensation, travel_expense_total,
};
use compensation_engine::models::{CompensationType, ShowCompensation};

/// Currency amounts in cents, including negatives (the calculator accepts
/// negative inputs as-is).
fn money() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..=1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Distances in tenths of a mile.
fn miles() -> impl Strategy<Value = Decimal> {
    (0i64..=50_000i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn compensation_type() -> impl Strategy<Value = Option<CompensationType>> {
    prop_oneof![
        Just(None),
        Just(Some(CompensationType::FlatFee)),
        Just(Some(CompensationType::PerDog)),
    ]
}

prop_compose! {
    fn arb_compensation()(
        compensation_type in compensation_type(),
        flat_fee_amount in option::of(money()),
        per_dog_rate in option::of(money()),
        total_dogs in 0u32..500,
        mileage_rate in option::of(money()),
        mileage_traveled in option::of(miles()),
        hotel_expense in option::of(money()),
        airfare_expense in option::of(money()),
        other_expenses in option::of(money()),
    ) -> ShowCompensation {
        ShowCompensation {
            compensation_type,
            flat_fee_amount,
            per_dog_rate,
            total_dogs,
            mileage_rate,
            mileage_traveled,
            hotel_expense,
            airfare_expense,
            other_expenses,
            expense_notes: None,
        }
    }
}

proptest! {
    #[test]
    fn flat_fee_judging_fee_is_flat_amount_or_zero(comp in arb_compensation()) {
        let comp = ShowCompensation {
            compensation_type: Some(CompensationType::FlatFee),
            ..comp
        };
        prop_assert_eq!(
            judging_fee(&comp),
            comp.flat_fee_amount.unwrap_or(Decimal::ZERO)
        );
    }

    #[test]
    fn per_dog_judging_fee_is_dogs_times_rate(comp in arb_compensation()) {
        let comp = ShowCompensation {
            compensation_type: Some(CompensationType::PerDog),
            ..comp
        };
        prop_assert_eq!(
            judging_fee(&comp),
            Decimal::from(comp.total_dogs) * comp.per_dog_rate.unwrap_or(Decimal::ZERO)
        );
    }

    #[test]
    fn absent_type_behaves_as_flat_fee(comp in arb_compensation()) {
        let absent = ShowCompensation {
            compensation_type: None,
            ..comp.clone()
        };
        let flat = ShowCompensation {
            compensation_type: Some(CompensationType::FlatFee),
            ..comp
        };
        prop_assert_eq!(judging_fee(&absent), judging_fee(&flat));
    }

    #[test]
    fn travel_total_matches_field_sum(comp in arb_compensation()) {
        let expected = comp.mileage_rate.unwrap_or(Decimal::ZERO)
            * comp.mileage_traveled.unwrap_or(Decimal::ZERO)
            + comp.hotel_expense.unwrap_or(Decimal::ZERO)
            + comp.airfare_expense.unwrap_or(Decimal::ZERO)
            + comp.other_expenses.unwrap_or(Decimal::ZERO);
        prop_assert_eq!(travel_expense_total(&comp), expected);
    }

    #[test]
    fn mileage_expense_is_rate_times_distance(comp in arb_compensation()) {
        prop_assert_eq!(
            mileage_expense(&comp),
            comp.mileage_rate.unwrap_or(Decimal::ZERO)
                * comp.mileage_traveled.unwrap_or(Decimal::ZERO)
        );
    }

    #[test]
    fn total_is_fee_plus_travel(comp in arb_compensation()) {
        prop_assert_eq!(
            total_compensation(&comp),
            judging_fee(&comp) + travel_expense_total(&comp)
        );
    }
}
