// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, RatePlanId, RestrictionId, RestrictionType, RoomProductId};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_invalid_stay_range_display() {
    let error = DomainError::InvalidStayRange {
        check_in: date(2024, 6, 12),
        check_out: date(2024, 6, 10),
    };
    assert_eq!(
        error.to_string(),
        "Invalid stay range: check-out 2024-06-10 must be after check-in 2024-06-12"
    );
}

#[test]
fn test_invalid_date_range_display() {
    let error = DomainError::InvalidDateRange {
        from: date(2024, 6, 12),
        to: date(2024, 6, 10),
    };
    assert_eq!(error.to_string(), "Invalid date range: 2024-06-12 is after 2024-06-10");
}

#[test]
fn test_missing_restriction_bound_display() {
    let error = DomainError::MissingRestrictionBound {
        restriction_id: RestrictionId::new(9),
        kind: RestrictionType::LosMin,
    };
    assert_eq!(
        error.to_string(),
        "Restriction 9 of type LOS_MIN is missing its required bound"
    );
}

#[test]
fn test_ambiguous_derived_source_names_both_plans() {
    let error = DomainError::AmbiguousDerivedSource {
        derived_rate_plan_id: RatePlanId::new(100),
        room_product_id: RoomProductId::new(10),
        date: date(2024, 3, 2),
        first_focus: RatePlanId::new(1),
        second_focus: RatePlanId::new(2),
    };
    let message = error.to_string();
    assert!(message.contains("100"));
    assert!(message.contains("2024-03-02"));
    assert!(message.contains("focus plans 1 and 2"));
}

#[test]
fn test_invalid_los_through_encoding_display() {
    let error = DomainError::InvalidLosThroughEncoding {
        raw: String::from("two-four"),
    };
    assert_eq!(
        error.to_string(),
        "Cannot normalize min-LOS-through value 'two-four'"
    );
}

#[test]
fn test_errors_implement_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(DomainError::InvalidMaxReservationCount {
        restriction_id: RestrictionId::new(3),
    });
    assert!(error.to_string().contains("greater than 0"));
}
