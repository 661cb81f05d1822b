// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocation;
mod derived_pricing;
mod eligibility;
mod error;
mod restriction;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use allocation::{
    AllocationRequest, AllocationResult, CapacityConfig, allocate_occupancy,
};
pub use derived_pricing::{
    AdjustmentType, DailyPrice, DerivedPriceOutcome, DerivedPriceResult, DerivedPriceWarning,
    DerivedRatePlanLink, resolve_derived_prices,
};
pub use eligibility::{EligibilityVerdict, RestrictionViolation, evaluate_stay};
pub use error::DomainError;
pub use restriction::{LosThroughBound, Restriction, RestrictionType};

// Re-export public types
pub use types::{
    CandidateStay, DateRange, HotelId, RatePlanId, RestrictionId, RoomProductId, StayDates,
    WeekdaySet,
};
pub use validation::{validate_restriction, validate_restrictions};
