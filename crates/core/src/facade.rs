// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The stay eligibility facade: one call answering "can this occupancy be
//! booked on this date range in this room".
//!
//! The facade composes restriction evaluation and occupancy allocation over
//! data its callers (booking validation, calendar rendering, pricing) have
//! already fetched. It performs no I/O and holds no state; repeated calls
//! with identical inputs are idempotent and safely cacheable by the caller.

use crate::error::CoreError;
use stay_domain::{
    AllocationRequest, AllocationResult, CandidateStay, CapacityConfig, DailyPrice,
    DateRange, DerivedPriceOutcome, DerivedPriceWarning, DerivedRatePlanLink,
    EligibilityVerdict, RatePlanId, Restriction, allocate_occupancy, evaluate_stay,
    resolve_derived_prices,
};
use tracing::{debug, warn};

/// The combined answer for one candidate stay: whether it is permitted, and
/// how its occupancy splits between base capacity and extra beds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayEligibility {
    /// The restriction verdict, with every violation enumerated.
    pub verdict: EligibilityVerdict,
    /// The occupancy split. Extra-bed counts may imply additional
    /// chargeable inventory the caller must check.
    pub allocation: AllocationResult,
}

/// Decides whether a candidate occupancy can be booked.
///
/// # Arguments
///
/// * `stay` - The candidate stay, including its explicit request date
/// * `occupancy` - The requested guest counts
/// * `rules` - The active restriction snapshot for the hotel/date range
/// * `capacity` - The room product's capacity configuration, if one exists
/// * `reservation_count` - Collaborator-supplied reservation count for
///   `MaxReservationCount` rules; `None` skips that check
///
/// # Returns
///
/// A [`StayEligibility`] carrying the full verdict and the occupancy split.
/// A denied stay still gets an allocation: calendar callers display both.
///
/// # Errors
///
/// Returns `CoreError::MissingCapacityConfig` when no capacity
/// configuration is available for the stay's room product.
pub fn check_stay(
    stay: &CandidateStay,
    occupancy: &AllocationRequest,
    rules: &[Restriction],
    capacity: Option<&CapacityConfig>,
    reservation_count: Option<u32>,
) -> Result<StayEligibility, CoreError> {
    let Some(capacity) = capacity else {
        return Err(CoreError::MissingCapacityConfig {
            room_product_id: stay.room_product_id,
        });
    };

    let verdict: EligibilityVerdict = evaluate_stay(stay, rules, reservation_count);
    let allocation: AllocationResult = allocate_occupancy(occupancy, capacity);

    debug!(
        hotel_id = stay.hotel_id.value(),
        check_in = %stay.dates.check_in(),
        nights = stay.dates.nights(),
        allowed = verdict.allowed,
        violations = verdict.violations.len(),
        extra_beds = allocation.allocated_extra_bed_adult_count
            + allocation.allocated_extra_bed_child_count,
        "evaluated stay eligibility"
    );

    Ok(StayEligibility { verdict, allocation })
}

/// Resolves a derived rate plan's selling prices, surfacing degradations to
/// the platform's observability.
///
/// Delegates to [`stay_domain::resolve_derived_prices`] and logs each
/// non-fatal warning; the outcome is returned unchanged.
///
/// # Arguments
///
/// * `derived_rate_plan_id` - The derived plan being resolved
/// * `links` - The plan's focus links
/// * `focus_prices` - Daily prices for the focus plans
/// * `range` - The requested date range
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` wrapping
/// `DomainError::AmbiguousDerivedSource` when two focus plans contend for
/// the same room-product and date.
pub fn resolve_prices(
    derived_rate_plan_id: RatePlanId,
    links: &[DerivedRatePlanLink],
    focus_prices: &[DailyPrice],
    range: &DateRange,
) -> Result<DerivedPriceOutcome, CoreError> {
    let outcome: DerivedPriceOutcome =
        resolve_derived_prices(derived_rate_plan_id, links, focus_prices, range)?;

    for warning in &outcome.warnings {
        match warning {
            DerivedPriceWarning::MissingFocusRatePlan { focus_rate_plan_id } => {
                warn!(
                    derived_rate_plan_id = derived_rate_plan_id.value(),
                    focus_rate_plan_id = focus_rate_plan_id.value(),
                    "focus rate plan has no prices in range, skipping"
                );
            }
        }
    }

    debug!(
        derived_rate_plan_id = derived_rate_plan_id.value(),
        resolved = outcome.prices.len(),
        warnings = outcome.warnings.len(),
        "resolved derived prices"
    );

    Ok(outcome)
}
