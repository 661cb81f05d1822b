// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Restriction evaluation: decides whether a candidate stay is permitted
//! under a hotel's rule set.
//!
//! Evaluation is exhaustive, never short-circuiting. Every violated rule is
//! collected and returned so that calendar UIs can report every reason a
//! date is blocked, not just the first.
//!
//! ## Invariants
//!
//! - `allowed == violations.is_empty()`
//! - Evaluation is a pure function of its inputs; "now" is the stay's
//!   `request_date`, never the process clock
//! - For bounded types (LOS, ADV), the strictest active rule binds and is
//!   the one reported; closure types report one violation per active rule

use crate::restriction::{Restriction, RestrictionType};
use crate::types::{CandidateStay, RestrictionId};
use serde::{Deserialize, Serialize};

/// A single violated restriction, with the bound that was exceeded.
///
/// `limit` and `actual` are both absent for the closure types
/// (`CloseToArrival`, `CloseToDeparture`), which have no numeric bound:
/// presence alone blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionViolation {
    /// The offending rule.
    pub restriction_id: RestrictionId,
    /// The offending rule's type.
    pub kind: RestrictionType,
    /// The binding bound value, when the type has one.
    pub limit: Option<i64>,
    /// The observed value that fell outside the bound.
    pub actual: Option<i64>,
}

/// The outcome of evaluating one candidate stay against a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    /// Whether the stay is permitted.
    pub allowed: bool,
    /// Every violated rule, fully enumerated.
    pub violations: Vec<RestrictionViolation>,
}

impl EligibilityVerdict {
    /// Builds a verdict from collected violations.
    #[must_use]
    pub fn from_violations(violations: Vec<RestrictionViolation>) -> Self {
        Self {
            allowed: violations.is_empty(),
            violations,
        }
    }
}

/// The binding (strictest) rule among a set of active rules of one type.
struct BindingBound {
    restriction_id: RestrictionId,
    value: i64,
}

/// Finds the binding rule by taking the maximum bound value.
fn binding_max<'a, I, F>(rules: I, bound: F) -> Option<BindingBound>
where
    I: Iterator<Item = &'a Restriction>,
    F: Fn(&Restriction) -> Option<u32>,
{
    rules
        .filter_map(|rule| {
            bound(rule).map(|value| BindingBound {
                restriction_id: rule.id,
                value: i64::from(value),
            })
        })
        .max_by_key(|binding| binding.value)
}

/// Finds the binding rule by taking the minimum bound value.
fn binding_min<'a, I, F>(rules: I, bound: F) -> Option<BindingBound>
where
    I: Iterator<Item = &'a Restriction>,
    F: Fn(&Restriction) -> Option<u32>,
{
    rules
        .filter_map(|rule| {
            bound(rule).map(|value| BindingBound {
                restriction_id: rule.id,
                value: i64::from(value),
            })
        })
        .min_by_key(|binding| binding.value)
}

/// Evaluates a candidate stay against a rule set.
///
/// Rules that do not apply to the stay (wrong hotel, scoping mismatch,
/// validity window or weekday mask excluding the relevant date) are ignored.
/// Among the applicable rules, each restriction type is checked
/// independently and every violation is collected.
///
/// # Arguments
///
/// * `stay` - The candidate stay, including its explicit `request_date`
/// * `rules` - The active restriction snapshot for the hotel/date range
/// * `reservation_count` - Collaborator-supplied reservation count for the
///   stay's window, consulted only by `MaxReservationCount` rules. When
///   `None`, that check is skipped.
///
/// # Returns
///
/// An [`EligibilityVerdict`] with `allowed == violations.is_empty()`.
#[must_use]
pub fn evaluate_stay(
    stay: &CandidateStay,
    rules: &[Restriction],
    reservation_count: Option<u32>,
) -> EligibilityVerdict {
    let nights: i64 = stay.dates.nights();
    let check_in = stay.dates.check_in();
    let check_out = stay.dates.check_out();
    let advance_days: i64 = (check_in - stay.request_date).num_days();

    let applicable: Vec<&Restriction> = rules
        .iter()
        .filter(|rule| rule.applies_to(stay))
        .collect();

    let active_of_kind = |kind: RestrictionType, date: chrono::NaiveDate| {
        applicable
            .iter()
            .copied()
            .filter(move |rule| rule.kind == kind && rule.is_active_on(date))
    };

    let mut violations: Vec<RestrictionViolation> = Vec::new();

    // LOS_MIN: strictest (largest) minimum among rules active on check-in
    if let Some(binding) = binding_max(
        active_of_kind(RestrictionType::LosMin, check_in),
        |rule| rule.min_length,
    ) {
        if nights < binding.value {
            violations.push(RestrictionViolation {
                restriction_id: binding.restriction_id,
                kind: RestrictionType::LosMin,
                limit: Some(binding.value),
                actual: Some(nights),
            });
        }
    }

    // LOS_MAX: strictest (smallest) maximum among rules active on check-in
    if let Some(binding) = binding_min(
        active_of_kind(RestrictionType::LosMax, check_in),
        |rule| rule.max_length,
    ) {
        if nights > binding.value {
            violations.push(RestrictionViolation {
                restriction_id: binding.restriction_id,
                kind: RestrictionType::LosMax,
                limit: Some(binding.value),
                actual: Some(nights),
            });
        }
    }

    // MIN_LOS_THROUGH: a rule qualifies when it is active on any occupied
    // date; the stay must then extend at least the binding value measured
    // from check-in. The binding value is the normalized lower bound.
    let qualifying_los_through = applicable.iter().copied().filter(|rule| {
        rule.kind == RestrictionType::MinLosThrough
            && stay.dates.occupied_dates().any(|date| rule.is_active_on(date))
    });
    if let Some(binding) = binding_max(qualifying_los_through, |rule| {
        rule.min_los_through.map(|bound| bound.min)
    }) {
        if nights < binding.value {
            violations.push(RestrictionViolation {
                restriction_id: binding.restriction_id,
                kind: RestrictionType::MinLosThrough,
                limit: Some(binding.value),
                actual: Some(nights),
            });
        }
    }

    // ADV_MIN / ADV_MAX: advance window around check-in, either side may be
    // unconstrained. A negative advance (backdated request) can only ever
    // violate the minimum side.
    if let Some(binding) = binding_max(
        active_of_kind(RestrictionType::AdvMin, check_in),
        |rule| rule.min_adv,
    ) {
        if advance_days < binding.value {
            violations.push(RestrictionViolation {
                restriction_id: binding.restriction_id,
                kind: RestrictionType::AdvMin,
                limit: Some(binding.value),
                actual: Some(advance_days),
            });
        }
    }
    if let Some(binding) = binding_min(
        active_of_kind(RestrictionType::AdvMax, check_in),
        |rule| rule.max_adv,
    ) {
        if advance_days > binding.value {
            violations.push(RestrictionViolation {
                restriction_id: binding.restriction_id,
                kind: RestrictionType::AdvMax,
                limit: Some(binding.value),
                actual: Some(advance_days),
            });
        }
    }

    // CLOSE_TO_ARRIVAL / CLOSE_TO_DEPARTURE: presence alone blocks; every
    // active closure is reported
    for rule in active_of_kind(RestrictionType::CloseToArrival, check_in) {
        violations.push(RestrictionViolation {
            restriction_id: rule.id,
            kind: RestrictionType::CloseToArrival,
            limit: None,
            actual: None,
        });
    }
    for rule in active_of_kind(RestrictionType::CloseToDeparture, check_out) {
        violations.push(RestrictionViolation {
            restriction_id: rule.id,
            kind: RestrictionType::CloseToDeparture,
            limit: None,
            actual: None,
        });
    }

    // MAX_RESERVATION_COUNT: needs the collaborator-supplied count; without
    // it the check is skipped
    if let Some(count) = reservation_count {
        if let Some(binding) = binding_min(
            active_of_kind(RestrictionType::MaxReservationCount, check_in),
            |rule| rule.max_reservation_count,
        ) {
            let with_this_stay: i64 = i64::from(count) + 1;
            if with_this_stay > binding.value {
                violations.push(RestrictionViolation {
                    restriction_id: binding.restriction_id,
                    kind: RestrictionType::MaxReservationCount,
                    limit: Some(binding.value),
                    actual: Some(with_this_stay),
                });
            }
        }
    }

    EligibilityVerdict::from_violations(violations)
}
