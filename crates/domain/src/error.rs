// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::restriction::RestrictionType;
use crate::types::{RatePlanId, RestrictionId, RoomProductId};
use chrono::NaiveDate;

/// Errors that can occur during domain validation and resolution.
///
/// Restriction violations are NOT errors. A stay that is denied by a rule
/// set is a normal, expected outcome and is reported through
/// `EligibilityVerdict::violations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stay range is inverted or empty (`check_out <= check_in`).
    InvalidStayRange {
        /// The check-in date.
        check_in: NaiveDate,
        /// The check-out date.
        check_out: NaiveDate,
    },
    /// A date range is inverted (`from > to`).
    InvalidDateRange {
        /// The start of the range.
        from: NaiveDate,
        /// The end of the range.
        to: NaiveDate,
    },
    /// A restriction carries contradictory numeric bounds.
    InvalidRestrictionBounds {
        /// The offending restriction.
        restriction_id: RestrictionId,
        /// Description of the contradiction.
        reason: String,
    },
    /// A restriction is missing the bound its type requires.
    MissingRestrictionBound {
        /// The offending restriction.
        restriction_id: RestrictionId,
        /// The restriction type whose bound is absent.
        kind: RestrictionType,
    },
    /// A `MaxReservationCount` restriction with a non-positive count.
    InvalidMaxReservationCount {
        /// The offending restriction.
        restriction_id: RestrictionId,
    },
    /// A legacy min-LOS-through value that cannot be normalized.
    InvalidLosThroughEncoding {
        /// The raw value as stored.
        raw: String,
    },
    /// A derived rate plan has more than one focus plan contributing a price
    /// for the same room-product and date. Precedence is never guessed.
    AmbiguousDerivedSource {
        /// The derived rate plan being resolved.
        derived_rate_plan_id: RatePlanId,
        /// The room-product with conflicting prices.
        room_product_id: RoomProductId,
        /// The date with conflicting prices.
        date: NaiveDate,
        /// The first contending focus rate plan.
        first_focus: RatePlanId,
        /// The second contending focus rate plan.
        second_focus: RatePlanId,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStayRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Invalid stay range: check-out {check_out} must be after check-in {check_in}"
                )
            }
            Self::InvalidDateRange { from, to } => {
                write!(f, "Invalid date range: {from} is after {to}")
            }
            Self::InvalidRestrictionBounds {
                restriction_id,
                reason,
            } => {
                write!(
                    f,
                    "Restriction {} has invalid bounds: {reason}",
                    restriction_id.value()
                )
            }
            Self::MissingRestrictionBound {
                restriction_id,
                kind,
            } => {
                write!(
                    f,
                    "Restriction {} of type {kind} is missing its required bound",
                    restriction_id.value()
                )
            }
            Self::InvalidMaxReservationCount { restriction_id } => {
                write!(
                    f,
                    "Restriction {} must have a maximum reservation count greater than 0",
                    restriction_id.value()
                )
            }
            Self::InvalidLosThroughEncoding { raw } => {
                write!(f, "Cannot normalize min-LOS-through value '{raw}'")
            }
            Self::AmbiguousDerivedSource {
                derived_rate_plan_id,
                room_product_id,
                date,
                first_focus,
                second_focus,
            } => {
                write!(
                    f,
                    "Derived rate plan {} has conflicting focus prices for room product {} on {date}: focus plans {} and {}",
                    derived_rate_plan_id.value(),
                    room_product_id.value(),
                    first_focus.value(),
                    second_focus.value()
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
