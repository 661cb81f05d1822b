// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Restriction rules: the per-hotel configuration that governs which stays
//! may be booked.
//!
//! A restriction is an immutable snapshot for the duration of one
//! evaluation call. It carries its own validity window (when the rule is in
//! force), an optional weekday mask, and optional room-product / rate-plan
//! scoping. Which numeric bound it reads depends on its type.
//!
//! ## Invariants
//!
//! - `min_length <= max_length` and `min_adv <= max_adv` when both present
//! - A restriction carries the bound its type requires
//! - `max_reservation_count` is strictly positive
//!
//! These are enforced by [`crate::validate_restriction`] at the ingestion
//! boundary, not re-checked during evaluation.

use crate::error::DomainError;
use crate::types::{CandidateStay, DateRange, HotelId, RatePlanId, RestrictionId, RoomProductId, WeekdaySet};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The type of a restriction rule.
///
/// Wire names use the platform's SCREAMING_SNAKE convention (`LOS_MIN`,
/// `CLOSE_TO_ARRIVAL`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestrictionType {
    /// Minimum length of stay, checked against the check-in date.
    LosMin,
    /// Maximum length of stay, checked against the check-in date.
    LosMax,
    /// Minimum length of stay for any stay passing through an active date.
    MinLosThrough,
    /// Minimum days between booking and arrival.
    AdvMin,
    /// Maximum days between booking and arrival.
    AdvMax,
    /// Blocks new arrivals on an active date, regardless of length.
    CloseToArrival,
    /// Blocks departures on an active date, regardless of length.
    CloseToDeparture,
    /// Caps the number of reservations over the rule's window.
    MaxReservationCount,
}

impl RestrictionType {
    /// Converts this restriction type to its wire string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LosMin => "LOS_MIN",
            Self::LosMax => "LOS_MAX",
            Self::MinLosThrough => "MIN_LOS_THROUGH",
            Self::AdvMin => "ADV_MIN",
            Self::AdvMax => "ADV_MAX",
            Self::CloseToArrival => "CLOSE_TO_ARRIVAL",
            Self::CloseToDeparture => "CLOSE_TO_DEPARTURE",
            Self::MaxReservationCount => "MAX_RESERVATION_COUNT",
        }
    }
}

impl std::fmt::Display for RestrictionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RestrictionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOS_MIN" => Ok(Self::LosMin),
            "LOS_MAX" => Ok(Self::LosMax),
            "MIN_LOS_THROUGH" => Ok(Self::MinLosThrough),
            "ADV_MIN" => Ok(Self::AdvMin),
            "ADV_MAX" => Ok(Self::AdvMax),
            "CLOSE_TO_ARRIVAL" => Ok(Self::CloseToArrival),
            "CLOSE_TO_DEPARTURE" => Ok(Self::CloseToDeparture),
            "MAX_RESERVATION_COUNT" => Ok(Self::MaxReservationCount),
            _ => Err(format!("Unknown restriction type: {s}")),
        }
    }
}

/// The normalized form of a min-LOS-through bound.
///
/// Legacy channel feeds encode this value as a hyphenated string ("2-4").
/// Normalization happens once at the ingestion boundary via
/// [`LosThroughBound::parse_legacy`]; the evaluator only ever reads the
/// lower bound, which is the binding value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LosThroughBound {
    /// The binding minimum length of stay.
    pub min: u32,
    /// The upper end of a ranged legacy encoding, kept for round-tripping.
    /// Not consulted during evaluation.
    pub max: Option<u32>,
}

impl LosThroughBound {
    /// Creates a bound from an already-normalized minimum.
    #[must_use]
    pub const fn new(min: u32) -> Self {
        Self { min, max: None }
    }

    /// Normalizes a legacy string-encoded value.
    ///
    /// Accepts a plain number ("3") or a hyphenated range ("2-4").
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLosThroughEncoding` if the value is not
    /// a number or an ordered hyphenated pair of numbers.
    pub fn parse_legacy(raw: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidLosThroughEncoding {
            raw: raw.to_string(),
        };

        match raw.trim().split_once('-') {
            None => {
                let min: u32 = raw.trim().parse().map_err(|_| invalid())?;
                Ok(Self { min, max: None })
            }
            Some((low, high)) => {
                let min: u32 = low.trim().parse().map_err(|_| invalid())?;
                let max: u32 = high.trim().parse().map_err(|_| invalid())?;
                if min > max {
                    return Err(invalid());
                }
                Ok(Self {
                    min,
                    max: Some(max),
                })
            }
        }
    }
}

/// A restriction rule scoped to a hotel, optionally narrowed to a set of
/// room products and/or rate plans, with a validity window.
///
/// The window describes when the rule itself is in force, distinct from the
/// stay dates being checked against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    /// The rule's identifier.
    pub id: RestrictionId,
    /// The hotel the rule belongs to.
    pub hotel_id: HotelId,
    /// The rule's type, which determines the bound it reads.
    pub kind: RestrictionType,
    /// The inclusive validity window of the rule itself.
    pub window: DateRange,
    /// The weekdays the rule applies to. `WeekdaySet::ALL` when the rule
    /// has no weekday narrowing.
    pub weekdays: WeekdaySet,
    /// Room products the rule is narrowed to. `None` applies to all.
    pub room_product_ids: Option<Vec<RoomProductId>>,
    /// Rate plans the rule is narrowed to. `None` applies to all.
    pub rate_plan_ids: Option<Vec<RatePlanId>>,
    /// Minimum length of stay in nights (`LosMin`).
    pub min_length: Option<u32>,
    /// Maximum length of stay in nights (`LosMax`).
    pub max_length: Option<u32>,
    /// Minimum advance-booking days (`AdvMin`).
    pub min_adv: Option<u32>,
    /// Maximum advance-booking days (`AdvMax`).
    pub max_adv: Option<u32>,
    /// Minimum stay-through length (`MinLosThrough`).
    pub min_los_through: Option<LosThroughBound>,
    /// Reservation cap (`MaxReservationCount`).
    pub max_reservation_count: Option<u32>,
}

impl Restriction {
    /// Creates a restriction of the given type with an all-weekday mask, no
    /// scoping, and no bounds set. Callers fill in the bound their type
    /// requires before validation.
    #[must_use]
    pub const fn new(
        id: RestrictionId,
        hotel_id: HotelId,
        kind: RestrictionType,
        window: DateRange,
    ) -> Self {
        Self {
            id,
            hotel_id,
            kind,
            window,
            weekdays: WeekdaySet::ALL,
            room_product_ids: None,
            rate_plan_ids: None,
            min_length: None,
            max_length: None,
            min_adv: None,
            max_adv: None,
            min_los_through: None,
            max_reservation_count: None,
        }
    }

    /// Checks whether the rule is active on a date: the validity window
    /// contains the date and the weekday mask matches.
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.window.contains(date) && self.weekdays.contains(date.weekday())
    }

    /// Checks whether the rule's scoping matches a candidate stay.
    ///
    /// A rule applies when the hotel matches, the room-product scoping is
    /// absent or contains the stay's room product, and the rate-plan scoping
    /// is absent or contains the stay's rate plan. A hotel-level stay (no
    /// room product) only matches rules without room-product scoping; the
    /// same holds for rate plans.
    #[must_use]
    pub fn applies_to(&self, stay: &CandidateStay) -> bool {
        if self.hotel_id != stay.hotel_id {
            return false;
        }

        if let Some(room_products) = &self.room_product_ids {
            match stay.room_product_id {
                Some(room_product) if room_products.contains(&room_product) => {}
                _ => return false,
            }
        }

        if let Some(rate_plans) = &self.rate_plan_ids {
            match stay.rate_plan_id {
                Some(rate_plan) if rate_plans.contains(&rate_plan) => {}
                _ => return false,
            }
        }

        true
    }
}
