// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier and date primitives shared by every engine in the core.
//!
//! ## Invariants
//!
//! - `StayDates` always spans at least one night (`check_out > check_in`)
//! - `DateRange` is always ordered (`from <= to`) and inclusive on both ends
//! - All identifiers are opaque; the core never interprets their values

use crate::error::DomainError;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier from its canonical numeric value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the canonical numeric value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifies a hotel (tenant) in the distribution platform.
    HotelId
);
id_type!(
    /// Identifies a bookable room product within a hotel.
    RoomProductId
);
id_type!(
    /// Identifies a rate plan (base, derived, or focus) within a hotel.
    RatePlanId
);
id_type!(
    /// Identifies a restriction rule.
    RestrictionId
);

/// A set of weekdays stored as a compact bitmask.
///
/// Restrictions narrowed to specific weekdays use this to decide whether a
/// rule is active on a given date. A rule with no weekday narrowing stores
/// [`WeekdaySet::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The set containing every weekday.
    pub const ALL: Self = Self(0b0111_1111);

    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    fn bit(day: Weekday) -> u8 {
        // num_days_from_monday is always in 0..7
        1 << day.num_days_from_monday()
    }

    /// Adds a weekday to the set.
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    /// Checks whether the set contains a weekday.
    #[must_use]
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Checks whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set: Self = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

/// The date span of a candidate stay.
///
/// Check-in is inclusive, check-out is exclusive: a stay from the 10th to
/// the 12th occupies the nights of the 10th and the 11th.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// Creates a new `StayDates`.
    ///
    /// # Arguments
    ///
    /// * `check_in` - The arrival date (first occupied night)
    /// * `check_out` - The departure date (exclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayRange` if `check_out <= check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidStayRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the arrival date.
    #[must_use]
    pub const fn check_in(self) -> NaiveDate {
        self.check_in
    }

    /// Returns the departure date (exclusive).
    #[must_use]
    pub const fn check_out(self) -> NaiveDate {
        self.check_out
    }

    /// Returns the length of stay in whole nights.
    ///
    /// Always at least 1, guaranteed by the constructor.
    #[must_use]
    pub fn nights(self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Iterates over the occupied dates, `[check_in, check_out)`.
    pub fn occupied_dates(self) -> impl Iterator<Item = NaiveDate> {
        self.check_in
            .iter_days()
            .take_while(move |date| *date < self.check_out)
    }
}

/// An inclusive date range, used for restriction validity windows and
/// pricing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Creates a new inclusive `DateRange`.
    ///
    /// # Arguments
    ///
    /// * `from` - The first date of the range
    /// * `to` - The last date of the range (inclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `from > to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DomainError> {
        if from > to {
            return Err(DomainError::InvalidDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Returns the first date of the range.
    #[must_use]
    pub const fn from(self) -> NaiveDate {
        self.from
    }

    /// Returns the last date of the range (inclusive).
    #[must_use]
    pub const fn to(self) -> NaiveDate {
        self.to
    }

    /// Checks whether a date falls within the range.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Iterates over every date in the range, in order.
    pub fn iter(self) -> impl Iterator<Item = NaiveDate> {
        self.from.iter_days().take_while(move |date| *date <= self.to)
    }
}

/// The subject of a restriction evaluation: one candidate stay.
///
/// `request_date` is the "now" used for advance-booking checks. It is
/// threaded explicitly rather than read from the process clock so that
/// evaluation stays pure and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateStay {
    /// The hotel the stay is requested in.
    pub hotel_id: HotelId,
    /// The room product, if the check is room-level. Absent means the
    /// check is hotel-level and only unscoped rules apply.
    pub room_product_id: Option<RoomProductId>,
    /// The rate plan the stay would book under, if known.
    pub rate_plan_id: Option<RatePlanId>,
    /// The stay's date span.
    pub dates: StayDates,
    /// The booking date used for advance-window checks.
    pub request_date: NaiveDate,
}
