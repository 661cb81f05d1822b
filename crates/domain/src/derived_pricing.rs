// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived-price resolution: computes a derived rate plan's selling price
//! per room-product per date from its linked focus plans' daily prices.
//!
//! ## Invariants
//!
//! - A (room-product, date) with no focus price is omitted, never
//!   zero-filled — absence means "no price available", distinct from zero
//! - Two focus plans contributing a price for the same (room-product, date)
//!   is a conflict, reported as an error rather than resolved by guessing
//! - A link whose focus plan has no prices at all degrades to a warning;
//!   partial results are always returned for the dates that did resolve
//! - Output is sorted by room-product then date, so identical inputs yield
//!   identical outcomes

use crate::error::DomainError;
use crate::types::{DateRange, RatePlanId, RoomProductId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// How a link's adjustment value is applied to a focus price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjustmentType {
    /// Adds the (signed) adjustment value to the base rate.
    Fixed,
    /// Multiplies the base rate by `1 + adjustment_value / 100`.
    Percentage,
}

impl AdjustmentType {
    /// Converts this adjustment type to its wire string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "FIXED",
            Self::Percentage => "PERCENTAGE",
        }
    }
}

impl std::fmt::Display for AdjustmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdjustmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIXED" => Ok(Self::Fixed),
            "PERCENTAGE" => Ok(Self::Percentage),
            _ => Err(format!("Unknown adjustment type: {s}")),
        }
    }
}

/// Links a derived rate plan to one focus rate plan whose price it is
/// computed from. A derived plan may hold several links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedRatePlanLink {
    /// The derived rate plan.
    pub derived_rate_plan_id: RatePlanId,
    /// The focus rate plan contributing prices.
    pub focus_rate_plan_id: RatePlanId,
    /// How the adjustment value is applied.
    pub adjustment_type: AdjustmentType,
    /// The signed adjustment value.
    pub adjustment_value: Decimal,
}

impl DerivedRatePlanLink {
    /// Applies this link's adjustment to a focus base rate.
    #[must_use]
    pub fn apply(&self, base_rate: Decimal) -> Decimal {
        match self.adjustment_type {
            AdjustmentType::Fixed => base_rate + self.adjustment_value,
            AdjustmentType::Percentage => {
                base_rate * (Decimal::ONE + self.adjustment_value / Decimal::ONE_HUNDRED)
            }
        }
    }
}

/// One daily selling price for a rate plan and room product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrice {
    /// The room product the price belongs to.
    pub room_product_id: RoomProductId,
    /// The rate plan the price belongs to.
    pub rate_plan_id: RatePlanId,
    /// The date the price applies to.
    pub date: NaiveDate,
    /// The currency-agnostic rate value.
    pub base_rate: Decimal,
}

/// One resolved derived price for a room product and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedPriceResult {
    /// The room product.
    pub room_product_id: RoomProductId,
    /// The date.
    pub date: NaiveDate,
    /// The derived selling rate after adjustment.
    pub rate: Decimal,
}

/// A non-fatal degradation encountered during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DerivedPriceWarning {
    /// A link references a focus rate plan with no prices in the requested
    /// range; its room-product/date combinations were skipped.
    MissingFocusRatePlan {
        /// The focus rate plan with no prices.
        focus_rate_plan_id: RatePlanId,
    },
}

/// The outcome of a derived-price resolution: resolved prices plus any
/// non-fatal warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedPriceOutcome {
    /// One resolved price per (room-product, date) that had a focus price.
    pub prices: Vec<DerivedPriceResult>,
    /// Degradations encountered; never abort the resolution.
    pub warnings: Vec<DerivedPriceWarning>,
}

/// Resolves a derived rate plan's selling prices over a date range.
///
/// Only links belonging to `derived_rate_plan_id` are considered. Focus
/// prices are grouped by (rate plan, room product) for lookup; every
/// (room-product, date) pair in the range with exactly one contributing
/// focus price yields one result with the link's adjustment applied.
///
/// # Arguments
///
/// * `derived_rate_plan_id` - The derived plan being resolved
/// * `links` - The plan's focus links (other plans' links are ignored)
/// * `focus_prices` - Daily prices for the focus plans
/// * `range` - The requested date range (inclusive)
///
/// # Errors
///
/// Returns `DomainError::AmbiguousDerivedSource` when more than one focus
/// plan contributes a price for the same room-product and date. Precedence
/// is never guessed; the conflict names both contending plans.
pub fn resolve_derived_prices(
    derived_rate_plan_id: RatePlanId,
    links: &[DerivedRatePlanLink],
    focus_prices: &[DailyPrice],
    range: &DateRange,
) -> Result<DerivedPriceOutcome, DomainError> {
    let own_links: Vec<&DerivedRatePlanLink> = links
        .iter()
        .filter(|link| link.derived_rate_plan_id == derived_rate_plan_id)
        .collect();

    // Group prices by (rate plan, room product) for O(1) per-date lookup
    let mut by_plan_room: BTreeMap<(RatePlanId, RoomProductId), BTreeMap<NaiveDate, Decimal>> =
        BTreeMap::new();
    for price in focus_prices {
        if range.contains(price.date) {
            by_plan_room
                .entry((price.rate_plan_id, price.room_product_id))
                .or_default()
                .insert(price.date, price.base_rate);
        }
    }

    let room_products: BTreeSet<RoomProductId> = by_plan_room
        .keys()
        .map(|(_, room_product)| *room_product)
        .collect();

    let mut prices: Vec<DerivedPriceResult> = Vec::new();
    for room_product in &room_products {
        for date in range.iter() {
            let mut resolved: Option<(RatePlanId, Decimal)> = None;
            for link in &own_links {
                let Some(daily) = by_plan_room.get(&(link.focus_rate_plan_id, *room_product))
                else {
                    continue;
                };
                let Some(base_rate) = daily.get(&date) else {
                    continue;
                };
                if let Some((first_focus, _)) = resolved {
                    return Err(DomainError::AmbiguousDerivedSource {
                        derived_rate_plan_id,
                        room_product_id: *room_product,
                        date,
                        first_focus,
                        second_focus: link.focus_rate_plan_id,
                    });
                }
                resolved = Some((link.focus_rate_plan_id, link.apply(*base_rate)));
            }
            if let Some((_, rate)) = resolved {
                prices.push(DerivedPriceResult {
                    room_product_id: *room_product,
                    date,
                    rate,
                });
            }
        }
    }

    // Links whose focus plan contributed nothing degrade to warnings
    let mut warnings: Vec<DerivedPriceWarning> = Vec::new();
    for link in &own_links {
        let has_any_price = by_plan_room
            .keys()
            .any(|(rate_plan, _)| *rate_plan == link.focus_rate_plan_id);
        if !has_any_price {
            warnings.push(DerivedPriceWarning::MissingFocusRatePlan {
                focus_rate_plan_id: link.focus_rate_plan_id,
            });
        }
    }

    Ok(DerivedPriceOutcome { prices, warnings })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const DERIVED: RatePlanId = RatePlanId::new(100);
    const FOCUS_A: RatePlanId = RatePlanId::new(1);
    const FOCUS_B: RatePlanId = RatePlanId::new(2);
    const ROOM: RoomProductId = RoomProductId::new(10);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march() -> DateRange {
        DateRange::new(date(2024, 3, 1), date(2024, 3, 7)).unwrap()
    }

    fn link(focus: RatePlanId, kind: AdjustmentType, value: i64) -> DerivedRatePlanLink {
        DerivedRatePlanLink {
            derived_rate_plan_id: DERIVED,
            focus_rate_plan_id: focus,
            adjustment_type: kind,
            adjustment_value: Decimal::from(value),
        }
    }

    fn price(plan: RatePlanId, room: RoomProductId, d: NaiveDate, rate: i64) -> DailyPrice {
        DailyPrice {
            room_product_id: room,
            rate_plan_id: plan,
            date: d,
            base_rate: Decimal::from(rate),
        }
    }

    #[test]
    fn test_fixed_adjustment_adds_to_base_rate() {
        let links = [link(FOCUS_A, AdjustmentType::Fixed, -15)];
        let prices = [price(FOCUS_A, ROOM, date(2024, 3, 1), 100)];

        let outcome = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();

        assert_eq!(outcome.prices.len(), 1);
        assert_eq!(outcome.prices[0].rate, Decimal::from(85));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_percentage_adjustment_scales_base_rate() {
        let links = [link(FOCUS_A, AdjustmentType::Percentage, 10)];
        let prices = [price(FOCUS_A, ROOM, date(2024, 3, 1), 200)];

        let outcome = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();

        assert_eq!(outcome.prices[0].rate, Decimal::from(220));
    }

    #[test]
    fn test_negative_percentage_discounts() {
        let links = [link(FOCUS_A, AdjustmentType::Percentage, -25)];
        let prices = [price(FOCUS_A, ROOM, date(2024, 3, 1), 200)];

        let outcome = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();

        assert_eq!(outcome.prices[0].rate, Decimal::from(150));
    }

    #[test]
    fn test_dates_without_focus_price_are_omitted() {
        let links = [link(FOCUS_A, AdjustmentType::Fixed, 0)];
        // No price on 2024-03-05
        let prices = [
            price(FOCUS_A, ROOM, date(2024, 3, 4), 100),
            price(FOCUS_A, ROOM, date(2024, 3, 6), 100),
        ];

        let outcome = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();

        assert_eq!(outcome.prices.len(), 2);
        assert!(outcome.prices.iter().all(|p| p.date != date(2024, 3, 5)));
    }

    #[test]
    fn test_prices_outside_range_are_ignored() {
        let links = [link(FOCUS_A, AdjustmentType::Fixed, 0)];
        let prices = [
            price(FOCUS_A, ROOM, date(2024, 2, 28), 100),
            price(FOCUS_A, ROOM, date(2024, 3, 1), 100),
            price(FOCUS_A, ROOM, date(2024, 3, 8), 100),
        ];

        let outcome = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();

        assert_eq!(outcome.prices.len(), 1);
        assert_eq!(outcome.prices[0].date, date(2024, 3, 1));
    }

    #[test]
    fn test_missing_focus_plan_degrades_to_warning() {
        let links = [
            link(FOCUS_A, AdjustmentType::Fixed, 0),
            link(FOCUS_B, AdjustmentType::Fixed, 5),
        ];
        // FOCUS_B has no prices at all
        let prices = [price(FOCUS_A, ROOM, date(2024, 3, 1), 100)];

        let outcome = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();

        assert_eq!(outcome.prices.len(), 1);
        assert_eq!(
            outcome.warnings,
            vec![DerivedPriceWarning::MissingFocusRatePlan {
                focus_rate_plan_id: FOCUS_B
            }]
        );
    }

    #[test]
    fn test_conflicting_focus_prices_raise_ambiguity() {
        let links = [
            link(FOCUS_A, AdjustmentType::Fixed, 0),
            link(FOCUS_B, AdjustmentType::Fixed, 0),
        ];
        let prices = [
            price(FOCUS_A, ROOM, date(2024, 3, 2), 100),
            price(FOCUS_B, ROOM, date(2024, 3, 2), 120),
        ];

        let error = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap_err();

        match error {
            DomainError::AmbiguousDerivedSource {
                derived_rate_plan_id,
                room_product_id,
                date: conflict_date,
                first_focus,
                second_focus,
            } => {
                assert_eq!(derived_rate_plan_id, DERIVED);
                assert_eq!(room_product_id, ROOM);
                assert_eq!(conflict_date, date(2024, 3, 2));
                assert_eq!(first_focus, FOCUS_A);
                assert_eq!(second_focus, FOCUS_B);
            }
            other => panic!("expected AmbiguousDerivedSource, got {other:?}"),
        }
    }

    #[test]
    fn test_two_focus_plans_on_disjoint_room_products_coexist() {
        let other_room: RoomProductId = RoomProductId::new(20);
        let links = [
            link(FOCUS_A, AdjustmentType::Fixed, 10),
            link(FOCUS_B, AdjustmentType::Fixed, 20),
        ];
        let prices = [
            price(FOCUS_A, ROOM, date(2024, 3, 1), 100),
            price(FOCUS_B, other_room, date(2024, 3, 1), 100),
        ];

        let outcome = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();

        assert_eq!(outcome.prices.len(), 2);
        assert_eq!(outcome.prices[0].room_product_id, ROOM);
        assert_eq!(outcome.prices[0].rate, Decimal::from(110));
        assert_eq!(outcome.prices[1].room_product_id, other_room);
        assert_eq!(outcome.prices[1].rate, Decimal::from(120));
    }

    #[test]
    fn test_other_plans_links_are_ignored() {
        let foreign = DerivedRatePlanLink {
            derived_rate_plan_id: RatePlanId::new(999),
            focus_rate_plan_id: FOCUS_A,
            adjustment_type: AdjustmentType::Fixed,
            adjustment_value: Decimal::from(1000),
        };
        let links = [link(FOCUS_A, AdjustmentType::Fixed, 0), foreign];
        let prices = [price(FOCUS_A, ROOM, date(2024, 3, 1), 100)];

        let outcome = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();

        assert_eq!(outcome.prices.len(), 1);
        assert_eq!(outcome.prices[0].rate, Decimal::from(100));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let links = [link(FOCUS_A, AdjustmentType::Percentage, 12)];
        let prices = [
            price(FOCUS_A, ROOM, date(2024, 3, 1), 100),
            price(FOCUS_A, ROOM, date(2024, 3, 2), 110),
            price(FOCUS_A, ROOM, date(2024, 3, 3), 120),
        ];

        let first = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();
        let second = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_output_sorted_by_room_product_then_date() {
        let other_room: RoomProductId = RoomProductId::new(5);
        let links = [link(FOCUS_A, AdjustmentType::Fixed, 0)];
        // Deliberately unsorted input
        let prices = [
            price(FOCUS_A, ROOM, date(2024, 3, 3), 100),
            price(FOCUS_A, other_room, date(2024, 3, 2), 100),
            price(FOCUS_A, ROOM, date(2024, 3, 1), 100),
        ];

        let outcome = resolve_derived_prices(DERIVED, &links, &prices, &march()).unwrap();

        let keys: Vec<(RoomProductId, NaiveDate)> = outcome
            .prices
            .iter()
            .map(|p| (p.room_product_id, p.date))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
