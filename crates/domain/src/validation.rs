// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::restriction::{Restriction, RestrictionType};

/// Validates a restriction's internal consistency.
///
/// This runs at the ingestion boundary, once per configuration change.
/// Evaluation assumes rules have already passed this check and does not
/// re-validate.
///
/// # Arguments
///
/// * `restriction` - The restriction to validate
///
/// # Returns
///
/// * `Ok(())` if the restriction is well-formed
/// * `Err(DomainError)` describing the first inconsistency found
///
/// # Errors
///
/// Returns an error if:
/// - `min_length > max_length` or `min_adv > max_adv` when both are present
/// - The bound the restriction's type requires is absent
/// - `max_reservation_count` is zero
/// - A normalized min-LOS-through bound is inverted
pub fn validate_restriction(restriction: &Restriction) -> Result<(), DomainError> {
    // Rule: paired bounds must be ordered
    if let (Some(min_length), Some(max_length)) = (restriction.min_length, restriction.max_length)
    {
        if min_length > max_length {
            return Err(DomainError::InvalidRestrictionBounds {
                restriction_id: restriction.id,
                reason: format!("min_length {min_length} exceeds max_length {max_length}"),
            });
        }
    }
    if let (Some(min_adv), Some(max_adv)) = (restriction.min_adv, restriction.max_adv) {
        if min_adv > max_adv {
            return Err(DomainError::InvalidRestrictionBounds {
                restriction_id: restriction.id,
                reason: format!("min_adv {min_adv} exceeds max_adv {max_adv}"),
            });
        }
    }

    if let Some(bound) = restriction.min_los_through {
        if let Some(max) = bound.max {
            if bound.min > max {
                return Err(DomainError::InvalidRestrictionBounds {
                    restriction_id: restriction.id,
                    reason: format!("min_los_through {} exceeds its range upper bound {max}", bound.min),
                });
            }
        }
    }

    // Rule: a restriction must carry the bound its type reads
    let has_required_bound = match restriction.kind {
        RestrictionType::LosMin => restriction.min_length.is_some(),
        RestrictionType::LosMax => restriction.max_length.is_some(),
        RestrictionType::MinLosThrough => restriction.min_los_through.is_some(),
        RestrictionType::AdvMin => restriction.min_adv.is_some(),
        RestrictionType::AdvMax => restriction.max_adv.is_some(),
        RestrictionType::MaxReservationCount => restriction.max_reservation_count.is_some(),
        // Closure types have no numeric bound; presence alone blocks
        RestrictionType::CloseToArrival | RestrictionType::CloseToDeparture => true,
    };
    if !has_required_bound {
        return Err(DomainError::MissingRestrictionBound {
            restriction_id: restriction.id,
            kind: restriction.kind,
        });
    }

    // Rule: a reservation cap of zero could never admit any stay
    if restriction.kind == RestrictionType::MaxReservationCount
        && restriction.max_reservation_count == Some(0)
    {
        return Err(DomainError::InvalidMaxReservationCount {
            restriction_id: restriction.id,
        });
    }

    Ok(())
}

/// Validates a whole restriction snapshot, stopping at the first
/// inconsistency.
///
/// # Arguments
///
/// * `restrictions` - The restrictions to validate
///
/// # Errors
///
/// Returns the first error produced by [`validate_restriction`].
pub fn validate_restrictions(restrictions: &[Restriction]) -> Result<(), DomainError> {
    for restriction in restrictions {
        validate_restriction(restriction)?;
    }
    Ok(())
}
