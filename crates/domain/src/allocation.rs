// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy allocation: splits a requested occupancy between a room's base
//! capacity and chargeable extra beds.
//!
//! Allocation is a total function. It never rejects a request; the caller
//! decides whether the extra-bed counts imply additional chargeable
//! inventory that must itself be available.
//!
//! ## Invariants
//!
//! - `allocated_adult_count + allocated_extra_bed_adult_count == requested_adult`
//! - `allocated_child_count + allocated_extra_bed_child_count == requested_child`
//! - Pets are never split and never consume base-occupancy slots

use serde::{Deserialize, Serialize};

/// Per-room-product capacity configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityConfig {
    /// Maximum guests countable without an extra bed, across types.
    pub capacity_default: u32,
    /// Maximum adults accommodated without triggering an extra bed.
    pub maximum_adult: u32,
    /// Maximum children accommodated without triggering an extra bed.
    pub maximum_child: u32,
}

/// A requested occupancy. Absent counts default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Requested adult count.
    pub requested_adult: u32,
    /// Requested child count.
    pub requested_child: u32,
    /// Requested pet count.
    pub requested_pet: u32,
}

/// The base/extra-bed split for a requested occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Adults placed within base capacity.
    pub allocated_adult_count: u32,
    /// Children placed within base capacity.
    pub allocated_child_count: u32,
    /// Adults requiring an extra bed.
    pub allocated_extra_bed_adult_count: u32,
    /// Children requiring an extra bed.
    pub allocated_extra_bed_child_count: u32,
    /// Pets, always passed through unchanged.
    pub allocated_pet_count: u32,
}

/// Splits a requested occupancy between base capacity and extra beds.
///
/// A room's default capacity can never logically exceed the sum of its
/// per-type maxima, so `capacity_default` is clamped first. Adults
/// overflow into extra beds past `maximum_adult`; children past
/// `maximum_child`. When the combined head count exceeds the (clamped)
/// default capacity, children are re-fit into whatever room capacity the
/// adults leave behind — a room can be default-capacity-constrained even
/// when neither per-type maximum is individually exceeded.
///
/// # Arguments
///
/// * `request` - The requested occupancy
/// * `capacity` - The room product's capacity configuration
#[must_use]
pub fn allocate_occupancy(
    request: &AllocationRequest,
    capacity: &CapacityConfig,
) -> AllocationResult {
    let capacity_default: u32 = capacity
        .capacity_default
        .min(capacity.maximum_adult.saturating_add(capacity.maximum_child));

    let extra_bed_adult: u32 = request.requested_adult.saturating_sub(capacity.maximum_adult);

    // Provisional split against the per-type maximum alone
    let mut extra_bed_child: u32 = request.requested_child.saturating_sub(capacity.maximum_child);

    // Combined head count exceeding the default capacity takes precedence:
    // children fit into whatever room capacity the adults leave behind
    if request.requested_adult.saturating_add(request.requested_child) > capacity_default {
        let remaining_room_capacity: u32 =
            capacity_default.saturating_sub(request.requested_adult.min(capacity.maximum_adult));
        let remaining_child_capacity: u32 = remaining_room_capacity.min(capacity.maximum_child);
        extra_bed_child = request.requested_child.saturating_sub(remaining_child_capacity);
    }

    AllocationResult {
        allocated_adult_count: request.requested_adult - extra_bed_adult,
        allocated_child_count: request.requested_child - extra_bed_child,
        allocated_extra_bed_adult_count: extra_bed_adult,
        allocated_extra_bed_child_count: extra_bed_child,
        allocated_pet_count: request.requested_pet,
    }
}
