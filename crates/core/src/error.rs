// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stay_domain::{DomainError, RoomProductId};

/// Errors that can occur while composing an eligibility decision.
///
/// Callers translate these into their own transport-level representations;
/// the core never touches transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule or input constraint was violated.
    DomainViolation(DomainError),
    /// Allocation was requested for a room product with no capacity
    /// configuration. No sensible default exists, so this is fatal.
    MissingCapacityConfig {
        /// The room product without a configuration, absent for
        /// hotel-level checks.
        room_product_id: Option<RoomProductId>,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::MissingCapacityConfig { room_product_id } => match room_product_id {
                Some(room_product) => write!(
                    f,
                    "No capacity configuration for room product {}",
                    room_product.value()
                ),
                None => write!(f, "No capacity configuration for hotel-level stay"),
            },
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
