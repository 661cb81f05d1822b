// Copyright (C) 2026 The stay-core Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use stay_domain::{
    AllocationRequest, CandidateStay, CapacityConfig, DateRange, HotelId, Restriction,
    RestrictionId, RestrictionType, RoomProductId, StayDates,
};

pub const HOTEL: HotelId = HotelId::new(1);
pub const ROOM: RoomProductId = RoomProductId::new(10);

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn create_test_stay(check_in: NaiveDate, nights: i64) -> CandidateStay {
    let check_out = check_in + chrono::Duration::days(nights);
    CandidateStay {
        hotel_id: HOTEL,
        room_product_id: Some(ROOM),
        rate_plan_id: None,
        dates: StayDates::new(check_in, check_out).unwrap(),
        request_date: check_in - chrono::Duration::days(14),
    }
}

pub fn create_test_rule(id: i64, kind: RestrictionType) -> Restriction {
    Restriction::new(
        RestrictionId::new(id),
        HOTEL,
        kind,
        DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap(),
    )
}

pub fn create_test_capacity() -> CapacityConfig {
    CapacityConfig {
        capacity_default: 3,
        maximum_adult: 2,
        maximum_child: 2,
    }
}

pub fn create_test_occupancy(adult: u32, child: u32) -> AllocationRequest {
    AllocationRequest {
        requested_adult: adult,
        requested_child: child,
        requested_pet: 0,
    }
}
