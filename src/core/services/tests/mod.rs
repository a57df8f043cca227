mod auth_service_tests;

use chrono::{NaiveDate, NaiveDateTime};

pub(super) fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}
