//! NSE trading-session gate.

use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;

/// Exchange timezone for the NSE regular session.
pub const MARKET_TZ: Tz = chrono_tz::Asia::Kolkata;

/// Current time in the exchange timezone.
#[must_use]
pub fn now_ist() -> DateTime<Tz> {
    Utc::now().with_timezone(&MARKET_TZ)
}

/// Whether `now` falls inside the NSE regular session.
///
/// The session runs 09:15–15:30 IST, inclusive on both ends, Monday through
/// Friday. Exchange holidays and early closes are not modeled.
#[must_use]
pub fn is_open(now: DateTime<Tz>) -> bool {
    if matches!(now.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    let (open, close) = session_bounds();
    let t = now.time();
    t >= open && t <= close
}

fn session_bounds() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::from_hms_opt(9, 15, 0).expect("valid session open"),
        NaiveTime::from_hms_opt(15, 30, 0).expect("valid session close"),
    )
}
