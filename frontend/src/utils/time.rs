use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn today_in_app_tz() -> NaiveDate {
    date_in(Utc::now(), app_time_zone())
}

pub fn date_in(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_in_respects_time_zone_boundary() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 31, 16, 30, 0).unwrap();
        assert_eq!(
            date_in(instant, Tz::UTC),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
        );
        assert_eq!(
            date_in(instant, chrono_tz::Asia::Tokyo),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
        );
    }
}
